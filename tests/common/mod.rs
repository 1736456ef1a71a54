use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use daytrip_api::models::itinerary::{ChecklistItem, Coordinate, ItineraryStep};
use daytrip_api::routes;
use daytrip_api::services::currency_service::CurrencyService;
use daytrip_api::services::weather_service::WeatherService;

pub struct TestApp {
    pub weather: web::Data<WeatherService>,
    pub currency: web::Data<CurrencyService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let weather = web::Data::new(WeatherService::new().expect("weather client"));
        let currency = web::Data::new(CurrencyService::new().expect("currency client"));

        Self { weather, currency }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .app_data(self.weather.clone())
            .app_data(self.currency.clone())
            .service(
                web::scope("/api")
                    .route("/status", web::get().to(routes::health::health_check))
                    .route("/chat", web::post().to(routes::chat::chat))
                    .route("/locations", web::get().to(routes::location::get_locations))
                    .route("/weather", web::get().to(routes::travel_info::get_weather))
                    .route("/currency", web::get().to(routes::travel_info::get_currency))
                    .route(
                        "/emergency",
                        web::get().to(routes::travel_info::get_emergency),
                    )
                    .service(
                        web::scope("/itineraries")
                            .route("/generate", web::post().to(routes::itinerary::generate))
                            .route("/export", web::post().to(routes::itinerary::export))
                            .route(
                                "/export/calendar",
                                web::post().to(routes::itinerary::export_calendar),
                            ),
                    ),
            )
    }
}

pub fn sample_itinerary() -> Vec<ItineraryStep> {
    vec![
        ItineraryStep {
            id: 1,
            time: "9:00 AM".to_string(),
            title: "Senso-ji Temple".to_string(),
            description: "Tokyo's oldest temple".to_string(),
            image_keyword: "sensoji temple tokyo".to_string(),
            address: "2-3-1 Asakusa, Taito City, Tokyo".to_string(),
            coordinates: Some(Coordinate {
                lat: 35.7148,
                lng: 139.7967,
            }),
            stops: vec!["Nakamise Street".to_string()],
            color: "blue".to_string(),
            image_url: None,
            notes: Some("Arrive before the crowds".to_string()),
            travel_time_from_previous: None,
        },
        ItineraryStep {
            id: 2,
            time: "1:00 PM".to_string(),
            title: "Tsukiji Outer Market".to_string(),
            description: "Street food and knife shops".to_string(),
            image_keyword: "tsukiji market".to_string(),
            address: "4-16-2 Tsukiji, Chuo City, Tokyo".to_string(),
            coordinates: None,
            stops: vec![],
            color: "orange".to_string(),
            image_url: None,
            notes: None,
            travel_time_from_previous: Some("25 min".to_string()),
        },
    ]
}

pub fn sample_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: 1,
            text: "Passport".to_string(),
            done: true,
        },
        ChecklistItem {
            id: 2,
            text: "Rail pass".to_string(),
            done: false,
        },
    ]
}
