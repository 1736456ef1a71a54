use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use daytrip_api::routes;
use daytrip_api::services::currency_service::CurrencyService;
use daytrip_api::services::weather_service::WeatherService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let weather_service =
        web::Data::new(WeatherService::new().expect("Failed to build weather HTTP client"));
    let currency_service =
        web::Data::new(CurrencyService::new().expect("Failed to build currency HTTP client"));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
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
            .app_data(weather_service.clone())
            .app_data(currency_service.clone())
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
    })
    .bind((host, port))?
    .run()
    .await
}
