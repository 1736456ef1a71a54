use actix_web::{web, HttpResponse, Responder};

use crate::services::currency_service::CurrencyService;
use crate::services::emergency_service;
use crate::services::weather_service::WeatherService;

#[derive(serde::Deserialize)]
pub struct CityQuery {
    city: Option<String>,
}

fn required_city(params: &CityQuery) -> Option<String> {
    params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_string)
}

/*
    /api/weather?city=...
*/
pub async fn get_weather(
    service: web::Data<WeatherService>,
    params: web::Query<CityQuery>,
) -> impl Responder {
    let city = match required_city(&params) {
        Some(city) => city,
        None => return HttpResponse::BadRequest().body("Missing city parameter"),
    };

    match service.fetch_weather(&city).await {
        Ok(Some(weather)) => HttpResponse::Ok().json(weather),
        Ok(None) => HttpResponse::NotFound().body("City not found"),
        Err(err) => {
            eprintln!("Failed to fetch weather for {}: {:?}", city, err);
            HttpResponse::InternalServerError().body("Failed to fetch weather")
        }
    }
}

/*
    /api/currency?city=...
*/
pub async fn get_currency(
    service: web::Data<CurrencyService>,
    params: web::Query<CityQuery>,
) -> impl Responder {
    let city = match required_city(&params) {
        Some(city) => city,
        None => return HttpResponse::BadRequest().body("Missing city parameter"),
    };

    match service.currency_info(&city).await {
        Some(info) => HttpResponse::Ok().json(info),
        None => HttpResponse::NotFound().body("Currency data not available"),
    }
}

/*
    /api/emergency?city=...
*/
pub async fn get_emergency(params: web::Query<CityQuery>) -> impl Responder {
    let city = match required_city(&params) {
        Some(city) => city,
        None => return HttpResponse::BadRequest().body("Missing city parameter"),
    };

    HttpResponse::Ok().json(emergency_service::emergency_info(&city))
}
