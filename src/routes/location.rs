use actix_web::{web, HttpResponse, Responder};

use crate::models::travel_info::GeocodedLocation;
use crate::services::weather_service::WeatherService;

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 10;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/locations (city typeahead)
*/
pub async fn get_locations(
    service: web::Data<WeatherService>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let search = match params.search.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return HttpResponse::Ok().json(Vec::<GeocodedLocation>::new()),
    };
    let limit = params
        .limit
        .map(usize::from)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);

    match service.search_locations(&search, limit).await {
        Ok(locations) => HttpResponse::Ok().json(locations),
        Err(err) => {
            eprintln!("Failed to search locations: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to search locations.")
        }
    }
}
