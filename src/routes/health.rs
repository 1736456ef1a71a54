use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::weather_service::WeatherService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /api/status
*/
pub async fn health_check(weather: web::Data<WeatherService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check Gemini API key (just validate key existence)
    let gemini_result = check_gemini_api();
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    // Check Pexels API key (optional; generation degrades without it)
    let pexels_result = check_pexels_api();
    health
        .services
        .insert("pexels".to_string(), pexels_result.clone());

    // Check Open-Meteo reachability with a real geocoding call
    let open_meteo_result = check_open_meteo(&weather).await;
    health
        .services
        .insert("open_meteo".to_string(), open_meteo_result.clone());

    // Determine overall status (if any service is not ok, the overall status is degraded)
    if gemini_result.status != "ok"
        || pexels_result.status != "ok"
        || open_meteo_result.status != "ok"
    {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_gemini_api() -> ServiceStatus {
    match env::var("GEMINI_API_KEY") {
        Ok(key) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("Gemini API key configured ({})", masked_key)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("GEMINI_API_KEY not configured".to_string()),
        },
    }
}

fn check_pexels_api() -> ServiceStatus {
    match env::var("PEXELS_API_KEY") {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Pexels API key configured".to_string()),
        },
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("PEXELS_API_KEY not configured; photo enrichment disabled".to_string()),
        },
    }
}

async fn check_open_meteo(weather: &WeatherService) -> ServiceStatus {
    match weather.geocode_city("London").await {
        Ok(Some(location)) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Geocoding reachable, resolved '{}', {}",
                location.name, location.country
            )),
        },
        Ok(None) => ServiceStatus {
            status: "error".to_string(),
            details: Some("Geocoding reachable but returned no results".to_string()),
        },
        Err(e) => {
            eprintln!("Open-Meteo health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to reach geocoding API: {}", e)),
            }
        }
    }
}
