use actix_web::{web, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::itinerary::{
    ChecklistItem, GenerateRequest, GenerateResponse, ItineraryStep, TripStyle,
};
use crate::services::deeplink_service::{transport_links, DeepLinkTarget, TransportLinks};
use crate::services::export_service;
use crate::services::gemini_service::GeminiService;
use crate::services::generation_service::ItineraryGenerator;

/*
    POST /api/itineraries/generate
*/
pub async fn generate(payload: web::Json<GenerateRequest>) -> impl Responder {
    let req = payload.into_inner();

    let style = match req.style {
        Some(style) if !req.city.is_empty() && !req.basecamp.is_empty() => style,
        _ => {
            return HttpResponse::BadRequest()
                .json(GenerateResponse::err("Missing required fields"))
        }
    };
    if style == TripStyle::Custom
        && req
            .custom_style
            .as_deref()
            .map_or(true, |text| text.trim().is_empty())
    {
        return HttpResponse::BadRequest()
            .json(GenerateResponse::err("Custom style description is required"));
    }

    let gemini = match GeminiService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to initialize Gemini service: {}", err);
            return HttpResponse::InternalServerError()
                .json(GenerateResponse::err("API key not configured"));
        }
    };

    let generator = ItineraryGenerator::new(gemini);
    match generator
        .generate(&req.city, &req.basecamp, style, req.custom_style.as_deref())
        .await
    {
        Ok(steps) => HttpResponse::Ok().json(GenerateResponse::ok(steps)),
        Err(err) => {
            eprintln!("Itinerary generation failed: {}", err);
            HttpResponse::InternalServerError().json(GenerateResponse::err(err.user_message()))
        }
    }
}

#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    city: String,
    #[serde(default)]
    basecamp: String,
    #[serde(default)]
    itinerary: Vec<ItineraryStep>,
    #[serde(default)]
    checklist: Vec<ChecklistItem>,
    #[serde(rename = "tripDate")]
    trip_date: Option<String>,
}

#[derive(Serialize)]
struct ExportStop {
    title: String,
    #[serde(flatten)]
    links: TransportLinks,
    #[serde(rename = "calendarUrl", skip_serializing_if = "Option::is_none")]
    calendar_url: Option<String>,
}

#[derive(Serialize)]
struct ExportResponse {
    #[serde(rename = "shareText")]
    share_text: String,
    stops: Vec<ExportStop>,
}

/*
    POST /api/itineraries/export

    Share text plus per-stop deep links. Calendar links are only included
    when the request carries a parseable tripDate.
*/
pub async fn export(payload: web::Json<ExportRequest>) -> impl Responder {
    let req = payload.into_inner();

    if req.city.is_empty() {
        return HttpResponse::BadRequest().json(GenerateResponse::err("Missing required fields"));
    }

    let trip_date = parse_trip_date(req.trip_date.as_deref());
    let share_text =
        export_service::generate_share_text(&req.city, &req.basecamp, &req.itinerary, &req.checklist);

    let stops = req
        .itinerary
        .iter()
        .map(|stop| {
            let target = DeepLinkTarget {
                address: stop.address.clone(),
                coordinates: stop.coordinates,
            };
            ExportStop {
                title: stop.title.clone(),
                links: transport_links(&target),
                calendar_url: trip_date
                    .map(|date| export_service::google_calendar_link(stop, date, &req.city)),
            }
        })
        .collect();

    HttpResponse::Ok().json(ExportResponse { share_text, stops })
}

/*
    POST /api/itineraries/export/calendar

    Returns the itinerary as an .ics attachment. A missing or malformed
    tripDate falls back to today.
*/
pub async fn export_calendar(payload: web::Json<ExportRequest>) -> impl Responder {
    let req = payload.into_inner();

    if req.city.is_empty() {
        return HttpResponse::BadRequest().json(GenerateResponse::err("Missing required fields"));
    }

    let trip_date = parse_trip_date(req.trip_date.as_deref())
        .unwrap_or_else(|| Utc::now().date_naive());
    let body = export_service::generate_ics(&req.city, &req.itinerary, trip_date);
    let filename = export_service::ics_filename(&req.city);

    HttpResponse::Ok()
        .content_type("text/calendar; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body)
}

fn parse_trip_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            eprintln!("Ignoring unparseable tripDate: {}", raw);
            None
        }
    }
}
