mod common;

use actix_web::{http::header, test};
use serde_json::json;
use serial_test::serial;

use common::{sample_checklist, sample_itinerary, TestApp};

#[actix_rt::test]
#[serial]
async fn test_export_share_text_and_links() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/export")
        .set_json(&json!({
            "city": "Tokyo",
            "basecamp": "Park Hyatt Tokyo",
            "itinerary": sample_itinerary(),
            "checklist": sample_checklist(),
            "tripDate": "2026-08-25"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;

    let share_text = body["shareText"].as_str().unwrap();
    assert!(share_text.contains("✈️ Tokyo Trip Itinerary"));
    assert!(share_text.contains("🏨 Base Camp: Park Hyatt Tokyo"));
    assert!(share_text.contains("1. 9:00 AM - Senso-ji Temple"));
    assert!(share_text.contains("📍 2-3-1 Asakusa, Taito City, Tokyo"));
    assert!(share_text.contains("Nearby: Nakamise Street"));
    assert!(share_text.contains("📝 Notes: Arrive before the crowds"));
    assert!(share_text.contains("☑️ Passport"));
    assert!(share_text.contains("☐ Rail pass"));

    let stops = body["stops"].as_array().unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0]["title"], "Senso-ji Temple");

    // First stop has coordinates, so directions target lat,lng
    let maps = stops[0]["googleMaps"].as_str().unwrap();
    assert!(maps.starts_with("https://www.google.com/maps/dir/"));
    assert!(maps.contains("destination=35.7148%2C139.7967"));

    // Second stop has no coordinates, so directions fall back to the address
    let maps = stops[1]["googleMaps"].as_str().unwrap();
    assert!(maps.contains("destination=4-16-2+Tsukiji%2C+Chuo+City%2C+Tokyo"));

    let uber = stops[0]["uber"].as_str().unwrap();
    assert!(uber.starts_with("https://m.uber.com/ul/"));
    assert!(uber.contains("dropoff%5Bformatted_address%5D"));

    assert!(stops[0]["lyft"].as_str().unwrap().contains("lyft.com/ride"));
    assert!(stops[0]["appleMaps"]
        .as_str()
        .unwrap()
        .starts_with("https://maps.apple.com/"));
    assert!(stops[0]["waze"].as_str().unwrap().contains("waze.com"));

    let calendar = stops[0]["calendarUrl"].as_str().unwrap();
    assert!(calendar.contains("action=TEMPLATE"));
    assert!(calendar.contains("dates=20260825T090000Z%2F20260825T110000Z"));
}

#[actix_rt::test]
#[serial]
async fn test_export_without_trip_date_omits_calendar_links() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/export")
        .set_json(&json!({
            "city": "Tokyo",
            "basecamp": "Park Hyatt Tokyo",
            "itinerary": sample_itinerary()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["stops"][0]["calendarUrl"].is_null());
}

#[actix_rt::test]
#[serial]
async fn test_export_with_unparseable_trip_date_omits_calendar_links() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/export")
        .set_json(&json!({
            "city": "Tokyo",
            "basecamp": "Park Hyatt Tokyo",
            "itinerary": sample_itinerary(),
            "tripDate": "next tuesday"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["stops"][0]["calendarUrl"].is_null());
}

#[actix_rt::test]
#[serial]
async fn test_export_missing_city() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/export")
        .set_json(&json!({
            "itinerary": sample_itinerary()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required fields");
}

#[actix_rt::test]
#[serial]
async fn test_export_calendar_returns_ics_attachment() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/export/calendar")
        .set_json(&json!({
            "city": "Tokyo",
            "basecamp": "Park Hyatt Tokyo",
            "itinerary": sample_itinerary(),
            "tripDate": "2026-08-25"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/calendar"));

    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("tokyo-trip.ics"));

    let body = test::read_body(resp).await;
    let ics = String::from_utf8(body.to_vec()).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.contains("X-WR-CALNAME:Tokyo Trip"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("DTSTART:20260825T090000"));
    assert!(ics.contains("DTSTART:20260825T130000"));
    assert!(ics.contains("SUMMARY:Senso-ji Temple"));
    assert!(ics.trim_end().ends_with("END:VCALENDAR"));
}
