use crate::models::itinerary::{ChecklistItem, ItineraryStep};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use url::Url;

const EVENT_DURATION_HOURS: i64 = 2;

/// Plain-text rendition of the itinerary for messaging apps.
pub fn generate_share_text(
    city: &str,
    basecamp: &str,
    itinerary: &[ItineraryStep],
    checklist: &[ChecklistItem],
) -> String {
    let divider = "─".repeat(30);

    let mut text = format!("✈️ {} Trip Itinerary\n", city);
    text.push_str(&format!("🏨 Base Camp: {}\n", basecamp));
    text.push_str(&divider);
    text.push_str("\n\n");

    for (index, stop) in itinerary.iter().enumerate() {
        text.push_str(&format!("{}. {} - {}\n", index + 1, stop.time, stop.title));
        text.push_str(&format!("   {}\n", stop.description));
        text.push_str(&format!("   📍 {}\n", stop.address));
        if !stop.stops.is_empty() {
            text.push_str(&format!("   Nearby: {}\n", stop.stops.join(", ")));
        }
        if let Some(notes) = stop.notes.as_deref().filter(|n| !n.is_empty()) {
            text.push_str(&format!("   📝 Notes: {}\n", notes));
        }
        text.push('\n');
    }

    if !checklist.is_empty() {
        text.push_str(&divider);
        text.push('\n');
        text.push_str("✅ Checklist:\n");
        for item in checklist {
            let box_mark = if item.done { "☑️" } else { "☐" };
            text.push_str(&format!("{} {}\n", box_mark, item.text));
        }
    }

    text.push('\n');
    text.push_str(&divider);
    text.push('\n');
    text.push_str("Generated with AI Trip Planner");

    text
}

/// Parse a display time like "9:00 AM", "9 PM" or "14:00" into (hour, minute),
/// defaulting to 9:00 when the string is unusable.
fn parse_display_time(time: &str) -> (u32, u32) {
    let re = regex::Regex::new(r"(?i)(\d{1,2}):?(\d{2})?\s*(AM|PM)?").unwrap();

    let captures = match re.captures(time) {
        Some(captures) => captures,
        None => return (9, 0),
    };

    let mut hours: u32 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(9);
    let minutes: u32 = captures
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let meridiem = captures.get(3).map(|m| m.as_str().to_uppercase());

    match meridiem.as_deref() {
        Some("PM") if hours != 12 => hours += 12,
        Some("AM") if hours == 12 => hours = 0,
        _ => {}
    }

    if hours > 23 || minutes > 59 {
        return (9, 0);
    }
    (hours, minutes)
}

/// Start and end of a stop's calendar event on the trip date.
fn event_window(trip_date: NaiveDate, time: &str) -> (NaiveDateTime, NaiveDateTime) {
    let (hours, minutes) = parse_display_time(time);
    let start = trip_date
        .and_hms_opt(hours, minutes, 0)
        .unwrap_or_else(|| trip_date.and_time(NaiveTime::MIN));
    (start, start + Duration::hours(EVENT_DURATION_HOURS))
}

/// Prefilled Google Calendar event link for one stop.
pub fn google_calendar_link(stop: &ItineraryStep, trip_date: NaiveDate, city: &str) -> String {
    let (start, end) = event_window(trip_date, &stop.time);
    let dates = format!(
        "{}/{}",
        start.format("%Y%m%dT%H%M%SZ"),
        end.format("%Y%m%dT%H%M%SZ")
    );

    let mut url = Url::parse("https://calendar.google.com/calendar/render").unwrap();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &format!("{} - {} Trip", stop.title, city))
            .append_pair("dates", &dates)
            .append_pair(
                "details",
                &format!("{}\n\nAddress: {}", stop.description, stop.address),
            )
            .append_pair("location", &stop.address);
    }
    url.to_string()
}

/// ICS calendar with one 2-hour event per stop, for import into any
/// calendar app.
pub fn generate_ics(city: &str, itinerary: &[ItineraryStep], trip_date: NaiveDate) -> String {
    let mut ics = format!(
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//AI Trip Planner//EN\nCALSCALE:GREGORIAN\nMETHOD:PUBLISH\nX-WR-CALNAME:{} Trip\n",
        city
    );

    for stop in itinerary {
        let (start, end) = event_window(trip_date, &stop.time);
        ics.push_str(&format!(
            "BEGIN:VEVENT\nDTSTART:{}\nDTEND:{}\nSUMMARY:{}\nDESCRIPTION:{}\nLOCATION:{}\nEND:VEVENT\n",
            start.format("%Y%m%dT%H%M%S"),
            end.format("%Y%m%dT%H%M%S"),
            stop.title,
            stop.description.replace('\n', "\\n"),
            stop.address
        ));
    }

    ics.push_str("END:VCALENDAR");
    ics
}

pub fn ics_filename(city: &str) -> String {
    let slug = city
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-trip.ics", slug)
}
