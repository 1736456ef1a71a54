use crate::models::itinerary::TripStyle;

/// Schema block shared by every prompt that asks for JSON output. Kept as a
/// raw literal so the braces read exactly as the model should echo them.
const JSON_SCHEMA_BLOCK: &str = r#"Output format - Return ONLY a valid JSON array with exactly 4 objects:
[
  {
    "id": 1,
    "time": "9:00 AM",
    "title": "Place Name",
    "description": "2-3 sentence description",
    "image_keyword": "search term for photo (e.g., 'tokyo temple', 'paris cafe')",
    "address": "Full street address",
    "coordinates": { "lat": number, "lng": number },
    "stops": ["nearby point 1", "nearby point 2"],
    "color": "blue",
    "travelTimeFromPrevious": "15 min walk"
  }
]

Rules:
- id: sequential 1-4
- time: spread throughout day starting 9:00 AM
- color: use different colors (blue, orange, purple, red, green, indigo)
- travelTimeFromPrevious: omit for first stop, include for others
- image_keyword: descriptive search term including location context
- Never use null values; use an empty string or empty array instead"#;

/// Resolve the effective style description for the prompts. Callers must
/// already have rejected a custom selection with empty text.
pub fn resolve_style(style: TripStyle, custom_style: Option<&str>) -> String {
    match (style, custom_style) {
        (TripStyle::Custom, Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        _ => style.as_str().to_string(),
    }
}

/// Stage 1 prompt: natural-language recommendations grounded against real
/// place data. No JSON is requested here; structure comes in stage 2.
pub fn build_grounding_prompt(city: &str, basecamp: &str, style_description: &str) -> String {
    format!(
        "Create a 1-day itinerary for a trip to {}, focusing on {}, starting from \"{}\".\n\n\
         Recommend exactly 4 real places to visit. For each place, provide:\n\
         - The exact name of the place\n\
         - A 2-3 sentence description\n\
         - The full street address\n\
         - Approximate coordinates (latitude, longitude)\n\
         - 2-3 nearby points of interest\n\
         - Estimated travel time from the previous stop\n\n\
         Use accurate, real information from Google Maps. Only recommend places that actually exist.",
        city, style_description, basecamp
    )
}

/// Stage 2 prompt: convert stage 1's free text into the JSON schema.
pub fn build_json_conversion_prompt(grounded_text: &str) -> String {
    format!(
        "Convert the following trip itinerary into a JSON array.\n\n\
         Input itinerary:\n{}\n\n{}",
        grounded_text, JSON_SCHEMA_BLOCK
    )
}

/// Single-call variant: ask for the final JSON directly, trading the place
/// grounding of the two-stage pipeline for one cheaper round trip.
pub fn build_single_stage_prompt(city: &str, basecamp: &str, style_description: &str) -> String {
    format!(
        "Create a 1-day itinerary for a trip to {}, focusing on {}, starting from \"{}\".\n\n\
         Recommend exactly 4 real places to visit, spread throughout the day. \
         Only recommend places that actually exist.\n\n{}",
        city, style_description, basecamp, JSON_SCHEMA_BLOCK
    )
}
