use serde::{Deserialize, Serialize};

/// Trip style selected in the setup form. "custom" carries its description in
/// `GenerateRequest::custom_style`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStyle {
    Culture,
    Food,
    Nature,
    Custom,
}

impl TripStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStyle::Culture => "culture",
            TripStyle::Food => "food",
            TripStyle::Nature => "nature",
            TripStyle::Custom => "custom",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// One recommended stop in a generated trip plan.
///
/// Field names follow the wire format the frontend and the model prompts use:
/// snake_case for the model-facing fields, camelCase for the app-facing ones.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryStep {
    pub id: i64,
    pub time: String,
    pub title: String,
    pub description: String,
    pub image_keyword: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
    #[serde(default)]
    pub stops: Vec<String>,
    pub color: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        rename = "travelTimeFromPrevious",
        skip_serializing_if = "Option::is_none"
    )]
    pub travel_time_from_previous: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChecklistItem {
    pub id: i64,
    pub text: String,
    pub done: bool,
}

/// Body of a generation request. Fields default to empty so the handler can
/// answer missing ones with its own 400 instead of a deserialization error.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenerateRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub basecamp: String,
    pub style: Option<TripStyle>,
    #[serde(rename = "customStyle", skip_serializing_if = "Option::is_none")]
    pub custom_style: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ItineraryStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(data: Vec<ItineraryStep>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
