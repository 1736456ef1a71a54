use serde::{Deserialize, Serialize};

use crate::models::itinerary::ItineraryStep;

/// One prior exchange in the conversation, in the same `{ role, parts }`
/// shape the Gemini API uses so the frontend can replay history verbatim.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatTurn {
    pub role: String,
    pub parts: Vec<ChatPart>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatPart {
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub basecamp: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<ItineraryStep>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(message.into()),
        }
    }
}
