use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug)]
pub enum GeminiError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ApiError(String),
    EmptyResponse,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ApiError(msg) => write!(f, "API error: {}", msg),
            GeminiError::EmptyResponse => write!(f, "Model returned an empty response"),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::HttpError(err)
    }
}

/// One conversational turn sent to the model.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Content {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Content {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Grounding capability to enable for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grounding {
    /// Bias output toward verifiable addresses and coordinates (Google Maps).
    Places,
    /// Allow the model to consult live web results (Google Search).
    Search,
}

#[derive(Debug, Default, Clone)]
pub struct GenerateOptions {
    /// Request strict JSON-only output via responseMimeType.
    pub json_response: bool,
    pub grounding: Option<Grounding>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleMaps", skip_serializing_if = "Option::is_none")]
    google_maps: Option<serde_json::Value>,
    #[serde(rename = "googleSearch", skip_serializing_if = "Option::is_none")]
    google_search: Option<serde_json::Value>,
}

impl Tool {
    fn for_grounding(grounding: Grounding) -> Self {
        match grounding {
            Grounding::Places => Tool {
                google_maps: Some(json!({})),
                google_search: None,
            },
            Grounding::Search => Tool {
                google_maps: None,
                google_search: Some(json!({})),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    grounding_chunks: Option<Vec<serde_json::Value>>,
    #[serde(rename = "groundingSupports")]
    grounding_supports: Option<Vec<serde_json::Value>>,
    #[serde(rename = "googleMapsWidgetContextToken")]
    google_maps_widget_context_token: Option<String>,
}

fn grounding_summary(metadata: &GroundingMetadata) -> String {
    format!(
        "chunks={} supports={} widget={}",
        metadata.grounding_chunks.as_ref().map_or(0, Vec::len),
        metadata.grounding_supports.as_ref().map_or(0, Vec::len),
        metadata.google_maps_widget_context_token.is_some()
    )
}

/// Concatenated text of the first candidate; empty when the model sent none.
fn response_text(body: GenerateContentResponse) -> String {
    let mut text = String::new();
    if let Some(candidate) = body.candidates.unwrap_or_default().into_iter().next() {
        if let Some(metadata) = &candidate.grounding_metadata {
            println!("Grounding metadata: {}", grounding_summary(metadata));
        }
        if let Some(content) = candidate.content {
            for part in content.parts.unwrap_or_default() {
                if let Some(part_text) = part.text {
                    text.push_str(&part_text);
                }
            }
        }
    }
    text
}

/// Thin client for the Gemini generateContent REST API.
#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
}

impl GeminiService {
    pub fn new() -> Result<Self, GeminiError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::EnvironmentError("GEMINI_API_KEY not set".to_string()))?;

        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self { client, api_key })
    }

    /// Send a full conversation to `model` and return the response text.
    /// The text may be empty; callers that cannot tolerate that should use
    /// `generate_text` instead.
    pub async fn generate_content(
        &self,
        model: &str,
        contents: Vec<Content>,
        options: &GenerateOptions,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents,
            generation_config: if options.json_response {
                Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                })
            } else {
                None
            },
            tools: options.grounding.map(|g| vec![Tool::for_grounding(g)]),
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::ApiError(format!(
                "generateContent failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(response_text(body))
    }

    /// Single-prompt convenience used by the generation pipeline. An empty or
    /// whitespace-only reply is treated as a hard failure of the call.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, GeminiError> {
        let text = self
            .generate_content(model, vec![Content::user(prompt)], options)
            .await?;

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text)
    }
}
