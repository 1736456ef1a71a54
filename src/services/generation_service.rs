use crate::models::itinerary::{ItineraryStep, TripStyle};
use crate::services::gemini_service::{GeminiError, GeminiService, GenerateOptions, Grounding};
use crate::services::json_extraction::{extract_json_array, strip_code_fences};
use crate::services::pexels_service::PexelsService;
use crate::services::prompts;
use crate::services::validation_service::{validate_itinerary, ValidationError};
use serde_json::Value;
use std::env;
use std::error::Error;
use std::fmt;

// Stage 1: grounded against Google Maps for accurate place data.
const DEFAULT_GROUNDING_MODEL: &str = "gemini-2.5-flash";
// Stage 2: cheap and fast JSON conversion.
const DEFAULT_JSON_MODEL: &str = "gemini-2.5-flash-lite";
const RESPONSE_EXCERPT_LEN: usize = 500;

/// How the pipeline talks to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Grounded place recommendations first, then a second call converting
    /// that text to JSON. Slower and costlier, but places are real.
    TwoStage,
    /// One JSON-mode call asking for the array directly. Grounding tools and
    /// JSON response mode cannot be combined, so this trades place accuracy
    /// for a single round trip.
    SingleStage,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub strategy: GenerationStrategy,
    pub grounding_model: String,
    pub json_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            strategy: GenerationStrategy::TwoStage,
            grounding_model: DEFAULT_GROUNDING_MODEL.to_string(),
            json_model: DEFAULT_JSON_MODEL.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let strategy = match env::var("GENERATION_STRATEGY").ok().as_deref() {
            Some("single") | Some("single_stage") => GenerationStrategy::SingleStage,
            Some("two_stage") => GenerationStrategy::TwoStage,
            _ => defaults.strategy,
        };

        Self {
            strategy,
            grounding_model: env::var("GEMINI_GROUNDING_MODEL")
                .unwrap_or(defaults.grounding_model),
            json_model: env::var("GEMINI_JSON_MODEL").unwrap_or(defaults.json_model),
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    Model(GeminiError),
    Parse { excerpt: String },
    Validation(ValidationError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Model(err) => write!(f, "Model invocation failed: {}", err),
            GenerationError::Parse { excerpt } => {
                write!(f, "Could not parse itinerary JSON from model response: {}", excerpt)
            }
            GenerationError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GenerationError {}

impl From<GeminiError> for GenerationError {
    fn from(err: GeminiError) -> Self {
        GenerationError::Model(err)
    }
}

impl From<ValidationError> for GenerationError {
    fn from(err: ValidationError) -> Self {
        GenerationError::Validation(err)
    }
}

impl GenerationError {
    /// Short message safe to return to the caller. The full diagnostic stays
    /// in the logs via Display.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Model(_) => "Failed to generate itinerary",
            GenerationError::Parse { .. } => "Failed to parse itinerary",
            GenerationError::Validation(_) => "Validation failed",
        }
    }
}

/// End-to-end itinerary pipeline: prompts, model calls, JSON recovery,
/// schema validation, then best-effort photo enrichment.
pub struct ItineraryGenerator {
    gemini: GeminiService,
    pexels: Option<PexelsService>,
    config: GenerationConfig,
}

impl ItineraryGenerator {
    pub fn new(gemini: GeminiService) -> Self {
        // Photo lookup is optional, generation still works without it
        let pexels = match PexelsService::new() {
            Ok(service) => Some(service),
            Err(e) => {
                println!("PexelsService not available: {}. Itinerary images will be skipped.", e);
                None
            }
        };

        Self {
            gemini,
            pexels,
            config: GenerationConfig::from_env(),
        }
    }

    pub fn with_config(
        gemini: GeminiService,
        pexels: Option<PexelsService>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            gemini,
            pexels,
            config,
        }
    }

    /// Generate a validated itinerary for one trip request. Callers must
    /// already have rejected a custom style with empty text.
    pub async fn generate(
        &self,
        city: &str,
        basecamp: &str,
        style: TripStyle,
        custom_style: Option<&str>,
    ) -> Result<Vec<ItineraryStep>, GenerationError> {
        let style_description = prompts::resolve_style(style, custom_style);

        let raw = match self.config.strategy {
            GenerationStrategy::TwoStage => {
                self.run_two_stage(city, basecamp, &style_description).await?
            }
            GenerationStrategy::SingleStage => {
                self.run_single_stage(city, basecamp, &style_description).await?
            }
        };

        let steps = parse_itinerary(&raw)?;
        Ok(self.enrich_with_images(steps).await)
    }

    async fn run_two_stage(
        &self,
        city: &str,
        basecamp: &str,
        style_description: &str,
    ) -> Result<String, GenerationError> {
        let grounding_prompt = prompts::build_grounding_prompt(city, basecamp, style_description);
        let grounded_text = self
            .gemini
            .generate_text(
                &self.config.grounding_model,
                &grounding_prompt,
                &GenerateOptions {
                    json_response: false,
                    grounding: Some(Grounding::Places),
                },
            )
            .await?;

        let json_prompt = prompts::build_json_conversion_prompt(&grounded_text);
        let raw = self
            .gemini
            .generate_text(
                &self.config.json_model,
                &json_prompt,
                &GenerateOptions {
                    json_response: true,
                    grounding: None,
                },
            )
            .await?;

        Ok(raw)
    }

    async fn run_single_stage(
        &self,
        city: &str,
        basecamp: &str,
        style_description: &str,
    ) -> Result<String, GenerationError> {
        let prompt = prompts::build_single_stage_prompt(city, basecamp, style_description);
        let raw = self
            .gemini
            .generate_text(
                &self.config.json_model,
                &prompt,
                &GenerateOptions {
                    json_response: true,
                    grounding: None,
                },
            )
            .await?;

        Ok(raw)
    }

    async fn enrich_with_images(&self, steps: Vec<ItineraryStep>) -> Vec<ItineraryStep> {
        let pexels = match &self.pexels {
            Some(service) => service,
            None => return steps,
        };

        let urls = pexels.fetch_images_for_itinerary(&steps).await;
        apply_image_urls(steps, urls)
    }
}

/// Turn raw model text into validated steps: strip fences, try a direct
/// parse, fall back to balanced-array extraction, then validate.
fn parse_itinerary(raw: &str) -> Result<Vec<ItineraryStep>, GenerationError> {
    let clean = strip_code_fences(raw);

    let parsed: Value = match serde_json::from_str(&clean) {
        Ok(value) => value,
        Err(_) => {
            let extracted = extract_json_array(&clean).ok_or_else(|| GenerationError::Parse {
                excerpt: excerpt(&clean, RESPONSE_EXCERPT_LEN),
            })?;
            serde_json::from_str(extracted).map_err(|_| GenerationError::Parse {
                excerpt: excerpt(extracted, RESPONSE_EXCERPT_LEN),
            })?
        }
    };

    Ok(validate_itinerary(&parsed)?)
}

/// Merge looked-up photo URLs into the steps by position. A missed lookup
/// leaves that step untouched.
fn apply_image_urls(mut steps: Vec<ItineraryStep>, urls: Vec<Option<String>>) -> Vec<ItineraryStep> {
    for (step, url) in steps.iter_mut().zip(urls) {
        if let Some(url) = url {
            step.image_url = Some(url);
        }
    }
    steps
}

fn excerpt(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
