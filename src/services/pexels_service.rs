use crate::models::itinerary::ItineraryStep;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug)]
pub enum PexelsError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ApiError(String),
}

impl fmt::Display for PexelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PexelsError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            PexelsError::HttpError(err) => write!(f, "HTTP error: {}", err),
            PexelsError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for PexelsError {}

impl From<reqwest::Error> for PexelsError {
    fn from(err: reqwest::Error) -> Self {
        PexelsError::HttpError(err)
    }
}

#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsPhotoSrc,
}

#[derive(Debug, Deserialize)]
struct PexelsPhotoSrc {
    landscape: String,
}

/// Photo lookup against the Pexels search API.
#[derive(Clone)]
pub struct PexelsService {
    client: Client,
    api_key: String,
}

impl PexelsService {
    pub fn new() -> Result<Self, PexelsError> {
        let api_key = env::var("PEXELS_API_KEY")
            .map_err(|_| PexelsError::EnvironmentError("PEXELS_API_KEY not set".to_string()))?;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { client, api_key })
    }

    /// Look up one landscape photo for `keyword`. `Ok(None)` means the search
    /// ran but found nothing; errors are reserved for transport/API failures.
    pub async fn find_image(&self, keyword: &str) -> Result<Option<String>, PexelsError> {
        let response = self
            .client
            .get(PEXELS_SEARCH_URL)
            .query(&[
                ("query", keyword),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PexelsError::ApiError(format!(
                "Search request failed with status {}",
                status
            )));
        }

        let body: PexelsSearchResponse = response
            .json()
            .await
            .map_err(|e| PexelsError::ApiError(format!("Failed to parse response: {}", e)))?;

        // Landscape rendition fits the itinerary cards.
        Ok(body.photos.into_iter().next().map(|p| p.src.landscape))
    }

    /// One lookup per step, run concurrently. Failures are logged and
    /// absorbed as `None` so a bad lookup never sinks the itinerary; results
    /// come back in step order.
    pub async fn fetch_images_for_itinerary(&self, steps: &[ItineraryStep]) -> Vec<Option<String>> {
        let lookups = steps.iter().map(|step| self.find_image(&step.image_keyword));

        join_all(lookups)
            .await
            .into_iter()
            .zip(steps)
            .map(|(result, step)| match result {
                Ok(url) => url,
                Err(e) => {
                    eprintln!("Image lookup failed for '{}': {}", step.image_keyword, e);
                    None
                }
            })
            .collect()
    }
}
