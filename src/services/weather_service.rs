use crate::models::travel_info::{DailyForecast, GeocodedLocation, WeatherData};
use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::time::Duration;

// Open-Meteo is free and needs no API key.
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const FORECAST_DAYS: usize = 5;

#[derive(Debug)]
pub enum WeatherError {
    HttpError(reqwest::Error),
    ApiError(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::HttpError(err) => write!(f, "HTTP error: {}", err),
            WeatherError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for WeatherError {}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::HttpError(err)
    }
}

#[derive(Debug, serde::Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, serde::Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
    timezone: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
    daily: DailyWeather,
}

#[derive(Debug, serde::Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[derive(Debug, serde::Deserialize)]
struct DailyWeather {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<i32>,
}

/// WMO weather code to display condition and icon name.
fn weather_code_info(code: i32) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "sun"),
        1 => ("Mainly clear", "sun"),
        2 => ("Partly cloudy", "cloud-sun"),
        3 => ("Overcast", "cloud"),
        45 => ("Foggy", "cloud-fog"),
        48 => ("Rime fog", "cloud-fog"),
        51 => ("Light drizzle", "cloud-drizzle"),
        53 => ("Drizzle", "cloud-drizzle"),
        55 => ("Heavy drizzle", "cloud-drizzle"),
        61 => ("Light rain", "cloud-rain"),
        63 => ("Rain", "cloud-rain"),
        65 => ("Heavy rain", "cloud-rain"),
        71 => ("Light snow", "snowflake"),
        73 => ("Snow", "snowflake"),
        75 => ("Heavy snow", "snowflake"),
        80 | 81 => ("Rain showers", "cloud-rain"),
        82 => ("Heavy showers", "cloud-rain"),
        95 => ("Thunderstorm", "cloud-lightning"),
        96 | 99 => ("Thunderstorm with hail", "cloud-lightning"),
        _ => ("Unknown", "cloud"),
    }
}

fn build_weather_data(response: ForecastResponse) -> WeatherData {
    let (condition, icon) = weather_code_info(response.current.weather_code);

    let forecast = response
        .daily
        .time
        .iter()
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(i, date)| {
            let code = response.daily.weather_code.get(i).copied().unwrap_or(-1);
            DailyForecast {
                date: date.clone(),
                high: response
                    .daily
                    .temperature_2m_max
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .round() as i32,
                low: response
                    .daily
                    .temperature_2m_min
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .round() as i32,
                condition: weather_code_info(code).0.to_string(),
            }
        })
        .collect();

    WeatherData {
        temperature: response.current.temperature_2m.round() as i32,
        condition: condition.to_string(),
        icon: icon.to_string(),
        humidity: response.current.relative_humidity_2m,
        wind_speed: response.current.wind_speed_10m.round() as i32,
        forecast,
    }
}

/// Destination weather via the Open-Meteo geocoding and forecast APIs.
#[derive(Clone)]
pub struct WeatherService {
    client: Client,
}

impl WeatherService {
    pub fn new() -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client })
    }

    /// Resolve a city name to coordinates. `Ok(None)` when nothing matches.
    pub async fn geocode_city(&self, city: &str) -> Result<Option<GeocodedLocation>, WeatherError> {
        let matches = self.search_locations(city, 1).await?;
        Ok(matches.into_iter().next())
    }

    /// Top geocoding matches for a partial city name, for the typeahead.
    pub async fn search_locations(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Vec<GeocodedLocation>, WeatherError> {
        let count_param = count.to_string();
        let response = self
            .client
            .get(GEOCODING_URL)
            .query(&[
                ("name", query),
                ("count", count_param.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::ApiError(format!(
                "Geocoding request failed with status {}",
                status
            )));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(body
            .results
            .into_iter()
            .map(|r| GeocodedLocation {
                name: r.name,
                country: r.country.unwrap_or_default(),
                latitude: r.latitude,
                longitude: r.longitude,
                timezone: r.timezone.unwrap_or_default(),
            })
            .collect())
    }

    /// Current conditions plus a 5-day forecast. `Ok(None)` when the city
    /// cannot be geocoded.
    pub async fn fetch_weather(&self, city: &str) -> Result<Option<WeatherData>, WeatherError> {
        let location = match self.geocode_city(city).await? {
            Some(location) => location,
            None => return Ok(None),
        };

        let response = self
            .client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.latitude.to_string().as_str()),
                ("longitude", location.longitude.to_string().as_str()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m",
                ),
                ("daily", "temperature_2m_max,temperature_2m_min,weather_code"),
                ("timezone", "auto"),
                ("forecast_days", "5"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::ApiError(format!(
                "Forecast request failed with status {}",
                status
            )));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(Some(build_weather_data(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_code_lookup() {
        assert_eq!(weather_code_info(0), ("Clear sky", "sun"));
        assert_eq!(weather_code_info(63), ("Rain", "cloud-rain"));
        assert_eq!(weather_code_info(81), ("Rain showers", "cloud-rain"));
        assert_eq!(weather_code_info(42), ("Unknown", "cloud"));
    }

    #[test]
    fn test_build_weather_data_rounds_and_maps() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current": {
                "temperature_2m": 21.6,
                "relative_humidity_2m": 55.0,
                "weather_code": 2,
                "wind_speed_10m": 12.4
            },
            "daily": {
                "time": ["2026-08-25", "2026-08-26", "2026-08-27"],
                "temperature_2m_max": [24.4, 26.8, 23.1],
                "temperature_2m_min": [17.2, 18.9, 16.5],
                "weather_code": [2, 61, 0]
            }
        }))
        .unwrap();

        let weather = build_weather_data(response);

        assert_eq!(weather.temperature, 22);
        assert_eq!(weather.condition, "Partly cloudy");
        assert_eq!(weather.icon, "cloud-sun");
        assert_eq!(weather.wind_speed, 12);
        assert_eq!(weather.forecast.len(), 3);
        assert_eq!(weather.forecast[1].date, "2026-08-26");
        assert_eq!(weather.forecast[1].high, 27);
        assert_eq!(weather.forecast[1].low, 19);
        assert_eq!(weather.forecast[1].condition, "Light rain");
    }

    #[test]
    fn test_build_weather_data_caps_forecast_days() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current": {
                "temperature_2m": 10.0,
                "relative_humidity_2m": 70.0,
                "weather_code": 3,
                "wind_speed_10m": 5.0
            },
            "daily": {
                "time": ["d1", "d2", "d3", "d4", "d5", "d6", "d7"],
                "temperature_2m_max": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
                "temperature_2m_min": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "weather_code": [0, 0, 0, 0, 0, 0, 0]
            }
        }))
        .unwrap();

        assert_eq!(build_weather_data(response).forecast.len(), 5);
    }
}
