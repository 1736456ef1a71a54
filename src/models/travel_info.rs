use serde::{Deserialize, Serialize};

/// A geocoded place suggestion, used by the location typeahead.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeocodedLocation {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DailyForecast {
    pub date: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

/// Current conditions plus a short forecast for the destination city.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WeatherData {
    pub temperature: i32,
    pub condition: String,
    pub icon: String,
    pub humidity: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: i32,
    pub forecast: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub name: String,
    /// Rate vs USD.
    pub rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EmergencyInfo {
    pub country: String,
    pub police: String,
    pub ambulance: String,
    pub fire: String,
    #[serde(rename = "emergencyNumber")]
    pub emergency_number: String,
}
