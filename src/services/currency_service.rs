use crate::models::travel_info::CurrencyInfo;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

// Free tier, no API key needed for basic USD rates.
const EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";
const RATES_CACHE_TTL: Duration = Duration::from_secs(3600);

/// (code, symbol, name) for the currencies the app can present.
const CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "$", "US Dollar"),
    ("EUR", "€", "Euro"),
    ("GBP", "£", "British Pound"),
    ("JPY", "¥", "Japanese Yen"),
    ("AUD", "A$", "Australian Dollar"),
    ("CAD", "C$", "Canadian Dollar"),
    ("CHF", "CHF", "Swiss Franc"),
    ("CNY", "¥", "Chinese Yuan"),
    ("INR", "₹", "Indian Rupee"),
    ("MXN", "$", "Mexican Peso"),
    ("BRL", "R$", "Brazilian Real"),
    ("KRW", "₩", "South Korean Won"),
    ("SGD", "S$", "Singapore Dollar"),
    ("HKD", "HK$", "Hong Kong Dollar"),
    ("THB", "฿", "Thai Baht"),
    ("PHP", "₱", "Philippine Peso"),
    ("IDR", "Rp", "Indonesian Rupiah"),
    ("MYR", "RM", "Malaysian Ringgit"),
    ("VND", "₫", "Vietnamese Dong"),
    ("NZD", "NZ$", "New Zealand Dollar"),
    ("AED", "د.إ", "UAE Dirham"),
    ("SAR", "﷼", "Saudi Riyal"),
    ("ZAR", "R", "South African Rand"),
    ("SEK", "kr", "Swedish Krona"),
    ("NOK", "kr", "Norwegian Krone"),
    ("DKK", "kr", "Danish Krone"),
    ("PLN", "zł", "Polish Zloty"),
    ("CZK", "Kč", "Czech Koruna"),
    ("HUF", "Ft", "Hungarian Forint"),
    ("TRY", "₺", "Turkish Lira"),
    ("ILS", "₪", "Israeli Shekel"),
    ("EGP", "£", "Egyptian Pound"),
    ("ARS", "$", "Argentine Peso"),
    ("CLP", "$", "Chilean Peso"),
    ("COP", "$", "Colombian Peso"),
    ("PEN", "S/", "Peruvian Sol"),
    ("PYG", "₲", "Paraguayan Guarani"),
    ("UYU", "$U", "Uruguayan Peso"),
];

/// Lowercased destination city to its local currency code.
const CITY_CURRENCIES: &[(&str, &str)] = &[
    // Americas
    ("new york", "USD"),
    ("los angeles", "USD"),
    ("miami", "USD"),
    ("chicago", "USD"),
    ("las vegas", "USD"),
    ("san francisco", "USD"),
    ("seattle", "USD"),
    ("boston", "USD"),
    ("washington", "USD"),
    ("hawaii", "USD"),
    ("toronto", "CAD"),
    ("vancouver", "CAD"),
    ("montreal", "CAD"),
    ("mexico city", "MXN"),
    ("cancun", "MXN"),
    ("guadalajara", "MXN"),
    ("sao paulo", "BRL"),
    ("rio de janeiro", "BRL"),
    ("buenos aires", "ARS"),
    ("lima", "PEN"),
    ("bogota", "COP"),
    ("santiago", "CLP"),
    ("asuncion", "PYG"),
    ("montevideo", "UYU"),
    // Europe
    ("paris", "EUR"),
    ("rome", "EUR"),
    ("barcelona", "EUR"),
    ("madrid", "EUR"),
    ("amsterdam", "EUR"),
    ("berlin", "EUR"),
    ("munich", "EUR"),
    ("vienna", "EUR"),
    ("prague", "CZK"),
    ("budapest", "HUF"),
    ("athens", "EUR"),
    ("lisbon", "EUR"),
    ("dublin", "EUR"),
    ("brussels", "EUR"),
    ("milan", "EUR"),
    ("florence", "EUR"),
    ("venice", "EUR"),
    ("nice", "EUR"),
    ("marseille", "EUR"),
    ("london", "GBP"),
    ("edinburgh", "GBP"),
    ("manchester", "GBP"),
    ("zurich", "CHF"),
    ("geneva", "CHF"),
    ("stockholm", "SEK"),
    ("copenhagen", "DKK"),
    ("oslo", "NOK"),
    ("helsinki", "EUR"),
    ("warsaw", "PLN"),
    ("krakow", "PLN"),
    ("istanbul", "TRY"),
    // Asia
    ("tokyo", "JPY"),
    ("osaka", "JPY"),
    ("kyoto", "JPY"),
    ("seoul", "KRW"),
    ("busan", "KRW"),
    ("beijing", "CNY"),
    ("shanghai", "CNY"),
    ("hong kong", "HKD"),
    ("singapore", "SGD"),
    ("bangkok", "THB"),
    ("phuket", "THB"),
    ("chiang mai", "THB"),
    ("kuala lumpur", "MYR"),
    ("bali", "IDR"),
    ("jakarta", "IDR"),
    ("manila", "PHP"),
    ("ho chi minh", "VND"),
    ("hanoi", "VND"),
    ("mumbai", "INR"),
    ("delhi", "INR"),
    ("goa", "INR"),
    ("tel aviv", "ILS"),
    ("jerusalem", "ILS"),
    ("dubai", "AED"),
    ("abu dhabi", "AED"),
    // Oceania
    ("sydney", "AUD"),
    ("melbourne", "AUD"),
    ("brisbane", "AUD"),
    ("perth", "AUD"),
    ("auckland", "NZD"),
    ("queenstown", "NZD"),
    // Africa
    ("cape town", "ZAR"),
    ("johannesburg", "ZAR"),
    ("cairo", "EGP"),
    ("marrakech", "MAD"),
];

#[derive(Debug)]
pub enum CurrencyError {
    HttpError(reqwest::Error),
    ApiError(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::HttpError(err) => write!(f, "HTTP error: {}", err),
            CurrencyError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for CurrencyError {}

impl From<reqwest::Error> for CurrencyError {
    fn from(err: reqwest::Error) -> Self {
        CurrencyError::HttpError(err)
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    rates: HashMap<String, f64>,
}

/// Currency code for a destination city; USD when the city is unknown.
pub fn currency_code_for_city(city: &str) -> &'static str {
    let normalized = city.trim().to_lowercase();
    CITY_CURRENCIES
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, code)| *code)
        .unwrap_or("USD")
}

fn currency_details(code: &str) -> Option<(&'static str, &'static str)> {
    CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, symbol, name)| (*symbol, *name))
}

fn convert_amount(rates: &HashMap<String, f64>, amount: f64, from: &str, to: &str) -> f64 {
    let from_rate = rates.get(from).copied().unwrap_or(1.0);
    let to_rate = rates.get(to).copied().unwrap_or(1.0);
    // Through USD, since the rate table is USD-based.
    amount / from_rate * to_rate
}

struct CachedRates {
    rates: HashMap<String, f64>,
    fetched_at: Instant,
}

/// Local-currency info for a destination, with USD exchange rates cached
/// for an hour.
pub struct CurrencyService {
    client: Client,
    cache: Mutex<Option<CachedRates>>,
}

impl CurrencyService {
    pub fn new() -> Result<Self, CurrencyError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            cache: Mutex::new(None),
        })
    }

    /// Currency details for a city. `None` when the city's currency is not
    /// in the presentation table. A failed rate fetch degrades to rate 1.
    pub async fn currency_info(&self, city: &str) -> Option<CurrencyInfo> {
        let code = currency_code_for_city(city);
        let (symbol, name) = currency_details(code)?;

        let rates = self.rates().await;
        let rate = rates.get(code).copied().unwrap_or(1.0);

        Some(CurrencyInfo {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            rate,
        })
    }

    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        let rates = self.rates().await;
        convert_amount(&rates, amount, from, to)
    }

    /// Rates against USD. Serves the cached snapshot within the TTL; on a
    /// failed refresh, falls back to the last good snapshot.
    async fn rates(&self) -> HashMap<String, f64> {
        let mut cache = self.cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            if cached.fetched_at.elapsed() < RATES_CACHE_TTL {
                return cached.rates.clone();
            }
        }

        match self.fetch_rates().await {
            Ok(rates) => {
                *cache = Some(CachedRates {
                    rates: rates.clone(),
                    fetched_at: Instant::now(),
                });
                rates
            }
            Err(e) => {
                eprintln!("Exchange rate fetch error: {}", e);
                cache
                    .as_ref()
                    .map(|cached| cached.rates.clone())
                    .unwrap_or_default()
            }
        }
    }

    async fn fetch_rates(&self) -> Result<HashMap<String, f64>, CurrencyError> {
        let response = self.client.get(EXCHANGE_RATE_URL).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurrencyError::ApiError(format!(
                "Rate request failed with status {}",
                status
            )));
        }

        let body: ExchangeRateResponse = response
            .json()
            .await
            .map_err(|e| CurrencyError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(body.rates)
    }
}
