use serde::{Deserialize, Serialize};

/// A location search as typed by the user: a city name or postal code.
///
/// The only way to build one is [`LocationQuery::parse`], which trims the input
/// and rejects it when nothing is left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(Self(trimmed.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Upstream numeric condition id, when the backend forwards it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Coarse category such as "Clear" or "Rain". Drives all visual mapping.
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Body of `GET /api/weather/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: String,
    pub country: String,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub feels_like: f64,
    /// Percent.
    pub humidity: f64,
    /// Miles per hour.
    pub wind_speed: f64,
    pub weather_condition: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO-8601 calendar date, e.g. "2024-06-03".
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub weather_condition: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

/// Body of `GET /api/weather/forecast`. Days are kept in the order the backend sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub daily_forecast: Vec<ForecastDay>,
}

/// Body the backend sends alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Snapshot of one dashboard session.
///
/// Created empty at start-up and only ever changed by the
/// [`Orchestrator`](crate::Orchestrator).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub current_weather: Option<CurrentWeather>,
    pub forecast: Option<Forecast>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Nothing searched yet, nothing in flight, nothing failed.
    pub fn is_idle(&self) -> bool {
        self.current_weather.is_none() && !self.loading && self.error.is_none()
    }
}
