//! Pure mappings from weather data to display artifacts.
//!
//! Every function here is total: unknown condition names fall back to a fixed
//! default and malformed input never panics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

const ICON_URL_TEMPLATE: &str = "https://openweathermap.org/img/wn/{code}@2x.png";

/// Two-stop vertical gradient used as the page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub top: &'static str,
    pub bottom: &'static str,
}

impl Gradient {
    pub const CLEAR: Gradient = Gradient { top: "#4a90e2", bottom: "#87CEEB" };
    pub const CLOUDS: Gradient = Gradient { top: "#738290", bottom: "#A9B2BD" };
    pub const RAIN: Gradient = Gradient { top: "#515761", bottom: "#6B7480" };
    pub const THUNDERSTORM: Gradient = Gradient { top: "#34373D", bottom: "#4A4E57" };
    pub const SNOW: Gradient = Gradient { top: "#DFE2E5", bottom: "#F7F9FC" };
    pub const ATMOSPHERE: Gradient = Gradient { top: "#99A4AE", bottom: "#BDC6D1" };
    pub const DEFAULT: Gradient = Gradient { top: "#5D4EA2", bottom: "#8A7FB9" };

    /// CSS `background` value.
    pub fn css(&self) -> String {
        format!("linear-gradient(to bottom, {}, {})", self.top, self.bottom)
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css())
    }
}

/// Animation class attached to a condition icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Animation {
    None,
    Rain,
    Snow,
    Sun,
    Cloud,
    Thunder,
}

impl Animation {
    /// Class name; empty for [`Animation::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::None => "",
            Animation::Rain => "rain-animation",
            Animation::Snow => "snow-animation",
            Animation::Sun => "sun-animation",
            Animation::Cloud => "cloud-animation",
            Animation::Thunder => "thunder-animation",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Animation::None)
    }
}

impl From<Animation> for &'static str {
    fn from(value: Animation) -> Self {
        value.as_str()
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background gradient for a condition main. Matching is exact and case-sensitive.
pub fn background_for(condition_main: &str) -> Gradient {
    match condition_main {
        "Clear" => Gradient::CLEAR,
        "Clouds" => Gradient::CLOUDS,
        "Rain" | "Drizzle" => Gradient::RAIN,
        "Thunderstorm" => Gradient::THUNDERSTORM,
        "Snow" => Gradient::SNOW,
        "Mist" | "Fog" | "Haze" => Gradient::ATMOSPHERE,
        _ => Gradient::DEFAULT,
    }
}

pub fn animation_for(condition_main: &str) -> Animation {
    match condition_main {
        "Rain" | "Drizzle" => Animation::Rain,
        "Snow" => Animation::Snow,
        "Clear" => Animation::Sun,
        "Clouds" => Animation::Cloud,
        "Thunderstorm" => Animation::Thunder,
        _ => Animation::None,
    }
}

/// Rounds half away from zero: `68.5` renders as `"69°F"`, `-0.4` as `"0°F"`.
pub fn format_temperature(fahrenheit: f64) -> String {
    if !fahrenheit.is_finite() {
        return "--°F".to_string();
    }
    // `as` saturates and maps -0.0 to 0.
    let rounded = fahrenheit.round() as i64;
    format!("{rounded}°F")
}

/// Formats a calendar date as `"Mon, Jun 3"`.
///
/// Accepts `YYYY-MM-DD` as well as timestamps carrying a date part. The date is
/// taken literally, without shifting it into the local timezone. Anything that
/// does not parse is returned unchanged.
pub fn format_date(iso_date: &str) -> String {
    match parse_calendar_date(iso_date.trim()) {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => {
            tracing::debug!(input = iso_date, "unparseable forecast date, showing as-is");
            iso_date.to_string()
        }
    }
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// URL of the upstream condition icon. The code is substituted as-is.
pub fn icon_url(icon_code: &str) -> String {
    ICON_URL_TEMPLATE.replace("{code}", icon_code)
}

pub fn format_humidity(percent: f64) -> String {
    format!("{percent}%")
}

pub fn format_wind_speed(mph: f64) -> String {
    format!("{mph} mph")
}

pub fn format_location(city: &str, country: &str) -> String {
    if country.is_empty() { city.to_string() } else { format!("{city}, {country}") }
}
