//! Render-ready snapshot of the dashboard.
//!
//! [`DashboardView`] holds every string and style a shell needs, so a renderer
//! only lays things out and makes no decisions of its own.

use serde::Serialize;

use crate::{
    CurrentWeather, Forecast, ForecastDay, SessionState,
    presentation::{
        Animation, Gradient, animation_for, background_for, format_date, format_humidity,
        format_location, format_temperature, format_wind_speed, icon_url,
    },
};

pub const TITLE: &str = "Mini Weather Dashboard";
pub const LOADING_TEXT: &str = "Loading weather data...";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred. Please try again.";
pub const WELCOME_HEADING: &str = "Welcome to Mini Weather Dashboard";
pub const WELCOME_HINT: &str = "Enter a city name or US zip code to get the weather forecast";
pub const FORECAST_TITLE: &str = "5-Day Forecast";
pub const ATTRIBUTION_TEXT: &str = "Powered by OpenWeatherMap";
pub const ATTRIBUTION_URL: &str = "https://openweathermap.org/";

/// Condition used for the background before anything has been found.
const IDLE_CONDITION: &str = "Clear";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub background: Gradient,
    pub background_css: String,
    /// False while a search is in flight.
    pub search_enabled: bool,
    pub loading: Option<&'static str>,
    pub error: Option<String>,
    pub welcome: Option<Welcome>,
    pub current: Option<CurrentCard>,
    pub forecast: Option<ForecastPanel>,
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Welcome {
    pub heading: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentCard {
    pub heading: String,
    pub description: String,
    pub icon_url: String,
    pub animation: Animation,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastPanel {
    pub title: &'static str,
    pub days: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    pub date: String,
    pub icon_url: String,
    pub animation: Animation,
    pub high: String,
    pub low: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub text: &'static str,
    pub url: &'static str,
}

impl DashboardView {
    pub fn from_state(state: &SessionState) -> Self {
        let condition = state
            .current_weather
            .as_ref()
            .map(|c| c.weather_condition.main.as_str())
            .unwrap_or(IDLE_CONDITION);
        let background = background_for(condition);

        let error = state.error.as_ref().map(|message| {
            if message.is_empty() { UNKNOWN_ERROR.to_string() } else { message.clone() }
        });

        let welcome =
            state.is_idle().then_some(Welcome { heading: WELCOME_HEADING, hint: WELCOME_HINT });

        let current = state.current_weather.as_ref().map(CurrentCard::from_weather);

        let forecast = state
            .current_weather
            .as_ref()
            .and(state.forecast.as_ref())
            .and_then(ForecastPanel::from_forecast);

        Self {
            title: TITLE,
            background,
            background_css: background.css(),
            search_enabled: !state.loading,
            loading: state.loading.then_some(LOADING_TEXT),
            error,
            welcome,
            current,
            forecast,
            attribution: Attribution { text: ATTRIBUTION_TEXT, url: ATTRIBUTION_URL },
        }
    }
}

impl CurrentCard {
    pub fn from_weather(weather: &CurrentWeather) -> Self {
        let condition = &weather.weather_condition;
        Self {
            heading: format_location(&weather.location, &weather.country),
            description: condition.description.clone(),
            icon_url: icon_url(&condition.icon),
            animation: animation_for(&condition.main),
            temperature: format_temperature(weather.temperature),
            feels_like: format!("Feels like {}", format_temperature(weather.feels_like)),
            humidity: format_humidity(weather.humidity),
            wind_speed: format_wind_speed(weather.wind_speed),
        }
    }
}

impl ForecastPanel {
    /// `None` when there are no days to show.
    pub fn from_forecast(forecast: &Forecast) -> Option<Self> {
        if forecast.daily_forecast.is_empty() {
            return None;
        }
        Some(Self {
            title: FORECAST_TITLE,
            days: forecast.daily_forecast.iter().map(ForecastCard::from_day).collect(),
        })
    }
}

impl ForecastCard {
    pub fn from_day(day: &ForecastDay) -> Self {
        let condition = &day.weather_condition;
        Self {
            date: format_date(&day.date),
            icon_url: icon_url(&condition.icon),
            animation: animation_for(&condition.main),
            high: format_temperature(day.temperature_max),
            low: format_temperature(day.temperature_min),
            description: condition.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_current, sample_forecast};

    #[test]
    fn idle_state_shows_welcome_on_clear_background() {
        let view = DashboardView::from_state(&SessionState::default());

        assert_eq!(view.title, TITLE);
        assert_eq!(view.background, Gradient::CLEAR);
        assert!(view.search_enabled);
        assert_eq!(view.loading, None);
        assert_eq!(view.error, None);
        assert_eq!(view.welcome.map(|w| w.heading), Some(WELCOME_HEADING));
        assert!(view.current.is_none());
        assert!(view.forecast.is_none());
    }

    #[test]
    fn loading_disables_search_and_hides_welcome() {
        let state = SessionState { loading: true, ..SessionState::default() };
        let view = DashboardView::from_state(&state);

        assert!(!view.search_enabled);
        assert_eq!(view.loading, Some(LOADING_TEXT));
        assert!(view.welcome.is_none());
    }

    #[test]
    fn error_replaces_welcome() {
        let state = SessionState { error: Some("City not found".into()), ..SessionState::default() };
        let view = DashboardView::from_state(&state);

        assert_eq!(view.error.as_deref(), Some("City not found"));
        assert!(view.welcome.is_none());
        assert!(view.current.is_none());
    }

    #[test]
    fn empty_error_uses_generic_text() {
        let state = SessionState { error: Some(String::new()), ..SessionState::default() };
        let view = DashboardView::from_state(&state);
        assert_eq!(view.error.as_deref(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn success_renders_cards_in_upstream_order() {
        let state = SessionState {
            current_weather: Some(sample_current("Thunderstorm")),
            forecast: Some(sample_forecast()),
            ..SessionState::default()
        };
        let view = DashboardView::from_state(&state);

        assert_eq!(view.background, Gradient::THUNDERSTORM);
        assert_eq!(view.background_css, "linear-gradient(to bottom, #34373D, #4A4E57)");

        let current = view.current.expect("current card");
        assert_eq!(current.heading, "Boston, US");
        assert_eq!(current.temperature, "68°F");
        assert_eq!(current.feels_like, "Feels like 67°F");
        assert_eq!(current.humidity, "55%");
        assert_eq!(current.wind_speed, "5.75 mph");
        assert_eq!(current.icon_url, "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(current.animation, Animation::Thunder);

        let forecast = view.forecast.expect("forecast panel");
        assert_eq!(forecast.title, FORECAST_TITLE);
        let dates: Vec<_> = forecast.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["Mon, Jun 3", "Tue, Jun 4"]);
        assert_eq!(forecast.days[0].high, "75°F");
        assert_eq!(forecast.days[0].low, "60°F");
        assert_eq!(forecast.days[0].animation, Animation::Rain);
        assert_eq!(forecast.days[1].animation, Animation::None);
        assert_eq!(forecast.days[1].low, "58°F");
    }

    #[test]
    fn unknown_condition_uses_default_background() {
        let state =
            SessionState { current_weather: Some(sample_current("Ash")), ..SessionState::default() };
        let view = DashboardView::from_state(&state);
        assert_eq!(view.background, Gradient::DEFAULT);
        assert!(view.forecast.is_none());
    }

    #[test]
    fn empty_forecast_is_hidden() {
        let mut forecast = sample_forecast();
        forecast.daily_forecast.clear();
        let state = SessionState {
            current_weather: Some(sample_current("Clear")),
            forecast: Some(forecast),
            ..SessionState::default()
        };
        assert!(DashboardView::from_state(&state).forecast.is_none());
    }

    #[test]
    fn view_serializes_animation_as_class_name() {
        let state = SessionState {
            current_weather: Some(sample_current("Snow")),
            ..SessionState::default()
        };
        let json = serde_json::to_value(DashboardView::from_state(&state)).unwrap();
        assert_eq!(json["current"]["animation"], "snow-animation");
        assert_eq!(json["background"]["top"], "#DFE2E5");
        assert_eq!(json["attribution"]["url"], ATTRIBUTION_URL);
    }
}
