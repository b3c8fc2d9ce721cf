use crate::{Config, CurrentWeather, Forecast, LocationQuery, api::http::HttpWeatherApi};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod http;

/// The two backend endpoints a search talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Current => "current",
            Endpoint::Forecast => "forecast",
        }
    }

    /// Path relative to the backend base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "api/weather/current",
            Endpoint::Forecast => "api/weather/forecast",
        }
    }

    /// Message shown when the backend gives no usable explanation.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::Current => "Failed to fetch weather data",
            Endpoint::Forecast => "Failed to fetch forecast data",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a backend call did not produce data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed: connection refused, timeout, broken body.
    #[error("{endpoint} request could not be completed: {reason}")]
    Transport { endpoint: Endpoint, reason: String },

    /// The backend answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {}", .message.as_deref().unwrap_or("no detail"))]
    Application { endpoint: Endpoint, status: u16, message: Option<String> },

    /// The backend answered with success but the body has the wrong shape.
    #[error("{endpoint} response could not be parsed: {reason}")]
    Malformed { endpoint: Endpoint, reason: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Application { endpoint, .. }
            | FetchError::Malformed { endpoint, .. } => *endpoint,
        }
    }

    /// Text for the dashboard's error banner.
    ///
    /// Only the backend's own `detail` is shown verbatim; every other failure
    /// collapses into the endpoint's generic message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Application { message: Some(message), .. } if !message.is_empty() => {
                message.clone()
            }
            other => other.endpoint().fallback_message().to_string(),
        }
    }
}

#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentWeather, FetchError>;

    async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, FetchError>;
}

#[async_trait]
impl<T: WeatherApi + ?Sized> WeatherApi for Box<T> {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentWeather, FetchError> {
        (**self).current(query).await
    }

    async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, FetchError> {
        (**self).forecast(query).await
    }
}

/// Construct the HTTP client described by `config`.
pub fn api_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherApi>> {
    let api = HttpWeatherApi::new(&config.backend_url, config.timeout())?;
    Ok(Box::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_message_is_shown_verbatim() {
        let err = FetchError::Application {
            endpoint: Endpoint::Current,
            status: 404,
            message: Some("City not found".into()),
        };
        assert_eq!(err.user_message(), "City not found");
        assert!(err.to_string().contains("status 404"));
    }

    #[test]
    fn missing_or_empty_detail_uses_endpoint_fallback() {
        let missing =
            FetchError::Application { endpoint: Endpoint::Current, status: 500, message: None };
        assert_eq!(missing.user_message(), "Failed to fetch weather data");

        let empty = FetchError::Application {
            endpoint: Endpoint::Forecast,
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.user_message(), "Failed to fetch forecast data");
    }

    #[test]
    fn transport_and_malformed_use_endpoint_fallback() {
        let transport =
            FetchError::Transport { endpoint: Endpoint::Forecast, reason: "timed out".into() };
        assert_eq!(transport.user_message(), "Failed to fetch forecast data");
        assert!(transport.to_string().contains("timed out"));

        let malformed =
            FetchError::Malformed { endpoint: Endpoint::Current, reason: "missing field".into() };
        assert_eq!(malformed.user_message(), "Failed to fetch weather data");
    }

    #[test]
    fn api_from_config_accepts_default_config() {
        let cfg = Config::default();
        assert!(api_from_config(&cfg).is_ok());
    }

    #[test]
    fn api_from_config_rejects_bad_url() {
        let cfg = Config { backend_url: "not a url".into(), ..Config::default() };
        let err = api_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid backend URL"));
    }
}
