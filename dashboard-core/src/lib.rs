//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Shared domain models (backend payloads, session state)
//! - The presentation mapper (gradients, animations, formatted text)
//! - A client for the backend's `/api/weather/*` endpoints
//! - The orchestrator that runs a search and owns the session state
//! - A render-ready view model and on-disk configuration
//!
//! It is used by `dashboard-cli`, but any other front-end can drive the same
//! [`Orchestrator`] and render [`DashboardView`].

pub mod api;
pub mod config;
pub mod model;
pub mod orchestrator;
pub mod presentation;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::{Endpoint, FetchError, WeatherApi, api_from_config, http::HttpWeatherApi};
pub use config::Config;
pub use model::{CurrentWeather, Forecast, ForecastDay, LocationQuery, SessionState, WeatherCondition};
pub use orchestrator::{Orchestrator, SearchOutcome};
pub use view::DashboardView;
