use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{CurrentWeather, Forecast, LocationQuery, model::ErrorBody};

use super::{Endpoint, FetchError, WeatherApi};

/// Client for the dashboard's backend proxy.
#[derive(Debug, Clone)]
pub struct HttpWeatherApi {
    base_url: Url,
    http: Client,
}

impl HttpWeatherApi {
    /// `timeout` of `None` lets a request wait forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { base_url, http })
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), endpoint.path())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &LocationQuery,
    ) -> Result<T, FetchError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%endpoint, %url, location = %query, "sending request");

        let res = self
            .http
            .get(&url)
            .query(&[("location", query.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport { endpoint, reason: e.to_string() })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport { endpoint, reason: e.to_string() })?;

        if !status.is_success() {
            tracing::warn!(%endpoint, %status, body = %truncate_body(&body), "backend returned an error");
            return Err(FetchError::Application {
                endpoint,
                status: status.as_u16(),
                message: error_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%endpoint, error = %e, body = %truncate_body(&body), "unexpected response body");
            FetchError::Malformed { endpoint, reason: e.to_string() }
        })
    }
}

#[async_trait]
impl WeatherApi for HttpWeatherApi {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentWeather, FetchError> {
        self.fetch(Endpoint::Current, query).await
    }

    async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, FetchError> {
        self.fetch(Endpoint::Forecast, query).await
    }
}

/// `detail` from an error body, if the body is JSON and carries a string there.
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail)
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid backend URL '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Invalid backend URL '{raw}': unsupported scheme '{other}'")),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
