//! One search transaction: current conditions, then forecast, then settle.
//!
//! The orchestrator is the only writer of [`SessionState`]. Every transition is
//! published as a whole snapshot on a watch channel, so renderers never see a
//! half-applied update.

use tokio::sync::watch;

use crate::{
    Forecast, LocationQuery, SessionState,
    api::{FetchError, WeatherApi},
};

/// How a call to [`Orchestrator::search`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; nothing was sent and the state is untouched.
    Skipped,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub struct Orchestrator<A> {
    api: A,
    state: watch::Sender<SessionState>,
}

impl<A: WeatherApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { api, state }
    }

    /// Copy of the latest snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Run a search for `location`.
    ///
    /// Takes `&mut self`, so a second search cannot start while one is in
    /// flight.
    pub async fn search(&mut self, location: &str) -> SearchOutcome {
        let Some(query) = LocationQuery::parse(location) else {
            tracing::debug!("ignoring blank location");
            return SearchOutcome::Skipped;
        };
        self.run(&query).await
    }

    #[tracing::instrument(level = "info", skip(self, query), fields(location = %query))]
    async fn run(&self, query: &LocationQuery) -> SearchOutcome {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.fetch_all(query).await {
            Ok(forecast) => {
                tracing::info!(days = forecast.daily_forecast.len(), "search succeeded");
                self.state.send_modify(|s| {
                    s.forecast = Some(forecast);
                    s.error = None;
                    s.loading = false;
                });
                SearchOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                let message = err.user_message();
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.current_weather = None;
                    s.forecast = None;
                    s.loading = false;
                });
                SearchOutcome::Failed
            }
        }
    }

    /// Short-circuits on the first failure: no forecast request after a failed
    /// current-conditions request.
    async fn fetch_all(&self, query: &LocationQuery) -> Result<Forecast, FetchError> {
        let current = self.api.current(query).await?;
        tracing::debug!(condition = %current.weather_condition.main, "current conditions received");

        // The previous search's forecast must not be shown next to this
        // search's current weather.
        self.state.send_modify(|s| {
            s.current_weather = Some(current);
            s.forecast = None;
            s.error = None;
        });

        self.api.forecast(query).await
    }
}
