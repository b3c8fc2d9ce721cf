use anyhow::Context;
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use dashboard_core::{
    Config, DashboardView, LocationQuery, Orchestrator, SearchOutcome, SessionState, WeatherApi,
    api_from_config, view,
};
use inquire::{CustomType, InquireError, Text};
use std::{io, process::ExitCode};
use tokio::{sync::watch, task::JoinHandle};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Mini Weather Dashboard")]
pub struct Cli {
    /// Backend base URL for this run, overriding the config file.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search once and print the dashboard.
    Show {
        /// City name or US zip code.
        #[arg(value_parser = parse_location)]
        location: LocationQuery,

        /// Print the dashboard view as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for locations until cancelled.
    Interactive {
        /// Print each dashboard view as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Set the backend URL and request timeout.
    Configure,
}

fn parse_location(raw: &str) -> Result<LocationQuery, String> {
    LocationQuery::parse(raw).ok_or_else(|| "location must not be empty".to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Command::Show { location, json }) => {
                let mut orchestrator = build_orchestrator(self.backend.as_deref())?;
                let outcome = orchestrator.search(location.as_str()).await;
                print_dashboard(&orchestrator.state(), json)?;
                Ok(if outcome == SearchOutcome::Failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
            }
            Some(Command::Interactive { json }) => interactive(self.backend.as_deref(), json).await,
            None => interactive(self.backend.as_deref(), false).await,
        }
    }
}

fn build_orchestrator(
    backend_override: Option<&str>,
) -> anyhow::Result<Orchestrator<Box<dyn WeatherApi>>> {
    let mut config = Config::load()?;
    if let Some(url) = backend_override {
        config.set_backend_url(url)?;
    }
    tracing::info!(backend = %config.backend_url, timeout_secs = config.timeout_secs, "using backend");

    Ok(Orchestrator::new(api_from_config(&config)?))
}

async fn interactive(backend_override: Option<&str>, json: bool) -> anyhow::Result<ExitCode> {
    let mut orchestrator = build_orchestrator(backend_override)?;
    let indicator = spawn_loading_indicator(orchestrator.subscribe());

    print_dashboard(&orchestrator.state(), json)?;

    loop {
        let input = match Text::new("Location:").with_help_message(view::WELCOME_HINT).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(anyhow::Error::new(e).context("Failed to read location")),
        };

        if orchestrator.search(&input).await != SearchOutcome::Skipped {
            print_dashboard(&orchestrator.state(), json)?;
        }
    }

    drop(orchestrator);
    let _ = indicator.await;
    Ok(ExitCode::SUCCESS)
}

/// Prints the loading text whenever a search starts. Ends when the orchestrator is dropped.
fn spawn_loading_indicator(mut rx: watch::Receiver<SessionState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut shown = false;
        while rx.changed().await.is_ok() {
            let loading = rx.borrow_and_update().loading;
            if loading && !shown {
                eprintln!("{}", view::LOADING_TEXT);
            }
            shown = loading;
        }
    })
}

fn print_dashboard(state: &SessionState, json: bool) -> anyhow::Result<()> {
    let view = DashboardView::from_state(state);
    let mut stdout = io::stdout().lock();
    if json {
        render::render_json(&view, &mut stdout)
    } else {
        let year = chrono::Local::now().year();
        render::render_text(&view, year, &mut stdout).context("Failed to write dashboard")
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = Text::new("Backend URL:")
        .with_default(&config.backend_url)
        .with_help_message("Base URL serving /api/weather/current and /api/weather/forecast")
        .prompt()
        .context("Failed to read backend URL")?;
    config.set_backend_url(&url)?;

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds, 0 = none):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read timeout")?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
