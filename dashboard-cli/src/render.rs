//! Terminal and JSON renderers for [`DashboardView`].

use anyhow::Context;
use dashboard_core::{
    DashboardView,
    view::{CurrentCard, ForecastPanel},
};
use std::io::{self, Write};

/// Human-readable dashboard. `year` goes into the footer.
pub fn render_text<W: Write>(view: &DashboardView, year: i32, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== {} ===", view.title)?;
    writeln!(out, "Theme: {}", view.background_css)?;
    writeln!(out)?;

    if let Some(loading) = view.loading {
        writeln!(out, "{loading}")?;
    }

    if let Some(error) = &view.error {
        writeln!(out, "Error: {error}")?;
        writeln!(out)?;
    }

    if let Some(welcome) = &view.welcome {
        writeln!(out, "{}", welcome.heading)?;
        writeln!(out, "{}", welcome.hint)?;
        writeln!(out)?;
    }

    if let Some(current) = &view.current {
        render_current(current, out)?;
        if let Some(forecast) = &view.forecast {
            render_forecast(forecast, out)?;
        }
    }

    writeln!(
        out,
        "{} ({}) | {} \u{a9} {year}",
        view.attribution.text, view.attribution.url, view.title
    )
}

fn render_current<W: Write>(card: &CurrentCard, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", card.heading)?;
    if card.animation.is_none() {
        writeln!(out, "  {}", card.description)?;
    } else {
        writeln!(out, "  {} [{}]", card.description, card.animation)?;
    }
    writeln!(out, "  Icon: {}", card.icon_url)?;
    writeln!(out, "  {}", card.temperature)?;
    writeln!(out, "  {}", card.feels_like)?;
    writeln!(out, "  {:<12}{}", "Humidity", card.humidity)?;
    writeln!(out, "  {:<12}{}", "Wind Speed", card.wind_speed)?;
    writeln!(out)
}

fn render_forecast<W: Write>(panel: &ForecastPanel, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", panel.title)?;
    for day in &panel.days {
        writeln!(out, "  {:<12}{:>6} {:>6}  {}", day.date, day.high, day.low, day.description)?;
    }
    writeln!(out)
}

pub fn render_json<W: Write>(view: &DashboardView, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, view).context("Failed to serialize dashboard view")?;
    writeln!(out).context("Failed to write dashboard view")?;
    Ok(())
}
