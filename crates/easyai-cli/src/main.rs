//! EasyAI CLI Application
//!
//! Command-line interface for the EasyAI Itinerary travel planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use easyai_core::{Config, ItineraryBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        api_url,
        no_color,
        theme,
        json,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref())
        .context("Failed to load configuration")?
        .with_env_overrides()
        .context("Failed to apply environment overrides")?
        .with_cli_overrides(api_url, theme);

    let renderer = TerminalRenderer::new(!no_color, config.display.theme);
    let cli = Cli::new(renderer, json);

    info!("EasyAI started");

    match command {
        Plan(args) => {
            let itinerary = ItineraryBuilder::new()
                .with_config(config)
                .build()
                .context("Failed to initialize travel planner")?;
            cli.plan(&itinerary, args).await
        }
        Render(args) => cli.render(args),
        Examples => cli.examples(),
    }
}
