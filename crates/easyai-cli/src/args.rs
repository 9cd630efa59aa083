use std::path::PathBuf;

use clap::{Parser, Subcommand};
use easyai_core::Theme;

use crate::cli::{PlanArgs, RenderArgs};

/// Terminal client for EasyAI Itinerary
///
/// Sends a free-text travel question to the EasyAI travel API, splits the
/// returned plan into sections (days, hotels, restaurants, costs, transport,
/// attractions, weather, activities) and renders them in the terminal. A plan
/// can optionally be emailed; delivery runs in the background and its outcome
/// is reported once the plan has been shown.
#[derive(Parser)]
#[command(version, about, name = "easyai")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/easyai/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the travel API, overriding config and EASYAI_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Colour theme for section accents (light or dark)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Print machine-readable JSON instead of rendered markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the EasyAI CLI
///
/// - `plan`: ask the travel API for a plan and render it
/// - `render`: parse and render plan text that is already on disk
/// - `examples`: list example questions
#[derive(Subcommand)]
pub enum Commands {
    /// Request a travel plan
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Render saved plan text without contacting the API
    #[command(alias = "r")]
    Render(RenderArgs),
    /// List example travel questions
    #[command(alias = "e")]
    Examples,
}
