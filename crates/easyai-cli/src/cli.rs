//! Command arguments and their handlers.
//!
//! Argument structs carry the clap attributes and convert into core request
//! types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → TripRequest → Itinerary
//! ```

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Args;
use easyai_core::{
    config::EmailSettings,
    constants::EXAMPLE_TRAVEL_QUESTIONS,
    validation::parse_recipients,
    EmailRequest, Itinerary, ItineraryError, Notification, PlanSections, TravelPlan, TripRequest,
};
use jiff::Timestamp;
use log::{debug, info};
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Request a travel plan
///
/// The question must be 10 to 500 characters long and mention a trip,
/// travel, vacation, plan or visit.
#[derive(Args)]
pub struct PlanArgs {
    /// Free-text travel question
    pub question: String,

    /// Email the plan. Takes a comma-separated list of addresses; without a
    /// value the configured recipients are used
    #[arg(long, num_args = 0..=1, value_name = "ADDRESSES")]
    pub email: Option<Option<String>>,

    /// Email subject; derived from the question when omitted
    #[arg(long, requires = "email")]
    pub subject: Option<String>,

    /// Personal message for the email body
    #[arg(long, requires = "email")]
    pub body: Option<String>,

    /// Save the raw plan text to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<PlanArgs> for TripRequest {
    fn from(val: PlanArgs) -> Self {
        let request = TripRequest::new(val.question);
        match val.email {
            Some(addresses) => request.with_email(EmailRequest {
                recipients: addresses
                    .as_deref()
                    .map(parse_recipients)
                    .unwrap_or_default(),
                subject: val.subject.unwrap_or_default(),
                message: val.body.unwrap_or_default(),
            }),
            None => request,
        }
    }
}

/// Fills the fields left empty on the command line from configured defaults.
fn apply_email_defaults(request: &mut TripRequest, defaults: &EmailSettings) {
    let Some(email) = request.email.as_mut() else {
        return;
    };
    if email.recipients.is_empty() {
        email.recipients = defaults.recipients.clone();
    }
    if email.subject.is_empty() {
        email.subject = defaults.subject.clone().unwrap_or_default();
    }
    if email.message.is_empty() {
        email.message = defaults.body.clone().unwrap_or_default();
    }
}

/// Writes the raw plan text to `path`.
fn save_plan(path: &Path, answer: &str) -> Result<()> {
    fs::write(path, answer)
        .with_context(|| format!("Failed to save plan to {}", path.display()))?;
    info!("Saved travel plan to {}", path.display());
    eprintln!("Saved travel plan to {}", path.display());
    Ok(())
}

/// Render saved plan text
#[derive(Args)]
pub struct RenderArgs {
    /// File containing plan text; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

impl RenderArgs {
    fn read_input(&self) -> Result<String> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => fs::read_to_string(path)
                .with_context(|| format!("Failed to read plan from {}", path.display())),
            _ => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read plan from stdin")?;
                Ok(input)
            }
        }
    }
}

/// Command handlers sharing one renderer and output mode.
pub struct Cli {
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Fetch and show a plan, then report the background email outcome.
    pub async fn plan(&self, itinerary: &Itinerary, args: PlanArgs) -> Result<()> {
        let output = args.output.clone();
        let mut request = TripRequest::from(args);
        apply_email_defaults(&mut request, &itinerary.config().email);

        let outcome = match itinerary.plan_trip(&request).await {
            Ok(outcome) => outcome,
            Err(ItineraryError::Validation(errors)) => {
                for error in &errors {
                    eprintln!("{error}");
                }
                bail!("Invalid travel request ({} problem(s))", errors.len());
            }
            Err(e) => return Err(e).context("Failed to get travel plan"),
        };

        // Display and save errors wait until the email outcome is known.
        let shown = self.show_plan(&outcome.plan);
        let saved = match output {
            Some(path) => save_plan(&path, &outcome.plan.answer),
            None => Ok(()),
        };

        if let Some(dispatch) = outcome.email {
            eprintln!("Sending travel plan to {}...", dispatch.recipients().join(", "));
            let notification = dispatch.notification().await;
            self.show_notification(&notification);
        }

        shown.and(saved)
    }

    /// Parse plan text from a file or stdin and show it.
    pub fn render(&self, args: RenderArgs) -> Result<()> {
        let raw = args.read_input()?;
        let sections = PlanSections::parse(&raw);
        debug!("Parsed {} section(s) from input", sections.len());
        self.show_sections(&sections)
    }

    pub fn examples(&self) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(EXAMPLE_TRAVEL_QUESTIONS)?);
            return Ok(());
        }

        let mut markdown = String::from("# Example Questions\n\n");
        for (index, question) in EXAMPLE_TRAVEL_QUESTIONS.iter().enumerate() {
            markdown.push_str(&format!("{}. {question}\n", index + 1));
        }
        self.renderer.render(&markdown)
    }

    fn show_plan(&self, plan: &TravelPlan) -> Result<()> {
        if self.json {
            let value = json!({
                "question": plan.question,
                "answer": plan.answer,
                "sections": plan.sections,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        self.renderer.render_sections(&plan.sections)
    }

    fn show_sections(&self, sections: &PlanSections) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(sections)?);
            return Ok(());
        }
        self.renderer.render_sections(sections)
    }

    fn show_notification(&self, notification: &Notification) {
        // The send may outlive the notification's display window.
        if !notification.is_visible_at(Timestamp::now()) {
            debug!("Dropping expired notification: {notification}");
            return;
        }
        if notification.is_success() {
            print!("{notification}");
        } else {
            eprint!("{notification}");
        }
    }
}
