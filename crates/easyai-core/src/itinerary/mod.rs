//! High-level API for requesting travel plans.
//!
//! [`Itinerary`] coordinates the two external collaborators around the
//! parser: it validates a question, fetches the raw plan from the travel
//! API, parses it, and, when asked, hands the email delivery to a background
//! task.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  validation  │──▶│  PlanSource  │──▶│ parse_plan   │──▶│ TripOutcome  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                                                 │ spawn
//!                                                          ┌──────▼───────┐
//!                                                          │ EmailSender  │
//!                                                          └──────────────┘
//! ```
//!
//! The plan is returned as soon as it is parsed. The email send only starts
//! after the plan fetch succeeded, and its outcome arrives later as a
//! [`Notification`](crate::models::Notification) through [`EmailDispatch`].
//!
//! # Example
//!
//! ```rust,no_run
//! use easyai_core::{ItineraryBuilder, TripRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new().build()?;
//! let outcome = itinerary
//!     .plan_trip(&TripRequest::new("Plan a 3-day trip to Pattaya"))
//!     .await?;
//! println!("{}", outcome.plan.sections);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::info;

pub mod builder;
pub mod dispatch;

pub use builder::ItineraryBuilder;
pub use dispatch::{compose_email, EmailDispatch, EmailRequest};

use crate::{
    client::{EmailSender, PlanSource},
    config::Config,
    display::PlanSections,
    error::Result,
    models::{SendEmail, TravelQuery},
    validation::{validate_send_email, validate_travel_query, ValidationErrors},
};

/// A fetched and parsed travel plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPlan {
    /// The question as sent, trimmed
    pub question: String,

    /// Raw `answer` string returned by the travel API
    pub answer: String,
    pub sections: PlanSections,
}

/// A question plus optional email delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripRequest {
    pub question: String,
    pub email: Option<EmailRequest>,
}

impl TripRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: EmailRequest) -> Self {
        self.email = Some(email);
        self
    }
}

/// Result of [`Itinerary::plan_trip`].
#[derive(Debug)]
pub struct TripOutcome {
    pub plan: TravelPlan,

    /// Pending email delivery, when one was requested
    pub email: Option<EmailDispatch>,
}

/// Main interface for requesting travel plans.
pub struct Itinerary {
    config: Config,
    plan_source: Arc<dyn PlanSource>,
    email_sender: Arc<dyn EmailSender>,
}

impl Itinerary {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates a question, fetches the plan and parses it.
    pub async fn request_plan(&self, query: &TravelQuery) -> Result<TravelPlan> {
        let query = TravelQuery::new(query.question.trim());
        validate_travel_query(&query)?;
        self.fetch_plan(query).await
    }

    async fn fetch_plan(&self, query: TravelQuery) -> Result<TravelPlan> {
        let answer = self.plan_source.fetch_answer(&query.question).await?;
        let sections = PlanSections::parse(&answer);
        info!("Parsed travel plan into {} section(s)", sections.len());

        Ok(TravelPlan {
            question: query.question,
            answer,
            sections,
        })
    }

    /// Starts a background email send.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch_email(&self, email: SendEmail) -> EmailDispatch {
        EmailDispatch::spawn(Arc::clone(&self.email_sender), email)
    }

    /// Requests a plan and, if asked, emails it in the background.
    ///
    /// The question and email fields are validated together before any
    /// network call. The email send is started only once the plan has been
    /// fetched, and this method returns without waiting for it.
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<TripOutcome> {
        let query = TravelQuery::new(request.question.trim());
        let email = request
            .email
            .as_ref()
            .map(|email| compose_email(&query.question, email));

        let mut errors = ValidationErrors::default();
        if let Err(question_errors) = validate_travel_query(&query) {
            errors.extend(question_errors);
        }
        if let Some(Err(email_errors)) = email.as_ref().map(validate_send_email) {
            errors.extend(email_errors);
        }
        errors.into_result()?;

        let plan = self.fetch_plan(query).await?;
        let email = email.map(|email| self.dispatch_email(email));

        Ok(TripOutcome { plan, email })
    }
}
