//! Core library for the EasyAI Itinerary travel planner.
//!
//! This crate turns a free-text travel request into a structured plan: it
//! validates the request, forwards it to an external AI-backed travel API,
//! parses the returned text into typed sections, and optionally delivers the
//! plan by email in the background.
//!
//! # Architecture
//!
//! - **Parser** ([`parser`]): pure, total conversion of the raw `answer`
//!   string into [`Section`]s (tables or bullet/numbered/paragraph lines)
//! - **Domain Models** ([`models`]): sections, request/response records and
//!   notifications
//! - **Display** ([`display`]): markdown formatting and the static
//!   icon/colour table used by the terminal renderer
//! - **Collaborators** ([`client`], [`itinerary`]): HTTP clients and the
//!   orchestration that keeps email delivery off the plan's critical path
//!
//! # Quick Start
//!
//! ```rust
//! use easyai_core::{display::PlanSections, models::SectionType};
//!
//! let raw = "## **Day 1**\n1. Arrive\n- Dinner\n---\nBudget Hotels\n- Ibis";
//! let plan = PlanSections::parse(raw);
//!
//! assert_eq!(plan.len(), 2);
//! assert_eq!(plan[0].title, "Day 1");
//! assert_eq!(plan[1].kind, SectionType::Hotels);
//! println!("{plan}");
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use client::{EmailApiClient, EmailSender, PlanSource, TravelApiClient};
pub use config::Config;
pub use display::{PlanSections, Theme};
pub use error::{ItineraryError, Result};
pub use itinerary::{
    EmailDispatch, EmailRequest, Itinerary, ItineraryBuilder, TravelPlan, TripOutcome, TripRequest,
};
pub use models::{
    ContentLine, Notification, NotificationKind, Section, SectionBody, SectionType, SendEmail,
    Table, TravelAnswer, TravelQuery,
};
pub use parser::parse_plan;
pub use validation::{FieldError, ValidationErrors};
