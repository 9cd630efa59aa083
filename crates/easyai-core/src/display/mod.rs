//! Rendering layer: markdown formatting and presentation descriptors.
//!
//! The parser produces plain data ([`crate::models::Section`]). This module
//! decides how that data looks: every section type maps to a fixed icon and
//! colour pair, sections and tables format as markdown, and an empty plan
//! renders an explicit "no plan found" state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Parser      │    │ Display impls & │    │    Markdown     │
//! │ (Vec<Section>)  │───▶│  Presentation   │───▶│ (termimad/text) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanSections`] wrapper with the empty-plan state
//! - [`models`]: Display implementations for sections, tables and lines
//! - [`presentation`]: icon / colour-pair table and [`Theme`]
//! - [`status`]: Display for notifications
//!
//! ## Usage
//!
//! ```rust
//! use easyai_core::{display::{PlanSections, Theme}, models::SectionType};
//!
//! let plan = PlanSections::parse("Budget Hotels\n| Hotel | Price |\n|:-|:-|\n| Ibis | $80 |");
//! let markdown = plan.to_string();
//! assert!(markdown.contains("| Ibis | $80 |"));
//!
//! let accent = SectionType::Hotels.presentation().accent;
//! let _shade = accent.for_theme(Theme::Dark);
//! ```

pub mod collections;
pub mod models;
pub mod presentation;
pub mod status;

pub use collections::{PlanSections, NO_PLAN_MESSAGE, NO_PLAN_TITLE};
pub use presentation::{Accent, Presentation, Rgb, Theme};
