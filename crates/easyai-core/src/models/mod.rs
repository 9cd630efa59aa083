//! Data models for travel plans.
//!
//! This module contains the domain models produced by the plan parser
//! ([`Section`], [`Table`], [`ContentLine`]), the request/response records
//! exchanged with the external APIs, and the transient [`Notification`]
//! raised by background email delivery. Display implementations for these
//! models live in [`crate::display`] so that presentation stays separate from
//! the data structures.
//!
//! # Examples
//!
//! ```rust
//! use easyai_core::models::{ContentLine, Section, SectionBody, SectionType};
//!
//! let section = Section {
//!     title: "Day 1".to_string(),
//!     kind: SectionType::Itinerary,
//!     body: SectionBody::Lines {
//!         lines: vec![ContentLine::Bullet {
//!             text: "Visit museum".to_string(),
//!         }],
//!     },
//! };
//! assert_eq!(section.body.lines()[0].text(), "Visit museum");
//! ```

pub mod kind;
pub mod notification;
pub mod requests;
pub mod section;


pub use kind::SectionType;
pub use notification::{Notification, NotificationKind, NOTIFICATION_TTL};
pub use requests::{EmailReceipt, SendEmail, TravelAnswer, TravelQuery};
pub use section::{ContentLine, Section, SectionBody, Table};
