//! Field-level validation of requests, responses and API settings.
//!
//! Every validator collects all failing fields instead of stopping at the
//! first one, so callers can show one message per field.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ApiSettings;
use crate::models::{SendEmail, TravelAnswer, TravelQuery};

/// Minimum question length, in characters, after trimming.
pub const QUESTION_MIN_CHARS: usize = 10;

/// Maximum question length, in characters, after trimming.
pub const QUESTION_MAX_CHARS: usize = 500;

/// A question must mention at least one of these (case-insensitive).
pub const TRAVEL_KEYWORDS: &[&str] = &["trip", "travel", "vacation", "plan", "visit"];

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// One failing field and the message to show for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty collection of field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// First message reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Appends all errors of `other`.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Whether `address` looks like a deliverable email address.
pub fn is_valid_email(address: &str) -> bool {
    email_regex().is_match(address.trim())
}

/// Splits a comma-separated recipient list, trimming entries and dropping
/// empty ones.
pub fn parse_recipients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(String::from)
        .collect()
}

/// Validates a travel question (length and travel keywords), after trimming.
pub fn validate_travel_query(query: &TravelQuery) -> Result<(), ValidationErrors> {
    let question = query.question.trim();
    let length = question.chars().count();
    let mut errors = ValidationErrors::default();

    if length < QUESTION_MIN_CHARS {
        errors.push(
            "question",
            "Please provide more details about your travel plans (at least 10 characters)",
        );
    }
    if length > QUESTION_MAX_CHARS {
        errors.push("question", "Please keep your question under 500 characters");
    }

    let lower = question.to_lowercase();
    if !TRAVEL_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        errors.push(
            "question",
            "Please include travel-related keywords in your question",
        );
    }

    errors.into_result()
}

/// Validates the travel API response.
pub fn validate_travel_answer(answer: &TravelAnswer) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if answer.answer.is_empty() {
        errors.push("answer", "Response cannot be empty");
    }
    errors.into_result()
}

/// Validates an email-delivery request.
pub fn validate_send_email(email: &SendEmail) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if email.email.is_empty() {
        errors.push("email", "At least one email address is required");
    }
    for address in &email.email {
        if !is_valid_email(address) {
            errors.push("email", "Invalid email address");
        }
    }
    if email.subject.is_empty() {
        errors.push("subject", "Subject cannot be empty");
    }
    if email.body.is_empty() {
        errors.push("body", "Body cannot be empty");
    }

    errors.into_result()
}

/// Validates the API base URL and endpoint paths.
pub fn validate_api_settings(settings: &ApiSettings) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if url::Url::parse(&settings.base_url).is_err() {
        errors.push("base_url", "Invalid travel API base URL");
    }
    if !settings.travel_endpoint.starts_with('/') {
        errors.push("travel_endpoint", "Endpoint must start with /");
    }
    if !settings.email_endpoint.starts_with('/') {
        errors.push("email_endpoint", "Endpoint must start with /");
    }

    errors.into_result()
}
