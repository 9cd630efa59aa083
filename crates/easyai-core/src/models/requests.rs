//! Request and response records exchanged with the external travel and
//! email APIs.

use serde::{Deserialize, Serialize};

/// Body of a travel-plan request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelQuery {
    /// Free-text travel request
    pub question: String,
}

impl TravelQuery {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Body of a travel-plan response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelAnswer {
    /// Raw plan text, sections separated by `---`
    pub answer: String,
}

/// Body of an email-delivery request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendEmail {
    /// Recipient addresses
    pub email: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Acknowledgement returned by the email API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailReceipt {
    #[serde(default)]
    pub message: String,
}
