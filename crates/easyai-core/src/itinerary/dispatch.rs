//! Background email delivery.

use std::sync::Arc;

use log::{info, warn};
use tokio::task::JoinHandle;

use crate::{
    client::EmailSender,
    constants::{
        DEFAULT_EMAIL_BODY, DEFAULT_EMAIL_SUBJECT, EMAIL_FAILURE_MESSAGE, SUBJECT_QUESTION_WORDS,
    },
    models::{Notification, SendEmail},
};

/// Email options attached to a trip request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailRequest {
    pub recipients: Vec<String>,

    /// Subject line; blank means "derive one from the question"
    pub subject: String,

    /// Personal message; blank means "use the default greeting"
    pub message: String,
}

/// Builds the email for a question, applying the subject and body
/// fallbacks.
pub fn compose_email(question: &str, request: &EmailRequest) -> SendEmail {
    let subject = if request.subject.trim().is_empty() {
        let opening: Vec<&str> = question
            .split_whitespace()
            .take(SUBJECT_QUESTION_WORDS)
            .collect();
        format!("{DEFAULT_EMAIL_SUBJECT} - {}...", opening.join(" "))
    } else {
        request.subject.clone()
    };

    let message = request.message.trim();
    let body = if message.is_empty() {
        DEFAULT_EMAIL_BODY.to_string()
    } else {
        message.to_string()
    };

    SendEmail {
        email: request.recipients.clone(),
        subject,
        body,
    }
}

/// Handle to an email send running in the background.
///
/// Dropping the handle does not cancel the send.
#[derive(Debug)]
pub struct EmailDispatch {
    recipients: Vec<String>,
    handle: JoinHandle<Notification>,
}

impl EmailDispatch {
    /// Spawn the send on the current tokio runtime.
    pub(crate) fn spawn(sender: Arc<dyn EmailSender>, email: SendEmail) -> Self {
        let recipients = email.email.clone();
        let handle = tokio::spawn(async move {
            match sender.send(&email).await {
                Ok(_) => {
                    info!("Email sent successfully");
                    Notification::success(format!(
                        "Travel plan sent to {}",
                        email.email.join(", ")
                    ))
                }
                Err(e) => {
                    warn!("Email send failed: {e}");
                    Notification::error(EMAIL_FAILURE_MESSAGE)
                }
            }
        });
        Self { recipients, handle }
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Whether the send has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the send and return the notification describing it.
    pub async fn notification(self) -> Notification {
        match self.handle.await {
            Ok(notification) => notification,
            Err(e) => {
                warn!("Email task did not complete: {e}");
                Notification::error(EMAIL_FAILURE_MESSAGE)
            }
        }
    }
}
