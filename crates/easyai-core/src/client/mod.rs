//! Clients for the external travel-planning and email-delivery APIs.
//!
//! Both APIs sit behind small async traits, [`PlanSource`] and
//! [`EmailSender`], so the trip orchestration in [`crate::itinerary`] can be
//! exercised without a network.

pub mod email;
pub mod travel;

use async_trait::async_trait;
use log::warn;
use reqwest::{Client, RequestBuilder, Response};

pub use email::EmailApiClient;
pub use travel::{decode_answer, TravelApiClient};

use crate::{
    config::ApiSettings,
    error::{ItineraryError, Result},
    models::{EmailReceipt, SendEmail},
};

/// Header that stops ngrok tunnels from answering with an HTML warning page.
pub const NGROK_SKIP_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// Produces the raw plan text for a question.
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Fetch the raw `answer` string for an already-validated question.
    async fn fetch_answer(&self, question: &str) -> Result<String>;
}

/// Delivers a travel plan by email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &SendEmail) -> Result<EmailReceipt>;
}

/// Builds the shared HTTP client with the configured timeout.
pub(crate) fn http_client(settings: &ApiSettings) -> Result<Client> {
    Client::builder()
        .timeout(settings.timeout())
        .build()
        .map_err(|e| ItineraryError::http("Failed to build HTTP client").with_source(e))
}

/// Adds the headers every API call carries.
pub(crate) fn with_api_headers(request: RequestBuilder) -> RequestBuilder {
    request
        .header(NGROK_SKIP_WARNING_HEADER, "true")
        .header(reqwest::header::CONTENT_TYPE, "application/json")
}

/// Sends a request and returns the body text of a successful response.
///
/// Non-success statuses become [`ItineraryError::Api`] carrying the body
/// text, or the generic message when the body is empty.
pub(crate) async fn send_for_text(request: RequestBuilder, what: &str) -> Result<String> {
    let response: Response = request
        .send()
        .await
        .map_err(|e| ItineraryError::http(format!("{what} request failed")).with_source(e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ItineraryError::http(format!("Failed to read {what} response")).with_source(e))?;

    if !status.is_success() {
        warn!("{what} API returned {status}");
        return Err(ItineraryError::api(status.as_u16(), body));
    }
    Ok(body)
}
