//! Travel-planning API client.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use super::{http_client, send_for_text, with_api_headers, PlanSource};
use crate::{
    config::ApiSettings,
    constants::RESPONSE_STYLE_SUFFIX,
    error::{ItineraryError, Result},
    models::{TravelAnswer, TravelQuery},
    validation::validate_travel_answer,
};

/// HTTP client for the travel-planning endpoint.
#[derive(Debug, Clone)]
pub struct TravelApiClient {
    http: Client,
    url: String,
}

impl TravelApiClient {
    /// Create a client for the endpoint described by `settings`.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            url: settings.travel_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request body for a question, with the response style instruction
    /// appended.
    pub fn request_body(question: &str) -> TravelQuery {
        TravelQuery::new(format!("{question}{RESPONSE_STYLE_SUFFIX}"))
    }
}

/// Decodes and validates a travel API response body.
pub fn decode_answer(body: &str) -> Result<String> {
    let answer: TravelAnswer = serde_json::from_str(body)
        .map_err(|e| ItineraryError::invalid_response(e.to_string()))?;
    validate_travel_answer(&answer)
        .map_err(|errors| ItineraryError::invalid_response(errors.to_string()))?;
    Ok(answer.answer)
}

#[async_trait]
impl PlanSource for TravelApiClient {
    async fn fetch_answer(&self, question: &str) -> Result<String> {
        info!("Requesting travel plan from {}", self.url);
        let request = with_api_headers(self.http.post(&self.url))
            .json(&Self::request_body(question));

        let body = send_for_text(request, "Travel plan").await?;
        debug!("Travel API returned {} bytes", body.len());
        decode_answer(&body)
    }
}
