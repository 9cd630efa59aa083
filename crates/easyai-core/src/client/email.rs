//! Email-delivery API client.

use async_trait::async_trait;
use log::info;
use reqwest::Client;

use super::{http_client, send_for_text, with_api_headers, EmailSender};
use crate::{
    config::ApiSettings,
    error::Result,
    models::{EmailReceipt, SendEmail},
};

/// HTTP client for the email-delivery endpoint.
#[derive(Debug, Clone)]
pub struct EmailApiClient {
    http: Client,
    url: String,
}

impl EmailApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            url: settings.email_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Reads the acknowledgement; a non-JSON body becomes the receipt message.
fn decode_receipt(body: &str) -> EmailReceipt {
    serde_json::from_str(body).unwrap_or_else(|_| EmailReceipt {
        message: body.trim().to_string(),
    })
}

#[async_trait]
impl EmailSender for EmailApiClient {
    async fn send(&self, email: &SendEmail) -> Result<EmailReceipt> {
        info!(
            "Sending travel plan email to {} recipient(s)",
            email.email.len()
        );
        let request = with_api_headers(self.http.post(&self.url)).json(email);
        let body = send_for_text(request, "Email").await?;
        Ok(decode_receipt(&body))
    }
}
