//! Builder for creating and configuring Itinerary instances.

use std::sync::Arc;

use log::debug;

use super::Itinerary;
use crate::{
    client::{EmailApiClient, EmailSender, PlanSource, TravelApiClient},
    config::Config,
    error::Result,
};

/// Builder for creating and configuring Itinerary instances.
#[derive(Default)]
pub struct ItineraryBuilder {
    config: Option<Config>,
    plan_source: Option<Arc<dyn PlanSource>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl ItineraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration. Defaults to [`Config::default`].
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the HTTP travel client.
    pub fn with_plan_source(mut self, source: impl PlanSource + 'static) -> Self {
        self.plan_source = Some(Arc::new(source));
        self
    }

    /// Replaces the HTTP email client.
    pub fn with_email_sender(mut self, sender: impl EmailSender + 'static) -> Self {
        self.email_sender = Some(Arc::new(sender));
        self
    }

    /// Builds the configured itinerary service.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::Validation` if the API settings are invalid
    /// Returns `ItineraryError::Http` if an HTTP client cannot be created
    pub fn build(self) -> Result<Itinerary> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let plan_source = match self.plan_source {
            Some(source) => source,
            None => Arc::new(TravelApiClient::new(&config.api)?),
        };
        let email_sender = match self.email_sender {
            Some(sender) => sender,
            None => Arc::new(EmailApiClient::new(&config.api)?),
        };

        debug!("Itinerary configured for {}", config.api.base_url);
        Ok(Itinerary {
            config,
            plan_source,
            email_sender,
        })
    }
}
