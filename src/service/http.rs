use std::time::Duration;

use crate::config::ServiceConfig;
use crate::service::error::ClassifyError;
use crate::service::outcome::{ClassifyResponse, Outcome};

/// Client for a deployed classification endpoint
/// (`GET <endpoint>?code=<serial>`).
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(service: &ServiceConfig) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(service.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(service.timeout_seconds as u64))
            .build()?;
        Ok(Self {
            client,
            endpoint: service.endpoint.clone(),
        })
    }

    pub async fn classify(&self, code: &str) -> Result<Outcome, ClassifyError> {
        tracing::debug!(endpoint = %self.endpoint, "sending classification request");
        let raw: ClassifyResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("code", code)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Outcome::from(raw))
    }
}
