//! Classification collaborator boundary.
//!
//! The reveal sequencer only sees a [`Classifier`]; whether the verdict
//! comes from a deployed endpoint or the built-in fixture is decided at
//! startup from config and CLI flags.

mod error;
mod http;
mod mock;
mod outcome;

pub use error::ClassifyError;
pub use http::HttpClassifier;
pub use mock::MockClassifier;
pub use outcome::{
    gauge_percent, points_remaining, ClassifyResponse, Outcome, DEFAULT_CURRENT_POINTS,
    DEFAULT_POINTS_ADDED, DEFAULT_PRIZE_NAME, DEFAULT_TARGET_POINTS,
};

use crate::config::ServiceConfig;

/// The injected classification capability.
pub enum Classifier {
    Http(HttpClassifier),
    Mock(MockClassifier),
}

impl Classifier {
    /// Build the provider selected by config.
    pub fn from_config(service: &ServiceConfig) -> Result<Self, ClassifyError> {
        if service.use_mock {
            Ok(Classifier::Mock(MockClassifier))
        } else {
            Ok(Classifier::Http(HttpClassifier::new(service)?))
        }
    }

    pub async fn classify(&self, code: &str) -> Result<Outcome, ClassifyError> {
        match self {
            Classifier::Http(client) => client.classify(code).await,
            Classifier::Mock(fixture) => fixture.classify(code),
        }
    }
}
