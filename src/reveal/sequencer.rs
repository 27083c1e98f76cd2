use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::time::Instant;

use crate::reveal::timeline;
use crate::service::Classifier;
use crate::ui::events::AppEvent;

/// Drives one redemption attempt: classification, then the timed effect
/// schedule anchored to the resolution instant.
///
/// The sequencer never touches widget state directly. Everything it does
/// comes back through the app event channel, tagged with the attempt
/// generation so events outliving a reset are dropped at the receiver.
pub struct Sequencer {
    provider: Arc<Classifier>,
    events: Sender<AppEvent>,
    runtime: Handle,
}

impl Sequencer {
    pub fn new(provider: Classifier, events: Sender<AppEvent>, runtime: Handle) -> Self {
        Self {
            provider: Arc::new(provider),
            events,
            runtime,
        }
    }

    /// Kick off the reveal for a validated code.
    ///
    /// Returns immediately; the suspense shake runs concurrently with the
    /// pending request. On rejection a single failure event is emitted and
    /// no effect ever fires for this attempt.
    pub fn begin(&self, code: String, attempt: u64) {
        let provider = Arc::clone(&self.provider);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tracing::info!(attempt, "classification requested");
            match provider.classify(&code).await {
                Ok(outcome) => {
                    let anchor = Instant::now();
                    if events.send(AppEvent::Resolved { attempt, outcome }).is_err() {
                        return;
                    }
                    for (offset, effect) in timeline::schedule() {
                        tokio::time::sleep_until(anchor + offset).await;
                        if events.send(AppEvent::Effect { attempt, effect }).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "classification failed");
                    let _ = events.send(AppEvent::ClassifyFailed {
                        attempt,
                        message: err.to_string(),
                    });
                }
            }
        });
    }
}
