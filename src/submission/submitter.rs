//! Submission backends
//!
//! There is no real backend. `SimulatedSubmitter` waits for a fixed delay
//! and acknowledges; `MockSubmitter` lets tests script a rejection.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::error::{HubError, Result};
use crate::id::generate_submission_ref;

use super::form::ValidatedSubmission;

/// Default simulated delay, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Receipt for an accepted submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub reference: String,
    pub name: String,
    pub received_at: DateTime<Utc>,
}

/// Something that accepts validated submissions
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &ValidatedSubmission) -> Result<Acknowledgement>;
}

/// Acknowledges after an artificial delay; nothing is sent or stored
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &ValidatedSubmission) -> Result<Acknowledgement> {
        tokio::time::sleep(self.delay).await;
        let ack = Acknowledgement {
            reference: generate_submission_ref(&submission.name, &submission.website),
            name: submission.name.clone(),
            received_at: Utc::now(),
        };
        info!("Simulated submission accepted: {} ({})", ack.name, ack.reference);
        Ok(ack)
    }
}

/// Test double that always rejects with the given reason
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    reason: String,
}

impl MockSubmitter {
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(&self, _submission: &ValidatedSubmission) -> Result<Acknowledgement> {
        Err(HubError::SubmissionFailed(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pricing;

    fn submission() -> ValidatedSubmission {
        ValidatedSubmission {
            name: "Perplexity".to_string(),
            description: "Answer engine".to_string(),
            category: "chatbots".to_string(),
            website: "https://perplexity.ai".to_string(),
            pricing: Pricing::Freemium,
            tags: vec![],
            submitter_name: None,
            submitter_email: None,
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSubmitter::default().delay(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_simulated_submit_acknowledges() {
        let submitter = SimulatedSubmitter::new(0);
        let ack = submitter.submit(&submission()).await.unwrap();
        assert_eq!(ack.name, "Perplexity");
        assert!(ack.reference.starts_with("sub-"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(1000);
        let started = tokio::time::Instant::now();
        submitter.submit(&submission()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_mock_rejects() {
        let submitter = MockSubmitter::rejecting("backend down");
        let err = submitter.submit(&submission()).await.unwrap_err();
        assert!(matches!(err, HubError::SubmissionFailed(ref r) if r == "backend down"));
    }
}
