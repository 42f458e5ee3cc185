//! Mock tool submission
//!
//! The flow mirrors a real form: validate required fields, hand the result
//! to a `Submitter`, and turn the outcome into a user-facing notification.
//! The only submitter that ships is simulated; nothing leaves the process.

mod form;
mod submitter;

pub use form::{DEFAULT_MAX_TAGS, FormField, SubmissionForm, ValidatedSubmission};
pub use submitter::{Acknowledgement, DEFAULT_DELAY_MS, MockSubmitter, SimulatedSubmitter, Submitter};

use log::{info, warn};

use crate::catalog::Catalog;
use crate::error::{HubError, Result};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Toast-style message shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn failure(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Notification for the outcome of `submit_form`
    pub fn from_outcome(outcome: &Result<Acknowledgement>) -> Self {
        match outcome {
            Ok(_) => Self::success(
                "Tool Submitted Successfully!",
                "Thank you for your submission. We'll review it and add it to our directory soon.",
            ),
            Err(HubError::MissingFields(_)) => Self::failure(
                "Missing Required Fields",
                "Please fill in all required fields marked with *",
            ),
            Err(err @ HubError::InvalidField { .. }) => Self::failure("Invalid Field", err.to_string()),
            Err(_) => Self::failure("Submission Failed", "Something went wrong. Please try again later."),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Validate and submit a form; on success the form is cleared
pub async fn submit_form(
    form: &mut SubmissionForm,
    catalog: &Catalog,
    submitter: &dyn Submitter,
) -> Result<Acknowledgement> {
    let submission = form.validate(catalog).inspect_err(|e| warn!("Submission rejected: {}", e))?;
    info!("Submitting tool: {}", submission.name);
    let ack = submitter.submit(&submission).await?;
    form.reset();
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        SubmissionForm {
            name: "Perplexity".to_string(),
            description: "Answer engine".to_string(),
            category: "chatbots".to_string(),
            website: "https://perplexity.ai".to_string(),
            pricing: "free".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_form_success_resets_form() {
        let catalog = Catalog::builtin().unwrap();
        let mut form = filled();
        let outcome = submit_form(&mut form, &catalog, &SimulatedSubmitter::new(0)).await;
        assert!(outcome.is_ok());
        assert_eq!(form, SubmissionForm::default());
        assert!(Notification::from_outcome(&outcome).is_success());
    }

    #[tokio::test]
    async fn test_submit_form_missing_keeps_form() {
        let catalog = Catalog::builtin().unwrap();
        let mut form = filled();
        form.description.clear();
        let outcome = submit_form(&mut form, &catalog, &SimulatedSubmitter::new(0)).await;
        assert!(matches!(outcome, Err(HubError::MissingFields(_))));
        assert_eq!(form.name, "Perplexity");

        let note = Notification::from_outcome(&outcome);
        assert_eq!(note.kind, NotificationKind::Failure);
        assert_eq!(note.title, "Missing Required Fields");
    }

    #[tokio::test]
    async fn test_submit_form_rejection_is_generic_failure() {
        let catalog = Catalog::builtin().unwrap();
        let mut form = filled();
        let outcome = submit_form(&mut form, &catalog, &MockSubmitter::rejecting("boom")).await;
        assert!(matches!(outcome, Err(HubError::SubmissionFailed(_))));
        assert_eq!(form.name, "Perplexity");
        assert_eq!(Notification::from_outcome(&outcome).title, "Submission Failed");
    }
}
