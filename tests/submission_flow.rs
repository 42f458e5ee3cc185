//! Submission workflow integration tests

use toolhub::catalog::Catalog;
use toolhub::error::{HubError, Result};
use toolhub::submission::{
    DEFAULT_MAX_TAGS, MockSubmitter, Notification, SimulatedSubmitter, SubmissionForm, submit_form,
};

fn filled_form() -> SubmissionForm {
    SubmissionForm {
        name: "  Perplexity ".to_string(),
        description: "Answer engine".to_string(),
        category: "chatbots".to_string(),
        website: "https://perplexity.ai".to_string(),
        pricing: "freemium".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_successful_submission_acknowledges_and_clears() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut form = filled_form();
    assert!(form.add_tag("search", DEFAULT_MAX_TAGS));

    let ack = submit_form(&mut form, &catalog, &SimulatedSubmitter::new(0)).await?;
    assert_eq!(ack.name, "Perplexity");
    assert!(ack.reference.starts_with("sub-"));
    assert_eq!(form, SubmissionForm::default());
    Ok(())
}

#[tokio::test]
async fn test_missing_fields_are_all_reported() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut form = SubmissionForm {
        name: "Half done".to_string(),
        ..Default::default()
    };

    let outcome = submit_form(&mut form, &catalog, &SimulatedSubmitter::new(0)).await;
    match &outcome {
        Err(HubError::MissingFields(fields)) => {
            assert_eq!(fields, &vec!["description", "category", "website", "pricing"]);
        }
        other => panic!("Expected MissingFields, got {:?}", other),
    }
    assert_eq!(form.name, "Half done");
    assert_eq!(Notification::from_outcome(&outcome).title, "Missing Required Fields");
    Ok(())
}

#[tokio::test]
async fn test_unknown_category_is_invalid() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut form = SubmissionForm {
        category: "robots".to_string(),
        ..filled_form()
    };
    let err = submit_form(&mut form, &catalog, &SimulatedSubmitter::new(0)).await.unwrap_err();
    assert!(matches!(err, HubError::InvalidField { field: "category", .. }));
    Ok(())
}

#[tokio::test]
async fn test_rejected_submission_keeps_form() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut form = filled_form();
    let outcome = submit_form(&mut form, &catalog, &MockSubmitter::rejecting("offline")).await;
    assert!(matches!(outcome, Err(HubError::SubmissionFailed(_))));
    assert_eq!(form, filled_form());

    let notification = Notification::from_outcome(&outcome);
    assert!(!notification.is_success());
    assert_eq!(notification.title, "Submission Failed");
    Ok(())
}

#[test]
fn test_tag_limit() {
    let mut form = SubmissionForm::default();
    for i in 0..DEFAULT_MAX_TAGS {
        assert!(form.add_tag(&format!("tag{}", i), DEFAULT_MAX_TAGS));
    }
    assert!(!form.add_tag("one-too-many", DEFAULT_MAX_TAGS));
    assert_eq!(form.tags.len(), DEFAULT_MAX_TAGS);
}
