//! Error types for toolhub
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolhub
#[derive(Debug, Error)]
pub enum HubError {
    /// A tool references a category id that is not in the catalog
    #[error("Tool '{tool}' references unknown category '{category}'")]
    UnknownCategory { tool: String, category: String },

    /// Two records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// Tool lookup failed
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// One or more required submission fields are empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A submission field has a value that cannot be accepted
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The simulated submission step rejected
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Opening a link in the system browser failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for toolhub operations
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_error() {
        let err = HubError::UnknownCategory {
            tool: "42".to_string(),
            category: "robots".to_string(),
        };
        assert_eq!(err.to_string(), "Tool '42' references unknown category 'robots'");
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = HubError::DuplicateId {
            kind: "tool",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate tool id: 7");
    }

    #[test]
    fn test_tool_not_found_error() {
        let err = HubError::ToolNotFound("999".to_string());
        assert_eq!(err.to_string(), "Tool not found: 999");
    }

    #[test]
    fn test_missing_fields_error_lists_all() {
        let err = HubError::MissingFields(vec!["name", "website"]);
        assert_eq!(err.to_string(), "Missing required fields: name, website");
    }

    #[test]
    fn test_invalid_field_error() {
        let err = HubError::InvalidField {
            field: "pricing",
            reason: "expected free, freemium or paid".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid pricing: expected free, freemium or paid");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HubError = io_err.into();
        assert!(matches!(err, HubError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: HubError = yaml_err.into();
        assert!(matches!(err, HubError::Yaml(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(HubError::ToolNotFound("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
