//! Submission form fields and validation

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::Pricing;
use crate::error::{HubError, Result};

/// Default cap on the number of tags a submission may carry
pub const DEFAULT_MAX_TAGS: usize = 8;

/// Which field of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Category,
    Pricing,
    Website,
    Tags,
    SubmitterName,
    SubmitterEmail,
}

impl FormField {
    /// Fields in tab order
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Description,
        FormField::Category,
        FormField::Pricing,
        FormField::Website,
        FormField::Tags,
        FormField::SubmitterName,
        FormField::SubmitterEmail,
    ];

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Tool Name *",
            Self::Description => "Description *",
            Self::Category => "Category *",
            Self::Pricing => "Pricing Model *",
            Self::Website => "Website URL *",
            Self::Tags => "Tags (Optional)",
            Self::SubmitterName => "Your Name",
            Self::SubmitterEmail => "Your Email",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Description | Self::Category | Self::Pricing | Self::Website
        )
    }
}

/// Raw form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub name: String,
    pub description: String,
    /// Category id
    pub category: String,
    pub website: String,
    /// Pricing tier as text; parsed on validation
    pub pricing: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub submitter_name: String,
    #[serde(default)]
    pub submitter_email: String,
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedSubmission {
    pub name: String,
    pub description: String,
    pub category: String,
    pub website: String,
    pub pricing: Pricing,
    pub tags: Vec<String>,
    pub submitter_name: Option<String>,
    pub submitter_email: Option<String>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag; returns false when it was empty, a duplicate, or over the limit
    pub fn add_tag(&mut self, raw: &str, max_tags: usize) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) || self.tags.len() >= max_tags {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Text value of a field; tags are joined with ", "
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Description => self.description.clone(),
            FormField::Category => self.category.clone(),
            FormField::Pricing => self.pricing.clone(),
            FormField::Website => self.website.clone(),
            FormField::Tags => self.tags.join(", "),
            FormField::SubmitterName => self.submitter_name.clone(),
            FormField::SubmitterEmail => self.submitter_email.clone(),
        }
    }

    /// Mutable text of a free-text field; `None` for tags
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Category => Some(&mut self.category),
            FormField::Pricing => Some(&mut self.pricing),
            FormField::Website => Some(&mut self.website),
            FormField::Tags => None,
            FormField::SubmitterName => Some(&mut self.submitter_name),
            FormField::SubmitterEmail => Some(&mut self.submitter_email),
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
            ("website", &self.website),
            ("pricing", &self.pricing),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check required fields, pricing and category against the catalog
    pub fn validate(&self, catalog: &Catalog) -> Result<ValidatedSubmission> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(HubError::MissingFields(missing));
        }

        let pricing = Pricing::parse(&self.pricing).ok_or_else(|| HubError::InvalidField {
            field: "pricing",
            reason: format!("'{}' is not one of free, freemium, paid", self.pricing.trim()),
        })?;

        let category = self.category.trim();
        if !catalog.has_category(category) {
            return Err(HubError::InvalidField {
                field: "category",
                reason: format!("'{}' is not a known category", category),
            });
        }

        Ok(ValidatedSubmission {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: category.to_string(),
            website: self.website.trim().to_string(),
            pricing,
            tags: self.tags.clone(),
            submitter_name: non_empty(&self.submitter_name),
            submitter_email: non_empty(&self.submitter_email),
        })
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
