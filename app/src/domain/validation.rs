//! Presence validation for entry forms.
//!
//! Only emptiness is checked. Whether a number parses or an id exists in
//! the reference lists is left to conversion and the server.

use super::forms::EntryForm;
use crate::config::ValidationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub field: &'static str,
    pub error: Option<String>,
}

/// Outcome of validating one form, one entry per required field.
///
/// The default value has no entries and counts as valid; it is what the
/// controller shows before the first submit and after a successful save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    fields: Vec<FieldValidation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error.is_none())
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .and_then(|f| f.error.as_deref())
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.error.is_some())
            .map(|f| f.field)
            .collect()
    }

    pub fn fields(&self) -> &[FieldValidation] {
        &self.fields
    }
}

/// Check that every required field of `form` has a value
pub fn validate<F: EntryForm>(form: &F, config: &ValidationConfig) -> ValidationResult {
    let fields = form
        .fields()
        .into_iter()
        .map(|field| {
            let value = if config.trim_whitespace {
                field.value.trim()
            } else {
                field.value
            };
            FieldValidation {
                field: field.key,
                error: value
                    .is_empty()
                    .then(|| config.required_message_for(field.label)),
            }
        })
        .collect();

    ValidationResult { fields }
}
