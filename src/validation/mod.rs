//! Validation pipeline for new contact submissions.
//!
//! The pipeline is an ordered list of pure field checks followed by the
//! duplicate-name check against the existing contacts. Every check runs;
//! messages accumulate in pipeline order with the duplicate message last.

use crate::domain::{validate_name, validate_phone, Field, ValidationError};
use crate::models::{Contact, NewContactForm};

/// A single field check over the raw submission.
pub type FieldCheck = fn(&NewContactForm) -> Vec<ValidationError>;

fn check_first_name(form: &NewContactForm) -> Vec<ValidationError> {
    validate_name(&form.first_name, Field::FirstName)
}

fn check_last_name(form: &NewContactForm) -> Vec<ValidationError> {
    validate_name(&form.last_name, Field::LastName)
}

fn check_phone_number(form: &NewContactForm) -> Vec<ValidationError> {
    validate_phone(&form.phone_number)
}

/// Field checks in the order their messages are reported.
pub const FIELD_CHECKS: [FieldCheck; 3] = [check_first_name, check_last_name, check_phone_number];

/// Run every field check and collect the errors.
pub fn check_fields(form: &NewContactForm) -> Vec<ValidationError> {
    FIELD_CHECKS.iter().flat_map(|check| check(form)).collect()
}

/// Reject a name pair already present among `existing`.
///
/// Uses the raw submitted values, so " Mike" does not collide with "Mike".
pub fn check_duplicate(form: &NewContactForm, existing: &[Contact]) -> Option<ValidationError> {
    existing
        .iter()
        .any(|contact| contact.has_name(&form.first_name, &form.last_name))
        .then_some(ValidationError::DuplicateContact)
}

/// Outcome of running the full pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Whether the submission may be admitted.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in reporting order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// User-facing messages in reporting order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Run the whole pipeline against the current contacts.
pub fn validate_submission(form: &NewContactForm, existing: &[Contact]) -> ValidationReport {
    let mut errors = check_fields(form);
    errors.extend(check_duplicate(form, existing));
    ValidationReport { errors }
}
