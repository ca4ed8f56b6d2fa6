//! Rules for the first and last name fields.

use super::errors::{Field, ValidationError};
use super::trim_input;

/// Longest accepted name, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 25;

/// Check a raw name value.
///
/// The value is trimmed first. An empty name reports only
/// `RequiredField`; otherwise the length and character-class checks both
/// run and each may contribute an error.
pub fn validate_name(raw: &str, field: Field) -> Vec<ValidationError> {
    let name = trim_input(raw);

    if name.is_empty() {
        return vec![ValidationError::RequiredField(field)];
    }

    let mut errors = Vec::new();

    if name.chars().count() > MAX_NAME_LENGTH {
        errors.push(ValidationError::LengthExceeded {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    if !is_alphabetic(name) {
        errors.push(ValidationError::InvalidCharacter(field));
    }

    errors
}

/// ASCII letters only.
fn is_alphabetic(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}
