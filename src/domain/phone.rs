//! Rule for the phone number field.

use super::errors::{Field, ValidationError};
use super::trim_input;
use once_cell::sync::Lazy;
use regex::Regex;

/// `###-###-####`, matched anywhere in the value (not anchored).
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{3}-[0-9]{3}-[0-9]{4}").expect("Failed to compile phone number regex")
});

/// Whether the value contains a `###-###-####` phone number.
pub fn contains_phone_pattern(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Check a raw phone number value.
///
/// The value is trimmed first. An empty value reports only
/// `RequiredField`. Surrounding text around a well-formed number is
/// accepted.
pub fn validate_phone(raw: &str) -> Vec<ValidationError> {
    let phone = trim_input(raw);

    if phone.is_empty() {
        return vec![ValidationError::RequiredField(Field::PhoneNumber)];
    }

    if !contains_phone_pattern(phone) {
        return vec![ValidationError::Format(Field::PhoneNumber)];
    }

    Vec::new()
}
