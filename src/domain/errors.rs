//! Validation errors for contact submissions.
//!
//! Each variant's `Display` text is the message shown to the user on the
//! creation form.

use std::fmt;
use thiserror::Error;

/// A field of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
}

impl Field {
    /// Human-readable label used as the subject of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::PhoneNumber => "Phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reason a contact submission was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The trimmed value was empty.
    #[error("{0} is required.")]
    RequiredField(Field),

    /// The trimmed value was longer than allowed.
    #[error("{field} must be {max} characters or less.")]
    LengthExceeded { field: Field, max: usize },

    /// The trimmed value contained a non-alphabetic character.
    #[error("{0} must only contain alphabetic characters.")]
    InvalidCharacter(Field),

    /// The value did not contain a `###-###-####` phone number.
    #[error("Phone numbers must be formatted as ###-###-####")]
    Format(Field),

    /// Another contact already has the same first and last name.
    #[error("That name already exists. Please choose another")]
    DuplicateContact,
}

impl ValidationError {
    /// The form field this error is about, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::RequiredField(field)
            | Self::LengthExceeded { field, .. }
            | Self::InvalidCharacter(field)
            | Self::Format(field) => Some(*field),
            Self::DuplicateContact => None,
        }
    }
}
