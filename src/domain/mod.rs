//! Field rules for contact submissions.
//!
//! Each rule takes a raw form value, trims it, and returns the errors it
//! finds. Rules never short-circuit each other; only a required-field
//! failure suppresses the remaining checks for that same field.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{Field, ValidationError};
pub use name::{validate_name, MAX_NAME_LENGTH};
pub use phone::{contains_phone_pattern, validate_phone};

/// Strip leading and trailing whitespace, including the byte order mark.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input("  Pat\t\n"), "Pat");
        assert_eq!(trim_input("\u{FEFF}Pat\u{FEFF}"), "Pat");
        assert_eq!(trim_input("\u{00A0}Pat\u{3000}"), "Pat");
        assert_eq!(trim_input("\u{FEFF}"), "");
        assert_eq!(trim_input("Mary Ann"), "Mary Ann");
    }
}
