use regex_lite::Regex;
use std::sync::OnceLock;

use crate::app::domain::FieldId;

/// Per-field validation state. Fields start untouched; blur or a submit
/// attempt moves them to valid/invalid, and editing clears an error without
/// revalidating until the next blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Validate one field's raw input. Rules apply in order and the first
/// failure wins. All three contact fields are required.
pub fn validate(field: FieldId, raw: &str) -> FieldState {
    let value = raw.trim();

    if value.is_empty() {
        return FieldState::Invalid("This field is required.".to_string());
    }

    match field {
        FieldId::Email => {
            if !email_regex().is_match(value) {
                return FieldState::Invalid("Please enter a valid email address.".to_string());
            }
        }
        FieldId::Name => {
            if value.chars().count() < 2 {
                return FieldState::Invalid("Name must be at least 2 characters long.".to_string());
            }
        }
        FieldId::Message => {
            if value.chars().count() < 10 {
                return FieldState::Invalid(
                    "Message must be at least 10 characters long.".to_string(),
                );
            }
        }
    }

    FieldState::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty() {
        for field in FieldId::ALL {
            let state = validate(field, "   ");
            assert_eq!(state.message(), Some("This field is required."));
        }
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(FieldId::Email, "not-an-email").message(),
            Some("Please enter a valid email address."));
        assert_eq!(validate(FieldId::Email, "a b@c.co").message(),
            Some("Please enter a valid email address."));
        assert_eq!(validate(FieldId::Email, "a@b@c.co").message(),
            Some("Please enter a valid email address."));
        assert_eq!(validate(FieldId::Email, "a@b.co"), FieldState::Valid);
        assert_eq!(validate(FieldId::Email, "  a@b.co  "), FieldState::Valid);
    }

    #[test]
    fn test_name_length() {
        assert_eq!(validate(FieldId::Name, "A").message(),
            Some("Name must be at least 2 characters long."));
        assert_eq!(validate(FieldId::Name, "Al"), FieldState::Valid);
        // Multibyte names count by characters, not bytes
        assert_eq!(validate(FieldId::Name, "Ål"), FieldState::Valid);
    }

    #[test]
    fn test_message_length() {
        assert_eq!(validate(FieldId::Message, "too short").message(),
            Some("Message must be at least 10 characters long."));
        assert_eq!(validate(FieldId::Message, "long enough now"), FieldState::Valid);
    }

    #[test]
    fn test_valid_clears_message() {
        let invalid = validate(FieldId::Name, "");
        assert!(invalid.message().is_some());
        let valid = validate(FieldId::Name, "Ada");
        assert_eq!(valid.message(), None);
    }
}
