//! Validation rules for metadata fields

use crate::domain::a001_contact_form::validation::is_valid_email;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    /// Value must be shaped `local@domain.tld`
    pub email: bool,
    /// Message reported for any failed rule of this field
    pub message: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            email: false,
            message: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            min_length: None,
            email: false,
            message: Some(message),
        }
    }

    pub const fn with_min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn with_email(self) -> Self {
        Self { email: true, ..self }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Rules are checked in order required, min length, email shape; the
    /// first failure reports the field's message.
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        let message = self.message.unwrap_or("invalid value");

        if self.required && value.trim().is_empty() {
            return Err(message.to_string());
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(message.to_string());
            }
        }

        if self.email && !is_valid_email(value) {
            return Err(message.to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accepts_anything() {
        let rules = ValidationRules::none();
        assert!(!rules.is_required());
        assert_eq!(rules.validate_string(""), Ok(()));
        assert_eq!(rules.validate_string("   "), Ok(()));
    }

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required("x is required");
        assert_eq!(rules.validate_string(""), Err("x is required".to_string()));
        assert_eq!(rules.validate_string("  "), Err("x is required".to_string()));
        assert_eq!(rules.validate_string("a"), Ok(()));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required("too short").with_min_length(5);
        assert!(rules.validate_string("abcd").is_err());
        assert!(rules.validate_string("abcde").is_ok());
        // five chars, more than five bytes
        assert!(rules.validate_string("Жанна").is_ok());
    }

    #[test]
    fn test_email_rule() {
        let rules = ValidationRules::required("bad email").with_email();
        assert!(rules.validate_string("").is_err());
        assert!(rules.validate_string("ahhhh").is_err());
        assert!(rules.validate_string("foo@foo.com").is_ok());
    }
}
