use super::metadata::FIELDS;
use super::{ContactFormDto, FieldName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// ErrorMap
// ============================================================================

/// Current per-field validation failures, one message per invalid field.
///
/// Rebuilt from scratch by [`validate`]; iteration follows form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FieldName, message: String) {
        self.0.insert(field, message);
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Validate all fields of the form.
///
/// Every field is checked on its own; the result holds an entry for each
/// field that currently fails its rules and nothing else.
pub fn validate(form: &ContactFormDto) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for meta in FIELDS {
        if let Err(message) = meta.validate(form.get(meta.name)) {
            errors.insert(meta.name, message);
        }
    }
    errors
}

/// Check that `value` is shaped `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    const SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    // labels.len() >= 2 was checked above
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_contact_form::metadata::{EMAIL_ERROR, FIRST_NAME_ERROR, LAST_NAME_ERROR};

    fn form(first: &str, last: &str, email: &str, message: &str) -> ContactFormDto {
        ContactFormDto {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_empty_form_has_three_errors() {
        let errors = validate(&ContactFormDto::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FieldName::FirstName), Some(FIRST_NAME_ERROR));
        assert_eq!(errors.get(FieldName::LastName), Some(LAST_NAME_ERROR));
        assert_eq!(errors.get(FieldName::Email), Some(EMAIL_ERROR));
        assert!(!errors.contains(FieldName::Message));
    }

    #[test]
    fn test_short_first_name() {
        let errors = validate(&form("abcd", "Bob", "a@b.co", ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::FirstName), Some(FIRST_NAME_ERROR));

        assert!(validate(&form("abcde", "Bob", "a@b.co", "")).is_empty());
    }

    #[test]
    fn test_missing_email_only() {
        let errors = validate(&form("Billy", "Bob", "", ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some(EMAIL_ERROR));
    }

    #[test]
    fn test_malformed_email_same_message_as_empty() {
        let malformed = validate(&form("Billy", "Bob", "ahhhh", ""));
        let empty = validate(&form("Billy", "Bob", "", ""));
        assert_eq!(malformed, empty);
    }

    #[test]
    fn test_missing_last_name() {
        let errors = validate(&form("Thomas", "", "foo@foo.com", ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::LastName), Some(LAST_NAME_ERROR));
    }

    #[test]
    fn test_message_never_validated() {
        let long = "x".repeat(10_000);
        assert!(validate(&form("Thomas", "Moore", "foo@foo.com", &long)).is_empty());
        assert!(validate(&form("Thomas", "Moore", "foo@foo.com", "")).is_empty());
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let fields: Vec<_> = validate(&ContactFormDto::default())
            .iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, vec![FieldName::FirstName, FieldName::LastName, FieldName::Email]);
    }

    #[test]
    fn test_is_valid_email() {
        for ok in ["foo@foo.com", "a.b+tag@mail.example.org", "x_y@sub-domain.io"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "ahhhh",
            "@foo.com",
            "foo@",
            "foo@com",
            "foo@foo.c",
            "foo@foo.c0m",
            "foo@@foo.com",
            "foo@bar@foo.com",
            ".foo@foo.com",
            "foo..bar@foo.com",
            "foo@-foo.com",
            "foo@foo..com",
            "foo bar@foo.com",
            " foo@foo.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }
}
