//! Field metadata for the contact form

use super::FieldName;
use crate::shared::metadata::{FieldMetadata, FieldUiMetadata, ValidationRules};

pub const FIRST_NAME_MIN_LENGTH: usize = 5;

pub const FIRST_NAME_ERROR: &str = "firstName must have at least 5 characters.";
pub const LAST_NAME_ERROR: &str = "lastName is a required field.";
// Also reported for an empty email: there is no separate "required" message.
pub const EMAIL_ERROR: &str = "email must be a valid email address.";

/// Form header text
pub const FORM_TITLE: &str = "Contact Form";

/// Field metadata array, in form order
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: FieldName::FirstName,
        ui: FieldUiMetadata {
            label: "First Name*",
            element_id: "firstName",
            input_type: "text",
            multiline: false,
            display_caption: "First Name",
            display_test_id: "firstnameDisplay",
        },
        validation: ValidationRules::required(FIRST_NAME_ERROR)
            .with_min_length(FIRST_NAME_MIN_LENGTH),
    },
    FieldMetadata {
        name: FieldName::LastName,
        ui: FieldUiMetadata {
            label: "Last Name*",
            element_id: "lastName",
            input_type: "text",
            multiline: false,
            display_caption: "Last Name",
            display_test_id: "lastnameDisplay",
        },
        validation: ValidationRules::required(LAST_NAME_ERROR),
    },
    FieldMetadata {
        name: FieldName::Email,
        ui: FieldUiMetadata {
            label: "Email*",
            element_id: "email",
            input_type: "email",
            multiline: false,
            display_caption: "Email",
            display_test_id: "emailDisplay",
        },
        validation: ValidationRules::required(EMAIL_ERROR).with_email(),
    },
    FieldMetadata {
        name: FieldName::Message,
        ui: FieldUiMetadata {
            label: "Message",
            element_id: "message",
            input_type: "text",
            multiline: true,
            display_caption: "Message",
            display_test_id: "messageDisplay",
        },
        validation: ValidationRules::none(),
    },
];

/// Look up the metadata of a field
pub fn field(name: FieldName) -> &'static FieldMetadata {
    match name {
        FieldName::FirstName => &FIELDS[0],
        FieldName::LastName => &FIELDS[1],
        FieldName::Email => &FIELDS[2],
        FieldName::Message => &FIELDS[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_in_form_order() {
        let names: Vec<_> = FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
        for name in FieldName::ALL {
            assert_eq!(field(name).name, name);
        }
    }

    #[test]
    fn test_only_message_is_optional() {
        let optional: Vec<_> = FIELDS
            .iter()
            .filter(|f| !f.validation.is_required())
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec![FieldName::Message]);
    }

    #[test]
    fn test_display_ids_are_distinct() {
        let mut ids: Vec<_> = FIELDS.iter().map(|f| f.ui.display_test_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FIELDS.len());
    }
}
