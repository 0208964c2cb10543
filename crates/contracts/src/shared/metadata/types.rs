//! Core metadata types for form fields

use super::ValidationRules;
use crate::domain::a001_contact_form::FieldName;

/// UI hints for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldUiMetadata {
    /// Text of the `<label>` bound to the control
    pub label: &'static str,
    /// DOM id of the control, referenced by the label's `for`
    pub element_id: &'static str,
    /// `type` attribute for single-line inputs
    pub input_type: &'static str,
    /// Multi-line control instead of an `<input>`
    pub multiline: bool,
    /// Caption used in the submitted summary
    pub display_caption: &'static str,
    /// `data-testid` of the summary line
    pub display_test_id: &'static str,
}

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: FieldName,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value)
    }
}
