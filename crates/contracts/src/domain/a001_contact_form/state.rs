use super::validation::{validate, ErrorMap};
use super::{ContactFormDto, FieldName, SubmittedSnapshot};
use std::collections::BTreeSet;

/// State of one contact form instance.
///
/// Errors are recomputed from the values after every change. A field shows
/// its error only once it is touched (edited or blurred); a submit attempt
/// touches every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormState {
    values: ContactFormDto,
    errors: ErrorMap,
    touched: BTreeSet<FieldName>,
    submitted: Option<SubmittedSnapshot>,
}

impl ContactFormState {
    pub fn new() -> Self {
        let values = ContactFormDto::default();
        Self {
            errors: validate(&values),
            values,
            touched: BTreeSet::new(),
            submitted: None,
        }
    }

    pub fn values(&self) -> &ContactFormDto {
        &self.values
    }

    /// Errors of all fields, touched or not
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&SubmittedSnapshot> {
        self.submitted.as_ref()
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display for `field`, if it is touched and invalid
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Errors to display, in form order
    pub fn visible_errors(&self) -> Vec<(FieldName, &str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.is_touched(*field))
            .collect()
    }

    /// Apply an edit of one field.
    pub fn set_field(&mut self, field: FieldName, value: String) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.errors = validate(&self.values);
    }

    /// Mark a field as touched without changing it (focus left the control).
    pub fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
    }

    /// Try to submit the current values.
    ///
    /// On success the previous snapshot is replaced by a fresh copy of the
    /// values. On failure the snapshot is left as it was and the current
    /// errors are returned.
    pub fn submit(&mut self) -> Result<SubmittedSnapshot, ErrorMap> {
        self.touched.extend(FieldName::ALL);
        self.errors = validate(&self.values);

        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        let snapshot = SubmittedSnapshot::from(&self.values);
        self.submitted = Some(snapshot.clone());
        Ok(snapshot)
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}
