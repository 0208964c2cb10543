use contracts::domain::a001_contact_form::{ContactFormState, FieldName, SubmittedSnapshot};
use leptos::prelude::*;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub state: RwSignal<ContactFormState>,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ContactFormState::new()),
        }
    }

    /// Current value of a field
    pub fn value(&self, field: FieldName) -> Memo<String> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.values().get(field).to_string()))
    }

    /// Error shown under a field: only once the field is touched
    pub fn error(&self, field: FieldName) -> Memo<Option<String>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.visible_error(field).map(str::to_string)))
    }

    /// Last accepted submit
    pub fn submitted(&self) -> Memo<Option<SubmittedSnapshot>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.submitted().cloned()))
    }

    pub fn input_command(&self, field: FieldName, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    pub fn blur_command(&self, field: FieldName) {
        // Skip the notification when nothing changes
        self.state.maybe_update(|s| {
            if s.is_touched(field) {
                false
            } else {
                s.touch(field);
                true
            }
        });
    }

    /// Validate and, if there are no errors, replace the submitted snapshot
    pub fn submit_command(&self) {
        self.state.update(|s| match s.submit() {
            Ok(snapshot) => {
                log::info!(
                    "Contact form submitted: {}",
                    serde_json::to_string(&snapshot).unwrap_or_default()
                );
            }
            Err(errors) => {
                log::debug!("Contact form rejected with {} invalid field(s)", errors.len());
            }
        });
    }
}

impl Default for ContactFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
