//! Contact form: field values, submitted snapshot, validation and the
//! touched/submitted state machine driven by the form view.

pub mod aggregate;
pub mod metadata;
pub mod state;
pub mod validation;

pub use aggregate::{ContactFormDto, FieldName, SubmittedSnapshot};
pub use state::ContactFormState;
pub use validation::{is_valid_email, validate, ErrorMap};
