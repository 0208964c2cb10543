//! Compile-time metadata describing form fields
//!
//! Every field of a form is described by a `'static` [`FieldMetadata`]
//! constant: how it is labelled and rendered, and which [`ValidationRules`]
//! apply to it. Views and validators read the same constants, so a label or
//! rule only ever lives in one place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_contact_form::metadata::FIELDS;
//!
//! for field in FIELDS {
//!     println!("{}: {}", field.name.as_str(), field.ui.label);
//! }
//! ```

mod types;
mod validation;

pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
