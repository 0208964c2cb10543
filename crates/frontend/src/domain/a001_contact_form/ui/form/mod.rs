//! Contact Form UI Module
//!
//! MVVM split:
//! - view_model.rs: ViewModel wrapping the form state machine in a signal
//! - view.rs: Leptos component (pure UI)
//! - summary.rs: read-only display of the last accepted submit

mod summary;
mod view;
mod view_model;

pub use summary::SubmittedSummary;
pub use view::ContactForm;
pub use view_model::ContactFormViewModel;
