use contracts::domain::a001_contact_form::metadata::field;
use contracts::domain::a001_contact_form::{FieldName, SubmittedSnapshot};
use leptos::prelude::*;

/// Read-only view of a submitted snapshot.
/// The message line is rendered only when a message was submitted.
#[component]
pub fn SubmittedSummary(snapshot: SubmittedSnapshot) -> impl IntoView {
    let SubmittedSnapshot {
        first_name,
        last_name,
        email,
        message,
    } = snapshot;

    view! {
        <div class="details-container contact-form__summary">
            <h2>"You Submitted:"</h2>
            {summary_line(FieldName::FirstName, first_name)}
            {summary_line(FieldName::LastName, last_name)}
            {summary_line(FieldName::Email, email)}
            {message.map(|m| summary_line(FieldName::Message, m))}
        </div>
    }
}

fn summary_line(name: FieldName, value: String) -> impl IntoView {
    let ui = field(name).ui;
    view! {
        <p data-testid=ui.display_test_id>
            <b>{ui.display_caption}": "</b>
            {value}
        </p>
    }
}
