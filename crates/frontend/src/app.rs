use crate::domain::a001_contact_form::ui::form::ContactForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <ContactForm />
        </main>
    }
}
