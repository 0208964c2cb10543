use super::summary::SubmittedSummary;
use super::view_model::ContactFormViewModel;
use crate::shared::components::ui::{TextAreaField, TextField};
use contracts::domain::a001_contact_form::metadata::{FIELDS, FORM_TITLE};
use contracts::shared::metadata::FieldMetadata;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let vm = ContactFormViewModel::new();

    let fields = FIELDS
        .iter()
        .map(|meta| field_view(vm, meta))
        .collect_view();

    let submitted = vm.submitted();

    view! {
        <div class="details-container contact-form">
            <div class="details-header">
                <h1>{FORM_TITLE}</h1>
            </div>

            <form
                class="details-form"
                novalidate=true
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                {fields}

                <div class="details-actions">
                    <button type="submit" class="button button--primary">
                        "Submit"
                    </button>
                </div>
            </form>

            {move || submitted.get().map(|snapshot| view! { <SubmittedSummary snapshot=snapshot /> })}
        </div>
    }
}

fn field_view(vm: ContactFormViewModel, meta: &'static FieldMetadata) -> AnyView {
    let field = meta.name;
    let on_input = Callback::new(move |value: String| vm.input_command(field, value));
    let on_blur = Callback::new(move |_: ()| vm.blur_command(field));

    if meta.ui.multiline {
        view! {
            <TextAreaField
                label=meta.ui.label
                id=meta.ui.element_id
                value=vm.value(field)
                error=vm.error(field)
                on_input=on_input
                on_blur=on_blur
            />
        }
        .into_any()
    } else {
        view! {
            <TextField
                label=meta.ui.label
                id=meta.ui.element_id
                input_type=meta.ui.input_type
                value=vm.value(field)
                error=vm.error(field)
                on_input=on_input
                on_blur=on_blur
                required=meta.validation.is_required()
            />
        }
        .into_any()
    }
}
