use leptos::prelude::*;

/// Textarea with label and validation message
#[component]
pub fn TextAreaField(
    /// Label text, bound to the textarea through `for`
    #[prop(into)]
    label: String,
    /// ID for the textarea element
    #[prop(into)]
    id: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Validation message; rendered as "Error: ..." when present
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <textarea
                id=id
                class="form__textarea"
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            {move || error.get().map(|e| view! {
                <p class="form__error">{format!("Error: {}", e)}</p>
            })}
        </div>
    }
}
