//! Generic controlled text inputs with label/error/disabled affordances.
//!
//! Values flow in through a `Signal` and out through an `on_input` callback,
//! so the widgets bind equally to plain `RwSignal`s and to fields living
//! inside a larger state struct.

use leptos::prelude::*;

/// Single-line controlled text input.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let has_error = error.is_some();

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class=("field__input--error", has_error)
                type="text"
                placeholder=placeholder
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {error.map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

/// Multi-line controlled textarea.
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let has_error = error.is_some();

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                class=("field__input--error", has_error)
                placeholder=placeholder
                disabled=disabled
                rows=rows.to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
            {error.map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}
