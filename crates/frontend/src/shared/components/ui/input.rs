use leptos::prelude::*;

/// Labeled text input bound to a signal.
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "email", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Hint for the on-screen keyboard, e.g. "numeric" or "decimal"
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <label class="form__group">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type=input_t
                inputmode=move || inputmode.get()
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
