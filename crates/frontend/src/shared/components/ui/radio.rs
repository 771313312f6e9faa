use leptos::prelude::*;

/// Horizontal group of radio buttons sharing one `name`.
#[component]
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, label) tuples
    options: Vec<(String, String)>,
) -> impl IntoView {
    let items = options
        .into_iter()
        .map(|(val, lbl)| {
            let current = val.clone();
            let picked = val.clone();
            view! {
                <label class="form__radio">
                    <input
                        type="radio"
                        name=name.clone()
                        value=val
                        prop:checked=move || value.get() == current
                        on:change=move |_| on_change.run(picked.clone())
                    />
                    <span>{lbl}</span>
                </label>
            }
        })
        .collect_view();

    view! { <div class="form__radio-group">{items}</div> }
}
