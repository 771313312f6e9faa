use leptos::prelude::*;

/// Labeled select. An empty value stands for "nothing chosen" and is shown
/// as the `placeholder` option.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="form__group">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, lbl)| (val.clone(), lbl.clone())
                    children=move |(val, lbl)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {lbl}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
