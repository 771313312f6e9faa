use leptos::prelude::*;

/// Button with a "primary" (default), "secondary" or "danger" variant.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "danger" => "button button--danger",
        _ => "button button--primary",
    };

    view! {
        <button
            type="button"
            class=variant_class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
