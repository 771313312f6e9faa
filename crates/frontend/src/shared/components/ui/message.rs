use contracts::usecases::u503_order_form::FormMessage;
use leptos::prelude::*;

/// Inline status line ("✅ ..." / "⚠ ..."); renders nothing when empty.
#[component]
pub fn StatusMessage(#[prop(into)] message: Signal<Option<FormMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let class = if m.is_ok() {
                "status status--ok"
            } else {
                "status status--warn"
            };
            view! { <p class=class>{m.display()}</p> }
        })
    }
}
