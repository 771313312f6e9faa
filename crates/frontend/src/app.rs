use crate::usecases::u503_order_form::view::OrderFormPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <OrderFormPage />
        </main>
    }
}
