use contracts::domain::a001_client::{ClientField, ClientId};
use contracts::domain::a002_product::{catalog, ProductLine};
use contracts::domain::common::AggregateId;
use contracts::shared::format::{format_money, format_percent};
use contracts::usecases::u502_order_documents::{DeliveryField, DocumentKind};
use contracts::usecases::u503_order_form::{ClientMode, FormCommand};
use leptos::prelude::*;

use super::view_model::OrderFormVm;
use crate::shared::components::ui::{Button, Input, RadioGroup, Select, StatusMessage};

#[component]
pub fn OrderFormPage() -> impl IntoView {
    let vm = OrderFormVm::new();

    view! {
        <div class="order-form">
            <h1>"Comandă"</h1>
            <ClientSection vm=vm />
            <ProductsSection vm=vm />
            <DeliverySection vm=vm />
            <SummarySection vm=vm />
            <DocumentsSection vm=vm />
        </div>
    }
}

fn mode_value(mode: ClientMode) -> &'static str {
    match mode {
        ClientMode::Existing => "existing",
        ClientMode::New => "new",
    }
}

#[component]
fn ClientSection(vm: OrderFormVm) -> impl IntoView {
    let state = vm.state;
    let mode = Signal::derive(move || mode_value(state.with(|s| s.mode)).to_string());
    let is_existing = move || state.with(|s| s.mode == ClientMode::Existing);

    let on_mode = Callback::new(move |value: String| {
        let mode = if value == "new" {
            ClientMode::New
        } else {
            ClientMode::Existing
        };
        vm.dispatch(FormCommand::SetMode(mode));
    });
    let on_select = Callback::new(move |value: String| {
        vm.dispatch(FormCommand::Select(ClientId::from_string(&value).ok()));
    });

    let client_input = move |label: &'static str, field: ClientField| {
        view! {
            <Input
                label=label
                value=vm.client_field(field)
                on_input=Callback::new(move |v| vm.dispatch(FormCommand::EditClient(field, v)))
            />
        }
    };

    view! {
        <section class="card">
            <h2>"Client"</h2>
            <RadioGroup
                name="client-mode"
                value=mode
                on_change=on_mode
                options=vec![
                    ("existing".to_string(), "Client existent".to_string()),
                    ("new".to_string(), "Client nou".to_string()),
                ]
            />

            <Show when=is_existing>
                <div class="form__row">
                    <Select
                        label="Clienți salvați"
                        value=vm.selected_id()
                        on_change=on_select
                        options=vm.picker_options()
                        placeholder="— alege —"
                    />
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| vm.dispatch(FormCommand::LoadClient))
                    >
                        "Încarcă"
                    </Button>
                    <Button
                        variant="danger"
                        on_click=Callback::new(move |_| vm.dispatch(FormCommand::DeleteClient))
                    >
                        "Șterge"
                    </Button>
                </div>
                <StatusMessage message=Signal::derive(move || state.with(|s| s.client_message.clone())) />
            </Show>

            {client_input("Denumire firmă *", ClientField::CompanyName)}
            {client_input("Adresă firmă *", ClientField::Address)}
            {client_input("CUI", ClientField::Cui)}
            {client_input("Banca", ClientField::Bank)}
            {client_input("IBAN", ClientField::Iban)}

            <div class="form__row">
                <Button on_click=Callback::new(move |_| vm.dispatch(FormCommand::SaveClient))>
                    "Salvează client"
                </Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| vm.dispatch(FormCommand::ClearClientForm))
                >
                    "Golește"
                </Button>
            </div>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.save_message.clone())) />
        </section>
    }
}

fn product_label(product: &ProductLine) -> String {
    let vat = match product.vat.note() {
        Some(note) => note.to_string(),
        None => format!("TVA {}", format_percent(product.vat.percent())),
    };
    format!(
        "{} ({} {}, {})",
        product.name,
        format_money(product.unit_price),
        product.currency,
        vat
    )
}

#[component]
fn ProductsSection(vm: OrderFormVm) -> impl IntoView {
    let inputs = catalog()
        .iter()
        .map(|product| {
            let key = product.key;
            view! {
                <Input
                    label=product_label(product)
                    value=vm.quantity(key)
                    inputmode="numeric"
                    placeholder="0"
                    on_input=Callback::new(move |value| {
                        vm.dispatch(FormCommand::EditQuantity { key: key.to_string(), value })
                    })
                />
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h2>"Produse"</h2>
            {inputs}
        </section>
    }
}

#[component]
fn DeliverySection(vm: OrderFormVm) -> impl IntoView {
    let delivery_input = move |label: &'static str, field: DeliveryField, input_type: &'static str| {
        view! {
            <Input
                label=label
                input_type=input_type
                value=vm.delivery_field(field)
                on_input=Callback::new(move |v| vm.dispatch(FormCommand::EditDelivery(field, v)))
            />
        }
    };

    view! {
        <section class="card">
            <h2>"Livrare și contact"</h2>
            {delivery_input("Adresă de livrare", DeliveryField::Address, "text")}
            {delivery_input("Persoană de contact", DeliveryField::ContactName, "text")}
            {delivery_input("E-mail", DeliveryField::Email, "email")}
            {delivery_input("Telefon", DeliveryField::Phone, "tel")}
        </section>
    }
}

#[component]
fn SummarySection(vm: OrderFormVm) -> impl IntoView {
    let preview = vm.preview();
    let advance = vm.advance_preview();

    let body = move || match preview.get() {
        Err(e) => view! { <p class="status status--warn">{format!("⚠ {}", e)}</p> }.into_any(),
        Ok(summary) => {
            let rows = summary
                .lines
                .iter()
                .map(|l| {
                    view! {
                        <tr>
                            <td>{l.name.clone()}</td>
                            <td class="num">{l.quantity}</td>
                            <td class="num">{format!("{} {}", format_money(l.unit_price), l.currency)}</td>
                            <td>{l.vat_label()}</td>
                            <td class="num">{format!("{} {}", format_money(l.gross), l.currency)}</td>
                        </tr>
                    }
                })
                .collect_view();
            let totals = summary
                .totals
                .iter()
                .map(|t| {
                    view! {
                        <p class="total">
                            {format!(
                                "Total {}: fără TVA {} | TVA {} | cu TVA {}",
                                t.currency,
                                format_money(t.net),
                                format_money(t.vat),
                                format_money(t.gross),
                            )}
                        </p>
                    }
                })
                .collect_view();
            view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Produs"</th>
                            <th>"Cant."</th>
                            <th>"Preț unitar"</th>
                            <th>"TVA"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                {totals}
            }
            .into_any()
        }
    };

    let advance_lines = move || {
        advance
            .get()
            .into_iter()
            .map(|a| {
                view! {
                    <p class="total total--advance">
                        {format!(
                            "Avans {}: {} | Rest de plată: {}",
                            a.currency,
                            format_money(a.advance),
                            format_money(a.remainder),
                        )}
                    </p>
                }
            })
            .collect_view()
    };

    view! {
        <section class="card">
            <h2>"Sumar comandă"</h2>
            {body}
            <Input
                label="Avans (%) pentru proformă"
                inputmode="decimal"
                placeholder="0"
                value=Signal::derive(move || vm.state.with(|s| s.advance_percent.clone()))
                on_input=Callback::new(move |v| vm.dispatch(FormCommand::SetAdvancePercent(v)))
            />
            {advance_lines}
        </section>
    }
}

#[component]
fn DocumentsSection(vm: OrderFormVm) -> impl IntoView {
    let state = vm.state;
    let generating = Signal::derive(move || state.with(|s| s.generating));

    view! {
        <section class="card">
            <h2>"Documente"</h2>
            <div class="form__row">
                <Button
                    disabled=generating
                    on_click=Callback::new(move |_| {
                        vm.dispatch(FormCommand::Generate(DocumentKind::OrderNote))
                    })
                >
                    "Generează notă de comandă (PDF)"
                </Button>
                <Button
                    disabled=generating
                    on_click=Callback::new(move |_| {
                        vm.dispatch(FormCommand::Generate(DocumentKind::ProForma))
                    })
                >
                    "Generează proformă (PDF)"
                </Button>
            </div>
            <Show when=move || generating.get()>
                <p class="status">"Se generează documentul..."</p>
            </Show>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.document_message.clone())) />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_label() {
        let labels: Vec<String> = catalog().iter().map(product_label).collect();
        assert_eq!(labels[0], "Module GPS (49,90 EUR, TVA 19%)");
        assert_eq!(labels[2], "Router WI-FI (170,00 RON, TVA inclus)");
    }
}
