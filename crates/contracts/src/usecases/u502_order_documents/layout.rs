//! Renderer-independent content of a generated document.
//!
//! The layout carries only text: labels, table rows and total lines. Page
//! geometry and pagination belong to the renderer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DocumentKind, DocumentRequest, DocumentRequestError};
use crate::shared::format::{format_money, format_percent};
use crate::usecases::u501_compute_order::{
    advance::clamp_percent, compute_advance, summarize, CurrencyTotal, OrderError, OrderLine,
    OrderSummary,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledField {
    pub label: String,
    pub value: String,
}

impl LabeledField {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: if value.trim().is_empty() {
                "-".to_string()
            } else {
                value.to_string()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub kind: DocumentKind,
    pub title: String,
    /// Generation date, `dd.mm.yyyy`.
    pub date: String,
    pub file_name: String,
    pub client_block: Vec<LabeledField>,
    pub delivery_block: Vec<LabeledField>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_lines: Vec<String>,
}

/// Validate the request, price it and lay it out for `kind`.
pub fn build_layout(
    kind: DocumentKind,
    request: &DocumentRequest,
    date: NaiveDate,
) -> Result<DocumentLayout, DocumentRequestError> {
    request.validate()?;
    let summary = summarize(request.to_lines()?)?;

    let client = request.client.normalized();
    let client_block = vec![
        LabeledField::new("Denumire firmă", &client.company_name),
        LabeledField::new("Adresă", &client.address),
        LabeledField::new("CUI", &client.cui),
        LabeledField::new("Banca", &client.bank),
        LabeledField::new("IBAN", &client.iban),
    ];

    let delivery = request.delivery.trimmed();
    let delivery_block = vec![
        LabeledField::new("Adresă de livrare", &delivery.address),
        LabeledField::new("Persoană de contact", &delivery.contact_name),
        LabeledField::new("E-mail", &delivery.email),
        LabeledField::new("Telefon", &delivery.phone),
    ];

    let (columns, rows, total_lines) = match kind {
        DocumentKind::OrderNote => order_note_table(&summary),
        DocumentKind::ProForma => proforma_table(&summary, request.advance_percent)?,
    };

    Ok(DocumentLayout {
        kind,
        title: kind.title().to_string(),
        date: date.format("%d.%m.%Y").to_string(),
        file_name: kind.file_name(date),
        client_block,
        delivery_block,
        columns: columns.into_iter().map(str::to_string).collect(),
        rows,
        total_lines,
    })
}

fn unit_price(line: &OrderLine) -> String {
    format!("{} {}", format_money(line.unit_price), line.currency)
}

fn order_note_table(summary: &OrderSummary) -> (Vec<&'static str>, Vec<Vec<String>>, Vec<String>) {
    let columns = vec!["Produs", "Cant.", "Preț unitar", "TVA", "Total"];
    let rows = summary
        .lines
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.quantity.to_string(),
                unit_price(l),
                l.vat_label(),
                format!("{} {}", format_money(l.gross), l.currency),
            ]
        })
        .collect();
    let totals = summary
        .totals
        .iter()
        .map(|t| format!("Total {}: {}", t.currency, format_money(t.gross)))
        .collect();
    (columns, rows, totals)
}

fn proforma_table(
    summary: &OrderSummary,
    advance_percent: Option<Decimal>,
) -> Result<(Vec<&'static str>, Vec<Vec<String>>, Vec<String>), OrderError> {
    let columns = vec![
        "Produs",
        "Cant.",
        "Preț unitar",
        "TVA",
        "Valoare fără TVA",
        "Valoare TVA",
        "Total",
    ];
    let rows = summary
        .lines
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.quantity.to_string(),
                unit_price(l),
                l.vat_label(),
                format_money(l.net),
                format_money(l.vat),
                format_money(l.gross),
            ]
        })
        .collect();

    let mut totals: Vec<String> = summary.totals.iter().map(proforma_total_line).collect();

    if let Some(percent) = advance_percent.filter(|p| *p > Decimal::ZERO) {
        for a in compute_advance(&summary.totals, percent)? {
            totals.push(format!(
                "Avans {} {}: {}",
                format_percent(clamp_percent(percent)),
                a.currency,
                format_money(a.advance)
            ));
            totals.push(format!(
                "Rest de plată {}: {}",
                a.currency,
                format_money(a.remainder)
            ));
        }
    }
    Ok((columns, rows, totals))
}

fn proforma_total_line(t: &CurrencyTotal) -> String {
    format!(
        "Total {}: fără TVA {} | TVA {} | cu TVA {}",
        t.currency,
        format_money(t.net),
        format_money(t.vat),
        format_money(t.gross)
    )
}
