use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    OrderNote,
    #[serde(rename = "proforma")]
    ProForma,
}

impl DocumentKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::OrderNote => "Notă de comandă",
            DocumentKind::ProForma => "Factură proformă",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            DocumentKind::OrderNote => "comanda",
            DocumentKind::ProForma => "proforma",
        }
    }

    /// Download name, fixed by document type and date.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.pdf", self.file_stem(), date.format("%Y-%m-%d"))
    }

    /// Backend endpoint generating this document.
    pub fn api_path(&self) -> &'static str {
        match self {
            DocumentKind::OrderNote => "/api/documents/order-note",
            DocumentKind::ProForma => "/api/documents/proforma",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(DocumentKind::OrderNote.file_name(date), "comanda_2026-03-07.pdf");
        assert_eq!(DocumentKind::ProForma.file_name(date), "proforma_2026-03-07.pdf");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::OrderNote).unwrap(),
            "\"order-note\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentKind::ProForma).unwrap(),
            "\"proforma\""
        );
    }
}
