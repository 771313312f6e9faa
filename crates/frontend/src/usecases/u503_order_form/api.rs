use chrono::Local;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u502_order_documents::{DocumentKind, DocumentRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub struct DownloadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// POST the request to the document endpoint of `kind` and return the PDF.
/// Errors are user-facing texts.
pub async fn generate_document(
    kind: DocumentKind,
    request: &DocumentRequest,
) -> Result<DownloadedDocument, String> {
    let response = Request::post(&api_url(kind.api_path()))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Serverul nu răspunde: {}", e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<UseCaseError>().await {
            Ok(err) => err.message,
            Err(_) => format!("Eroare server (HTTP {}).", status),
        });
    }

    let file_name = response
        .headers()
        .get("content-disposition")
        .and_then(|v| file_name_from_disposition(&v))
        .unwrap_or_else(|| kind.file_name(Local::now().date_naive()));

    let bytes = response.binary().await.map_err(|e| e.to_string())?;
    Ok(DownloadedDocument { file_name, bytes })
}

/// `attachment; filename="x.pdf"` -> `x.pdf`
fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_disposition() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=\"comanda_2025-10-09.pdf\""),
            Some("comanda_2025-10-09.pdf".to_string())
        );
        assert_eq!(
            file_name_from_disposition("attachment;filename=proforma.pdf"),
            Some("proforma.pdf".to_string())
        );
        assert_eq!(file_name_from_disposition("attachment"), None);
        assert_eq!(file_name_from_disposition("attachment; filename=\"\""), None);
    }
}
