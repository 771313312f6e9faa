use axum::Json;
use contracts::domain::a002_product::{catalog, ProductLine};

/// GET /api/catalog
pub async fn list_catalog() -> Json<Vec<ProductLine>> {
    Json(catalog().to_vec())
}
