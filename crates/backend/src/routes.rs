use axum::http::{header, Method};
use axum::middleware;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::resolve_path;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// All application routes, with the frontend bundle as fallback.
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = resolve_path(&state.config.server.static_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_DISPOSITION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A002 Product catalog
        .route("/api/catalog", get(handlers::a002_product::list_catalog))
        // U502 Order documents
        .route(
            "/api/documents/order-note",
            post(handlers::u502_order_documents::order_note),
        )
        .route(
            "/api/documents/proforma",
            post(handlers::u502_order_documents::proforma),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
