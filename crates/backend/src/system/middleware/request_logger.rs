use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Logs one console line per request: local time, duration, response size,
/// status, method and path. The body is buffered to measure its real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(parts.status, &method, &path, Some(bytes.len()), start.elapsed());
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {} {}: {}", method, path, e);
            print_line(parts.status, &method, &path, None, start.elapsed());
            Response::from_parts(parts, Body::default())
        }
    }
}

fn print_line(
    status: StatusCode,
    method: &Method,
    path: &str,
    size: Option<usize>,
    elapsed: Duration,
) {
    // cyan for success, yellow otherwise
    let color_code = if status.is_success() { "36" } else { "33" };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}
