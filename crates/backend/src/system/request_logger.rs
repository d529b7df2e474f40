use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Простой middleware для логирования запросов
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    if status.is_server_error() {
        tracing::warn!("{} {} {} {}ms", status.as_u16(), method, uri.path(), elapsed_ms);
    } else {
        tracing::info!("{} {} {} {}ms", status.as_u16(), method, uri.path(), elapsed_ms);
    }

    response
}
