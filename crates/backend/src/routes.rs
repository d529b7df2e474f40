use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Справочники формы
        .route("/api/reference", get(handlers::a002_finding::reference))
        // A001 Part catalog
        .route(
            "/api/part_catalog",
            get(handlers::a001_part_catalog::search),
        )
        // A002 Findings
        .route(
            "/api/finding",
            get(handlers::a002_finding::list_all).post(handlers::a002_finding::create),
        )
        // P900 Finding register export
        .route(
            "/api/finding/export",
            get(handlers::p900_finding_register::export_csv),
        )
        .layer(middleware::from_fn(system::request_logger::log_request))
        .layer(cors)
}
