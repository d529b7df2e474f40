use axum::{http::StatusCode, Json};
use contracts::domain::a002_finding::{FindingDto, FindingRecord};
use contracts::shared::reference_data::ReferenceData;
use serde_json::json;

use crate::domain::a002_finding;
use crate::shared::error::{AppResult, MSG_INSERT_OK};

/// GET /api/reference
pub async fn reference() -> Json<ReferenceData> {
    Json(a002_finding::service::reference().clone())
}

/// GET /api/finding
pub async fn list_all() -> AppResult<Json<Vec<FindingRecord>>> {
    a002_finding::service::list_all().await.map(Json)
}

/// POST /api/finding
pub async fn create(
    Json(dto): Json<FindingDto>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let record = a002_finding::service::create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": MSG_INSERT_OK, "record": record })),
    ))
}
