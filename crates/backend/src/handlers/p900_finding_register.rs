use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use contracts::projections::p900_finding_register::csv::CSV_CONTENT_TYPE;
use serde::Deserialize;

use crate::projections::p900_finding_register::service;
use crate::shared::error::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub user: Option<String>,
}

/// GET /api/finding/export?date_from=&date_to=&user=
pub async fn export_csv(Query(params): Query<ExportParams>) -> AppResult<Response> {
    let filter = service::build_filter(
        params.date_from.as_deref(),
        params.date_to.as_deref(),
        params.user.as_deref(),
    )?;
    let export = service::export_csv(filter).await?;

    let disposition = format!("attachment; filename=\"{}\"", export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}
