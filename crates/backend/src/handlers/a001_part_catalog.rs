use axum::{extract::Query, Json};
use contracts::domain::a001_part_catalog::{PartCatalogEntry, PartCatalogQuery};
use contracts::shared::paging::Page;

use crate::domain::a001_part_catalog;

/// GET /api/part_catalog?q=&page=
pub async fn search(Query(params): Query<PartCatalogQuery>) -> Json<Page<PartCatalogEntry>> {
    let query = params.q.unwrap_or_default();
    let page = params.page.unwrap_or(1);
    Json(a001_part_catalog::service::search(&query, page))
}
