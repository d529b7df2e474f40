use chrono::{NaiveDate, Utc};
use contracts::domain::a002_finding::FindingRecord;
use contracts::projections::p900_finding_register::csv::{export_file_name, format_csv};
use contracts::projections::p900_finding_register::{apply, RecordFilter};

use crate::domain::a002_finding;
use crate::shared::error::{AppError, AppResult};

/// Готовый файл выгрузки
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
    pub rows: usize,
}

/// Разбор `YYYY-MM-DD`; пустая строка означает отсутствие фильтра
pub fn parse_date_param(name: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| AppError::Validation(format!("{}: invalid date '{}': {}", name, v, e))),
    }
}

pub fn build_filter(
    date_from: Option<&str>,
    date_to: Option<&str>,
    user: Option<&str>,
) -> AppResult<RecordFilter> {
    Ok(RecordFilter {
        date_from: parse_date_param("date_from", date_from)?,
        date_to: parse_date_param("date_to", date_to)?,
        user: user.filter(|u| !u.is_empty()).map(String::from),
    })
}

/// Выгрузка отфильтрованного снимка
pub fn export_records(records: &[FindingRecord], filter: &RecordFilter, today: NaiveDate) -> CsvExport {
    let filtered = apply(records, filter);
    CsvExport {
        file_name: export_file_name(today),
        content: format_csv(&filtered),
        rows: filtered.len(),
    }
}

pub async fn export_csv(filter: RecordFilter) -> AppResult<CsvExport> {
    let records = a002_finding::service::list_all().await?;
    let export = export_records(&records, &filter, Utc::now().date_naive());
    tracing::info!(
        "CSV export {}: {} of {} records (filters active: {})",
        export.file_name,
        export.rows,
        records.len(),
        filter.has_active_filters()
    );
    Ok(export)
}
