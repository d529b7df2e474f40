//! Формат выгрузки реестра находок в CSV.
//!
//! Текстовые поля (`Hallazgo`, `Usuario`, `Usuario Kitteo`) всегда в
//! кавычках, коды, даты и числа без кавычек.

use chrono::NaiveDate;

use crate::domain::a002_finding::FindingRecord;

pub const CSV_HEADER: [&str; 9] = [
    "Fecha",
    "Area",
    "No. Orden",
    "Hallazgo",
    "No. de Parte",
    "No. de Parte Requerido",
    "Cantidad",
    "Usuario",
    "Usuario Kitteo",
];

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// `kitteo_hallazgos_<YYYY-MM-DD>.csv`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("kitteo_hallazgos_{}.csv", today.format("%Y-%m-%d"))
}

/// Строка CSV для одной записи, без перевода строки
pub fn to_csv_row(record: &FindingRecord) -> String {
    let quantity = record.quantity.to_string();
    let date = record.date.format("%Y-%m-%d").to_string();
    [
        bare(&date),
        bare(&record.area),
        bare(&record.order_number),
        quoted(&record.finding_type),
        bare(&record.part_number),
        bare(record.required_part_number.as_deref().unwrap_or_default()),
        bare(&quantity),
        quoted(&record.reporting_user),
        quoted(record.kitteo_user.as_deref().unwrap_or_default()),
    ]
    .join(",")
}

/// Полный текст выгрузки: заголовок и строки через `\n`, без
/// завершающего перевода строки
pub fn format_csv(records: &[FindingRecord]) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(records.iter().map(to_csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

// Поле без кавычек, пока в нём нет разделителей
fn bare(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        quoted(value)
    } else {
        value.to_string()
    }
}
