//! Состояние представления: номера страниц, строка поиска, фильтры и
//! текущий снимок записей.
//!
//! Движки фильтрации и агрегации остаются чистыми функциями; здесь только
//! то, что UI держит между перерисовками, и пересчёт производных видов
//! при каждом изменении.

use chrono::NaiveDate;

use crate::dashboards::d400_finding_summary::{build_dashboard, FindingDashboard};
use crate::domain::a001_part_catalog::{CatalogIndex, PartCatalogEntry};
use crate::domain::a002_finding::{FindingDto, FindingRecord};
use crate::projections::p900_finding_register::csv::format_csv;
use crate::projections::p900_finding_register::{
    apply, build_register_view, RecordFilter, RegisterView,
};
use crate::shared::paging::{Page, DEFAULT_PAGE_SIZE};

/// Окно выбора номера детали
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPickerState {
    query: String,
    page: usize,
}

impl Default for PartPickerState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl PartPickerState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Новая строка поиска всегда возвращает на первую страницу
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn view(&self, catalog: &CatalogIndex) -> Page<PartCatalogEntry> {
        catalog.search_page(&self.query, self.page)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Фильтры и страница реестра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterState {
    filter: RecordFilter,
    page: usize,
    page_size: usize,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl RegisterState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filter: RecordFilter::default(),
            page: 1,
            page_size,
        }
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        let mut filter = self.filter.clone();
        filter.date_from = date;
        self.set_filter(filter);
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        let mut filter = self.filter.clone();
        filter.date_to = date;
        self.set_filter(filter);
    }

    pub fn set_user(&mut self, user: Option<String>) {
        let mut filter = self.filter.clone();
        filter.user = user.filter(|u| !u.is_empty());
        self.set_filter(filter);
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(RecordFilter::default());
    }

    /// Любое изменение фильтра возвращает на первую страницу
    pub fn set_filter(&mut self, filter: RecordFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    pub fn view(&self, records: &[FindingRecord]) -> RegisterView {
        build_register_view(records, &self.filter, self.page_size, self.page)
    }
}

/// Снимок данных и состояние экрана регистрации находок.
///
/// Записи заменяются целиком после каждой загрузки; все виды
/// пересчитываются заново из текущего снимка.
#[derive(Debug, Clone, Default)]
pub struct FindingWorkspace {
    records: Vec<FindingRecord>,
    catalog: CatalogIndex,
    pub register: RegisterState,
    pub picker: PartPickerState,
    pub form: FindingDto,
    dashboard_part: Option<String>,
}

impl FindingWorkspace {
    pub fn new(catalog: CatalogIndex, today: NaiveDate) -> Self {
        Self {
            catalog,
            form: FindingDto::for_date(today),
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[FindingRecord] {
        &self.records
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn replace_records(&mut self, records: Vec<FindingRecord>) {
        self.records = records;
    }

    /// Результат перезагрузки. При ошибке остаётся последний снимок.
    pub fn apply_load<E>(&mut self, result: Result<Vec<FindingRecord>, E>) -> Result<usize, E> {
        let records = result?;
        let count = records.len();
        self.replace_records(records);
        Ok(count)
    }

    /// Результат отправки формы: после успеха новый снимок и пустая
    /// форма, после ошибки форма не трогается
    pub fn apply_submit<E>(&mut self, result: Result<Vec<FindingRecord>, E>) -> Result<(), E> {
        let records = result?;
        self.replace_records(records);
        self.form.reset_after_submit();
        Ok(())
    }

    /// Выбор детали из окна поиска
    pub fn select_part(&mut self, part_id: &str) -> String {
        self.form.part_number = part_id.to_string();
        self.picker.reset();
        self.catalog.display_label(part_id)
    }

    pub fn register_view(&self) -> RegisterView {
        self.register.view(&self.records)
    }

    pub fn part_picker_view(&self) -> Page<PartCatalogEntry> {
        self.picker.view(&self.catalog)
    }

    /// Отфильтрованные записи целиком, без нарезки на страницы
    pub fn filtered_records(&self) -> Vec<FindingRecord> {
        apply(&self.records, self.register.filter())
    }

    /// CSV строится по отфильтрованному виду, а не по всему снимку
    pub fn export_csv(&self) -> String {
        format_csv(&self.filtered_records())
    }

    pub fn set_dashboard_part(&mut self, part_number: Option<String>) {
        self.dashboard_part = part_number.filter(|p| !p.trim().is_empty());
    }

    pub fn dashboard(&self) -> FindingDashboard {
        build_dashboard(&self.records, self.dashboard_part.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_finding::FindingId;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(order: &str, on: NaiveDate, user: &str, part: &str) -> FindingRecord {
        FindingRecord {
            id: FindingId::new_v4(),
            date: on,
            area: "KITTEO".into(),
            order_number: order.into(),
            finding_type: "GRIP EQUIVOCADO".into(),
            part_number: part.into(),
            required_part_number: None,
            quantity: 1,
            reporting_user: user.into(),
            kitteo_user: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn workspace() -> FindingWorkspace {
        let catalog = CatalogIndex::new(vec![
            PartCatalogEntry::new("P100", "shaft steel"),
            PartCatalogEntry::new("P200", "grip"),
        ]);
        let mut ws = FindingWorkspace::new(catalog, date(2024, 6, 1));
        ws.replace_records(vec![
            record("A", date(2024, 1, 1), "X", "P100"),
            record("B", date(2024, 2, 1), "Y", "P200"),
        ]);
        ws
    }

    #[test]
    fn test_picker_query_change_resets_page() {
        let mut picker = PartPickerState::default();
        picker.set_page(3);
        picker.set_query("p1");
        assert_eq!(picker.page(), 1);

        picker.set_page(2);
        picker.set_query("p1");
        assert_eq!(picker.page(), 2);
    }

    #[test]
    fn test_register_filter_change_resets_page() {
        let mut state = RegisterState::default();
        state.set_page(4);
        state.set_user(Some("X".into()));
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_user(Some("X".into()));
        assert_eq!(state.page(), 4);

        state.set_date_from(Some(date(2024, 1, 1)));
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.clear_filters();
        assert_eq!(state.page(), 1);
        assert!(!state.filter().has_active_filters());
    }

    #[test]
    fn test_export_uses_filtered_view() {
        let mut ws = workspace();
        ws.register.set_user(Some("Y".into()));

        let text = ws.export_csv();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(",B,"));
    }

    #[test]
    fn test_failed_reload_keeps_last_snapshot() {
        let mut ws = workspace();
        let result: Result<usize, &str> = ws.apply_load(Err("offline"));
        assert!(result.is_err());
        assert_eq!(ws.records().len(), 2);

        assert_eq!(ws.apply_load::<&str>(Ok(vec![])).unwrap(), 0);
        assert!(ws.records().is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut ws = workspace();
        ws.form.order_number = "ORD-7".into();
        let label = ws.select_part("P100");
        assert_eq!(label, "P100 - shaft steel");

        assert!(ws.apply_submit(Err("rejected")).is_err());
        assert_eq!(ws.form.order_number, "ORD-7");
        assert_eq!(ws.form.part_number, "P100");

        let reloaded = vec![record("C", date(2024, 6, 1), "X", "P100")];
        ws.apply_submit::<&str>(Ok(reloaded)).unwrap();
        assert!(ws.form.order_number.is_empty());
        assert_eq!(ws.form.date, Some(date(2024, 6, 1)));
        assert_eq!(ws.records().len(), 1);
    }

    #[test]
    fn test_dashboard_follows_part_scope() {
        let mut ws = workspace();
        assert_eq!(ws.dashboard().total_records, 2);

        ws.set_dashboard_part(Some("P200".into()));
        let dashboard = ws.dashboard();
        assert_eq!(dashboard.total_records, 1);
        assert_eq!(dashboard.combinations[0].part_number, "P200");
    }

    #[test]
    fn test_picker_view_searches_catalog() {
        let mut ws = workspace();
        ws.picker.set_query("steel");
        let page = ws.part_picker_view();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "P100");
    }
}
