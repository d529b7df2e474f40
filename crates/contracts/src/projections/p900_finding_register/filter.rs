use super::dto::{EmptyState, RecordFilter, RegisterView};
use crate::domain::a002_finding::FindingRecord;
use crate::shared::paging::paginate;

/// Применить фильтры к снимку записей.
///
/// Порядок входа сохраняется (снимок уже отсортирован по `created_at`
/// по убыванию).
pub fn apply(records: &[FindingRecord], filter: &RecordFilter) -> Vec<FindingRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Страница реестра после фильтрации
pub fn build_register_view(
    records: &[FindingRecord],
    filter: &RecordFilter,
    page_size: usize,
    page: usize,
) -> RegisterView {
    let filtered = apply(records, filter);
    let has_active_filters = filter.has_active_filters();

    let empty_state = if !filtered.is_empty() {
        None
    } else if records.is_empty() {
        Some(EmptyState::NoData)
    } else {
        Some(EmptyState::NoMatches)
    };

    RegisterView {
        page: paginate(&filtered, page_size, page),
        total_records: records.len(),
        has_active_filters,
        empty_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_finding::FindingId;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(order: &str, on: NaiveDate, user: &str) -> FindingRecord {
        FindingRecord {
            id: FindingId::new_v4(),
            date: on,
            area: "KITTEO".into(),
            order_number: order.into(),
            finding_type: "SHAFT FALTANTE".into(),
            part_number: "P1".into(),
            required_part_number: None,
            quantity: 1,
            reporting_user: user.into(),
            kitteo_user: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn orders(records: &[FindingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.order_number.as_str()).collect()
    }

    #[test]
    fn test_conjunctive_filters() {
        let records = vec![
            record("A", date(2024, 1, 1), "X"),
            record("B", date(2024, 2, 1), "Y"),
        ];

        let from = RecordFilter::default().with_date_from(date(2024, 1, 15));
        assert_eq!(orders(&apply(&records, &from)), vec!["B"]);

        let from_and_y = from.clone().with_user("Y");
        assert_eq!(orders(&apply(&records, &from_and_y)), vec!["B"]);

        let from_and_x = from.with_user("X");
        assert!(apply(&records, &from_and_x).is_empty());
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let records = vec![
            record("A", date(2024, 1, 1), "X"),
            record("B", date(2024, 1, 31), "X"),
            record("C", date(2024, 2, 1), "X"),
        ];
        let filter = RecordFilter::default()
            .with_date_from(date(2024, 1, 1))
            .with_date_to(date(2024, 1, 31));
        assert_eq!(orders(&apply(&records, &filter)), vec!["A", "B"]);

        let reversed = RecordFilter::default()
            .with_date_from(date(2024, 2, 1))
            .with_date_to(date(2024, 1, 1));
        assert!(apply(&records, &reversed).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let records = vec![
            record("C", date(2024, 3, 1), "X"),
            record("B", date(2024, 2, 1), "Y"),
            record("A", date(2024, 1, 1), "X"),
        ];
        let filter = RecordFilter::default().with_user("X");

        let once = apply(&records, &filter);
        assert_eq!(orders(&once), vec!["C", "A"]);
        assert_eq!(apply(&once, &filter), once);
    }

    #[test]
    fn test_blank_user_is_not_active() {
        let filter = RecordFilter::default().with_user("");
        assert!(!filter.has_active_filters());
        assert!(RecordFilter::default()
            .with_date_to(date(2024, 1, 1))
            .has_active_filters());
    }

    #[test]
    fn test_empty_state_distinguishes_no_data_from_no_matches() {
        let filter = RecordFilter::default().with_user("NADIE");

        let empty = build_register_view(&[], &filter, 100, 1);
        assert_eq!(empty.empty_state, Some(EmptyState::NoData));
        assert!(apply(&[], &filter).is_empty());

        let records = vec![record("A", date(2024, 1, 1), "X")];
        let filtered_out = build_register_view(&records, &filter, 100, 1);
        assert_eq!(filtered_out.empty_state, Some(EmptyState::NoMatches));
        assert!(filtered_out.has_active_filters);
        assert_eq!(filtered_out.total_records, 1);

        let all = build_register_view(&records, &RecordFilter::default(), 100, 1);
        assert_eq!(all.empty_state, None);
        assert_eq!(all.page.items.len(), 1);
    }

    #[test]
    fn test_register_view_paginates_after_filtering() {
        let records: Vec<_> = (0..5)
            .map(|i| record(&format!("O{}", i), date(2024, 1, 1), if i % 2 == 0 { "X" } else { "Y" }))
            .collect();
        let view = build_register_view(&records, &RecordFilter::default().with_user("X"), 2, 2);
        assert_eq!(view.page.total_count, 3);
        assert_eq!(view.page.page_count, 2);
        assert_eq!(orders(&view.page.items), vec!["O4"]);
    }
}
