use std::collections::HashMap;
use std::hash::Hash;

use super::dto::{
    BandSummary, CategorySlice, CombinationFrequency, ContributorCount, FindingDashboard,
    FrequencyBand, TOP_CONTRIBUTORS_LIMIT, UNASSIGNED_LABEL,
};
use crate::domain::a002_finding::FindingRecord;

/// Подсчёт по ключу с сохранением порядка первого появления ключа
fn count_by<'a, K, F>(records: &'a [FindingRecord], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a FindingRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();

    for record in records {
        let k = key(record);
        match positions.get(&k) {
            Some(&i) => groups[i].1 += 1,
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, 1));
            }
        }
    }

    groups
}

/// Ограничить выборку одним номером детали; `None` или пустая строка
/// оставляют всё
pub fn scope_by_part(records: &[FindingRecord], part_number: Option<&str>) -> Vec<FindingRecord> {
    match part_number.map(str::trim).filter(|p| !p.is_empty()) {
        Some(part) => records
            .iter()
            .filter(|r| r.part_number == part)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// Частота сочетаний (вид находки, номер детали), по убыванию количества.
///
/// Сортировка стабильная: при равных количествах группы идут в порядке
/// первого появления.
pub fn combination_frequency(records: &[FindingRecord]) -> Vec<CombinationFrequency> {
    let mut rows: Vec<CombinationFrequency> = count_by(records, |r| {
        (r.finding_type.as_str(), r.part_number.as_str())
    })
    .into_iter()
    .map(|((finding_type, part_number), count)| CombinationFrequency {
        finding_type: finding_type.to_string(),
        part_number: part_number.to_string(),
        count,
        band: FrequencyBand::from_count(count),
    })
    .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Сколько групп попало в каждую полосу
pub fn frequency_band_summary(combinations: &[CombinationFrequency]) -> BandSummary {
    let mut summary = BandSummary::default();
    for row in combinations {
        summary.add(row.band);
    }
    summary
}

/// Распределение по видам находок, по убыванию
pub fn category_distribution(records: &[FindingRecord]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = count_by(records, |r| r.finding_type.as_str())
        .into_iter()
        .map(|(name, value)| CategorySlice {
            name: name.to_string(),
            value,
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Десять операторов доработки с наибольшим числом находок.
///
/// Записи без оператора собираются в одну группу `UNASSIGNED`. При
/// равенстве на границе десятого места остаются группы, встретившиеся
/// раньше.
pub fn top_contributors(records: &[FindingRecord]) -> Vec<ContributorCount> {
    let mut rows: Vec<ContributorCount> =
        count_by(records, |r| r.kitteo_user().unwrap_or(UNASSIGNED_LABEL))
            .into_iter()
            .map(|(name, count)| ContributorCount {
                name: name.to_string(),
                count,
            })
            .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(TOP_CONTRIBUTORS_LIMIT);
    rows
}

/// Все показатели дашборда для выборки, ограниченной номером детали
pub fn build_dashboard(records: &[FindingRecord], part_number: Option<&str>) -> FindingDashboard {
    let scoped = scope_by_part(records, part_number);
    let combinations = combination_frequency(&scoped);
    let band_summary = frequency_band_summary(&combinations);

    FindingDashboard {
        part_number: part_number
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from),
        total_records: scoped.len(),
        band_summary,
        categories: category_distribution(&scoped),
        top_contributors: top_contributors(&scoped),
        combinations,
    }
}
