use serde::{Deserialize, Serialize};

/// Метка группы для записей без оператора доработки
pub const UNASSIGNED_LABEL: &str = "UNASSIGNED";

/// Сколько операторов показывает рейтинг
pub const TOP_CONTRIBUTORS_LIMIT: usize = 10;

/// Частотная полоса сочетания (вид находки, номер детали).
///
/// Пороги абсолютные и не зависят от размера выборки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyBand {
    #[serde(rename = "1-2 times")]
    OneToTwo,
    #[serde(rename = "2-5 times")]
    TwoToFive,
    #[serde(rename = "more than 5 times")]
    MoreThanFive,
}

impl FrequencyBand {
    pub fn from_count(count: usize) -> Self {
        match count {
            0..=2 => FrequencyBand::OneToTwo,
            3..=5 => FrequencyBand::TwoToFive,
            _ => FrequencyBand::MoreThanFive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrequencyBand::OneToTwo => "1-2 times",
            FrequencyBand::TwoToFive => "2-5 times",
            FrequencyBand::MoreThanFive => "more than 5 times",
        }
    }
}

/// Группа (вид находки, номер детали)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationFrequency {
    pub finding_type: String,
    pub part_number: String,
    pub count: usize,
    pub band: FrequencyBand,
}

/// Количество ГРУПП в каждой полосе (не записей)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandSummary {
    pub one_to_two: usize,
    pub two_to_five: usize,
    pub more_than_five: usize,
}

impl BandSummary {
    pub fn total_groups(&self) -> usize {
        self.one_to_two + self.two_to_five + self.more_than_five
    }

    pub(crate) fn add(&mut self, band: FrequencyBand) {
        match band {
            FrequencyBand::OneToTwo => self.one_to_two += 1,
            FrequencyBand::TwoToFive => self.two_to_five += 1,
            FrequencyBand::MoreThanFive => self.more_than_five += 1,
        }
    }
}

/// Доля вида находки в общем количестве
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: usize,
}

impl CategorySlice {
    /// Процент от `total`; считается при отображении и не хранится
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.value as f64 * 100.0 / total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorCount {
    pub name: String,
    pub count: usize,
}

/// Все показатели дашборда для одной выборки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingDashboard {
    /// Номер детали, которым ограничена выборка
    pub part_number: Option<String>,
    pub total_records: usize,
    pub combinations: Vec<CombinationFrequency>,
    pub band_summary: BandSummary,
    pub categories: Vec<CategorySlice>,
    pub top_contributors: Vec<ContributorCount>,
}
