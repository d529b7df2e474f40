use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_finding::FindingRecord;
use crate::shared::paging::Page;

/// Фильтры реестра находок. Все измерения необязательны и
/// объединяются через AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Нижняя граница даты, включительно
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Верхняя граница даты, включительно
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Точное совпадение с `reporting_user`
    #[serde(default)]
    pub user: Option<String>,
}

impl RecordFilter {
    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Пустая строка пользователя считается незаданным фильтром
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }

    pub fn has_active_filters(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some() || self.user().is_some()
    }

    pub fn matches(&self, record: &FindingRecord) -> bool {
        if let Some(from) = self.date_from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.date > to {
                return false;
            }
        }
        if let Some(user) = self.user() {
            if record.reporting_user != user {
                return false;
            }
        }
        true
    }
}

/// Почему реестр пуст: данных нет вообще или их отсекли фильтры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    NoData,
    NoMatches,
}

/// Отфильтрованная страница реестра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterView {
    pub page: Page<FindingRecord>,
    /// Всего записей в снимке до фильтрации
    pub total_records: usize,
    pub has_active_filters: bool,
    pub empty_state: Option<EmptyState>,
}
