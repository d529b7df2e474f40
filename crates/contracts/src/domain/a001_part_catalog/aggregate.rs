use serde::{Deserialize, Serialize};

/// Позиция каталога деталей (`parts_data.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartCatalogEntry {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

impl PartCatalogEntry {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// Подпись выбранной детали в форме: `ID - ОПИСАНИЕ`
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.id, self.description)
    }

    fn matches_lowercase(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Запрос страницы каталога
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartCatalogQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub(crate) fn entry_matches(entry: &PartCatalogEntry, needle_lowercase: &str) -> bool {
    needle_lowercase.is_empty() || entry.matches_lowercase(needle_lowercase)
}
