use std::collections::HashMap;

use super::aggregate::{entry_matches, PartCatalogEntry};
use crate::shared::paging::{paginate, Page, DEFAULT_PAGE_SIZE};

/// Индекс каталога деталей.
///
/// Хранит позиции в порядке загрузки и не пересортировывает их, поэтому
/// состав страниц стабилен между запросами.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    entries: Vec<PartCatalogEntry>,
    by_id: HashMap<String, usize>,
    page_size: usize,
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogIndex {
    pub fn new(entries: Vec<PartCatalogEntry>) -> Self {
        Self::with_page_size(entries, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(entries: Vec<PartCatalogEntry>, page_size: usize) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // при дублях побеждает первая позиция
            by_id.entry(entry.id.clone()).or_insert(i);
        }
        Self {
            entries,
            by_id,
            page_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn entries(&self) -> &[PartCatalogEntry] {
        &self.entries
    }

    /// Поиск без учёта регистра по `id` ИЛИ `description`.
    /// Запрос из одних пробелов возвращает весь каталог, иначе пробелы
    /// входят в искомую подстроку.
    pub fn search(&self, query: &str) -> Vec<PartCatalogEntry> {
        if query.trim().is_empty() {
            return self.entries.clone();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| entry_matches(e, &needle))
            .cloned()
            .collect()
    }

    /// Поиск с последующей нарезкой на страницы фиксированного размера
    pub fn search_page(&self, query: &str, page: usize) -> Page<PartCatalogEntry> {
        let matches = self.search(query);
        paginate(&matches, self.page_size, page)
    }

    pub fn get(&self, id: &str) -> Option<&PartCatalogEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Описание детали; `None` для номера, которого нет в каталоге
    pub fn describe(&self, id: &str) -> Option<&str> {
        self.get(id).map(|e| e.description.as_str())
    }

    /// Подпись для отображения; для неизвестного номера только сам номер
    pub fn display_label(&self, id: &str) -> String {
        match self.get(id) {
            Some(entry) => entry.display_label(),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatalogIndex {
        CatalogIndex::new(vec![
            PartCatalogEntry::new("P100", "shaft steel"),
            PartCatalogEntry::new("P200", "Grip Midsize"),
            PartCatalogEntry::new("X-STEEL", "headcover"),
        ])
    }

    #[test]
    fn test_search_matches_id_or_description() {
        let index = sample();

        let by_id = index.search("P100");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "P100");

        let by_description = index.search("steel");
        let ids: Vec<_> = by_description.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["P100", "X-STEEL"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = sample();
        assert_eq!(index.search("grip midsize").len(), 1);
        assert_eq!(index.search("p2").len(), 1);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let index = CatalogIndex::new(vec![
            PartCatalogEntry::new("P100", "steelhead"),
            PartCatalogEntry::new("P200", "shaft steel x"),
        ]);
        let ids: Vec<_> = index.search("steel ").into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["P200"]);
        assert_eq!(index.search(" steel").len(), 1);
        assert_eq!(index.search("steel").len(), 2);
    }

    #[test]
    fn test_empty_query_returns_everything_in_load_order() {
        let index = sample();
        let all = index.search("");
        assert_eq!(all, index.entries().to_vec());
        assert_eq!(index.search("   ").len(), 3);
    }

    #[test]
    fn test_search_page_counts() {
        let entries = (0..250)
            .map(|i| PartCatalogEntry::new(format!("P{:03}", i), "part"))
            .collect();
        let index = CatalogIndex::new(entries);

        let page = index.search_page("part", 3);
        assert_eq!(page.total_count, 250);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[0].id, "P200");

        assert!(index.search_page("part", 4).is_empty());
        assert_eq!(index.search_page("nothing", 1).page_count, 0);
    }

    #[test]
    fn test_orphan_lookup_degrades_to_id() {
        let index = sample();
        assert_eq!(index.describe("P100"), Some("shaft steel"));
        assert_eq!(index.describe("ZZZ"), None);
        assert_eq!(index.display_label("P100"), "P100 - shaft steel");
        assert_eq!(index.display_label("ZZZ"), "ZZZ");
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::default();
        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
    }
}
