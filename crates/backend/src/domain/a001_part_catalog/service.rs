use contracts::domain::a001_part_catalog::{CatalogIndex, PartCatalogEntry};
use contracts::shared::paging::Page;
use once_cell::sync::{Lazy, OnceCell};
use std::path::Path;

use super::repository;
use crate::shared::error::AppError;

static CATALOG: OnceCell<CatalogIndex> = OnceCell::new();
static EMPTY_CATALOG: Lazy<CatalogIndex> = Lazy::new(CatalogIndex::default);

/// Построить индекс из файла. Ошибка загрузки не фатальна: работаем
/// с пустым каталогом, страдает только поиск деталей.
pub fn build_index(path: &Path, page_size: usize) -> CatalogIndex {
    match repository::load_catalog(path).map_err(|e| AppError::CatalogLoad(e.to_string())) {
        Ok(entries) => {
            tracing::info!("Loaded {} catalog entries from {}", entries.len(), path.display());
            CatalogIndex::with_page_size(entries, page_size)
        }
        Err(e) => {
            tracing::warn!("{} ({}), continuing with empty catalog", e, path.display());
            CatalogIndex::with_page_size(Vec::new(), page_size)
        }
    }
}

pub fn initialize(path: &Path, page_size: usize) -> anyhow::Result<()> {
    CATALOG
        .set(build_index(path, page_size))
        .map_err(|_| anyhow::anyhow!("Catalog already initialized"))
}

pub fn catalog() -> &'static CatalogIndex {
    CATALOG.get().unwrap_or_else(|| &*EMPTY_CATALOG)
}

/// Страница результатов поиска
pub fn search(query: &str, page: usize) -> Page<PartCatalogEntry> {
    catalog().search_page(query, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_degrades_to_empty() {
        let index = build_index(Path::new("/nonexistent/parts_data.json"), 100);
        assert!(index.is_empty());
        assert_eq!(index.page_size(), 100);
        assert!(index.search_page("", 1).is_empty());
    }
}
