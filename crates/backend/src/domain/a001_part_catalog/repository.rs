use contracts::domain::a001_part_catalog::PartCatalogEntry;
use std::path::Path;

/// Чтение каталога деталей из JSON-массива `[{id, description}, ...]`
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<PartCatalogEntry>> {
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

pub fn parse_catalog(contents: &str) -> anyhow::Result<Vec<PartCatalogEntry>> {
    // Strip UTF-8 BOM if present
    let text = contents.trim_start_matches('\u{FEFF}');
    let entries: Vec<PartCatalogEntry> = serde_json::from_str(text)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let json = "\u{FEFF}[{\"id\": \"P2\", \"description\": \"grip\"}, {\"id\": \"P1\"}]";
        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "P2");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_catalog(Path::new("/nonexistent/parts_data.json")).is_err());
    }
}
