pub mod aggregate;
pub mod index;

pub use aggregate::{PartCatalogEntry, PartCatalogQuery};
pub use index::CatalogIndex;
