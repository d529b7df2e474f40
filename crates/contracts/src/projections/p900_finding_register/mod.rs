pub mod csv;
pub mod dto;
pub mod filter;

pub use dto::{EmptyState, RecordFilter, RegisterView};
pub use filter::{apply, build_register_view};
