pub mod aggregate;

pub use aggregate::{FindingDto, FindingId, FindingRecord, NewFinding};
