pub mod a001_part_catalog;
pub mod a002_finding;
