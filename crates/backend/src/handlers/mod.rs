pub mod a001_part_catalog;
pub mod a002_finding;
pub mod p900_finding_register;
