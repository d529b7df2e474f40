pub mod p900_finding_register;
