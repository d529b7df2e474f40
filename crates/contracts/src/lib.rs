//! Общие контракты KITTEO: доменные типы, движки фильтрации и агрегации
//! и формат экспорта. Крейт не выполняет ввод-вывод и может собираться
//! как для backend, так и для клиента.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
