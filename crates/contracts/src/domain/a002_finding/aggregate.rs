use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;
use crate::shared::reference_data::ReferenceData;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор находки, выдаётся хранилищем при вставке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindingId(pub Uuid);

impl FindingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for FindingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FindingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Зарегистрированная находка (hallazgo).
///
/// `required_part_number` и `kitteo_user` появились в поздних ревизиях
/// данных; в старых записях их нет, поэтому оба поля необязательны.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingRecord {
    pub id: FindingId,
    /// Сериализуется как `YYYY-MM-DD`, порядок дат совпадает с порядком строк
    pub date: NaiveDate,
    pub area: String,
    pub order_number: String,
    pub finding_type: String,
    pub part_number: String,
    #[serde(default)]
    pub required_part_number: Option<String>,
    pub quantity: u32,
    pub reporting_user: String,
    #[serde(default)]
    pub kitteo_user: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FindingRecord {
    /// Оператор доработки, если он указан и не пустой
    pub fn kitteo_user(&self) -> Option<&str> {
        self.kitteo_user
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Проверенные поля новой находки, готовые к вставке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinding {
    pub date: NaiveDate,
    pub area: String,
    pub order_number: String,
    pub finding_type: String,
    pub part_number: String,
    pub required_part_number: Option<String>,
    pub quantity: u32,
    pub reporting_user: String,
    pub kitteo_user: Option<String>,
}

impl NewFinding {
    /// Собрать запись с полями, которые назначает хранилище
    pub fn into_record(self, id: FindingId, created_at: DateTime<Utc>) -> FindingRecord {
        FindingRecord {
            id,
            date: self.date,
            area: self.area,
            order_number: self.order_number,
            finding_type: self.finding_type,
            part_number: self.part_number,
            required_part_number: self.required_part_number,
            quantity: self.quantity,
            reporting_user: self.reporting_user,
            kitteo_user: self.kitteo_user,
            created_at,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы регистрации находки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingDto {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub finding_type: String,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub required_part_number: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub reporting_user: String,
    #[serde(default)]
    pub kitteo_user: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl Default for FindingDto {
    fn default() -> Self {
        Self {
            date: None,
            order_number: String::new(),
            finding_type: String::new(),
            part_number: String::new(),
            required_part_number: None,
            quantity: default_quantity(),
            reporting_user: String::new(),
            kitteo_user: None,
        }
    }
}

impl FindingDto {
    /// Форма на заданную дату (по умолчанию в форме стоит сегодняшняя)
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Обрезка пробелов, пустые необязательные поля -> `None`,
    /// оператор доработки в верхнем регистре
    pub fn normalize(&mut self) {
        self.order_number = self.order_number.trim().to_string();
        self.finding_type = self.finding_type.trim().to_string();
        self.part_number = self.part_number.trim().to_string();
        self.reporting_user = self.reporting_user.trim().to_string();
        self.required_part_number = non_blank(self.required_part_number.take());
        self.kitteo_user = non_blank(self.kitteo_user.take()).map(|s| s.to_uppercase());
    }

    /// Валидация данных
    pub fn validate(&self, reference: &ReferenceData) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("fecha");
        }
        if self.order_number.trim().is_empty() {
            missing.push("no. orden");
        }
        if self.finding_type.trim().is_empty() {
            missing.push("hallazgo");
        }
        if self.part_number.trim().is_empty() {
            missing.push("no. de parte");
        }
        if self.reporting_user.trim().is_empty() {
            missing.push("usuario");
        }
        if !missing.is_empty() {
            return Err(format!("Campos requeridos: {}", missing.join(", ")));
        }

        if self.quantity < 1 {
            return Err("La cantidad debe ser al menos 1".into());
        }
        if !reference.is_known_finding_type(self.finding_type.trim()) {
            return Err(format!("Hallazgo desconocido: {}", self.finding_type));
        }
        if !reference.is_known_user(self.reporting_user.trim()) {
            return Err(format!("Usuario desconocido: {}", self.reporting_user));
        }

        Ok(())
    }

    /// Нормализовать, проверить и превратить форму в поля для вставки
    pub fn to_new_finding(&self, reference: &ReferenceData) -> Result<NewFinding, String> {
        let mut dto = self.clone();
        dto.normalize();
        dto.validate(reference)?;

        let date = dto.date.ok_or_else(|| "Campos requeridos: fecha".to_string())?;
        Ok(NewFinding {
            date,
            area: reference.area.clone(),
            order_number: dto.order_number,
            finding_type: dto.finding_type,
            part_number: dto.part_number,
            required_part_number: dto.required_part_number,
            quantity: dto.quantity,
            reporting_user: dto.reporting_user,
            kitteo_user: dto.kitteo_user,
        })
    }

    /// Сброс после успешной записи. Дата остаётся, остальное очищается.
    pub fn reset_after_submit(&mut self) {
        *self = Self {
            date: self.date,
            ..Self::default()
        };
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
