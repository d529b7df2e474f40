use super::repository;
use contracts::domain::a002_finding::{FindingDto, FindingRecord, NewFinding};
use contracts::shared::reference_data::ReferenceData;
use once_cell::sync::{Lazy, OnceCell};

use crate::shared::error::{AppError, AppResult};

static REFERENCE: OnceCell<ReferenceData> = OnceCell::new();
static DEFAULT_REFERENCE: Lazy<ReferenceData> = Lazy::new(ReferenceData::default);

pub fn initialize(reference: ReferenceData) -> anyhow::Result<()> {
    tracing::info!(
        "Reference data: area={}, {} finding types, {} users",
        reference.area,
        reference.finding_types.len(),
        reference.users.len()
    );
    REFERENCE
        .set(reference)
        .map_err(|_| anyhow::anyhow!("Reference data already initialized"))
}

pub fn reference() -> &'static ReferenceData {
    REFERENCE.get().unwrap_or_else(|| &*DEFAULT_REFERENCE)
}

/// Проверка формы до обращения к хранилищу
pub fn prepare(dto: &FindingDto, reference: &ReferenceData) -> AppResult<NewFinding> {
    dto.to_new_finding(reference).map_err(AppError::Validation)
}

/// Все записи (новые сначала)
pub async fn list_all() -> AppResult<Vec<FindingRecord>> {
    repository::list_all()
        .await
        .map_err(|e| AppError::Load(e.to_string()))
}

/// Регистрация новой находки
pub async fn create(dto: FindingDto) -> AppResult<FindingRecord> {
    let new = prepare(&dto, reference())?;

    let record = repository::insert(new)
        .await
        .map_err(|e| AppError::Insert(e.to_string()))?;

    tracing::info!(
        "Finding {} registered: order={}, type={}, part={}",
        record.id.value(),
        record.order_number,
        record.finding_type,
        record.part_number
    );
    Ok(record)
}
