use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a002_finding::{FindingId, FindingRecord, NewFinding};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hallazgos_kitteo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub fecha: NaiveDate,
    pub area: String,
    pub no_orden: String,
    pub hallazgo: String,
    pub no_parte: String,
    pub no_parte_requerido: Option<String>,
    pub cantidad: i32,
    pub usuario: String,
    pub usuario_kitteo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FindingRecord {
    fn from(m: Model) -> Self {
        let id = FindingId::from_string(&m.id).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse finding id {}: {}, generating new UUID", m.id, e);
            FindingId::new_v4()
        });

        FindingRecord {
            id,
            date: m.fecha,
            area: m.area,
            order_number: m.no_orden,
            finding_type: m.hallazgo,
            part_number: m.no_parte,
            required_part_number: m.no_parte_requerido,
            quantity: u32::try_from(m.cantidad).unwrap_or(0),
            reporting_user: m.usuario,
            kitteo_user: m.usuario_kitteo,
            created_at: m.created_at,
        }
    }
}

fn conn() -> anyhow::Result<&'static DatabaseConnection> {
    get_connection()
}

/// Все записи, новые сначала
pub async fn list_all() -> anyhow::Result<Vec<FindingRecord>> {
    list_all_in(conn()?).await
}

pub async fn list_all_in(db: &DatabaseConnection) -> anyhow::Result<Vec<FindingRecord>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Вставка; идентификатор и время создания назначаются здесь
pub async fn insert(new: NewFinding) -> anyhow::Result<FindingRecord> {
    insert_in(conn()?, new, FindingId::new_v4(), Utc::now()).await
}

pub async fn insert_in(
    db: &DatabaseConnection,
    new: NewFinding,
    id: FindingId,
    created_at: DateTime<Utc>,
) -> anyhow::Result<FindingRecord> {
    let cantidad = i32::try_from(new.quantity)
        .map_err(|_| anyhow::anyhow!("Quantity out of range: {}", new.quantity))?;

    let active = ActiveModel {
        id: Set(id.as_string()),
        fecha: Set(new.date),
        area: Set(new.area.clone()),
        no_orden: Set(new.order_number.clone()),
        hallazgo: Set(new.finding_type.clone()),
        no_parte: Set(new.part_number.clone()),
        no_parte_requerido: Set(new.required_part_number.clone()),
        cantidad: Set(cantidad),
        usuario: Set(new.reporting_user.clone()),
        usuario_kitteo: Set(new.kitteo_user.clone()),
        created_at: Set(created_at),
    };
    active.insert(db).await?;

    Ok(new.into_record(id, created_at))
}
