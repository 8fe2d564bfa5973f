//! Sea-ORM entity for the availability_records table.

use crate::models::AvailabilityStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "availability_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub unit_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub status: AvailabilityStatus,
    #[sea_orm(nullable)]
    pub reason: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub overridden: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::AvailabilityRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            unit_id: model.unit_id,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status,
            reason: model.reason,
            notes: model.notes,
            overridden: model.overridden,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::AvailabilityRecord> for ActiveModel {
    fn from(record: crate::models::AvailabilityRecord) -> Self {
        ActiveModel {
            id: Set(record.id),
            unit_id: Set(record.unit_id),
            start_date: Set(record.start_date),
            end_date: Set(record.end_date),
            status: Set(record.status),
            reason: Set(record.reason),
            notes: Set(record.notes),
            overridden: Set(record.overridden),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}
