//! Sea-ORM entity for the bookings table.

use crate::models::BookingStatus;
use domain_properties::{Currency, Money};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub unit_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: Date,
    pub check_out: Date,
    pub guests: i32,
    pub total_price_minor: i64,
    pub currency: Currency,
    pub status: BookingStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Booking {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            unit_id: model.unit_id,
            guest_name: model.guest_name,
            guest_email: model.guest_email,
            check_in: model.check_in,
            check_out: model.check_out,
            guests: model.guests,
            total_price: Money::new(model.total_price_minor, model.currency),
            status: model.status,
            notes: model.notes,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::Booking> for ActiveModel {
    fn from(booking: crate::models::Booking) -> Self {
        ActiveModel {
            id: Set(booking.id),
            unit_id: Set(booking.unit_id),
            guest_name: Set(booking.guest_name),
            guest_email: Set(booking.guest_email),
            check_in: Set(booking.check_in),
            check_out: Set(booking.check_out),
            guests: Set(booking.guests),
            total_price_minor: Set(booking.total_price.amount_minor),
            currency: Set(booking.total_price.currency),
            status: Set(booking.status),
            notes: Set(booking.notes),
            created_at: Set(booking.created_at.into()),
            updated_at: Set(booking.updated_at.into()),
        }
    }
}
