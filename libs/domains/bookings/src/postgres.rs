use async_trait::async_trait;
use chrono::NaiveDate;
use domain_availability::{
    AvailabilityRepository, AvailabilityStatus, ConflictDescriptor, PgAvailabilityRepository,
};
use domain_properties::{PgPropertyRepository, PropertyRepository, Unit};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{BookingError, BookingResult},
    models::{Booking, BookingFilter, BookingStatus},
    repository::{AvailabilityConflictSource, BookingRepository, UnitSource},
};

pub struct PgBookingRepository {
    db: DatabaseConnection,
}

impl PgBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> BookingError {
    BookingError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, booking: Booking) -> BookingResult<Booking> {
        let active_model: entity::ActiveModel = booking.into();
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::info!(booking_id = %model.id, unit_id = %model.unit_id, "Created booking");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> BookingResult<Option<Booking>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: BookingFilter) -> BookingResult<Vec<Booking>> {
        let mut query = entity::Entity::find();

        if let Some(unit_id) = filter.unit_id {
            query = query.filter(entity::Column::UnitId.eq(unit_id));
        }

        if let Some(status) = filter.status {
            query = query.filter(entity::Column::Status.eq(status));
        }

        if let Some(guest_email) = filter.guest_email {
            query = query.filter(entity::Column::GuestEmail.eq(guest_email));
        }

        if let Some(from) = filter.from {
            query = query.filter(entity::Column::CheckOut.gt(from));
        }

        if let Some(to) = filter.to {
            query = query.filter(entity::Column::CheckIn.lt(to));
        }

        let models = query
            .order_by_asc(entity::Column::CheckIn)
            .limit(filter.limit as u64)
            .offset(filter.offset as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, booking: Booking) -> BookingResult<Booking> {
        let id = booking.id;
        let active_model: entity::ActiveModel = booking.into();
        let updated = active_model.update(&self.db).await.map_err(db_err)?;

        tracing::info!(booking_id = %id, "Updated booking");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> BookingResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(booking_id = %id, "Deleted booking");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_overlapping_active(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<Uuid>,
    ) -> BookingResult<Vec<Booking>> {
        let mut query = entity::Entity::find()
            .filter(entity::Column::UnitId.eq(unit_id))
            .filter(entity::Column::CheckIn.lt(end))
            .filter(entity::Column::CheckOut.gt(start))
            .filter(entity::Column::Status.ne(BookingStatus::Cancelled));

        if let Some(exclude_id) = exclude {
            query = query.filter(entity::Column::Id.ne(exclude_id));
        }

        let models = query
            .order_by_asc(entity::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl UnitSource for PgPropertyRepository {
    async fn get_unit(&self, id: Uuid) -> BookingResult<Option<Unit>> {
        self.get_unit_by_id(id)
            .await
            .map_err(|e| BookingError::Internal(e.to_string()))
    }
}

#[async_trait]
impl AvailabilityConflictSource for PgAvailabilityRepository {
    async fn find_blocking(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Vec<ConflictDescriptor>> {
        let overlapping = self
            .find_overlapping(unit_id, start, end, None)
            .await
            .map_err(|e| BookingError::Internal(e.to_string()))?;

        // Only windows that make the unit unbookable count against a booking
        Ok(overlapping
            .iter()
            .filter(|record| record.status != AvailabilityStatus::Available)
            .map(ConflictDescriptor::from_availability)
            .collect())
    }
}
