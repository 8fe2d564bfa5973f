use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{AvailabilityError, AvailabilityResult},
    models::{AvailabilityFilter, AvailabilityRecord},
    repository::AvailabilityRepository,
};

pub struct PgAvailabilityRepository {
    db: DatabaseConnection,
}

impl PgAvailabilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> AvailabilityError {
    AvailabilityError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    async fn create(&self, record: AvailabilityRecord) -> AvailabilityResult<AvailabilityRecord> {
        let active_model: entity::ActiveModel = record.into();
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::info!(
            record_id = %model.id,
            unit_id = %model.unit_id,
            "Created availability record"
        );
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> AvailabilityResult<Option<AvailabilityRecord>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(
        &self,
        filter: AvailabilityFilter,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>> {
        let mut query = entity::Entity::find();

        if let Some(unit_id) = filter.unit_id {
            query = query.filter(entity::Column::UnitId.eq(unit_id));
        }

        // from/to narrow to windows intersecting [from, to)
        if let Some(from) = filter.from {
            query = query.filter(entity::Column::EndDate.gt(from));
        }

        if let Some(to) = filter.to {
            query = query.filter(entity::Column::StartDate.lt(to));
        }

        if let Some(status) = filter.status {
            query = query.filter(entity::Column::Status.eq(status));
        }

        let models = query
            .order_by_asc(entity::Column::StartDate)
            .limit(filter.limit as u64)
            .offset(filter.offset as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, record: AvailabilityRecord) -> AvailabilityResult<AvailabilityRecord> {
        let id = record.id;
        let active_model: entity::ActiveModel = record.into();
        let updated = active_model.update(&self.db).await.map_err(db_err)?;

        tracing::info!(record_id = %id, "Updated availability record");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> AvailabilityResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(record_id = %id, "Deleted availability record");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_overlapping(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<Uuid>,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>> {
        // Half-open overlap pushed down to SQL: existing.start < end AND
        // existing.end > start, scoped to the unit via the composite index
        let mut query = entity::Entity::find()
            .filter(entity::Column::UnitId.eq(unit_id))
            .filter(entity::Column::StartDate.lt(end))
            .filter(entity::Column::EndDate.gt(start));

        if let Some(exclude_id) = exclude {
            query = query.filter(entity::Column::Id.ne(exclude_id));
        }

        let models = query
            .order_by_asc(entity::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn create_many(
        &self,
        records: Vec<AvailabilityRecord>,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let active_model: entity::ActiveModel = record.into();
            let model = active_model.insert(&txn).await.map_err(db_err)?;
            created.push(model.into());
        }

        txn.commit().await.map_err(db_err)?;

        tracing::info!(count = created.len(), "Bulk-created availability records");
        Ok(created)
    }
}
