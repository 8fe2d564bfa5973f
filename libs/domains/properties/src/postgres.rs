use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{PropertyError, PropertyResult},
    models::{
        CreateProperty, CreateUnit, Property, PropertyFilter, Unit, UnitFilter, UpdateProperty,
        UpdateUnit,
    },
    repository::PropertyRepository,
};

pub struct PgPropertyRepository {
    db: DatabaseConnection,
}

impl PgPropertyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> PropertyError {
    PropertyError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn create(&self, input: CreateProperty) -> PropertyResult<Property> {
        let active_model: entity::property::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::info!(property_id = %model.id, "Created property");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> PropertyResult<Option<Property>> {
        let model = entity::property::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: PropertyFilter) -> PropertyResult<Vec<Property>> {
        let mut query = entity::property::Entity::find();

        if let Some(city) = filter.city {
            query = query.filter(entity::property::Column::City.eq(city));
        }

        if let Some(country) = filter.country {
            query = query.filter(entity::property::Column::Country.eq(country));
        }

        if let Some(status) = filter.status {
            query = query.filter(entity::property::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(entity::property::Column::CreatedAt)
            .limit(filter.limit as u64)
            .offset(filter.offset as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateProperty) -> PropertyResult<Property> {
        let model = entity::property::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(PropertyError::PropertyNotFound(id))?;

        let mut property: Property = model.into();
        property.apply_update(input);

        let active_model = entity::property::ActiveModel {
            id: Set(property.id),
            name: Set(property.name.clone()),
            description: Set(property.description.clone()),
            address: Set(property.address.clone()),
            city: Set(property.city.clone()),
            country: Set(property.country.clone()),
            status: Set(property.status),
            created_at: Set(property.created_at.into()),
            updated_at: Set(property.updated_at.into()),
        };

        let updated = active_model.update(&self.db).await.map_err(db_err)?;

        tracing::info!(property_id = %id, "Updated property");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> PropertyResult<bool> {
        let result = entity::property::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(property_id = %id, "Deleted property");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn create_unit(&self, input: CreateUnit) -> PropertyResult<Unit> {
        let active_model: entity::unit::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await.map_err(db_err)?;

        tracing::info!(unit_id = %model.id, property_id = %model.property_id, "Created unit");
        Ok(model.into())
    }

    async fn get_unit_by_id(&self, id: Uuid) -> PropertyResult<Option<Unit>> {
        let model = entity::unit::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list_units(&self, filter: UnitFilter) -> PropertyResult<Vec<Unit>> {
        let mut query = entity::unit::Entity::find();

        if let Some(property_id) = filter.property_id {
            query = query.filter(entity::unit::Column::PropertyId.eq(property_id));
        }

        if let Some(unit_type) = filter.unit_type {
            query = query.filter(entity::unit::Column::UnitType.eq(unit_type));
        }

        if let Some(status) = filter.status {
            query = query.filter(entity::unit::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(entity::unit::Column::CreatedAt)
            .limit(filter.limit as u64)
            .offset(filter.offset as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update_unit(&self, id: Uuid, input: UpdateUnit) -> PropertyResult<Unit> {
        let model = entity::unit::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(PropertyError::UnitNotFound(id))?;

        let mut unit: Unit = model.into();
        unit.apply_update(input);

        let active_model = entity::unit::ActiveModel {
            id: Set(unit.id),
            property_id: Set(unit.property_id),
            name: Set(unit.name.clone()),
            unit_type: Set(unit.unit_type),
            base_price_minor: Set(unit.base_price.amount_minor),
            currency: Set(unit.base_price.currency),
            max_guests: Set(unit.max_guests),
            bedrooms: Set(unit.bedrooms),
            status: Set(unit.status),
            created_at: Set(unit.created_at.into()),
            updated_at: Set(unit.updated_at.into()),
        };

        let updated = active_model.update(&self.db).await.map_err(db_err)?;

        tracing::info!(unit_id = %id, "Updated unit");
        Ok(updated.into())
    }

    async fn delete_unit(&self, id: Uuid) -> PropertyResult<bool> {
        let result = entity::unit::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(unit_id = %id, "Deleted unit");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
