use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{PropertyError, PropertyResult};
use crate::models::{
    CreateProperty, CreateUnit, Property, PropertyFilter, Unit, UnitFilter, UpdateProperty,
    UpdateUnit,
};
use crate::repository::PropertyRepository;

/// Service layer for Property and Unit business logic
#[derive(Clone)]
pub struct PropertyService<R: PropertyRepository> {
    repository: Arc<R>,
}

impl<R: PropertyRepository> PropertyService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new property with validation
    pub async fn create_property(&self, input: CreateProperty) -> PropertyResult<Property> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a property by ID
    pub async fn get_property(&self, id: Uuid) -> PropertyResult<Property> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(PropertyError::PropertyNotFound(id))
    }

    /// List properties with filters
    pub async fn list_properties(&self, filter: PropertyFilter) -> PropertyResult<Vec<Property>> {
        self.repository.list(filter).await
    }

    /// Update a property
    pub async fn update_property(
        &self,
        id: Uuid,
        input: UpdateProperty,
    ) -> PropertyResult<Property> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a property (cascades to its units)
    pub async fn delete_property(&self, id: Uuid) -> PropertyResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(PropertyError::PropertyNotFound(id));
        }

        Ok(())
    }

    /// Create a new unit under an existing property
    pub async fn create_unit(&self, input: CreateUnit) -> PropertyResult<Unit> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        // Parent property must exist
        self.repository
            .get_by_id(input.property_id)
            .await?
            .ok_or(PropertyError::PropertyNotFound(input.property_id))?;

        self.repository.create_unit(input).await
    }

    /// Get a unit by ID
    pub async fn get_unit(&self, id: Uuid) -> PropertyResult<Unit> {
        self.repository
            .get_unit_by_id(id)
            .await?
            .ok_or(PropertyError::UnitNotFound(id))
    }

    /// List units with filters
    pub async fn list_units(&self, filter: UnitFilter) -> PropertyResult<Vec<Unit>> {
        self.repository.list_units(filter).await
    }

    /// Update a unit
    pub async fn update_unit(&self, id: Uuid, input: UpdateUnit) -> PropertyResult<Unit> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        self.repository.update_unit(id, input).await
    }

    /// Delete a unit
    pub async fn delete_unit(&self, id: Uuid) -> PropertyResult<()> {
        let deleted = self.repository.delete_unit(id).await?;

        if !deleted {
            return Err(PropertyError::UnitNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money, UnitType};
    use crate::repository::MockPropertyRepository;
    use mockall::predicate::eq;

    fn sample_property(id: Uuid) -> Property {
        let mut property = Property::new(CreateProperty {
            name: "Harbour House".to_string(),
            description: None,
            address: "2 Quay Street".to_string(),
            city: "Porto".to_string(),
            country: "Portugal".to_string(),
        });
        property.id = id;
        property
    }

    #[tokio::test]
    async fn test_get_property_not_found() {
        let mut mock_repo = MockPropertyRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = PropertyService::new(mock_repo);
        let result = service.get_property(id).await;

        assert!(matches!(result, Err(PropertyError::PropertyNotFound(_))));
    }

    #[tokio::test]
    async fn test_create_unit_requires_existing_property() {
        let mut mock_repo = MockPropertyRepository::new();
        let property_id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(eq(property_id))
            .returning(|_| Ok(None));

        let service = PropertyService::new(mock_repo);
        let result = service
            .create_unit(CreateUnit {
                property_id,
                name: "Loft".to_string(),
                unit_type: UnitType::Apartment,
                base_price: Money::new(15_000, Currency::Usd),
                max_guests: 4,
                bedrooms: 2,
            })
            .await;

        assert!(matches!(result, Err(PropertyError::PropertyNotFound(_))));
    }

    #[tokio::test]
    async fn test_create_unit_with_existing_property() {
        let mut mock_repo = MockPropertyRepository::new();
        let property_id = Uuid::now_v7();
        let property = sample_property(property_id);

        mock_repo
            .expect_get_by_id()
            .with(eq(property_id))
            .returning(move |_| Ok(Some(property.clone())));

        mock_repo
            .expect_create_unit()
            .returning(|input| Ok(Unit::new(input)));

        let service = PropertyService::new(mock_repo);
        let unit = service
            .create_unit(CreateUnit {
                property_id,
                name: "Loft".to_string(),
                unit_type: UnitType::Apartment,
                base_price: Money::new(15_000, Currency::Usd),
                max_guests: 4,
                bedrooms: 2,
            })
            .await
            .unwrap();

        assert_eq!(unit.property_id, property_id);
        assert_eq!(unit.base_price.amount_minor, 15_000);
    }

    #[tokio::test]
    async fn test_create_property_rejects_empty_name() {
        let mock_repo = MockPropertyRepository::new();
        let service = PropertyService::new(mock_repo);

        let result = service
            .create_property(CreateProperty {
                name: String::new(),
                description: None,
                address: "2 Quay Street".to_string(),
                city: "Porto".to_string(),
                country: "Portugal".to_string(),
            })
            .await;

        assert!(matches!(result, Err(PropertyError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_property_not_found() {
        let mut mock_repo = MockPropertyRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(false));

        let service = PropertyService::new(mock_repo);
        let result = service.delete_property(id).await;

        assert!(matches!(result, Err(PropertyError::PropertyNotFound(_))));
    }
}
