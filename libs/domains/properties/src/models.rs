use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a property
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "property_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Kind of bookable unit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "unit_type")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitType {
    #[default]
    #[sea_orm(string_value = "room")]
    Room,
    #[sea_orm(string_value = "apartment")]
    Apartment,
    #[sea_orm(string_value = "studio")]
    Studio,
    #[sea_orm(string_value = "villa")]
    Villa,
}

/// Lifecycle status of a unit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "unit_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Supported settlement currencies
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "currency")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    #[default]
    #[sea_orm(string_value = "usd")]
    Usd,
    #[sea_orm(string_value = "eur")]
    Eur,
    #[sea_orm(string_value = "gbp")]
    Gbp,
}

/// Monetary amount in minor units (cents, pence)
///
/// Minor units avoid floating point drift in price arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Money {
    /// Amount in the currency's minor unit
    pub amount_minor: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Scale the amount by a whole multiplier (e.g. nights * nightly rate)
    pub fn multiply(&self, factor: i64) -> Self {
        Self {
            amount_minor: self.amount_minor * factor,
            currency: self.currency,
        }
    }
}

/// Property - a physical location owning bookable units
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Property {
    /// Unique identifier
    #[ts(as = "String")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub status: PropertyStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Unit - a bookable room/apartment belonging to a property
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Unit {
    /// Unique identifier
    #[ts(as = "String")]
    pub id: Uuid,
    /// Parent property
    #[ts(as = "String")]
    pub property_id: Uuid,
    pub name: String,
    pub unit_type: UnitType,
    /// Nightly base price, consulted by booking quoting
    pub base_price: Money,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub status: UnitStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new property
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateProperty {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
}

/// DTO for updating an existing property
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct UpdateProperty {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    pub status: Option<PropertyStatus>,
}

/// Query filters for listing properties
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: Option<PropertyStatus>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

/// DTO for creating a new unit
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateUnit {
    #[ts(as = "String")]
    pub property_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub unit_type: UnitType,
    pub base_price: Money,
    #[validate(range(min = 1, max = 50))]
    pub max_guests: i32,
    #[validate(range(min = 0, max = 20))]
    pub bedrooms: i32,
}

/// DTO for updating an existing unit
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct UpdateUnit {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub unit_type: Option<UnitType>,
    pub base_price: Option<Money>,
    #[validate(range(min = 1, max = 50))]
    pub max_guests: Option<i32>,
    #[validate(range(min = 0, max = 20))]
    pub bedrooms: Option<i32>,
    pub status: Option<UnitStatus>,
}

/// Query filters for listing units
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct UnitFilter {
    pub property_id: Option<Uuid>,
    pub unit_type: Option<UnitType>,
    pub status: Option<UnitStatus>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            city: None,
            country: None,
            status: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Default for UnitFilter {
    fn default() -> Self {
        Self {
            property_id: None,
            unit_type: None,
            status: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Property {
    /// Create a new property from CreateProperty DTO
    pub fn new(input: CreateProperty) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            address: input.address,
            city: input.city,
            country: input.country,
            status: PropertyStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateProperty DTO
    pub fn apply_update(&mut self, update: UpdateProperty) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

impl Unit {
    /// Create a new unit from CreateUnit DTO
    pub fn new(input: CreateUnit) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            property_id: input.property_id,
            name: input.name,
            unit_type: input.unit_type,
            base_price: input.base_price,
            max_guests: input.max_guests,
            bedrooms: input.bedrooms,
            status: UnitStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateUnit DTO
    pub fn apply_update(&mut self, update: UpdateUnit) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(unit_type) = update.unit_type {
            self.unit_type = unit_type;
        }
        if let Some(base_price) = update.base_price {
            self.base_price = base_price;
        }
        if let Some(max_guests) = update.max_guests {
            self.max_guests = max_guests;
        }
        if let Some(bedrooms) = update.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_multiply() {
        let nightly = Money::new(12_500, Currency::Usd);
        let total = nightly.multiply(4);
        assert_eq!(total.amount_minor, 50_000);
        assert_eq!(total.currency, Currency::Usd);
    }

    #[test]
    fn test_property_new_defaults_to_active() {
        let property = Property::new(CreateProperty {
            name: "Seaside Villa".to_string(),
            description: None,
            address: "1 Ocean Drive".to_string(),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
        });
        assert_eq!(property.status, PropertyStatus::Active);
    }

    #[test]
    fn test_unit_apply_update() {
        let mut unit = Unit::new(CreateUnit {
            property_id: Uuid::now_v7(),
            name: "Room 101".to_string(),
            unit_type: UnitType::Room,
            base_price: Money::new(9_900, Currency::Eur),
            max_guests: 2,
            bedrooms: 1,
        });

        unit.apply_update(UpdateUnit {
            max_guests: Some(4),
            status: Some(UnitStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(unit.max_guests, 4);
        assert_eq!(unit.status, UnitStatus::Inactive);
        assert_eq!(unit.base_price.amount_minor, 9_900);
    }

    #[test]
    fn test_wire_types_export_to_typescript() {
        assert!(Money::decl().contains("amount_minor"));
        assert!(Unit::decl().contains("base_price"));
        assert!(Property::decl().contains("country"));
    }

    #[test]
    fn test_create_unit_validation_rejects_zero_guests() {
        use validator::Validate;

        let input = CreateUnit {
            property_id: Uuid::now_v7(),
            name: "Room 101".to_string(),
            unit_type: UnitType::Room,
            base_price: Money::new(9_900, Currency::Eur),
            max_guests: 0,
            bedrooms: 1,
        };

        assert!(input.validate().is_err());
    }
}
