//! Sea-ORM entities for the properties and units tables.

/// Entity for the properties table
pub mod property {
    use crate::models::PropertyStatus;
    use sea_orm::ActiveValue::Set;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "properties")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,
        #[sea_orm(column_type = "Text")]
        pub address: String,
        pub city: String,
        pub country: String,
        pub status: PropertyStatus,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::unit::Entity")]
        Unit,
    }

    impl Related<super::unit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Unit.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Property {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
                description: model.description,
                address: model.address,
                city: model.city,
                country: model.country,
                status: model.status,
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            }
        }
    }

    impl From<crate::models::CreateProperty> for ActiveModel {
        fn from(input: crate::models::CreateProperty) -> Self {
            ActiveModel {
                id: Set(Uuid::now_v7()),
                name: Set(input.name),
                description: Set(input.description),
                address: Set(input.address),
                city: Set(input.city),
                country: Set(input.country),
                status: Set(PropertyStatus::Active),
                created_at: Set(chrono::Utc::now().into()),
                updated_at: Set(chrono::Utc::now().into()),
            }
        }
    }
}

/// Entity for the units table
pub mod unit {
    use crate::models::{Currency, Money, UnitStatus, UnitType};
    use sea_orm::ActiveValue::Set;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "units")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub property_id: Uuid,
        pub name: String,
        pub unit_type: UnitType,
        pub base_price_minor: i64,
        pub currency: Currency,
        pub max_guests: i32,
        pub bedrooms: i32,
        pub status: UnitStatus,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::property::Entity",
            from = "Column::PropertyId",
            to = "super::property::Column::Id",
            on_delete = "Cascade"
        )]
        Property,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Property.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Unit {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                property_id: model.property_id,
                name: model.name,
                unit_type: model.unit_type,
                base_price: Money::new(model.base_price_minor, model.currency),
                max_guests: model.max_guests,
                bedrooms: model.bedrooms,
                status: model.status,
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            }
        }
    }

    impl From<crate::models::CreateUnit> for ActiveModel {
        fn from(input: crate::models::CreateUnit) -> Self {
            ActiveModel {
                id: Set(Uuid::now_v7()),
                property_id: Set(input.property_id),
                name: Set(input.name),
                unit_type: Set(input.unit_type),
                base_price_minor: Set(input.base_price.amount_minor),
                currency: Set(input.base_price.currency),
                max_guests: Set(input.max_guests),
                bedrooms: Set(input.bedrooms),
                status: Set(UnitStatus::Active),
                created_at: Set(chrono::Utc::now().into()),
                updated_at: Set(chrono::Utc::now().into()),
            }
        }
    }
}
