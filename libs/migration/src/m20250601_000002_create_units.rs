use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create unit_type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(UnitType::Enum)
                    .values([
                        UnitType::Room,
                        UnitType::Apartment,
                        UnitType::Studio,
                        UnitType::Villa,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create unit_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(UnitStatus::Enum)
                    .values([UnitStatus::Active, UnitStatus::Inactive])
                    .to_owned(),
            )
            .await?;

        // Create currency enum (shared with bookings)
        manager
            .create_type(
                Type::create()
                    .as_enum(Currency::Enum)
                    .values([Currency::Usd, Currency::Eur, Currency::Gbp])
                    .to_owned(),
            )
            .await?;

        // Create units table
        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(pk_uuid(Units::Id))
                    .col(uuid(Units::PropertyId))
                    .col(string(Units::Name))
                    .col(
                        ColumnDef::new(Units::UnitType)
                            .enumeration(
                                UnitType::Enum,
                                [
                                    UnitType::Room,
                                    UnitType::Apartment,
                                    UnitType::Studio,
                                    UnitType::Villa,
                                ],
                            )
                            .not_null()
                            .default("room"),
                    )
                    .col(big_integer(Units::BasePriceMinor))
                    .col(
                        ColumnDef::new(Units::Currency)
                            .enumeration(
                                Currency::Enum,
                                [Currency::Usd, Currency::Eur, Currency::Gbp],
                            )
                            .not_null()
                            .default("usd"),
                    )
                    .col(integer(Units::MaxGuests).default(2))
                    .col(integer(Units::Bedrooms).default(1))
                    .col(
                        ColumnDef::new(Units::Status)
                            .enumeration(
                                UnitStatus::Enum,
                                [UnitStatus::Active, UnitStatus::Inactive],
                            )
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        timestamp_with_time_zone(Units::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Units::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_units_property_id")
                            .from(Units::Table, Units::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_units_property_id")
                    .table(Units::Table)
                    .col(Units::PropertyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_units_status")
                    .table(Units::Table)
                    .col(Units::Status)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER units_touch_updated_at
                    BEFORE UPDATE ON units
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS units_touch_updated_at ON units")
            .await?;

        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Currency::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(UnitStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(UnitType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
    PropertyId,
    Name,
    UnitType,
    BasePriceMinor,
    Currency,
    MaxGuests,
    Bedrooms,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UnitType {
    #[sea_orm(iden = "unit_type")]
    Enum,
    #[sea_orm(iden = "room")]
    Room,
    #[sea_orm(iden = "apartment")]
    Apartment,
    #[sea_orm(iden = "studio")]
    Studio,
    #[sea_orm(iden = "villa")]
    Villa,
}

#[derive(DeriveIden)]
enum UnitStatus {
    #[sea_orm(iden = "unit_status")]
    Enum,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "inactive")]
    Inactive,
}

#[derive(DeriveIden)]
enum Currency {
    #[sea_orm(iden = "currency")]
    Enum,
    #[sea_orm(iden = "usd")]
    Usd,
    #[sea_orm(iden = "eur")]
    Eur,
    #[sea_orm(iden = "gbp")]
    Gbp,
}
