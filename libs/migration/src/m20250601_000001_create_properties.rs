use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create property_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(PropertyStatus::Enum)
                    .values([PropertyStatus::Active, PropertyStatus::Inactive])
                    .to_owned(),
            )
            .await?;

        // Create properties table
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(pk_uuid(Properties::Id))
                    .col(string(Properties::Name))
                    .col(text_null(Properties::Description))
                    .col(text(Properties::Address))
                    .col(string(Properties::City))
                    .col(string(Properties::Country))
                    .col(
                        ColumnDef::new(Properties::Status)
                            .enumeration(
                                PropertyStatus::Enum,
                                [PropertyStatus::Active, PropertyStatus::Inactive],
                            )
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        timestamp_with_time_zone(Properties::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Properties::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_status")
                    .table(Properties::Table)
                    .col(Properties::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_city")
                    .table(Properties::Table)
                    .col(Properties::City)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER properties_touch_updated_at
                    BEFORE UPDATE ON properties
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
            .execute_unprepared("DROP TRIGGER IF EXISTS properties_touch_updated_at ON properties")
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PropertyStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Name,
    Description,
    Address,
    City,
    Country,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PropertyStatus {
    #[sea_orm(iden = "property_status")]
    Enum,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "inactive")]
    Inactive,
}
