use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create availability_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(AvailabilityStatus::Enum)
                    .values([
                        AvailabilityStatus::Available,
                        AvailabilityStatus::Blocked,
                        AvailabilityStatus::Maintenance,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create availability_records table
        manager
            .create_table(
                Table::create()
                    .table(AvailabilityRecords::Table)
                    .if_not_exists()
                    .col(pk_uuid(AvailabilityRecords::Id))
                    .col(uuid(AvailabilityRecords::UnitId))
                    .col(date(AvailabilityRecords::StartDate))
                    .col(date(AvailabilityRecords::EndDate))
                    .col(
                        ColumnDef::new(AvailabilityRecords::Status)
                            .enumeration(
                                AvailabilityStatus::Enum,
                                [
                                    AvailabilityStatus::Available,
                                    AvailabilityStatus::Blocked,
                                    AvailabilityStatus::Maintenance,
                                ],
                            )
                            .not_null()
                            .default("available"),
                    )
                    .col(string_null(AvailabilityRecords::Reason))
                    .col(text_null(AvailabilityRecords::Notes))
                    .col(boolean(AvailabilityRecords::Overridden).default(false))
                    .col(
                        timestamp_with_time_zone(AvailabilityRecords::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(AvailabilityRecords::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_records_unit_id")
                            .from(AvailabilityRecords::Table, AvailabilityRecords::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(
                        Expr::col(AvailabilityRecords::StartDate)
                            .lt(Expr::col(AvailabilityRecords::EndDate)),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap scans filter by unit then by range
        manager
            .create_index(
                Index::create()
                    .name("idx_availability_records_unit_dates")
                    .table(AvailabilityRecords::Table)
                    .col(AvailabilityRecords::UnitId)
                    .col(AvailabilityRecords::StartDate)
                    .col(AvailabilityRecords::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_records_status")
                    .table(AvailabilityRecords::Table)
                    .col(AvailabilityRecords::Status)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER availability_records_touch_updated_at
                    BEFORE UPDATE ON availability_records
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
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS availability_records_touch_updated_at ON availability_records",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AvailabilityRecords::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(AvailabilityStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AvailabilityRecords {
    Table,
    Id,
    UnitId,
    StartDate,
    EndDate,
    Status,
    Reason,
    Notes,
    Overridden,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AvailabilityStatus {
    #[sea_orm(iden = "availability_status")]
    Enum,
    #[sea_orm(iden = "available")]
    Available,
    #[sea_orm(iden = "blocked")]
    Blocked,
    #[sea_orm(iden = "maintenance")]
    Maintenance,
}
