use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create booking_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(BookingStatus::Enum)
                    .values([
                        BookingStatus::Pending,
                        BookingStatus::Confirmed,
                        BookingStatus::Cancelled,
                        BookingStatus::CheckedOut,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_uuid(Bookings::Id))
                    .col(uuid(Bookings::UnitId))
                    .col(string(Bookings::GuestName))
                    .col(string(Bookings::GuestEmail))
                    .col(date(Bookings::CheckIn))
                    .col(date(Bookings::CheckOut))
                    .col(integer(Bookings::Guests).default(1))
                    .col(big_integer(Bookings::TotalPriceMinor))
                    .col(
                        ColumnDef::new(Bookings::Currency)
                            .enumeration(
                                Currency::Enum,
                                [Currency::Usd, Currency::Eur, Currency::Gbp],
                            )
                            .not_null()
                            .default("usd"),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .enumeration(
                                BookingStatus::Enum,
                                [
                                    BookingStatus::Pending,
                                    BookingStatus::Confirmed,
                                    BookingStatus::Cancelled,
                                    BookingStatus::CheckedOut,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(text_null(Bookings::Notes))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Bookings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_unit_id")
                            .from(Bookings::Table, Bookings::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(Expr::col(Bookings::CheckIn).lt(Expr::col(Bookings::CheckOut)))
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_unit_dates")
                    .table(Bookings::Table)
                    .col(Bookings::UnitId)
                    .col(Bookings::CheckIn)
                    .col(Bookings::CheckOut)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_guest_email")
                    .table(Bookings::Table)
                    .col(Bookings::GuestEmail)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER bookings_touch_updated_at
                    BEFORE UPDATE ON bookings
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
            .execute_unprepared("DROP TRIGGER IF EXISTS bookings_touch_updated_at ON bookings")
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BookingStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    UnitId,
    GuestName,
    GuestEmail,
    CheckIn,
    CheckOut,
    Guests,
    TotalPriceMinor,
    Currency,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum BookingStatus {
    #[sea_orm(iden = "booking_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "confirmed")]
    Confirmed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
    #[sea_orm(iden = "checked_out")]
    CheckedOut,
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
