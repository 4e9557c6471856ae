use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000003_create_slot_table::Slot};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_uuid(Booking::Id))
                    .col(uuid(Booking::SlotId))
                    .col(uuid(Booking::UserId))
                    .col(string(Booking::Result).default("pending"))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_slot_id")
                            .from(Booking::Table, Booking::SlotId)
                            .to(Slot::Table, Slot::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One booking per user per slot
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_slot_id_user_id")
                    .table(Booking::Table)
                    .col(Booking::SlotId)
                    .col(Booking::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    SlotId,
    UserId,
    Result,
    CreatedAt,
}
