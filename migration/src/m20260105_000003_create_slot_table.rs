use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slot::Table)
                    .if_not_exists()
                    .col(pk_uuid(Slot::Id))
                    .col(uuid(Slot::GameId))
                    .col(date(Slot::Date))
                    .col(timestamp_with_time_zone(Slot::StartTime))
                    .col(timestamp_with_time_zone(Slot::EndTime))
                    .col(boolean(Slot::IsBooked).default(false))
                    .col(
                        timestamp_with_time_zone(Slot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_game_id")
                            .from(Slot::Table, Slot::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_slot_game_id_date")
                    .table(Slot::Table)
                    .col(Slot::GameId)
                    .col(Slot::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Slot {
    Table,
    Id,
    GameId,
    Date,
    StartTime,
    EndTime,
    IsBooked,
    CreatedAt,
}
