use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000002_create_game_table::Game};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(pk_uuid(Leaderboard::Id))
                    .col(uuid(Leaderboard::UserId))
                    .col(uuid(Leaderboard::GameId))
                    .col(integer(Leaderboard::Wins).default(0))
                    .col(integer(Leaderboard::Losses).default(0))
                    .col(double(Leaderboard::Score).default(0.0))
                    .col(
                        timestamp_with_time_zone(Leaderboard::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Leaderboard::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_user_id")
                            .from(Leaderboard::Table, Leaderboard::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_game_id")
                            .from(Leaderboard::Table, Leaderboard::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert target
        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_user_id_game_id")
                    .table(Leaderboard::Table)
                    .col(Leaderboard::UserId)
                    .col(Leaderboard::GameId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leaderboard {
    Table,
    Id,
    UserId,
    GameId,
    Wins,
    Losses,
    Score,
    CreatedAt,
    UpdatedAt,
}
