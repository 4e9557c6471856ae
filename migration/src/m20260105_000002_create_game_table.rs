use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_uuid(Game::Id))
                    .col(string_uniq(Game::Name))
                    .col(integer(Game::MinPlayers))
                    .col(integer(Game::MaxPlayers))
                    .col(integer(Game::Instances).default(1))
                    .col(boolean(Game::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Game::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Name,
    MinPlayers,
    MaxPlayers,
    Instances,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
