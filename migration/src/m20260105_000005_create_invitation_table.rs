use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_game_table::Game,
    m20260105_000003_create_slot_table::Slot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Invitation::Id))
                    .col(uuid(Invitation::InvitingUserId))
                    .col(uuid(Invitation::InvitedUserId))
                    .col(uuid(Invitation::SlotId))
                    .col(uuid(Invitation::GameId))
                    .col(
                        timestamp_with_time_zone(Invitation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_inviting_user_id")
                            .from(Invitation::Table, Invitation::InvitingUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_invited_user_id")
                            .from(Invitation::Table, Invitation::InvitedUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_slot_id")
                            .from(Invitation::Table, Invitation::SlotId)
                            .to(Slot::Table, Slot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_game_id")
                            .from(Invitation::Table, Invitation::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invitation_inviting_invited_slot")
                    .table(Invitation::Table)
                    .col(Invitation::InvitingUserId)
                    .col(Invitation::InvitedUserId)
                    .col(Invitation::SlotId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    Id,
    InvitingUserId,
    InvitedUserId,
    SlotId,
    GameId,
    CreatedAt,
}
