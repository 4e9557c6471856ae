use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{auth, booking, game, invitation, leaderboard, notification, slot, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "slotboard", description = "Game slot booking API"),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "user", description = "User lookups"),
        (name = "game", description = "Game catalogue"),
        (name = "slot", description = "Daily slots"),
        (name = "booking", description = "Slot bookings"),
        (name = "invitation", description = "Slot invitations"),
        (name = "leaderboard", description = "Results and rankings"),
        (name = "notification", description = "Inbox of invitation outcomes")
    )
)]
struct ApiDoc;

/// Builds every API route together with its OpenAPI description.
///
/// Handlers sharing a path are registered in the same `routes!` call.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(user::get_current_user))
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::get_user))
        .routes(routes!(game::get_all_games, game::create_game))
        .routes(routes!(game::get_game, game::delete_game))
        .routes(routes!(game::toggle_game_status))
        .routes(routes!(slot::get_current_day_slots))
        .routes(routes!(slot::get_slot))
        .routes(routes!(slot::get_slot_players))
        .routes(routes!(booking::make_booking, booking::get_bookings))
        .routes(routes!(
            invitation::make_invitation,
            invitation::get_pending_invitations
        ))
        .routes(routes!(invitation::update_invitation))
        .routes(routes!(leaderboard::get_game_leaderboard))
        .routes(routes!(leaderboard::get_my_game_stats))
        .routes(routes!(leaderboard::record_result))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::mark_notification_read))
}
