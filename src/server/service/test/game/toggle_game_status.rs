use super::*;

/// Tests toggling a game off and back on.
///
/// Expected: inactive after the first toggle, active after the second
#[tokio::test]
async fn toggles_back_and_forth() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let service = GameService::new(db);

    assert!(!service.toggle_game_status(game.id).await?.is_active);
    assert!(service.toggle_game_status(game.id).await?.is_active);
    assert!(service.get_game(game.id).await?.is_active);

    Ok(())
}

/// Tests toggling a game that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let result = service.toggle_game_status(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
