use super::*;

/// Tests creating a game.
///
/// Expected: Ok(Game) that is active and listed
#[tokio::test]
async fn creates_active_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let game = service.create_game(params("Foosball")).await?;

    assert_eq!(game.name, "Foosball");
    assert_eq!(game.max_players, 4);
    assert!(game.is_active);

    let all = service.get_all_games().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, game.id);

    Ok(())
}

/// Tests creating a game whose name is taken.
///
/// Expected: Err(BookingError::AlreadyExists)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    service.create_game(params("Table Tennis")).await?;

    let result = service.create_game(params("Table Tennis")).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyExists(_)))
    ));

    Ok(())
}

/// Tests creating a game with invalid player counts.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_invalid_player_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let result = service
        .create_game(CreateGameParams {
            min_players: 5,
            ..params("Chess")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all_games().await?.is_empty());

    Ok(())
}
