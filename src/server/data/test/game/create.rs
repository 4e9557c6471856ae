use super::*;

fn params(name: &str) -> CreateGameParams {
    CreateGameParams {
        name: name.to_string(),
        min_players: 2,
        max_players: 4,
        instances: 1,
    }
}

/// Tests creating a game.
///
/// Verifies that new games are stored as active with the given player bounds.
///
/// Expected: Ok(Game) with is_active true
#[tokio::test]
async fn creates_active_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo.create(params("Table Tennis")).await?;

    assert_eq!(game.name, "Table Tennis");
    assert_eq!(game.max_players, 4);
    assert!(game.is_active);
    assert!(repo.exists_by_name("Table Tennis").await?);

    Ok(())
}

/// Tests that game names are unique.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    repo.create(params("Foosball")).await?;

    let result = repo.create(params("Foosball")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
