use super::*;

/// Tests that inactive games are excluded from the active list.
///
/// Expected: Ok(vec) with only the active game
#[tokio::test]
async fn excludes_inactive_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_game(db).await?;
    factory::game::GameFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.get_active().await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, active.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
