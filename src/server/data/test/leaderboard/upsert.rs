use super::*;

/// Tests that the first upsert inserts a new entry.
///
/// Expected: Ok(LeaderboardEntry) readable by user and game
#[tokio::test]
async fn inserts_new_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let repo = LeaderboardRepository::new(db);
    let entry = LeaderboardEntry::empty(user.id, game.id).record(MatchOutcome::Win);
    repo.upsert(entry.clone()).await?;

    let stored = repo.get_by_user_and_game(user.id, game.id).await?.unwrap();
    assert_eq!(stored.wins, 1);
    assert_eq!(stored.losses, 0);
    assert_eq!(stored.score, entry.score);

    Ok(())
}

/// Tests that a second upsert for the same user and game replaces the counters.
///
/// Expected: one row holding the latest counters
#[tokio::test]
async fn updates_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let repo = LeaderboardRepository::new(db);
    let first = LeaderboardEntry::empty(user.id, game.id).record(MatchOutcome::Win);
    repo.upsert(first.clone()).await?;
    repo.upsert(first.record(MatchOutcome::Loss)).await?;

    let stored = repo.get_by_user_and_game(user.id, game.id).await?.unwrap();
    assert_eq!(stored.wins, 1);
    assert_eq!(stored.losses, 1);
    assert_eq!(repo.get_game_leaderboard(game.id).await?.len(), 1);

    Ok(())
}
