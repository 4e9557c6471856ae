use super::*;

/// Tests leaderboard ordering.
///
/// Verifies that rows are sorted by score descending and scoped to the game.
///
/// Expected: Ok(vec) with the stronger player first
#[tokio::test]
async fn orders_by_score_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let weak = factory::create_user(db).await?;
    let strong = factory::create_user(db).await?;

    let repo = LeaderboardRepository::new(db);
    repo.upsert(LeaderboardEntry::empty(weak.id, game.id).record(MatchOutcome::Loss))
        .await?;
    repo.upsert(
        LeaderboardEntry::empty(strong.id, game.id)
            .record(MatchOutcome::Win)
            .record(MatchOutcome::Win),
    )
    .await?;
    repo.upsert(LeaderboardEntry::empty(weak.id, other_game.id).record(MatchOutcome::Win))
        .await?;

    let rows = repo.get_game_leaderboard(game.id).await?;

    let names: Vec<_> = rows.iter().map(|r| r.username.clone()).collect();
    assert_eq!(names, vec![strong.username, weak.username]);
    assert!(rows[0].score > rows[1].score);

    Ok(())
}
