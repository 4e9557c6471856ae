use super::*;

/// Tests filtering slots by game and date, ordered by start time.
///
/// Expected: Ok(vec) with the game's slots on the date, earliest first
#[tokio::test]
async fn filters_by_game_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    let date = Utc::now().date_naive();
    let tomorrow = date.succ_opt().unwrap();

    let later = factory::slot::SlotFactory::new(db, game.id)
        .date(date)
        .starts_in(Duration::hours(2))
        .build()
        .await?;
    let earlier = factory::slot::SlotFactory::new(db, game.id)
        .date(date)
        .starts_in(Duration::hours(1))
        .build()
        .await?;
    factory::slot::SlotFactory::new(db, game.id)
        .date(tomorrow)
        .build()
        .await?;
    factory::slot::SlotFactory::new(db, other_game.id)
        .date(date)
        .build()
        .await?;

    let repo = SlotRepository::new(db);
    let slots = repo.get_by_game_and_date(game.id, date).await?;

    let ids: Vec<_> = slots.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(repo.count_by_game(game.id).await?, 3);

    Ok(())
}
