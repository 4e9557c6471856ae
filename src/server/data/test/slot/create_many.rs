use super::*;

/// Tests inserting several slots at once.
///
/// Expected: Ok(3) and three open slots stored for the game and date
#[tokio::test]
async fn inserts_all_slots_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let start = Utc::now() + Duration::hours(1);
    let date = start.date_naive();

    let params = (0..3)
        .map(|i| CreateSlotParams {
            game_id: game.id,
            date,
            start_time: start + Duration::minutes(20 * i),
            end_time: start + Duration::minutes(20 * (i + 1)),
        })
        .collect();

    let repo = SlotRepository::new(db);
    let created = repo.create_many(params).await?;

    assert_eq!(created, 3);
    assert_eq!(repo.count_by_game_and_date(game.id, date).await?, 3);
    let slots = repo.get_by_game_and_date(game.id, date).await?;
    assert!(slots.iter().all(|s| !s.is_booked));

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SlotRepository::new(db);

    assert_eq!(repo.create_many(Vec::new()).await?, 0);

    Ok(())
}
