use super::*;

/// Tests that upcoming bookings carry game name and co-booked usernames.
///
/// Expected: Ok(vec) with one summary listing both booked users
#[tokio::test]
async fn includes_game_name_and_booked_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, slot, first, second) = factory::helpers::create_slot_with_players(db).await?;
    factory::create_booking(db, slot.id, first.id).await?;
    factory::create_booking(db, slot.id, second.id).await?;

    let repo = BookingRepository::new(db);
    let upcoming = repo.get_upcoming_by_user(first.id, Utc::now()).await?;

    assert_eq!(upcoming.len(), 1);
    let summary = &upcoming[0];
    assert_eq!(summary.slot_id, slot.id);
    assert_eq!(summary.game_name, game.name);
    assert_eq!(summary.booked_users, vec![first.username, second.username]);
    assert_eq!(summary.result, BookingResult::Pending);

    Ok(())
}

/// Tests that bookings for slots that already started are excluded and the rest are
/// ordered by start time.
///
/// Expected: Ok(vec) with the two future slots, earliest first
#[tokio::test]
async fn excludes_started_slots_and_orders_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let past = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::minutes(-30))
        .build()
        .await?;
    let later = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::hours(3))
        .build()
        .await?;
    let sooner = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::hours(1))
        .build()
        .await?;

    for slot in [&past, &later, &sooner] {
        factory::create_booking(db, slot.id, user.id).await?;
    }

    let repo = BookingRepository::new(db);
    let upcoming = repo.get_upcoming_by_user(user.id, Utc::now()).await?;

    let slot_ids: Vec<_> = upcoming.iter().map(|b| b.slot_id).collect();
    assert_eq!(slot_ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests that a user with no bookings gets an empty list.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let upcoming = repo.get_upcoming_by_user(user.id, Utc::now()).await?;

    assert!(upcoming.is_empty());

    Ok(())
}
