use super::*;

/// Tests counting bookings per slot.
///
/// Verifies that only bookings of the requested slot are counted.
///
/// Expected: Ok(2) for the booked slot, Ok(0) for the other
#[tokio::test]
async fn counts_only_bookings_in_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, slot, first, second) = factory::helpers::create_slot_with_players(db).await?;
    let other_slot = factory::create_slot(db, game.id).await?;

    factory::create_booking(db, slot.id, first.id).await?;
    factory::create_booking(db, slot.id, second.id).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_by_slot(slot.id).await?, 2);
    assert_eq!(repo.count_by_slot(other_slot.id).await?, 0);

    Ok(())
}
