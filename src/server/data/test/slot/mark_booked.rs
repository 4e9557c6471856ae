use super::*;

/// Tests closing a slot.
///
/// Expected: Ok(true) and is_booked reads back true
#[tokio::test]
async fn marks_slot_booked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let slot = factory::create_slot(db, game.id).await?;

    let repo = SlotRepository::new(db);

    assert!(repo.mark_booked(slot.id).await?);
    assert!(repo.get_by_id(slot.id).await?.unwrap().is_booked);

    Ok(())
}

/// Tests closing a slot that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SlotRepository::new(db);

    assert!(!repo.mark_booked(uuid::Uuid::new_v4()).await?);

    Ok(())
}
