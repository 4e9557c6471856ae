use super::*;

/// Tests closing an open slot.
///
/// Expected: Ok(()) and the slot reads back as booked
#[tokio::test]
async fn closes_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let slot = factory::create_slot(db, game.id).await?;

    let service = SlotService::new(db, ist());
    service.mark_slot_as_booked(slot.id).await?;

    assert!(service.get_slot(slot.id).await?.is_booked);

    Ok(())
}

/// Tests closing a slot that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SlotService::new(db, ist());
    let result = service.mark_slot_as_booked(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
