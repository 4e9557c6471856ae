use super::*;

/// Tests updating the active flag.
///
/// Verifies that the flag and `updated_at` are both written.
///
/// Expected: Ok(Some(Game)) with is_active false and a later updated_at
#[tokio::test]
async fn updates_flag_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let later = Utc::now() + Duration::minutes(5);

    let repo = GameRepository::new(db);
    let updated = repo.set_active(game.id, false, later).await?.unwrap();

    assert!(!updated.is_active);
    assert!(updated.updated_at > game.updated_at);

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let result = repo
        .set_active(uuid::Uuid::new_v4(), false, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
