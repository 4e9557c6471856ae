use super::*;

/// Tests listing a user's notifications.
///
/// Verifies newest-first ordering and that other users' notifications are excluded.
///
/// Expected: Ok(Vec) with the user's two notifications, newest first
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let older = factory::notification::NotificationFactory::new(db, user.id)
        .message("older")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::notification::NotificationFactory::new(db, user.id)
        .message("newer")
        .read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let notifications = NotificationRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].id, newer.id);
    assert!(notifications[0].is_read);
    assert_eq!(notifications[1].id, older.id);

    Ok(())
}

/// Tests listing for a user without notifications.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(NotificationRepository::new(db)
        .get_by_user(user.id)
        .await?
        .is_empty());

    Ok(())
}
