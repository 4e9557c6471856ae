use super::*;

/// Tests storing a notification.
///
/// Expected: Ok(Notification) unread, owned by the user, readable back by ID
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(user.id, "bob accepted your invitation".to_string())
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.message, "bob accepted your invitation");
    assert!(!notification.is_read);

    let stored = repo.get_by_id(notification.id).await?.unwrap();
    assert_eq!(stored.message, notification.message);

    Ok(())
}

/// Tests storing a notification for a user that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NotificationRepository::new(db)
        .create(uuid::Uuid::new_v4(), "hello".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
