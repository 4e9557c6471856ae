use super::*;

/// Tests deleting an invitation twice.
///
/// Verifies that the first delete removes the row and the second is a no-op.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let repo = InvitationRepository::new(db);

    assert!(repo.delete(invitation.id).await?);
    assert!(!repo.delete(invitation.id).await?);
    assert!(repo.get_by_id(invitation.id).await?.is_none());

    Ok(())
}
