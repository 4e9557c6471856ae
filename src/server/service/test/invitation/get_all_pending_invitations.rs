use super::*;

/// Tests listing invitations for the invitee.
///
/// Expected: the invitee sees the invitation, the inviter sees none
#[tokio::test]
async fn lists_invitations_for_invitee_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;

    let service = InvitationService::new(db, ist());
    let invitation_id = service.make_invitation(invite(&host, &guest, &slot)).await?;

    let pending = service.get_all_pending_invitations(guest.id).await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].invitation_id, invitation_id);
    assert_eq!(pending[0].invited_by, host.username);

    assert!(service
        .get_all_pending_invitations(host.id)
        .await?
        .is_empty());

    Ok(())
}
