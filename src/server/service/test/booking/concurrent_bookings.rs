use super::*;

use crate::server::startup::connect_sqlite;

/// Opens a migrated file-backed database through the production pool settings.
async fn file_database() -> Result<(sea_orm::DatabaseConnection, std::path::PathBuf), AppError> {
    let path = std::env::temp_dir().join(format!("slotboard-{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = connect_sqlite(&url).await?;

    Ok((db, path))
}

/// Tests two simultaneous bookings for the last two seats of a slot.
///
/// Runs the pair against a file-backed database opened with the production pool, where
/// concurrent write transactions share one connection instead of racing for the Sqlite
/// write lock. Repeated so that interleavings vary between rounds.
///
/// Expected: both bookings succeed in every round and the slot ends up closed
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_both_succeed() -> Result<(), AppError> {
    let (db, path) = file_database().await?;

    let game = factory::game::GameFactory::new(&db)
        .max_players(2)
        .build()
        .await?;

    for _ in 0..20 {
        let slot = factory::create_slot(&db, game.id).await?;
        let first = factory::create_user(&db).await?;
        let second = factory::create_user(&db).await?;

        let service = BookingService::new(&db, ist());
        let (a, b) = tokio::join!(
            service.make_booking(first.id, slot.id, game.id),
            service.make_booking(second.id, slot.id, game.id)
        );

        assert!(a.is_ok(), "first booking failed: {:?}", a.err());
        assert!(b.is_ok(), "second booking failed: {:?}", b.err());
        assert_eq!(BookingRepository::new(&db).count_by_slot(slot.id).await?, 2);
        assert!(SlotRepository::new(&db).get_by_id(slot.id).await?.unwrap().is_booked);
    }

    db.close().await?;
    let _ = std::fs::remove_file(&path);

    Ok(())
}
