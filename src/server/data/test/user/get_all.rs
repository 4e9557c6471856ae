use super::*;

/// Tests listing users alphabetically.
///
/// Expected: Ok(vec) ordered by username
#[tokio::test]
async fn orders_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).username("zed").build().await?;
    factory::user::UserFactory::new(db).username("amy").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "zed"]);

    Ok(())
}
