use super::*;

/// Tests recording a sign-in time.
///
/// Expected: Ok with last_login set
#[tokio::test]
async fn sets_last_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_user(db).await?;
    assert!(admin.last_login.is_none());

    let repo = AdminUserRepository::new(db);
    repo.touch_last_login(&admin.uid).await?;

    let admin = repo.find_by_uid(&admin.uid).await?.unwrap();
    assert!(admin.last_login.is_some());

    Ok(())
}

/// Tests touching a uid with no profile.
///
/// Expected: Ok(()) without creating a row
#[tokio::test]
async fn ignores_unknown_uid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    repo.touch_last_login("nobody").await?;

    assert!(repo.find_by_uid("nobody").await?.is_none());

    Ok(())
}
