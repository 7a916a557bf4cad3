use super::*;

/// Tests that only active profiles are counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_active_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin_user(db).await?;
    factory::admin_user::AdminUserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    factory::admin_user::AdminUserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let count = AdminUserRepository::new(db).count_active().await?;

    assert_eq!(count, 2);

    Ok(())
}
