use super::*;

/// Tests finding an existing admin profile by uid.
///
/// Expected: Ok(Some) with the stored role parsed
#[tokio::test]
async fn finds_profile_with_parsed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .uid("uid-imam")
        .role("super_admin")
        .build()
        .await?;

    let admin = AdminUserRepository::new(db)
        .find_by_uid("uid-imam")
        .await?
        .unwrap();

    assert_eq!(admin.role, AdminRole::SuperAdmin);
    assert!(admin.can_sign_in());

    Ok(())
}

/// Tests looking up a uid with no profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminUserRepository::new(db).find_by_uid("nobody").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that an unknown stored role is reported rather than guessed.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .uid("uid-x")
        .role("caretaker")
        .build()
        .await?;

    let result = AdminUserRepository::new(db).find_by_uid("uid-x").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
