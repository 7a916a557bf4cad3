use super::*;

mod require_admin;

/// Tests an empty session is rejected.
///
/// Verifies that the guard fails before touching the database when no admin uid
/// has been stored in the session.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_session_without_uid() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a uid whose profile was deleted clears the session.
///
/// Verifies that a session pointing at a missing admin profile is rejected and
/// emptied, so the client is treated as logged out afterwards.
///
/// Expected: Err(AuthError::ProfileNotFound) and no uid left in session
#[tokio::test]
async fn clears_session_for_missing_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_uid("uid-deleted").await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ProfileNotFound))
    ));
    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}

/// Tests a deactivated profile clears the session.
///
/// Verifies that deactivating an admin after sign-in revokes their session on the
/// next guarded request.
///
/// Expected: Err(AuthError::AccountInactive) and no uid left in session
#[tokio::test]
async fn clears_session_for_inactive_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::admin_user::AdminUserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_uid(&admin.uid).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive))
    ));
    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}

/// Tests empty permission list grants access to an active profile.
///
/// Expected: Ok(AdminUser) for the signed-in uid
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::admin_user::AdminUserFactory::new(db)
        .role("staff")
        .build()
        .await?;

    AuthSession::new(session).set_admin_uid(&admin.uid).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.uid, admin.uid);

    Ok(())
}
