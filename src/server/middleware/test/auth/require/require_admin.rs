use super::*;

/// Tests admin and super admin roles pass the admin permission check.
///
/// Expected: Ok(AdminUser) for both roles
#[tokio::test]
async fn grants_access_to_admin_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in ["admin", "super_admin"] {
        let admin = factory::admin_user::AdminUserFactory::new(db)
            .role(role)
            .display_name("Imam Besar")
            .build()
            .await?;

        AuthSession::new(session).set_admin_uid(&admin.uid).await?;

        let returned = AuthGuard::new(db, session)
            .require(&[Permission::Admin])
            .await?;

        assert_eq!(returned.uid, admin.uid);
        assert_eq!(returned.display_name, "Imam Besar");
        assert!(returned.can_sign_in());
    }

    Ok(())
}

/// Tests the staff role is denied the admin permission.
///
/// Verifies that a staff profile is rejected and its session cleared, since staff
/// may not use the admin area at all.
///
/// Expected: Err(AuthError::RoleNotPermitted) and no uid left in session
#[tokio::test]
async fn denies_access_to_staff() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let staff = factory::admin_user::AdminUserFactory::new(db)
        .role("staff")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_uid(&staff.uid).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleNotPermitted))
    ));
    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}
