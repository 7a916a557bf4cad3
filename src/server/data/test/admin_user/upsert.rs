use super::*;

fn param(role: AdminRole, active: bool) -> UpsertAdminUserParam {
    UpsertAdminUserParam {
        uid: "uid-bendahari".to_string(),
        email: "bendahari@masjid.test".to_string(),
        display_name: "Bendahari".to_string(),
        role,
        active,
    }
}

/// Tests creating a profile.
///
/// Expected: Ok with the profile stored under the uid
#[tokio::test]
async fn creates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let created = repo.upsert(param(AdminRole::Admin, true)).await?;

    assert_eq!(created.uid, "uid-bendahari");
    assert_eq!(repo.find_by_uid("uid-bendahari").await?, Some(created));

    Ok(())
}

/// Tests replacing an existing profile with the same uid.
///
/// Expected: Ok with role and active flag replaced, still one row
#[tokio::test]
async fn replaces_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    repo.upsert(param(AdminRole::Admin, true)).await?;
    let updated = repo.upsert(param(AdminRole::Staff, false)).await?;

    assert_eq!(updated.role, AdminRole::Staff);
    assert!(!updated.active);
    assert_eq!(repo.count_active().await?, 0);

    Ok(())
}
