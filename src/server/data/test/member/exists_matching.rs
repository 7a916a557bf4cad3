use super::*;

/// Tests detecting a member already written with the same identity fields.
///
/// Expected: Ok(true) only when IC number, name and creation time all match
#[tokio::test]
async fn matches_on_ic_name_and_creation_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = factory::helpers::seconds_ago(3_600);
    factory::member::MemberFactory::new(db)
        .full_name("Aminah binti Salleh")
        .ic_number("750303-08-4321")
        .created_at(created_at)
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(
        repo.exists_matching("750303-08-4321", "Aminah binti Salleh", Some(created_at))
            .await?
    );
    assert!(
        repo.exists_matching("750303-08-4321", "Aminah binti Salleh", None)
            .await?
    );
    // Same IC, different person
    assert!(
        !repo
            .exists_matching("750303-08-4321", "Rahim bin Salleh", Some(created_at))
            .await?
    );
    assert!(
        !repo
            .exists_matching(
                "750303-08-4321",
                "Aminah binti Salleh",
                Some(factory::helpers::seconds_ago(60))
            )
            .await?
    );

    Ok(())
}
