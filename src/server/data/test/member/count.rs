use super::*;

/// Tests counting all and active members.
///
/// Expected: Ok(3) overall and Ok(2) active
#[tokio::test]
async fn counts_all_and_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;
    factory::create_member(db).await?;
    factory::member::MemberFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.count(false).await?, 3);
    assert_eq!(repo.count(true).await?, 2);

    Ok(())
}
