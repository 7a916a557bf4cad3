use super::*;

/// Tests adding a member.
///
/// Expected: Ok with an id assigned and both timestamps equal
#[tokio::test]
async fn adds_member_with_timestamps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.add(member_param("Ahmad bin Ali")).await?;

    assert!(member.id > 0);
    assert_eq!(member.full_name, "Ahmad bin Ali");
    assert_eq!(member.created_at, member.updated_at);
    assert_eq!(repo.get_by_id(member.id).await?, Some(member));

    Ok(())
}
