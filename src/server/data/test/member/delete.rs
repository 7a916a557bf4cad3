use super::*;

/// Tests deleting a member.
///
/// Expected: Ok(true) then Ok(false) for the same id
#[tokio::test]
async fn deletes_member_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    assert!(repo.delete(member.id).await?);
    assert!(!repo.delete(member.id).await?);
    assert!(repo.get_by_id(member.id).await?.is_none());

    Ok(())
}
