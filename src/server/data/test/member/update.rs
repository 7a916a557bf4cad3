use super::*;

/// Tests editing a member.
///
/// Expected: Ok(Some) with new fields, created_at kept and updated_at advanced
#[tokio::test]
async fn replaces_fields_and_keeps_created_at() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::member::MemberFactory::new(db)
        .created_at(factory::helpers::seconds_ago(600))
        .build()
        .await?;

    let updated = MemberRepository::new(db)
        .update(
            original.id,
            MemberParam {
                status: MemberStatus::Inactive,
                notes: "Berpindah ke Johor".to_string(),
                ..member_param("Ahmad bin Ali")
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Ahmad bin Ali");
    assert_eq!(updated.status, MemberStatus::Inactive);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests editing a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(404, member_param("Tiada"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
