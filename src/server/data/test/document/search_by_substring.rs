use super::*;

/// Tests case-insensitive substring search on one column.
///
/// Expected: Ok with only the members whose name contains the term
#[tokio::test]
async fn matches_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .full_name("Ahmad bin Ali")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .full_name("Siti binti AHMAD")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .full_name("Zainab")
        .build()
        .await?;

    let found = DocumentStore::new(db)
        .search_by_substring::<Member>(entity::member::Column::FullName, "ahmad")
        .await?;

    let mut names: Vec<_> = found.into_iter().map(|m| m.full_name).collect();
    names.sort();
    assert_eq!(names, vec!["Ahmad bin Ali", "Siti binti AHMAD"]);

    Ok(())
}

/// Tests that a non-text column never matches.
///
/// Expected: Ok with no results
#[tokio::test]
async fn ignores_non_text_columns() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let found = DocumentStore::new(db)
        .search_by_substring::<Member>(entity::member::Column::Id, &member.id.to_string())
        .await?;

    assert!(found.is_empty());

    Ok(())
}
