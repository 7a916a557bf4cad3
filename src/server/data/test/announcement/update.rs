use super::*;

/// Tests that editing keeps authorship and creation time.
///
/// Expected: Ok(Some) with new fields and the original author
#[tokio::test]
async fn keeps_author_and_created_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let original = repo
        .add(
            announcement_param("Draf", false),
            author(),
            Some(factory::helpers::seconds_ago(120)),
        )
        .await?;

    let updated = repo
        .update(original.id, announcement_param("Diterbitkan", true))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Diterbitkan");
    assert!(updated.published);
    assert_eq!(updated.author, original.author);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}
