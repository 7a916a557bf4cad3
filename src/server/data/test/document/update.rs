use super::*;

/// Tests that update stamps only updated_at.
///
/// Expected: Ok(Some) with created_at unchanged and updated_at advanced
#[tokio::test]
async fn stamps_only_updated_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::announcement::AnnouncementFactory::new(db)
        .created_at(factory::helpers::seconds_ago(3_600))
        .build()
        .await?;

    let updated = DocumentStore::new(db)
        .update::<Announcement, _>(entity::announcement::ActiveModel {
            id: ActiveValue::Unchanged(original.id),
            title: ActiveValue::Set("Tajuk Baharu".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Tajuk Baharu");
    assert_eq!(updated.content, original.content);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests updating a document that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DocumentStore::new(db)
        .update::<Announcement, _>(entity::announcement::ActiveModel {
            id: ActiveValue::Unchanged(999),
            title: ActiveValue::Set("Tiada".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
