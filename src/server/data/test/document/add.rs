use super::*;

/// Tests that add stamps both timestamps when the caller leaves them unset.
///
/// Expected: Ok with created_at == updated_at, both close to now
#[tokio::test]
async fn stamps_created_and_updated_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let model = DocumentStore::new(db)
        .add::<Announcement, _>(entity::announcement::ActiveModel {
            title: ActiveValue::Set("Gotong-royong".to_string()),
            content: ActiveValue::Set("Sabtu ini".to_string()),
            category: ActiveValue::Set("event".to_string()),
            priority: ActiveValue::Set("low".to_string()),
            published: ActiveValue::Set(true),
            author: ActiveValue::Set("Imam".to_string()),
            author_id: ActiveValue::Set("uid-1".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(model.created_at, model.updated_at);
    assert!(model.created_at >= before);

    Ok(())
}

/// Tests that add keeps timestamps supplied by the caller.
///
/// Imports rely on this to preserve the original creation time.
///
/// Expected: Ok with the supplied created_at
#[tokio::test]
async fn keeps_supplied_created_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = factory::helpers::seconds_ago(86_400);
    let model = DocumentStore::new(db)
        .add::<Announcement, _>(entity::announcement::ActiveModel {
            title: ActiveValue::Set("Lama".to_string()),
            content: ActiveValue::Set("Lama".to_string()),
            category: ActiveValue::Set("general".to_string()),
            priority: ActiveValue::Set("medium".to_string()),
            published: ActiveValue::Set(false),
            author: ActiveValue::Set("Admin".to_string()),
            author_id: ActiveValue::Set("uid-1".to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .await?;

    assert_eq!(model.created_at, created_at);
    assert!(model.updated_at > created_at);

    Ok(())
}
