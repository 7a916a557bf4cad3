use super::*;

/// Tests listing with a filter, ordering and limit.
///
/// Expected: Ok with only published rows, newest first, capped at the limit
#[tokio::test]
async fn applies_filter_order_and_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (age, published) in [(30, true), (20, false), (10, true), (5, true)] {
        factory::announcement::AnnouncementFactory::new(db)
            .title(format!("age-{}", age))
            .published(published)
            .created_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let rows = DocumentStore::new(db)
        .list::<Announcement>(
            ListQuery::new()
                .filter(entity::announcement::Column::Published.eq(true))
                .order_by(entity::announcement::Column::CreatedAt, Order::Desc)
                .limit(2),
        )
        .await?;

    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["age-5", "age-10"]);

    Ok(())
}

/// Tests that failures carry the collection and operation names.
///
/// The table is never created, so the query fails.
///
/// Expected: Err(StorageError) naming "member" and "list"
#[tokio::test]
async fn reports_collection_and_operation_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = DocumentStore::new(db)
        .list::<Member>(ListQuery::new())
        .await
        .unwrap_err();

    assert_eq!(err.collection, "member");
    assert_eq!(err.operation, "list");

    Ok(())
}
