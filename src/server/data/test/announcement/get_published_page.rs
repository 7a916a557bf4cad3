use super::*;

/// Tests the public page size and continuation over published announcements.
///
/// Creates 23 published and 3 draft announcements.
///
/// Expected: Ok with 20 then 3 published items, drafts never returned
#[tokio::test]
async fn pages_published_announcements_by_twenty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..26 {
        factory::announcement::AnnouncementFactory::new(db)
            .published(i % 9 != 0)
            .created_at(factory::helpers::seconds_ago(1_000 - i))
            .build()
            .await?;
    }

    let repo = AnnouncementRepository::new(db);
    let first = repo.get_published_page(None).await?;

    assert_eq!(first.items.len(), 20);
    assert!(first.has_more);
    assert!(first.items.iter().all(|a| a.published));
    assert!(first
        .items
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));

    let second = repo.get_published_page(first.next_cursor).await?;

    assert_eq!(second.items.len(), 3);
    assert!(!second.has_more);
    assert!(second.next_cursor.is_none());
    assert!(second
        .items
        .iter()
        .all(|a| first.items.iter().all(|b| b.id != a.id)));

    Ok(())
}

/// Tests a collection with exactly one page of published items.
///
/// Expected: Ok with has_more false and no cursor
#[tokio::test]
async fn reports_no_more_on_exact_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..20 {
        factory::create_announcement(db).await?;
    }

    let page = AnnouncementRepository::new(db)
        .get_published_page(None)
        .await?;

    assert_eq!(page.items.len(), 20);
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());

    Ok(())
}
