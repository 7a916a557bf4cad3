use super::*;

/// Tests walking all pages of a collection with the continuation cursor.
///
/// Expected: Ok with pages of 2, 2, 1 in descending creation order and no overlap
#[tokio::test]
async fn walks_pages_with_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for age in [50, 40, 30, 20, 10] {
        factory::announcement::AnnouncementFactory::new(db)
            .title(format!("age-{}", age))
            .created_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let store = DocumentStore::new(db);
    let mut cursor: Option<Cursor> = None;
    let mut titles = Vec::new();
    let mut sizes = Vec::new();

    loop {
        let page = store
            .paginate::<Announcement>(2, cursor, Condition::all())
            .await?;
        sizes.push(page.items.len());
        titles.extend(page.items.into_iter().map(|a| a.title));

        assert_eq!(page.has_more, page.next_cursor.is_some());
        if !page.has_more {
            break;
        }
        cursor = page.next_cursor;
    }

    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(titles, vec!["age-10", "age-20", "age-30", "age-40", "age-50"]);

    Ok(())
}

/// Tests that rows sharing a creation time are split across pages by id.
///
/// Expected: Ok with higher ids first and every row returned exactly once
#[tokio::test]
async fn breaks_created_at_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = factory::helpers::seconds_ago(60);
    let mut ids = Vec::new();
    for _ in 0..3 {
        let row = factory::announcement::AnnouncementFactory::new(db)
            .created_at(at)
            .build()
            .await?;
        ids.push(row.id);
    }

    let store = DocumentStore::new(db);
    let first = store
        .paginate::<Announcement>(2, None, Condition::all())
        .await?;
    let second = store
        .paginate::<Announcement>(2, first.next_cursor, Condition::all())
        .await?;

    let first_ids: Vec<_> = first.items.iter().map(|a| a.id).collect();
    let second_ids: Vec<_> = second.items.iter().map(|a| a.id).collect();
    assert_eq!(first_ids, vec![ids[2], ids[1]]);
    assert_eq!(second_ids, vec![ids[0]]);
    assert!(!second.has_more);

    Ok(())
}
