use super::*;

/// Tests fetching the newest published announcements for the home page.
///
/// Expected: Ok with the two newest published titles, draft skipped
#[tokio::test]
async fn returns_newest_published() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (title, age, published) in [
        ("Lama", 300, true),
        ("Draf", 5, false),
        ("Baru", 10, true),
        ("Sederhana", 100, true),
    ] {
        factory::announcement::AnnouncementFactory::new(db)
            .title(title)
            .published(published)
            .created_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let repo = AnnouncementRepository::new(db);
    let latest = repo.get_latest_published(2).await?;

    let titles: Vec<_> = latest.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Baru", "Sederhana"]);
    assert_eq!(repo.count_published().await?, 3);

    Ok(())
}
