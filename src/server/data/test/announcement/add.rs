use super::*;

/// Tests adding an announcement with author attribution.
///
/// Expected: Ok with author fields stamped from the signed-in admin
#[tokio::test]
async fn attributes_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = AnnouncementRepository::new(db)
        .add(announcement_param("Ceramah Maulid", false), author(), None)
        .await?;

    assert_eq!(announcement.author, "Imam Besar");
    assert_eq!(announcement.author_id, "uid-imam");
    assert!(!announcement.published);
    assert_eq!(announcement.priority, Priority::High);

    Ok(())
}
