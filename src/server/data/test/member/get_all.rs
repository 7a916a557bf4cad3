use super::*;

/// Tests that all members are returned newest first.
///
/// Expected: Ok with members in descending creation order
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, age) in [("Lama", 300), ("Baru", 10), ("Sederhana", 100)] {
        factory::member::MemberFactory::new(db)
            .full_name(name)
            .created_at(factory::helpers::seconds_ago(age))
            .build()
            .await?;
    }

    let members = MemberRepository::new(db).get_all().await?;

    let names: Vec<_> = members.iter().map(|m| m.full_name.as_str()).collect();
    assert_eq!(names, vec!["Baru", "Sederhana", "Lama"]);

    Ok(())
}
