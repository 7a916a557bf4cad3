use super::*;

/// Tests detecting a donation already written with the same identity fields.
///
/// Expected: Ok(true) for the same fields, Ok(false) when any differs
#[tokio::test]
async fn matches_on_date_amount_donor_and_creation_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Donation).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let created_at = factory::helpers::seconds_ago(86_400);
    let repo = DonationRepository::new(db);
    repo.add(donation_param(10_000, date), Some(created_at))
        .await?;

    assert!(
        repo.exists_matching(date, 10_000, Some("Haji Karim"), created_at)
            .await?
    );
    assert!(
        !repo
            .exists_matching(date, 10_001, Some("Haji Karim"), created_at)
            .await?
    );
    assert!(!repo.exists_matching(date, 10_000, None, created_at).await?);

    Ok(())
}
