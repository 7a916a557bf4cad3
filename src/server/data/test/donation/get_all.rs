use super::*;

/// Tests that donations are ordered by transaction date, not creation time.
///
/// Expected: Ok with the latest transaction date first
#[tokio::test]
async fn orders_by_transaction_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Donation).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for day in [10, 25, 1] {
        factory::donation::DonationFactory::new(db)
            .date(NaiveDate::from_ymd_opt(2025, 5, day).unwrap())
            .build()
            .await?;
    }

    let donations = DonationRepository::new(db).get_all().await?;

    let days: Vec<_> = donations.iter().map(|d| d.date.format("%d").to_string()).collect();
    assert_eq!(days, vec!["25", "10", "01"]);

    Ok(())
}
