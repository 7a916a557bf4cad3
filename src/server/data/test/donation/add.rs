use super::*;

/// Tests recording a donation.
///
/// Expected: Ok with the amount in sen and enums round-tripped
#[tokio::test]
async fn records_donation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Donation).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let donation = DonationRepository::new(db)
        .add(donation_param(12_345, date), None)
        .await?;

    assert_eq!(donation.amount_sen, 12_345);
    assert_eq!(donation.category, DonationCategory::Zakat);
    assert_eq!(donation.payment_method, PaymentMethod::BankTransfer);
    assert_eq!(donation.date, date);
    assert_eq!(donation.donor_label(), "Haji Karim");

    Ok(())
}

/// Tests recording an anonymous donation.
///
/// Expected: Ok with the anonymous donor label
#[tokio::test]
async fn labels_anonymous_donor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Donation).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let donation = DonationRepository::new(db)
        .add(
            CreateDonationParam {
                donor_name: None,
                ..donation_param(500, date)
            },
            None,
        )
        .await?;

    assert_eq!(donation.donor_label(), "Tanpa Nama");

    Ok(())
}
