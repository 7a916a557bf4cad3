//! Donation factory for creating test donation rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for donations.
///
/// # Example
///
/// ```rust,ignore
/// let donation = DonationFactory::new(&db)
///     .amount_sen(10_000)
///     .date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct DonationFactory<'a> {
    db: &'a DatabaseConnection,
    donor_name: Option<String>,
    member_id: Option<i32>,
    amount_sen: i64,
    category: String,
    payment_method: String,
    date: NaiveDate,
    notes: Option<String>,
}

impl<'a> DonationFactory<'a> {
    /// Creates a new DonationFactory with default values.
    ///
    /// Defaults:
    /// - donor_name: `Some("Penderma")`
    /// - amount_sen: `5000` (RM 50.00)
    /// - category: `"derma"`, payment_method: `"cash"`
    /// - date: today (UTC)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            donor_name: Some("Penderma".to_string()),
            member_id: None,
            amount_sen: 5_000,
            category: "derma".to_string(),
            payment_method: "cash".to_string(),
            date: Utc::now().date_naive(),
            notes: None,
        }
    }

    pub fn donor_name(mut self, donor_name: Option<String>) -> Self {
        self.donor_name = donor_name;
        self
    }

    pub fn member_id(mut self, member_id: i32) -> Self {
        self.member_id = Some(member_id);
        self
    }

    pub fn amount_sen(mut self, amount_sen: i64) -> Self {
        self.amount_sen = amount_sen;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Inserts the donation.
    ///
    /// # Returns
    /// - `Ok(entity::donation::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::donation::Model, DbErr> {
        let now = Utc::now();
        entity::donation::ActiveModel {
            donor_name: ActiveValue::Set(self.donor_name),
            member_id: ActiveValue::Set(self.member_id),
            amount_sen: ActiveValue::Set(self.amount_sen),
            category: ActiveValue::Set(self.category),
            payment_method: ActiveValue::Set(self.payment_method),
            date: ActiveValue::Set(self.date),
            reference_number: ActiveValue::Set(None),
            notes: ActiveValue::Set(self.notes),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a RM 50.00 `derma` donation dated today.
pub async fn create_donation(db: &DatabaseConnection) -> Result<entity::donation::Model, DbErr> {
    DonationFactory::new(db).build().await
}
