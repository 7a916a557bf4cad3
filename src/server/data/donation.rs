//! Donation repository.
//!
//! Donations are append-only: there is no update or delete path.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::{Condition, Order},
    ActiveValue, ColumnTrait, DatabaseConnection,
};

use crate::server::{
    data::document::{DocumentStore, ListQuery},
    error::{storage::StorageError, AppError},
    model::donation::{CreateDonationParam, Donation},
};

type DonationEntity = entity::prelude::Donation;

/// Repository providing database operations for donations.
pub struct DonationRepository<'a> {
    store: DocumentStore<'a>,
}

impl<'a> DonationRepository<'a> {
    /// Creates a new DonationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: DocumentStore::new(db),
        }
    }

    /// Records a donation, stamping both timestamps unless `created_at` is given.
    ///
    /// # Returns
    /// - `Ok(Donation)` - Created donation with its id
    /// - `Err(AppError)` - Insert failed
    pub async fn add(
        &self,
        param: CreateDonationParam,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Donation, AppError> {
        let mut active = entity::donation::ActiveModel {
            donor_name: ActiveValue::Set(param.donor_name),
            member_id: ActiveValue::Set(param.member_id),
            amount_sen: ActiveValue::Set(param.amount_sen),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            payment_method: ActiveValue::Set(param.payment_method.as_str().to_string()),
            date: ActiveValue::Set(param.date),
            reference_number: ActiveValue::Set(param.reference_number),
            notes: ActiveValue::Set(param.notes),
            created_by: ActiveValue::Set(param.created_by),
            ..Default::default()
        };
        if let Some(created_at) = created_at {
            active.created_at = ActiveValue::Set(created_at);
            active.updated_at = ActiveValue::Set(created_at);
        }

        let entity = self.store.add::<DonationEntity, _>(active).await?;

        Donation::from_entity(entity)
    }

    /// Returns every donation ordered by transaction date, newest first.
    ///
    /// Donations on the same date are ordered by creation time, newest first.
    pub async fn get_all(&self) -> Result<Vec<Donation>, AppError> {
        self.store
            .list::<DonationEntity>(
                ListQuery::new()
                    .order_by(entity::donation::Column::Date, Order::Desc)
                    .order_by(entity::donation::Column::CreatedAt, Order::Desc),
            )
            .await?
            .into_iter()
            .map(Donation::from_entity)
            .collect()
    }

    /// Whether a donation with the same date, amount, donor and creation time
    /// exists. Used to skip rows a previous import already wrote.
    pub async fn exists_matching(
        &self,
        date: NaiveDate,
        amount_sen: i64,
        donor_name: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        let donor = match donor_name {
            Some(name) => entity::donation::Column::DonorName.eq(name),
            None => entity::donation::Column::DonorName.is_null(),
        };

        let count = self
            .store
            .count::<DonationEntity>(
                Condition::all()
                    .add(entity::donation::Column::Date.eq(date))
                    .add(entity::donation::Column::AmountSen.eq(amount_sen))
                    .add(entity::donation::Column::CreatedAt.eq(created_at))
                    .add(donor),
            )
            .await?;

        Ok(count > 0)
    }
}
