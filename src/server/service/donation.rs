use chrono::{DateTime, FixedOffset};
use sea_orm::DatabaseConnection;

use crate::{
    model::donation::{CreateDonationDto, DonationListQuery},
    server::{
        data::{donation::DonationRepository, member::MemberRepository},
        error::AppError,
        listing::{
            aggregate::DonationStats,
            export::{donation_columns, donation_export_filename, export_csv, CsvExport},
            record::DonationFilter,
            ListingQuery,
        },
        model::donation::{CreateDonationParam, Donation},
    },
};

pub struct DonationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists donations matching the query along with stats for the whole collection.
    ///
    /// Stats are aggregated before filtering, so they do not change with the filter.
    ///
    /// # Returns
    /// - `Ok((Vec<Donation>, DonationStats))` - Filtered donations and overall stats
    /// - `Err(AppError)` - Storage failure
    pub async fn list(
        &self,
        query: DonationListQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<(Vec<Donation>, DonationStats), AppError> {
        let donations = DonationRepository::new(self.db).get_all().await?;

        let stats = DonationStats::aggregate(&donations, now.date_naive());
        let filtered = ListingQuery::<DonationFilter>::from(query).apply(donations, now);

        Ok((filtered, stats))
    }

    /// Records a donation attributed to the signed-in admin.
    ///
    /// # Returns
    /// - `Ok(Donation)` - Created donation
    /// - `Err(AppError::ValidationErr)` - Amount is not positive
    /// - `Err(AppError::BadRequest)` - `member_id` does not refer to a member
    pub async fn create(
        &self,
        dto: CreateDonationDto,
        created_by: String,
    ) -> Result<Donation, AppError> {
        let param = CreateDonationParam::from_dto(dto, created_by)?;

        if let Some(member_id) = param.member_id {
            if MemberRepository::new(self.db)
                .get_by_id(member_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(
                    "Ahli yang dipilih tidak wujud".to_string(),
                ));
            }
        }

        DonationRepository::new(self.db).add(param, None).await
    }

    /// Exports the filtered donation list in the order it is displayed.
    pub async fn export(
        &self,
        query: DonationListQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<CsvExport, AppError> {
        let (donations, _) = self.list(query, now).await?;

        Ok(CsvExport {
            filename: donation_export_filename(now.date_naive()),
            bytes: export_csv(&donations, &donation_columns())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::model::donation::DateBucket;

    /// Tests stats cover every donation while the list follows the bucket filter.
    ///
    /// Expected: one donation listed for today, total over both
    #[tokio::test]
    async fn stats_ignore_active_filter() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Donation)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2025, 6, 15, 4, 0, 0)
            .unwrap()
            .with_timezone(&offset);
        let today = now.date_naive();

        factory::donation::DonationFactory::new(db)
            .amount_sen(5_000)
            .date(today)
            .build()
            .await?;
        factory::donation::DonationFactory::new(db)
            .amount_sen(10_000)
            .date(today - Duration::days(31))
            .build()
            .await?;

        let (donations, stats) = DonationService::new(db)
            .list(
                DonationListQuery {
                    bucket: Some(DateBucket::Today),
                    ..Default::default()
                },
                now,
            )
            .await?;

        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].amount_sen, 5_000);
        assert_eq!(stats.total, 15_000);
        assert_eq!(stats.today, 5_000);

        Ok(())
    }
}
