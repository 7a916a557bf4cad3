use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::DashboardStatsDto,
    server::{
        data::{
            announcement::AnnouncementRepository, donation::DonationRepository,
            member::MemberRepository,
        },
        error::AppError,
        listing::aggregate::DonationStats,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the dashboard stat cards.
    ///
    /// # Arguments
    /// - `today` - Local calendar date used for the monthly donation total
    pub async fn stats(&self, today: NaiveDate) -> Result<DashboardStatsDto, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let total_members = member_repo.count(false).await?;
        let active_members = member_repo.count(true).await?;

        let donations = DonationRepository::new(self.db).get_all().await?;
        let donation_stats = DonationStats::aggregate(&donations, today);

        let published_announcements = AnnouncementRepository::new(self.db)
            .count_published()
            .await?;

        Ok(DashboardStatsDto {
            total_members,
            active_members,
            total_donations: donation_stats.total,
            monthly_donations: donation_stats.this_month,
            published_announcements,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Expected: counts and sums over members, donations and published announcements
    #[tokio::test]
    async fn collects_stat_cards() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        factory::member::create_member(db).await?;
        factory::member::MemberFactory::new(db)
            .status("inactive")
            .build()
            .await?;
        factory::donation::DonationFactory::new(db)
            .amount_sen(2_000)
            .date(today)
            .build()
            .await?;
        factory::donation::DonationFactory::new(db)
            .amount_sen(3_000)
            .date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
            .build()
            .await?;
        factory::announcement::create_announcement(db).await?;
        factory::announcement::AnnouncementFactory::new(db)
            .published(false)
            .build()
            .await?;

        let stats = DashboardService::new(db).stats(today).await?;

        assert_eq!(
            stats,
            DashboardStatsDto {
                total_members: 2,
                active_members: 1,
                total_donations: 5_000,
                monthly_donations: 2_000,
                published_announcements: 1,
            }
        );

        Ok(())
    }
}
