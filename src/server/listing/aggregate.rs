use chrono::NaiveDate;

use crate::{
    model::donation::DonationStatsDto,
    server::{listing::DateBucket, model::donation::Donation},
};

/// Donation totals in sen over the whole collection.
///
/// Always computed from the unfiltered collection so the stat cards do not follow
/// the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonationStats {
    pub total: i64,
    pub today: i64,
    pub this_month: i64,
    pub this_year: i64,
}

impl DonationStats {
    /// Sums donation amounts overall and per date bucket, by transaction date.
    ///
    /// Sums saturate at `i64::MAX` instead of overflowing.
    pub fn aggregate(donations: &[Donation], today: NaiveDate) -> Self {
        donations.iter().fold(Self::default(), |mut stats, d| {
            let amount = d.amount_sen;
            stats.total = stats.total.saturating_add(amount);
            if DateBucket::Today.contains(d.date, today) {
                stats.today = stats.today.saturating_add(amount);
            }
            if DateBucket::Month.contains(d.date, today) {
                stats.this_month = stats.this_month.saturating_add(amount);
            }
            if DateBucket::Year.contains(d.date, today) {
                stats.this_year = stats.this_year.saturating_add(amount);
            }
            stats
        })
    }

    pub fn into_dto(self) -> DonationStatsDto {
        DonationStatsDto {
            total: self.total,
            today: self.today,
            this_month: self.this_month,
            this_year: self.this_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::server::listing::record::test_support::donation;

    #[test]
    fn sums_each_bucket_independently() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let donations = vec![
            donation(1, 5_000, today),
            donation(2, 10_000, today - Duration::days(31)),
            donation(3, 2_500, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            donation(4, 700, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
        ];

        let stats = DonationStats::aggregate(&donations, today);

        assert_eq!(
            stats,
            DonationStats {
                total: 18_200,
                today: 5_000,
                this_month: 7_500,
                this_year: 17_500,
            }
        );
    }

    #[test]
    fn oversized_amounts_saturate_instead_of_overflowing() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let donations = vec![
            donation(1, 5_000_000_000_000_000_000, today),
            donation(2, 5_000_000_000_000_000_000, today),
        ];

        let stats = DonationStats::aggregate(&donations, today);

        assert_eq!(stats.total, i64::MAX);
        assert_eq!(stats.today, i64::MAX);
        assert_eq!(stats.this_month, i64::MAX);
        assert_eq!(stats.this_year, i64::MAX);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        assert_eq!(DonationStats::aggregate(&[], today), DonationStats::default());
    }
}
