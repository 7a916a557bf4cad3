//! Search fields, date buckets and categorical filters for each listed record.

use chrono::{FixedOffset, NaiveDate};
use std::borrow::Cow;

use crate::{
    model::{
        announcement::{AnnouncementCategory, AnnouncementListQuery},
        donation::{DonationCategory, DonationListQuery, PaymentMethod},
        member::{Gender, MemberListQuery, MemberStatus},
    },
    server::{
        listing::{CategoricalFilter, Listable, ListingQuery},
        model::{announcement::Announcement, donation::Donation, member::Member},
    },
};

impl Listable for Member {
    /// The IC number is searchable both as stored and as bare digits.
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let ic_digits: String = self.ic_number.chars().filter(char::is_ascii_digit).collect();
        let mut fields = vec![
            Cow::Borrowed(self.full_name.as_str()),
            Cow::Borrowed(self.ic_number.as_str()),
            Cow::Owned(ic_digits),
            Cow::Borrowed(self.phone_number.as_str()),
        ];
        fields.extend(self.email.as_deref().map(Cow::Borrowed));
        fields
    }

    fn bucket_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.created_at.with_timezone(offset).date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemberFilter {
    Status(MemberStatus),
    Gender(Gender),
}

impl CategoricalFilter<Member> for MemberFilter {
    fn matches(&self, record: &Member) -> bool {
        match self {
            Self::Status(status) => record.status == *status,
            Self::Gender(gender) => record.gender == *gender,
        }
    }
}

impl From<MemberListQuery> for ListingQuery<MemberFilter> {
    fn from(query: MemberListQuery) -> Self {
        let filters = [
            query.status.map(MemberFilter::Status),
            query.gender.map(MemberFilter::Gender),
        ];

        Self {
            search: query.search,
            filters: filters.into_iter().flatten().collect(),
            bucket: None,
        }
    }
}

impl Listable for Donation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [
            self.donor_name.as_deref(),
            self.reference_number.as_deref(),
            self.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(Cow::Borrowed)
        .collect()
    }

    /// Donations are bucketed by transaction date, not creation time.
    fn bucket_date(&self, _offset: &FixedOffset) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DonationFilter {
    Category(DonationCategory),
    PaymentMethod(PaymentMethod),
}

impl CategoricalFilter<Donation> for DonationFilter {
    fn matches(&self, record: &Donation) -> bool {
        match self {
            Self::Category(category) => record.category == *category,
            Self::PaymentMethod(method) => record.payment_method == *method,
        }
    }
}

impl From<DonationListQuery> for ListingQuery<DonationFilter> {
    fn from(query: DonationListQuery) -> Self {
        let filters = [
            query.category.map(DonationFilter::Category),
            query.payment_method.map(DonationFilter::PaymentMethod),
        ];

        Self {
            search: query.search,
            filters: filters.into_iter().flatten().collect(),
            bucket: query.bucket,
        }
    }
}

impl Listable for Announcement {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.title.as_str().into(), self.content.as_str().into()]
    }

    fn bucket_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.created_at.with_timezone(offset).date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnouncementFilter {
    Category(AnnouncementCategory),
    Published(bool),
}

impl CategoricalFilter<Announcement> for AnnouncementFilter {
    fn matches(&self, record: &Announcement) -> bool {
        match self {
            Self::Category(category) => record.category == *category,
            Self::Published(published) => record.published == *published,
        }
    }
}

impl From<AnnouncementListQuery> for ListingQuery<AnnouncementFilter> {
    fn from(query: AnnouncementListQuery) -> Self {
        let filters = [
            query.category.map(AnnouncementFilter::Category),
            query.published.map(AnnouncementFilter::Published),
        ];

        Self {
            search: query.search,
            filters: filters.into_iter().flatten().collect(),
            bucket: None,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::{
        model::{
            announcement::{AnnouncementCategory, Priority},
            donation::{DonationCategory, PaymentMethod},
            member::{Gender, MemberStatus},
        },
        server::model::{announcement::Announcement, donation::Donation, member::Member},
    };

    pub fn member(id: i32, full_name: &str, ic_number: &str) -> Member {
        let at: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Member {
            id,
            full_name: full_name.to_string(),
            ic_number: ic_number.to_string(),
            phone_number: "012-3456789".to_string(),
            email: None,
            address: "No. 1, Jalan Masjid".to_string(),
            postcode: "40000".to_string(),
            city: "Shah Alam".to_string(),
            state: "Selangor".to_string(),
            date_of_birth: None,
            gender: Gender::Male,
            status: MemberStatus::Active,
            notes: String::new(),
            created_at: at,
            updated_at: at,
        }
    }

    pub fn donation(id: i32, amount_sen: i64, date: NaiveDate) -> Donation {
        Donation {
            id,
            donor_name: Some(format!("Penderma {}", id)),
            member_id: None,
            amount_sen,
            category: DonationCategory::Derma,
            payment_method: PaymentMethod::Cash,
            date,
            reference_number: None,
            notes: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn announcement(id: i32, title: &str, content: &str) -> Announcement {
        let at: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Announcement {
            id,
            title: title.to_string(),
            content: content.to_string(),
            category: AnnouncementCategory::General,
            priority: Priority::Medium,
            published: true,
            author: "Admin".to_string(),
            author_id: "uid-admin".to_string(),
            created_at: at,
            updated_at: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::{test_support::*, *};
    use crate::server::listing::DateBucket;

    fn local(at: DateTime<Utc>) -> chrono::DateTime<FixedOffset> {
        at.with_timezone(&FixedOffset::east_opt(8 * 3600).unwrap())
    }

    #[test]
    fn today_bucket_selects_only_todays_donation() {
        let now = local(Utc.with_ymd_and_hms(2025, 6, 15, 4, 0, 0).unwrap());
        let today = now.date_naive();
        let donations = vec![
            donation(1, 5_000, today),
            donation(2, 10_000, today - Duration::days(31)),
        ];

        let found = ListingQuery::<DonationFilter>::new()
            .bucket(DateBucket::Today)
            .apply(donations, now);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn announcement_search_matches_content() {
        let announcements = vec![
            announcement(1, "Kelas Mengaji", "Isnin"),
            announcement(2, "Kuliah Subuh", "Ahad"),
        ];

        let found = ListingQuery::<AnnouncementFilter>::from(AnnouncementListQuery {
            search: Some("isnin".to_string()),
            ..Default::default()
        })
        .apply(announcements, local(Utc::now()));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Kelas Mengaji");
    }

    #[test]
    fn member_search_matches_ic_with_or_without_dashes() {
        let members = || {
            vec![
                member(1, "Ahmad bin Ali", "900101-14-5678"),
                member(2, "Siti binti Omar", "850505-10-1234"),
            ]
        };
        let search = |term: &str| {
            ListingQuery::<MemberFilter>::from(MemberListQuery {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .apply(members(), local(Utc::now()))
        };

        for term in ["900101-14-5678", "900101145678", "0101145"] {
            let found = search(term);
            assert_eq!(found.len(), 1, "term {}", term);
            assert_eq!(found[0].id, 1);
        }
    }

    #[test]
    fn announcement_bucket_uses_local_date() {
        // 2025-06-30 17:00 UTC is 2025-07-01 01:00 in UTC+8
        let mut late = announcement(1, "Lewat", "");
        late.created_at = Utc.with_ymd_and_hms(2025, 6, 30, 17, 0, 0).unwrap();
        let now = local(Utc.with_ymd_and_hms(2025, 7, 1, 2, 0, 0).unwrap());

        let found = ListingQuery::<AnnouncementFilter>::new()
            .bucket(DateBucket::Today)
            .apply(vec![late], now);

        assert_eq!(found.len(), 1);
    }

    #[test]
    fn list_queries_become_filters() {
        let query = ListingQuery::<DonationFilter>::from(DonationListQuery {
            search: None,
            category: Some(DonationCategory::Zakat),
            payment_method: None,
            bucket: Some(DateBucket::Year),
        });

        assert_eq!(query.filters, vec![DonationFilter::Category(DonationCategory::Zakat)]);
        assert_eq!(query.bucket, Some(DateBucket::Year));
    }
}
