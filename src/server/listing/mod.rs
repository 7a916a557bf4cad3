//! Filtering, aggregation and export over fully loaded collections.
//!
//! Admin list pages load a whole collection and narrow it here. A `ListingQuery`
//! combines three independent predicates:
//!
//! - a free-text term matched case-insensitively against each record's search
//!   fields, where any field matching is enough
//! - zero or more categorical filters, all of which must match
//! - an optional date bucket (today, this month, this year) in local calendar terms
//!
//! The conjunction is order independent and the input order is preserved.

pub mod aggregate;
pub mod export;
pub mod record;

use chrono::{DateTime, FixedOffset, NaiveDate};
use std::borrow::Cow;

pub use crate::model::donation::DateBucket;

/// A record that can be searched and bucketed by date.
pub trait Listable {
    /// Text fields matched by the free-text term, borrowed or derived.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Calendar date tested by the date bucket, in the given local offset.
    fn bucket_date(&self, offset: &FixedOffset) -> NaiveDate;
}

/// An exact-equality filter over one attribute of `T`.
pub trait CategoricalFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Search term, categorical filters and date bucket for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery<F> {
    pub search: Option<String>,
    pub filters: Vec<F>,
    pub bucket: Option<DateBucket>,
}

impl<F> Default for ListingQuery<F> {
    fn default() -> Self {
        Self {
            search: None,
            filters: Vec::new(),
            bucket: None,
        }
    }
}

impl<F> ListingQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn bucket(mut self, bucket: DateBucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    /// Returns the records matching every active predicate, in input order.
    ///
    /// # Arguments
    /// - `records` - Full collection snapshot
    /// - `now` - Local time the bucket is evaluated against
    pub fn apply<T>(&self, records: Vec<T>, now: DateTime<FixedOffset>) -> Vec<T>
    where
        T: Listable,
        F: CategoricalFilter<T>,
    {
        let offset = now.offset();
        let today = now.date_naive();
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        records
            .into_iter()
            .filter(|record| {
                let searched = needle.as_deref().is_none_or(|needle| {
                    record
                        .search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(needle))
                });

                let in_bucket = self
                    .bucket
                    .is_none_or(|bucket| bucket.contains(record.bucket_date(offset), today));

                searched && in_bucket && self.filters.iter().all(|f| f.matches(record))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        title: &'static str,
        body: &'static str,
        kind: &'static str,
        date: NaiveDate,
    }

    impl Listable for Note {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![self.title.into(), self.body.into()]
        }

        fn bucket_date(&self, _offset: &FixedOffset) -> NaiveDate {
            self.date
        }
    }

    struct Kind(&'static str);

    impl CategoricalFilter<Note> for Kind {
        fn matches(&self, record: &Note) -> bool {
            record.kind == self.0
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        day(y, m, d)
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_local_timezone(FixedOffset::east_opt(8 * 3600).unwrap())
            .unwrap()
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                title: "Kelas Mengaji",
                body: "Isnin malam",
                kind: "event",
                date: day(2025, 6, 10),
            },
            Note {
                title: "Kutipan Jumaat",
                body: "Tabung utama",
                kind: "general",
                date: day(2025, 6, 1),
            },
            Note {
                title: "Gotong-royong",
                body: "Bawa penyapu",
                kind: "event",
                date: day(2025, 5, 30),
            },
        ]
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let found = ListingQuery::<Kind>::new()
            .search("isnin")
            .apply(notes(), noon(2025, 6, 10));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Kelas Mengaji");
    }

    #[test]
    fn blank_search_matches_everything() {
        let found = ListingQuery::<Kind>::new()
            .search("   ")
            .apply(notes(), noon(2025, 6, 10));

        assert_eq!(found, notes());
    }

    #[test]
    fn predicates_are_conjoined() {
        let today = noon(2025, 6, 10);

        let by_kind = ListingQuery::new().filter(Kind("event")).apply(notes(), today);
        assert_eq!(by_kind.len(), 2);

        let kind_and_month = ListingQuery::new()
            .filter(Kind("event"))
            .bucket(DateBucket::Month)
            .apply(notes(), today);
        assert_eq!(kind_and_month.len(), 1);
        assert_eq!(kind_and_month[0].title, "Kelas Mengaji");

        let nothing = ListingQuery::new()
            .search("tabung")
            .filter(Kind("event"))
            .apply(notes(), today);
        assert!(nothing.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let found = ListingQuery::<Kind>::new()
            .bucket(DateBucket::Year)
            .apply(notes(), noon(2025, 12, 31));

        let titles: Vec<_> = found.iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Kelas Mengaji", "Kutipan Jumaat", "Gotong-royong"]);
    }
}
