use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{model::string_enum, util::validate::ValidationErrors};

string_enum! {
    DonationCategory as "donation category" {
        Zakat => "zakat", "Zakat";
        Sedekah => "sedekah", "Sedekah";
        Derma => "derma", "Derma";
        Wakaf => "wakaf", "Wakaf";
        Fitrah => "fitrah", "Fitrah";
        Other => "other", "Lain-lain";
    }
}

string_enum! {
    PaymentMethod as "payment method" {
        Cash => "cash", "Tunai";
        BankTransfer => "bank_transfer", "Pindahan Bank";
        Cheque => "cheque", "Cek";
        Online => "online", "Bayaran Online";
    }
}

string_enum! {
    /// Calendar window relative to today in the mosque's local time.
    DateBucket as "date bucket" {
        Today => "today", "Hari Ini";
        Month => "month", "Bulan Ini";
        Year => "year", "Tahun Ini";
    }
}

impl DateBucket {
    /// Whether `date` falls in this bucket relative to `today`, using calendar
    /// month and year boundaries.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateBucket::Today => date == today,
            DateBucket::Month => date.year() == today.year() && date.month() == today.month(),
            DateBucket::Year => date.year() == today.year(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationDto {
    pub id: i32,
    pub donor_name: Option<String>,
    pub member_id: Option<i32>,
    /// Amount in sen.
    pub amount: i64,
    pub category: DonationCategory,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateDonationDto {
    pub donor_name: Option<String>,
    pub member_id: Option<i32>,
    /// Amount in sen, must be positive.
    pub amount: i64,
    pub category: DonationCategory,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

/// Largest single donation accepted, RM 100,000,000 in sen.
pub const MAX_DONATION_SEN: i64 = 10_000_000_000;

impl CreateDonationDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.amount <= 0 {
            errors.add("amount", "Sila masukkan jumlah yang sah");
        } else if self.amount > MAX_DONATION_SEN {
            errors.add("amount", "Jumlah melebihi had RM 100,000,000");
        }
        errors.into_result()
    }
}

/// Sums over the whole donation collection, in sen.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationStatsDto {
    pub total: i64,
    pub today: i64,
    pub this_month: i64,
    pub this_year: i64,
}

/// Filtered donations plus stats computed over the unfiltered collection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationListDto {
    pub donations: Vec<DonationDto>,
    pub stats: DonationStatsDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct DonationListQuery {
    /// Matched against donor name, reference number and notes.
    pub search: Option<String>,
    pub category: Option<DonationCategory>,
    pub payment_method: Option<PaymentMethod>,
    pub bucket: Option<DateBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_amount() {
        let dto = CreateDonationDto {
            donor_name: None,
            member_id: None,
            amount: 0,
            category: DonationCategory::Derma,
            payment_method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            reference_number: None,
            notes: None,
        };

        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Sila masukkan jumlah yang sah"));

        let dto = CreateDonationDto { amount: 1, ..dto };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_amount_above_limit() {
        let dto = CreateDonationDto {
            donor_name: None,
            member_id: None,
            amount: MAX_DONATION_SEN,
            category: DonationCategory::Derma,
            payment_method: PaymentMethod::Cash,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            reference_number: None,
            notes: None,
        };
        assert!(dto.validate().is_ok());

        // RM 50,000,000,000,000,000 parses, but two of them would overflow the totals
        let dto = CreateDonationDto {
            amount: 5_000_000_000_000_000_000,
            ..dto
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Jumlah melebihi had RM 100,000,000"));
    }

    #[test]
    fn buckets_use_calendar_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let first_of_month = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let last_month = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let last_year = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert!(DateBucket::Today.contains(today, today));
        assert!(!DateBucket::Today.contains(first_of_month, today));
        assert!(DateBucket::Month.contains(first_of_month, today));
        assert!(!DateBucket::Month.contains(last_month, today));
        assert!(DateBucket::Year.contains(last_month, today));
        assert!(!DateBucket::Year.contains(last_year, today));
    }

    #[test]
    fn bank_transfer_serializes_snake_case() {
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "bank_transfer");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
    }
}
