//! Donation domain model and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::donation::{CreateDonationDto, DonationCategory, DonationDto, PaymentMethod},
    server::{
        error::AppError,
        model::{non_blank, parse_stored},
    },
};

/// Donor label used when no name was recorded.
pub const ANONYMOUS_DONOR: &str = "Tanpa Nama";

/// A recorded donation. Amounts are integer sen.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub donor_name: Option<String>,
    /// Optional link to a member by id; never joined.
    pub member_id: Option<i32>,
    pub amount_sen: i64,
    pub category: DonationCategory,
    pub payment_method: PaymentMethod,
    /// Transaction date, distinct from `created_at`.
    pub date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn donor_label(&self) -> &str {
        self.donor_name.as_deref().unwrap_or(ANONYMOUS_DONOR)
    }

    /// Converts the donation domain model to a DTO for API responses.
    pub fn into_dto(self) -> DonationDto {
        DonationDto {
            id: self.id,
            donor_name: self.donor_name,
            member_id: self.member_id,
            amount: self.amount_sen,
            category: self.category,
            payment_method: self.payment_method,
            date: self.date,
            reference_number: self.reference_number,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a donation domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Donation)` - Converted donation
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored category or payment
    ///   method is unknown
    pub fn from_entity(entity: entity::donation::Model) -> Result<Self, AppError> {
        Ok(Self {
            category: parse_stored("donation", "category", &entity.category)?,
            payment_method: parse_stored("donation", "payment_method", &entity.payment_method)?,
            id: entity.id,
            donor_name: entity.donor_name,
            member_id: entity.member_id,
            amount_sen: entity.amount_sen,
            date: entity.date,
            reference_number: entity.reference_number,
            notes: entity.notes,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }
}

/// Fields written when recording a donation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDonationParam {
    pub donor_name: Option<String>,
    pub member_id: Option<i32>,
    pub amount_sen: i64,
    pub category: DonationCategory,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
    /// Uid of the admin who recorded it.
    pub created_by: Option<String>,
}

impl CreateDonationParam {
    /// Validates the submitted form and converts it to write parameters.
    ///
    /// # Arguments
    /// - `dto` - Submitted donation form
    /// - `created_by` - Uid of the signed-in admin
    ///
    /// # Returns
    /// - `Ok(CreateDonationParam)` - Trimmed parameters
    /// - `Err(AppError::ValidationErr)` - Amount is not positive
    pub fn from_dto(dto: CreateDonationDto, created_by: String) -> Result<Self, AppError> {
        dto.validate()?;

        Ok(Self {
            donor_name: non_blank(dto.donor_name),
            member_id: dto.member_id,
            amount_sen: dto.amount,
            category: dto.category,
            payment_method: dto.payment_method,
            date: dto.date,
            reference_number: non_blank(dto.reference_number),
            notes: non_blank(dto.notes),
            created_by: Some(created_by),
        })
    }
}
