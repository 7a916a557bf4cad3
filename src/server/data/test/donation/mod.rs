use crate::{
    model::donation::{DonationCategory, PaymentMethod},
    server::{
        data::donation::DonationRepository, error::AppError,
        model::donation::CreateDonationParam,
    },
};
use chrono::NaiveDate;
use entity::prelude::Donation;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod exists_matching;
mod get_all;

fn donation_param(amount_sen: i64, date: NaiveDate) -> CreateDonationParam {
    CreateDonationParam {
        donor_name: Some("Haji Karim".to_string()),
        member_id: None,
        amount_sen,
        category: DonationCategory::Zakat,
        payment_method: PaymentMethod::BankTransfer,
        date,
        reference_number: Some("REF-001".to_string()),
        notes: None,
        created_by: Some("uid-admin".to_string()),
    }
}
