use crate::{
    model::member::{Gender, MemberStatus},
    server::{data::member::MemberRepository, error::AppError, model::member::MemberParam},
};
use entity::prelude::Member;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod count;
mod delete;
mod exists_matching;
mod get_all;
mod update;

fn member_param(full_name: &str) -> MemberParam {
    MemberParam {
        full_name: full_name.to_string(),
        ic_number: "900101-14-5678".to_string(),
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
    }
}
