//! SeaORM entity models for the masjid database.
//!
//! Each module maps one table. Enumerations (role, gender, status, category, payment
//! method, priority) are stored as lowercase strings and parsed at the repository
//! boundary by the application crate.

pub mod prelude;

pub mod admin_user;
pub mod announcement;
pub mod donation;
pub mod member;
