pub mod announcement;
pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod helper;
pub mod member;
pub mod prayer;
