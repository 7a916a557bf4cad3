//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate submitted
//! forms into write parameters, run listings through the in-memory filter, and talk
//! to the external identity and prayer-time services.

pub mod announcement;
pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod identity;
pub mod legacy;
pub mod member;
pub mod prayer;
