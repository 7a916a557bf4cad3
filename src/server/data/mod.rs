//! Database repository layer for all domain entities.
//!
//! `document` holds the generic access operations shared by every table. The
//! per-entity repositories build on it, converting entity models to domain models at
//! the boundary so nothing above this layer touches SeaORM types.

pub mod admin_user;
pub mod announcement;
pub mod document;
pub mod donation;
pub mod member;

#[cfg(test)]
mod test;
