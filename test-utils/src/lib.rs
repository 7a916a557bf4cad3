//! Masjid Test Utils
//!
//! Shared helpers for the masjid application's tests. Every test runs against its own
//! in-memory SQLite database whose schema is generated from the `entity` crate, with an
//! optional tower-sessions session stored in the same database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder selecting which tables to create
//! - **TestContext**: Database connection plus lazily created session
//! - **TestError**: Errors raised while preparing the context
//! - **factory**: Row factories with sensible defaults for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn lists_members() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_table(Member).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let member = factory::member::create_member(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
