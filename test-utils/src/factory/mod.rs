//! Factory methods for creating test rows.
//!
//! Each entity has a `*Factory` builder for customised rows and a `create_*`
//! shorthand for a row with defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::admin_user::AdminUserFactory::new(&db)
//!     .role("staff")
//!     .active(false)
//!     .build()
//!     .await?;
//!
//! let donation = factory::donation::DonationFactory::new(&db)
//!     .amount_sen(5_000)
//!     .category("zakat")
//!     .build()
//!     .await?;
//! ```

pub mod admin_user;
pub mod announcement;
pub mod donation;
pub mod helpers;
pub mod member;

pub use admin_user::create_admin_user;
pub use announcement::create_announcement;
pub use donation::create_donation;
pub use member::create_member;
