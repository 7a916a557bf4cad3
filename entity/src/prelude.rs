pub use super::admin_user::Entity as AdminUser;
pub use super::announcement::Entity as Announcement;
pub use super::donation::Entity as Donation;
pub use super::member::Entity as Member;
