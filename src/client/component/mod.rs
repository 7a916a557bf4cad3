pub mod admin_layout;
pub mod form;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod stat_card;

pub use admin_layout::AdminLayout;
pub use form::{FormField, SubmitButton};
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::ProtectedLayout;
pub use stat_card::StatCard;
