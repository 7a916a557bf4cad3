mod form;
mod list;

pub use form::{EditAnnouncement, NewAnnouncement};
pub use list::AdminAnnouncements;
