mod detail;
mod form;
mod list;

pub use detail::MemberDetail;
pub use form::{EditMember, NewMember};
pub use list::Members;
