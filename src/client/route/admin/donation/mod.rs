mod list;
mod new;

pub use list::Donations;
pub use new::NewDonation;
