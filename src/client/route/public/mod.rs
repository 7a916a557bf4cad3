mod announcements;
mod component;
mod contact;
mod home;
mod prayer_times;

pub use announcements::Announcements;
pub use contact::Contact;
pub use home::Home;
pub use prayer_times::PrayerTimes;
