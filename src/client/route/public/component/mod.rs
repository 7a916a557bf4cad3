mod announcement_card;
mod countdown;

pub use announcement_card::AnnouncementCard;
pub use countdown::{use_clock, NextPrayerCountdown};
