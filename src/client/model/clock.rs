use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::client::constant::LOCAL_UTC_OFFSET_HOURS;

pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time at the mosque.
pub fn local_now() -> NaiveDateTime {
    Utc::now().with_timezone(&local_offset()).naive_local()
}

pub fn local_today() -> NaiveDate {
    local_now().date()
}
