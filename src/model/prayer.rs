use serde::{Deserialize, Serialize};

use crate::prayer::PrayerSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrayerTimesDto {
    /// Prayer zone code, e.g. `SGR01`.
    pub zone: String,
    pub prayer: PrayerSet,
}
