use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardStatsDto {
    pub total_members: u64,
    pub active_members: u64,
    /// Sum of every donation, in sen.
    pub total_donations: i64,
    /// Sum of donations dated in the current calendar month, in sen.
    pub monthly_donations: i64,
    pub published_announcements: u64,
}
