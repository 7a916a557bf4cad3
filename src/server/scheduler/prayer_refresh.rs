use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::prayer::PrayerTimeSource};

/// Starts the prayer-time refresh scheduler
///
/// Runs at the top of every hour so the cached schedule follows the date change and
/// the source's own corrections without waiting for a visitor to hit an expired
/// cache. A failed refresh is logged by the source and leaves the cache empty.
///
/// # Arguments
/// - `prayer`: Prayer-time source shared with the request handlers
pub async fn start_scheduler(prayer: PrayerTimeSource) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let prayer = prayer.clone();

        Box::pin(async move {
            if let Some(set) = prayer.refresh().await {
                tracing::debug!("Refreshed prayer times for {} ({})", prayer.zone(), set.date);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Prayer time refresh scheduler started");

    Ok(())
}
