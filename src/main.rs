mod client;
mod model;
mod prayer;
mod util;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use std::sync::Arc;

        use crate::server::{
            config::Config,
            scheduler::prayer_refresh,
            service::{identity::RestIdentityProvider, prayer::PrayerTimeSource},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;

        tracing::info!("Starting server");

        startup::import_legacy_data(&db, &config).await?;
        startup::check_for_admin(&db).await?;

        let identity = Arc::new(RestIdentityProvider::new(
            http_client.clone(),
            config.identity_base_url.clone(),
            config.identity_api_key.clone(),
        ));
        let prayer = PrayerTimeSource::new(
            http_client,
            config.prayer_api_url.clone(),
            config.prayer_zone.clone(),
        );

        // Start hourly prayer-time refresh
        let scheduler_prayer = prayer.clone();
        tokio::spawn(async move {
            if let Err(e) = prayer_refresh::start_scheduler(scheduler_prayer).await {
                tracing::error!("Prayer time scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(db, identity, prayer, config.utc_offset))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
