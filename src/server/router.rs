use axum::Router;
use dioxus_logger::tracing;
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{announcement, auth, dashboard, donation, member, prayer},
    state::AppState,
};

/// Seconds to replenish one login attempt.
const LOGIN_REPLENISH_SECONDS: u64 = 4;
/// Login attempts allowed in a burst.
const LOGIN_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(title = "Masjid API", description = "Mosque community management"),
    tags(
        (name = "auth", description = "Admin sign-in"),
        (name = "prayer", description = "Daily prayer times"),
        (name = "announcement", description = "Public and admin announcements"),
        (name = "member", description = "Community members"),
        (name = "donation", description = "Donations and CSV export"),
        (name = "dashboard", description = "Admin dashboard statistics")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(login_router())
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_current_admin))
        .routes(routes!(prayer::get_prayer_times))
        .routes(routes!(announcement::get_published_announcements))
        .routes(routes!(announcement::get_latest_announcements))
        .routes(routes!(
            announcement::get_announcements,
            announcement::create_announcement
        ))
        .routes(routes!(
            announcement::get_announcement,
            announcement::update_announcement,
            announcement::delete_announcement
        ))
        .routes(routes!(member::get_members, member::create_member))
        .routes(routes!(member::lookup_members))
        .routes(routes!(member::export_members))
        .routes(routes!(
            member::get_member,
            member::update_member,
            member::delete_member
        ))
        .routes(routes!(donation::get_donations, donation::create_donation))
        .routes(routes!(donation::export_donations))
        .routes(routes!(dashboard::get_dashboard_stats))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Login route behind a global rate limit.
///
/// The limit is shared by every client since the server may run behind a proxy
/// that hides peer addresses.
fn login_router() -> OpenApiRouter<AppState> {
    let login = OpenApiRouter::new().routes(routes!(auth::login));

    let Some(config) = GovernorConfigBuilder::default()
        .key_extractor(GlobalKeyExtractor)
        .per_second(LOGIN_REPLENISH_SECONDS)
        .burst_size(LOGIN_BURST)
        .finish()
    else {
        tracing::error!("Invalid login rate limit, serving login without it");
        return login;
    };

    login.layer(GovernorLayer::new(Arc::new(config)))
}
