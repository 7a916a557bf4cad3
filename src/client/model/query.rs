//! API URLs for the filtered admin lists.
//!
//! The same URL feeds the JSON fetch and the CSV download link, so an export always
//! holds what the list on screen shows.

use crate::model::{
    announcement::AnnouncementListQuery, donation::DonationListQuery, member::MemberListQuery,
};

/// Appends the non-empty pairs of `params` to `path` as a query string.
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            serializer.append_pair(key, value);
        }
    }

    let query = serializer.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

pub fn members_url(path: &str, query: &MemberListQuery) -> String {
    with_query(
        path,
        &[
            ("search", query.search.clone()),
            ("status", query.status.map(|s| s.as_str().to_string())),
            ("gender", query.gender.map(|g| g.as_str().to_string())),
        ],
    )
}

pub fn donations_url(path: &str, query: &DonationListQuery) -> String {
    with_query(
        path,
        &[
            ("search", query.search.clone()),
            ("category", query.category.map(|c| c.as_str().to_string())),
            (
                "payment_method",
                query.payment_method.map(|m| m.as_str().to_string()),
            ),
            ("bucket", query.bucket.map(|b| b.as_str().to_string())),
        ],
    )
}

pub fn announcements_url(path: &str, query: &AnnouncementListQuery) -> String {
    with_query(
        path,
        &[
            ("search", query.search.clone()),
            ("category", query.category.map(|c| c.as_str().to_string())),
            ("published", query.published.map(|p| p.to_string())),
        ],
    )
}
