//! Admin console statistics.

use serde::Deserialize;

use crate::net::client::{self, ApiError};

/// Aggregate counts shown at the top of the admin console.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub word_count: i64,
    pub user_count: i64,
}

/// Fetch word/user counts via `GET /api/dashboard/stats`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    client::get_json("/api/dashboard/stats").await
}
