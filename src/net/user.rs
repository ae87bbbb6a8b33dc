//! Per-user progress and statistics endpoints.

use serde::Deserialize;

use crate::net::client::{self, ApiError};

/// Level/XP summary shown in the app header.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progress {
    pub xp: i64,
    pub level: i64,
    pub next_level_xp: i64,
}

impl Default for Progress {
    fn default() -> Self {
        Self { xp: 0, level: 1, next_level_xp: 100 }
    }
}

impl Progress {
    /// Percentage of the way to the next level, clamped to 0–100.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_to_next_level(&self) -> f64 {
        if self.next_level_xp <= 0 {
            return 0.0;
        }
        (self.xp as f64 / self.next_level_xp as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Headline numbers for the stats page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDashboard {
    pub total_words_learned: i64,
    pub accuracy_percentage: i64,
    pub current_streak: i64,
    pub words_due_today: i64,
    pub level: i64,
    pub xp: i64,
    pub weakest_category: Option<String>,
}

impl Default for UserDashboard {
    fn default() -> Self {
        Self {
            total_words_learned: 0,
            accuracy_percentage: 0,
            current_streak: 0,
            words_due_today: 0,
            level: 1,
            xp: 0,
            weakest_category: None,
        }
    }
}

/// An earned achievement badge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Accuracy broken down by word category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryAccuracy {
    pub category: String,
    pub accuracy: f64,
}

/// Response-time and per-category analytics.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub average_response_time_ms: Option<i64>,
    #[serde(default)]
    pub category_difficulty: Vec<CategoryAccuracy>,
}

/// Fetch the header progress summary via `GET /api/user/progress`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_progress() -> Result<Progress, ApiError> {
    client::get_json("/api/user/progress").await
}

/// Fetch the stats-page summary via `GET /api/user/dashboard`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_dashboard() -> Result<UserDashboard, ApiError> {
    client::get_json("/api/user/dashboard").await
}

/// Fetch earned badges via `GET /api/user/badges`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_badges() -> Result<Vec<Badge>, ApiError> {
    client::get_json::<Option<Vec<Badge>>>("/api/user/badges")
        .await
        .map(Option::unwrap_or_default)
}

/// Fetch analytics via `GET /api/user/analytics`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_analytics() -> Result<Analytics, ApiError> {
    client::get_json("/api/user/analytics").await
}
