//! Spaced-repetition review queue endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{self, ApiError};
use crate::net::user::Badge;

/// A word due for review today, with its per-user scheduling handle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWord {
    pub id: i64,
    /// Per-user scheduling row, absent for words never reviewed before.
    pub user_word_id: Option<i64>,
    pub german: String,
    pub english: String,
    pub category: Option<String>,
}

#[derive(Deserialize)]
struct TodayWords {
    #[serde(default)]
    words: Vec<ReviewWord>,
}

/// Self-graded answer for one flashcard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAnswer {
    pub word_id: i64,
    pub user_word_id: Option<i64>,
    pub is_correct: bool,
    pub response_time_ms: i64,
}

/// Reward data returned after grading a card.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    #[serde(default)]
    pub xp_gained: i64,
    #[serde(default)]
    pub awarded_badges: Vec<Badge>,
}

/// Fetch today's due words via `GET /api/learn/today`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_today_words() -> Result<Vec<ReviewWord>, ApiError> {
    client::get_json::<TodayWords>("/api/learn/today")
        .await
        .map(|resp| resp.words)
}

/// Submit a graded card via `POST /api/learn/submit`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn submit_answer(answer: &CardAnswer) -> Result<AnswerOutcome, ApiError> {
    client::post_json("/api/learn/submit", answer).await
}
