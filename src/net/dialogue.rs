//! Micro-dialogue drill endpoints.

use serde::Deserialize;

use crate::net::client::{self, ApiError};

/// A fill-the-blank dialogue as served by `GET /api/dialogue`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialogue {
    pub id: i64,
    pub title: String,
    /// Dialogue text with the blank already rendered in.
    pub display_text: String,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Grading result for a dialogue answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueResult {
    pub correct: bool,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Fetch the next dialogue via `GET /api/dialogue`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_dialogue() -> Result<Dialogue, ApiError> {
    client::get_json("/api/dialogue").await
}

/// Check an answer via `POST /api/dialogue/submit`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn submit_dialogue(dialogue_id: i64, answer: &str) -> Result<DialogueResult, ApiError> {
    let payload = serde_json::json!({ "dialogueId": dialogue_id, "answer": answer });
    client::post_json("/api/dialogue/submit", &payload).await
}
