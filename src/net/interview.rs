//! Interview-simulator endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{self, ApiError};

/// One scenario question in an interview round.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub id: i64,
    /// Question category label (e.g. `"greeting"`, `"complaint"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub question_text: String,
}

#[derive(Deserialize)]
struct StartResponse {
    #[serde(default)]
    questions: Vec<InterviewQuestion>,
}

/// A free-text answer to one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewAnswer {
    pub question_id: i64,
    pub answer: String,
}

/// Scored interview round.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InterviewResult {
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
}

/// Start a round via `GET /api/interview/start`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn start_interview() -> Result<Vec<InterviewQuestion>, ApiError> {
    client::get_json::<StartResponse>("/api/interview/start")
        .await
        .map(|resp| resp.questions)
}

/// Submit all answers via `POST /api/interview/submit`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn submit_interview(answers: &[InterviewAnswer]) -> Result<InterviewResult, ApiError> {
    let payload = serde_json::json!({ "answers": answers });
    client::post_json("/api/interview/submit", &payload).await
}
