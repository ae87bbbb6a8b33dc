//! Exercise generation and grading endpoints.
//!
//! The backend shapes the exercise payload by kind; unused sections come
//! back absent, so every field is optional or defaulted here and the page
//! picks the section matching the requested kind.

#[cfg(test)]
#[path = "exercise_test.rs"]
mod exercise_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{self, ApiError};

/// The three exercise forms offered by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExerciseKind {
    #[default]
    Multiple,
    Fill,
    Match,
}

impl ExerciseKind {
    /// Wire name used in the query string and submission tag.
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Fill => "fill",
            Self::Match => "match",
        }
    }
}

/// Word under test; which sides are present depends on the kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrompt {
    pub word_id: Option<i64>,
    pub german: Option<String>,
    pub english: Option<String>,
}

/// One selectable answer in a multiple-choice exercise.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub text: String,
}

/// One German prompt in a match-pairs exercise.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairPrompt {
    pub word_id: i64,
    pub german: String,
}

/// An exercise as served by `GET /api/exercise`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default)]
    pub question: Option<ExercisePrompt>,
    #[serde(default)]
    pub options: Vec<Choice>,
    #[serde(default)]
    pub correct_id: Option<i64>,
    #[serde(default)]
    pub pairs: Vec<PairPrompt>,
    #[serde(default)]
    pub english_options: Vec<String>,
}

/// A completed match in a match-pairs submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    pub german: String,
    pub english: String,
    #[serde(rename = "wordId")]
    pub word_id: i64,
}

/// Answer payload for `POST /api/exercise/submit`, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExerciseSubmission {
    Multiple {
        /// The option the user picked.
        #[serde(rename = "wordId")]
        word_id: i64,
        #[serde(rename = "correctId")]
        correct_id: i64,
    },
    Fill {
        #[serde(rename = "wordId")]
        word_id: i64,
        answer: String,
    },
    Match { pairs: Vec<MatchedPair> },
}

/// Grading result for a submitted exercise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResult {
    pub correct: bool,
    #[serde(default)]
    pub xp_gained: Option<i64>,
}

/// Fetch a fresh exercise of `kind` via `GET /api/exercise?type=...`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure (including the backend
/// having too few words to build an exercise).
pub async fn fetch_exercise(kind: ExerciseKind) -> Result<Exercise, ApiError> {
    client::get_json(&format!("/api/exercise?type={}", kind.api_name())).await
}

/// Grade an answer via `POST /api/exercise/submit`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn submit_exercise(submission: &ExerciseSubmission) -> Result<ExerciseResult, ApiError> {
    client::post_json("/api/exercise/submit", submission).await
}
