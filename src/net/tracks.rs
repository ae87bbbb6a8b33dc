//! Course-track endpoints.

use serde::Deserialize;

use crate::net::client::{self, ApiError};
use crate::net::words::Word;

/// A lesson inside a module, with the user's unlock/completion state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub completed: bool,
    /// Words attached to the lesson; the backend capitalizes the key.
    #[serde(rename = "Words", default)]
    pub words: Vec<Word>,
}

/// A module grouping lessons inside a track.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Module {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A course track with the user's progress folded in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// Fetch all tracks with progress via `GET /api/tracks/progress`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn fetch_tracks_with_progress() -> Result<Vec<Track>, ApiError> {
    client::get_json("/api/tracks/progress").await
}

/// Mark a lesson complete via `POST /api/tracks/complete-lesson`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn complete_lesson(lesson_id: i64) -> Result<(), ApiError> {
    let payload = serde_json::json!({ "lessonId": lesson_id });
    client::post_json::<serde_json::Value, _>("/api/tracks/complete-lesson", &payload)
        .await
        .map(|_| ())
}
