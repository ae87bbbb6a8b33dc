//! Vocabulary CRUD used by the admin console.

use serde::{Deserialize, Serialize};

use crate::net::client::{self, ApiError};

/// A vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub german: String,
    pub english: String,
    pub category: Option<String>,
}

/// Fields for creating a word; `category` is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewWord {
    pub german: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// List all words via `GET /api/words`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn list_words() -> Result<Vec<Word>, ApiError> {
    client::get_json("/api/words").await
}

/// Create a word via `POST /api/words`.
///
/// # Errors
///
/// Fails with [`ApiError`] when the server rejects the word.
pub async fn create_word(word: &NewWord) -> Result<Word, ApiError> {
    client::post_json("/api/words", word).await
}

/// Delete a word via `DELETE /api/words/{id}`.
///
/// # Errors
///
/// Fails with [`ApiError`] on any request failure.
pub async fn delete_word(id: i64) -> Result<(), ApiError> {
    client::delete(&format!("/api/words/{id}")).await
}
