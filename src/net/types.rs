//! Shared wire DTOs for the client/server boundary.

use serde::{Deserialize, Serialize};

/// Role string granting access to the admin console.
pub const SUPERADMIN_ROLE: &str = "superadmin";

/// An authenticated user as returned by `/api/auth/me` and the login and
/// verify exchanges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Display name, if the user chose one at registration.
    pub username: Option<String>,
    /// Role name; an open set with `"superadmin"` as the elevated role.
    pub role: String,
}

impl User {
    /// Whether this user may enter the admin console.
    pub fn is_superadmin(&self) -> bool {
        self.role == SUPERADMIN_ROLE
    }

    /// Name shown in headers: the username when present, else the email.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}
