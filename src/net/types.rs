//! Wire DTOs for the habit backend's REST API.
//!
//! DESIGN
//! ======
//! Only the fields the client renders are modelled. Optional fields default so
//! a sparse backend record still deserializes instead of failing the page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A habit record as returned by `/api/habits`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Consecutive completion count computed by the backend.
    #[serde(default)]
    pub streak: u32,
}

/// Body for `POST /api/habits`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: String,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Scoring summary from `GET /api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Result of `PUT /api/habits/{id}/complete`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Completion {
    pub habit: Habit,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Error body the backend sends with rejections (`{"msg": "..."}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}
