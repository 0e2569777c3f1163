//! REST client for the habit backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, so pages and tests
//! compile without a browser.
//!
//! AUTH CONTRACT
//! =============
//! Authenticated calls take the caller's current session token and send it as
//! `Authorization: Bearer <token>`. Each call is a single attempt: no retry,
//! cache or queue. A 401 comes back as `ApiError::Unauthorized`; the client
//! never signs the user out on its own.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Backend rejection bodies of
//! the form `{"msg": "..."}` are carried in the error so forms can show them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Completion, CurrentUser, Habit, LoginRequest, NewHabit, RegisterRequest};
use crate::config::ApiConfig;

/// Shown when the backend gives no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const CURRENT_USER_PATH: &str = "/api/auth/me";
const HABITS_PATH: &str = "/api/habits";

/// Failure modes of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("credential rejected (401)")]
    Unauthorized { message: Option<String> },
    #[error("request rejected: {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Rejected { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The backend's own explanation, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Inline text for login/signup forms.
    pub fn form_message(&self) -> String {
        self.server_message().unwrap_or(GENERIC_FAILURE_MESSAGE).to_owned()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn habit_complete_path(habit_id: &str) -> String {
    format!("{HABITS_PATH}/{habit_id}/complete")
}

/// HTTP client bound to one backend origin. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(REGISTER_PATH))
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(REGISTER_PATH), body);
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange credentials for a session token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails, the credentials are rejected,
    /// or the response has no token.
    pub async fn login(&self, body: &LoginRequest) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::LoginResponse = read_json(resp).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(LOGIN_PATH), body);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch points and badges via `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the token is rejected.
    pub async fn current_user(&self, token: &str) -> Result<CurrentUser, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(CURRENT_USER_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(CURRENT_USER_PATH), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    /// List the user's habits via `GET /api/habits`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the token is rejected.
    pub async fn list_habits(&self, token: &str) -> Result<Vec<Habit>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(HABITS_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(HABITS_PATH), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    /// Create a habit via `POST /api/habits`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_habit(&self, token: &str, habit: &NewHabit) -> Result<Habit, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(HABITS_PATH))
                .header("Authorization", &bearer(token))
                .json(habit)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(HABITS_PATH), bearer(token), habit);
            Err(ApiError::Unavailable)
        }
    }

    /// Mark a habit done for today via `PUT /api/habits/{id}/complete`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn complete_habit(&self, token: &str, habit_id: &str) -> Result<Completion, ApiError> {
        let url = self.endpoint(&habit_complete_path(habit_id));
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&url)
                .header("Authorization", &bearer(token))
                .json(&serde_json::json!({}))
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, bearer(token));
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.msg);
    ApiError::from_status(resp.status(), message)
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
