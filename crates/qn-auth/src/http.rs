use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qn_core::entities::User;
use qn_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::transport::{AuthTransport, Credentials, Registration};

/// Successful auth response. Unlike the stored record, extra fields the
/// service sends (tokens, profile extras) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    id: String,
    email: String,
    name: String,
    role: Role,
    #[serde(default)]
    avatar: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AuthResponse> for User {
    fn from(response: AuthResponse) -> Self {
        let user = Self::new(
            response.id,
            response.email,
            response.name,
            response.role,
            response.created_at,
        );
        match response.avatar {
            Some(avatar) => user.with_avatar(avatar),
            None => user,
        }
    }
}

/// Authentication service client.
///
/// POSTs credentials as JSON to `{base_url}/login` and `{base_url}/register`.
/// A 2xx body is the user record; 401/403 are credential rejections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `AuthError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Transport(format!("build client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<User, AuthError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(format!("{path}: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            return Err(AuthError::Authentication(if detail.is_empty() {
                format!("{path} rejected ({status})")
            } else {
                detail.to_string()
            }));
        }
        if !status.is_success() {
            return Err(AuthError::Transport(format!("{path}: unexpected status {status}")));
        }

        response
            .json::<AuthResponse>()
            .await
            .map(User::from)
            .map_err(|e| AuthError::Transport(format!("parse {path} response: {e}")))
    }
}

#[async_trait]
impl AuthTransport for HttpTransport {
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        tracing::debug!(email = %credentials.email, role = %credentials.role, "http sign-in");
        self.post("login", credentials).await
    }

    async fn sign_up(&self, registration: &Registration) -> Result<User, AuthError> {
        tracing::debug!(email = %registration.email, role = %registration.role, "http sign-up");
        self.post("register", registration).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
