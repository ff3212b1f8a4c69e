//! Authentication transports.
//!
//! The session store talks to an [`AuthTransport`]; [`MockTransport`] answers
//! locally after a fixed delay, `HttpTransport` (see [`crate::http`]) calls a
//! real authentication service with the same contract.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use qn_core::entities::{User, name_from_email};
use qn_core::enums::Role;
use qn_core::ids::new_user_id;
use serde::Serialize;

use crate::error::AuthError;

/// Sign-in payload: `{email, password, role}` on the wire.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Sign-up payload: `{email, password, name, role}` on the wire.
#[derive(Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl Registration {
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role,
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

/// Exchanges credentials for a [`User`].
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::Authentication` when the credentials are rejected and
    /// `AuthError::Transport` when the service cannot be reached.
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::Authentication` when the registration is rejected and
    /// `AuthError::Transport` when the service cannot be reached.
    async fn sign_up(&self, registration: &Registration) -> Result<User, AuthError>;

    /// Short transport name for status output.
    fn name(&self) -> &'static str;
}

/// Local stand-in for an authentication service.
///
/// Accepts every credential. The password is never inspected.
#[derive(Debug, Clone, Copy)]
pub struct MockTransport {
    delay: Duration,
}

impl MockTransport {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay at all; for tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    async fn round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl AuthTransport for MockTransport {
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.round_trip().await;
        Ok(User::new(
            new_user_id()?,
            credentials.email.clone(),
            name_from_email(&credentials.email),
            credentials.role,
            Utc::now(),
        ))
    }

    async fn sign_up(&self, registration: &Registration) -> Result<User, AuthError> {
        self.round_trip().await;
        Ok(User::new(
            new_user_id()?,
            registration.email.clone(),
            registration.name.clone(),
            registration.role,
            Utc::now(),
        ))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_sign_in_derives_name_from_email() {
        let user = MockTransport::instant()
            .sign_in(&Credentials::new("bob@example.com", "pw", Role::Student))
            .await
            .expect("sign in");
        assert_eq!(user.name, "bob");
        assert_eq!(user.email, "bob@example.com");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.id.len(), qn_core::ids::USER_ID_LEN);
    }

    #[tokio::test]
    async fn mock_sign_up_keeps_name_verbatim() {
        let user = MockTransport::instant()
            .sign_up(&Registration::new(
                "ana@example.com",
                "pw",
                "Ana García",
                Role::Teacher,
            ))
            .await
            .expect("sign up");
        assert_eq!(user.name, "Ana García");
        assert_eq!(user.role, Role::Teacher);
    }

    #[tokio::test]
    async fn mock_accepts_any_password() {
        let user = MockTransport::instant()
            .sign_in(&Credentials::new("eve@example.com", "", Role::Teacher))
            .await;
        assert!(user.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_configured_delay() {
        let transport = MockTransport::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        transport
            .sign_in(&Credentials::new("bob@example.com", "pw", Role::Student))
            .await
            .expect("sign in");
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn debug_output_redacts_password() {
        let credentials = Credentials::new("bob@example.com", "hunter2", Role::Student);
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));

        let registration = Registration::new("a@x", "hunter2", "A", Role::Teacher);
        assert!(!format!("{registration:?}").contains("hunter2"));
    }

    #[test]
    fn credentials_serialize_to_wire_shape() {
        let value =
            serde_json::to_value(Credentials::new("bob@example.com", "pw", Role::Student)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"email": "bob@example.com", "password": "pw", "role": "student"})
        );
    }
}
