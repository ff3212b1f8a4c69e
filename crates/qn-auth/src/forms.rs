//! Sign-in and sign-up forms.
//!
//! Required-field checks are the only validation performed; credentials are
//! otherwise passed through to the transport untouched.

use qn_core::entities::User;
use qn_core::enums::Role;

use crate::error::AuthError;
use crate::session::SessionStore;

fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation { field });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns `AuthError::Validation` naming the first blank field.
    pub fn validate(&self) -> Result<(), AuthError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }

    /// Validate, then log in through `store`.
    ///
    /// # Errors
    ///
    /// Returns the validation error or whatever [`SessionStore::login`] returns.
    pub async fn submit(&self, store: &mut SessionStore) -> Result<User, AuthError> {
        self.validate()?;
        store.login(&self.email, &self.password, self.role).await
    }
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns `AuthError::Validation` naming the first blank field.
    pub fn validate(&self) -> Result<(), AuthError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }

    /// Validate, then register through `store`.
    ///
    /// # Errors
    ///
    /// Returns the validation error or whatever [`SessionStore::register`] returns.
    pub async fn submit(&self, store: &mut SessionStore) -> Result<User, AuthError> {
        self.validate()?;
        store
            .register(&self.email, &self.password, &self.name, self.role)
            .await
    }
}
