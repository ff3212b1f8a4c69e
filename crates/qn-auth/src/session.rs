//! The session store: who is logged in, persisted across restarts.

use std::sync::Arc;

use qn_core::entities::User;
use qn_core::enums::{Role, SessionPhase};

use crate::error::AuthError;
use crate::record;
use crate::storage::KeyValueStore;
use crate::transport::{AuthTransport, Credentials, Registration};

/// What [`SessionStore::initialize`] found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A valid record was found and is now the current session.
    Restored(User),
    /// No record was stored.
    Empty,
    /// A record was stored but could not be decoded. It is left in place.
    Discarded { reason: String },
    /// The storage backend could not be read.
    Unavailable { reason: String },
}

impl RestoreOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restored(_) => "restored",
            Self::Empty => "empty",
            Self::Discarded { .. } => "discarded",
            Self::Unavailable { .. } => "unavailable",
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Discarded { reason } | Self::Unavailable { reason } => Some(reason),
            Self::Restored(_) | Self::Empty => None,
        }
    }
}

/// Single source of truth for the authenticated identity.
///
/// Construct one per process and pass it to whatever needs it. Mutating
/// operations take `&mut self`, so auth attempts cannot overlap.
pub struct SessionStore {
    transport: Arc<dyn AuthTransport>,
    storage: Box<dyn KeyValueStore>,
    key: String,
    user: Option<User>,
    phase: SessionPhase,
}

impl SessionStore {
    #[must_use]
    pub fn new(
        transport: Arc<dyn AuthTransport>,
        storage: Box<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            storage,
            key: key.into(),
            user: None,
            phase: SessionPhase::Uninitialized,
        }
    }

    /// Restore the persisted session, if any.
    ///
    /// Storage problems never escape: a malformed record or an unreadable
    /// backend leaves the session anonymous and is reported in the outcome.
    /// Calling this again behaves like a restart and drops in-memory state.
    pub fn initialize(&mut self) -> RestoreOutcome {
        self.user = None;
        self.phase = SessionPhase::Uninitialized;
        self.enter(SessionPhase::Loading);

        let outcome = match self.storage.get(&self.key) {
            Ok(None) => RestoreOutcome::Empty,
            Ok(Some(raw)) => match record::decode(&raw) {
                Ok(user) => RestoreOutcome::Restored(user),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        key = %self.key,
                        "discarding malformed session record"
                    );
                    RestoreOutcome::Discarded {
                        reason: error.to_string(),
                    }
                }
            },
            Err(error) => {
                tracing::warn!(%error, backend = self.storage.kind(), "session storage unreadable");
                RestoreOutcome::Unavailable {
                    reason: error.to_string(),
                }
            }
        };

        if let RestoreOutcome::Restored(user) = &outcome {
            tracing::debug!(user_id = %user.id, role = %user.role, "session restored");
            self.user = Some(user.clone());
            self.enter(SessionPhase::Authenticated);
        } else {
            self.enter(SessionPhase::Anonymous);
        }

        outcome
    }

    /// Sign in and persist the resulting user.
    ///
    /// # Errors
    ///
    /// Returns the transport's error (`Authentication` for rejected
    /// credentials) or `StorageWrite` if the record cannot be persisted. The
    /// previous session is kept on any failure.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let credentials = Credentials::new(email, password, role);
        let transport = Arc::clone(&self.transport);
        let attempt = Attempt::begin(self);
        let result = transport.sign_in(&credentials).await;
        attempt.finish(result)
    }

    /// Create an account and persist the resulting user.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`].
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let registration = Registration::new(email, password, name, role);
        let transport = Arc::clone(&self.transport);
        let attempt = Attempt::begin(self);
        let result = transport.sign_up(&registration).await;
        attempt.finish(result)
    }

    /// Drop the current session and its persisted record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StorageWrite` if the record cannot be removed. The
    /// in-memory session is cleared regardless.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        if let Some(user) = self.user.take() {
            tracing::debug!(user_id = %user.id, "logging out");
            self.enter(SessionPhase::Anonymous);
        }
        self.storage.remove(&self.key)
    }

    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }

    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    fn enter(&mut self, next: SessionPhase) {
        let checked = self.phase.transition(next);
        if let Err(error) = &checked {
            tracing::error!(%error, "session phase out of order");
        }
        debug_assert!(checked.is_ok(), "invalid session transition {} -> {next}", self.phase);
        tracing::trace!(from = %self.phase, to = %next, "session phase");
        self.phase = next;
    }

    /// Return to the phase implied by the current user.
    fn settle(&mut self) {
        self.phase = if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        };
    }

    fn commit(&mut self, user: User) -> Result<User, AuthError> {
        let raw = record::encode(&user)?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(user_id = %user.id, role = %user.role, "session stored");
        self.user = Some(user.clone());
        self.enter(SessionPhase::Authenticated);
        Ok(user)
    }
}

/// An in-flight login/register.
///
/// Puts the store into `Loading` (unless already authenticated) and settles it
/// back if dropped before [`Attempt::finish`], e.g. when the caller's future
/// is cancelled mid-request.
struct Attempt<'a> {
    store: &'a mut SessionStore,
    finished: bool,
}

impl<'a> Attempt<'a> {
    fn begin(store: &'a mut SessionStore) -> Self {
        if store.phase != SessionPhase::Authenticated {
            store.enter(SessionPhase::Loading);
        }
        Self {
            store,
            finished: false,
        }
    }

    fn finish(mut self, result: Result<User, AuthError>) -> Result<User, AuthError> {
        self.finished = true;
        match result.and_then(|user| self.store.commit(user)) {
            Ok(user) => Ok(user),
            Err(error) => {
                tracing::warn!(%error, "authentication attempt failed");
                self.store.settle();
                Err(error)
            }
        }
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("authentication attempt abandoned");
            self.store.settle();
        }
    }
}
