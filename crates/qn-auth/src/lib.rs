//! # qn-auth
//!
//! Who is logged in to Quest Nexus, and how that survives a restart.
//!
//! [`SessionStore`] owns the current [`User`](qn_core::entities::User) and its
//! lifecycle phase. Credentials are exchanged through an [`AuthTransport`]
//! (a local mock or an HTTP service) and the resulting record is persisted
//! through a [`KeyValueStore`] (file, OS keychain, or memory).

pub mod error;
pub mod forms;
pub mod http;
pub mod record;
pub mod session;
pub mod storage;
pub mod transport;

pub use error::AuthError;
pub use forms::{LoginForm, RegisterForm};
pub use http::HttpTransport;
pub use session::{RestoreOutcome, SessionStore};
pub use storage::{FileStore, KeyValueStore, Keychain, KeyringStore, MemoryStore, OsKeychain};
pub use transport::{AuthTransport, Credentials, MockTransport, Registration};
