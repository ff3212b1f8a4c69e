use std::sync::Arc;

use anyhow::Context;
use qn_auth::{
    AuthTransport, FileStore, HttpTransport, KeyValueStore, KeyringStore, MemoryStore,
    MockTransport, RestoreOutcome, SessionStore,
};
use qn_config::{AuthConfig, QnConfig, SessionConfig, StorageBackend, TransportKind};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: QnConfig,
    pub session: SessionStore,
    /// What the session found in storage at startup.
    pub restore: RestoreOutcome,
}

impl AppContext {
    /// Wire storage and transport from `config`, then restore the session.
    pub fn init(config: QnConfig) -> anyhow::Result<Self> {
        let storage = build_storage(&config.session)?;
        let transport = build_transport(&config.auth)?;

        let mut session = SessionStore::new(transport, storage, config.session.key());
        let restore = session.initialize();
        tracing::debug!(
            outcome = restore.as_str(),
            backend = session.storage_kind(),
            transport = session.transport_name(),
            "session initialized"
        );

        Ok(Self {
            config,
            session,
            restore,
        })
    }
}

pub fn build_storage(config: &SessionConfig) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let storage: Box<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => Box::new(FileStore::new(
            config
                .resolved_storage_dir()
                .context("cannot resolve session storage directory")?,
        )),
        StorageBackend::Keyring => {
            let fallback = FileStore::new(
                config
                    .resolved_storage_dir()
                    .context("cannot resolve keyring fallback directory")?,
            );
            Box::new(KeyringStore::new(config.keyring_service.clone(), fallback))
        }
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    Ok(storage)
}

pub fn build_transport(config: &AuthConfig) -> anyhow::Result<Arc<dyn AuthTransport>> {
    let transport: Arc<dyn AuthTransport> = match config.transport {
        TransportKind::Mock => Arc::new(MockTransport::new(config.mock_delay())),
        TransportKind::Http => Arc::new(
            HttpTransport::new(&config.base_url, config.timeout())
                .context("failed to build http auth transport")?,
        ),
    };
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_starts_anonymous() {
        let mut config = QnConfig::default();
        config.session.backend = StorageBackend::Memory;

        let ctx = AppContext::init(config).expect("init");
        assert_eq!(ctx.restore, RestoreOutcome::Empty);
        assert!(ctx.session.current().is_none());
        assert_eq!(ctx.session.storage_kind(), "memory");
        assert_eq!(ctx.session.transport_name(), "mock");
    }

    #[test]
    fn file_backend_uses_configured_dir() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut config = QnConfig::default();
        config.session.storage_dir = tmp.path().display().to_string();

        let ctx = AppContext::init(config).expect("init");
        assert_eq!(ctx.session.storage_kind(), "file");
        assert_eq!(ctx.session.storage_key(), "quest-nexus-user");
    }

    #[test]
    fn padded_storage_key_names_a_clean_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut config = QnConfig::default();
        config.session.storage_dir = tmp.path().display().to_string();
        config.session.storage_key = " quest-nexus-user ".into();
        config.auth.mock_delay_ms = 0;

        let mut ctx = AppContext::init(config).expect("init");
        assert_eq!(ctx.session.storage_key(), "quest-nexus-user");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime");
        runtime
            .block_on(ctx.session.login("bob@school.edu", "pw", qn_core::enums::Role::Student))
            .expect("login");
        assert!(tmp.path().join("quest-nexus-user").exists());
    }

    #[test]
    fn http_transport_is_selected() {
        let mut config = QnConfig::default();
        config.auth.transport = TransportKind::Http;
        config.auth.base_url = "http://127.0.0.1:9/api".into();

        let transport = build_transport(&config.auth).expect("transport");
        assert_eq!(transport.name(), "http");
    }
}
