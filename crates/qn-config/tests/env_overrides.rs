use figment::Jail;
use qn_config::{QnConfig, StorageBackend, TransportKind};

#[test]
fn env_selects_backend_and_transport() {
    Jail::expect_with(|jail| {
        jail.set_env("QN_SESSION__BACKEND", "memory");
        jail.set_env("QN_AUTH__TRANSPORT", "http");
        jail.set_env("QN_AUTH__BASE_URL", "https://auth.example.com");

        let config = QnConfig::load().expect("config loads");
        assert_eq!(config.session.backend, StorageBackend::Memory);
        assert_eq!(config.auth.transport, TransportKind::Http);
        assert_eq!(config.auth.base_url, "https://auth.example.com");
        Ok(())
    });
}

#[test]
fn env_numeric_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("QN_AUTH__MOCK_DELAY_MS", "25");
        jail.set_env("QN_AUTH__TIMEOUT_SECS", "2");

        let config = QnConfig::load().expect("config loads");
        assert_eq!(config.auth.mock_delay_ms, 25);
        assert_eq!(config.auth.timeout_secs, 2);
        Ok(())
    });
}

#[test]
fn http_transport_without_base_url_is_rejected_at_load() {
    Jail::expect_with(|jail| {
        jail.set_env("QN_AUTH__TRANSPORT", "http");

        let err = QnConfig::load().expect_err("validation should fail");
        assert!(err.to_string().contains("auth.base_url"));
        Ok(())
    });
}

#[test]
fn unknown_backend_is_an_extraction_error() {
    Jail::expect_with(|jail| {
        jail.set_env("QN_SESSION__BACKEND", "cookie");

        assert!(QnConfig::load().is_err());
        Ok(())
    });
}
