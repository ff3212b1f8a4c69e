use qn_config::{ENV_PREFIX, QnConfig};

const SECTIONS: [&str; 2] = ["SESSION", "AUTH"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &QnConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &QnConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            let field = &key[single.len()..];
            warnings.push(format!(
                "{key} is ignored. Use double underscores (example: {double}{field})."
            ));
        }
    }

    if config.auth.base_url.is_empty() && has_env_prefix(&env_keys, "QN_AUTH__BASE") {
        warnings.push(
            "QN_AUTH__BASE* is set but auth.base_url is empty. The variable is QN_AUTH__BASE_URL."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use qn_config::QnConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = QnConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("QN_SESSION_BACKEND".to_string(), "memory".to_string()),
                ("QN_AUTH_TRANSPORT".to_string(), "http".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("QN_SESSION__BACKEND"));
        assert!(warnings[1].contains("QN_AUTH__TRANSPORT"));
    }

    #[test]
    fn warns_for_misspelled_base_url() {
        let config = QnConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("QN_AUTH__BASEURL".to_string(), "https://x".to_string())],
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let mut config = QnConfig::default();
        config.auth.base_url = "https://auth.example.com".to_string();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("QN_SESSION__BACKEND".to_string(), "memory".to_string()),
                (
                    "QN_AUTH__BASE_URL".to_string(),
                    "https://auth.example.com".to_string(),
                ),
                ("QN_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
