use gig_config::GigConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GigConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GigConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = GigConfig::default();

    let mut warnings = Vec::new();

    if config.general.caller.is_empty()
        && has_single_underscore_key(&env_keys, "GIGBOARD_GENERAL")
    {
        warnings.push(
            "general.caller is unset while GIGBOARD_GENERAL* env vars exist. \
             Use double underscores (example: GIGBOARD_GENERAL__CALLER)."
                .to_string(),
        );
    }

    if config.store.path == defaults.store.path
        && has_single_underscore_key(&env_keys, "GIGBOARD_STORE")
    {
        warnings.push(
            "store.path appears default while GIGBOARD_STORE* env vars exist. \
             Use double underscores (example: GIGBOARD_STORE__PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use gig_config::GigConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = GigConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("GIGBOARD_GENERAL_CALLER".to_string(), "alice".to_string()),
                ("GIGBOARD_STORE_PATH".to_string(), "/tmp/x.db".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_for_correct_keys() {
        let config = GigConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("GIGBOARD_GENERAL__CALLER".to_string(), "alice".to_string())],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_configured() {
        let mut config = GigConfig::default();
        config.general.caller = "alice".into();
        config.store.path = "/srv/market.db".into();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("GIGBOARD_GENERAL_CALLER".to_string(), "alice".to_string()),
                ("GIGBOARD_STORE_PATH".to_string(), "/srv/market.db".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
