use fintel_config::FintelConfig;

/// Warn about `FINTEL_*` variables that look like settings but were not
/// picked up, usually because of a single underscore between section and key.
pub fn warn_unconfigured(config: &FintelConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FintelConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&keys, "FINTEL_AUTH") {
        warnings.push(
            "Auth is not configured but FINTEL_AUTH_* variables exist. Use double underscores (example: FINTEL_AUTH__URL)."
                .to_string(),
        );
    }

    if !config.database.is_remote() && has_single_underscore_key(&keys, "FINTEL_DATABASE") {
        warnings.push(
            "Using the local database but FINTEL_DATABASE_* variables exist. Use double underscores (example: FINTEL_DATABASE__URL)."
                .to_string(),
        );
    }

    warnings
}

/// `FINTEL_AUTH_URL` matches, `FINTEL_AUTH__URL` does not.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
