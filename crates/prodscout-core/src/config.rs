use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let reddit_client_id = require("REDDIT_CLIENT_ID")?;
    let reddit_client_secret = require("REDDIT_CLIENT_SECRET")?;
    let reddit_user_agent = require("REDDIT_USER_AGENT")?;
    let openai_api_key = require("OPENAI_API_KEY")?;
    let ner_url = require("PRODSCOUT_NER_URL")?;
    let sentiment_url = require("PRODSCOUT_SENTIMENT_URL")?;

    let env = parse_environment(&or_default("PRODSCOUT_ENV", "development"));
    let bind_addr = parse_addr("PRODSCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PRODSCOUT_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("PRODSCOUT_HTTP_TIMEOUT_SECS", "30")?;
    let submission_limit = parse_u32("PRODSCOUT_SUBMISSION_LIMIT", "10")?;
    let cache_ttl_secs = parse_u64("PRODSCOUT_CACHE_TTL_SECS", "3600")?;

    let search_subreddits: Vec<String> = or_default("PRODSCOUT_SUBREDDITS", "buyitforlife")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if search_subreddits.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRODSCOUT_SUBREDDITS".to_string(),
            reason: "must name at least one subreddit".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        reddit_client_id,
        reddit_client_secret,
        reddit_user_agent,
        openai_api_key,
        ner_url,
        sentiment_url,
        http_timeout_secs,
        search_subreddits,
        submission_limit,
        cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("REDDIT_CLIENT_ID", "id");
        m.insert("REDDIT_CLIENT_SECRET", "secret");
        m.insert("REDDIT_USER_AGENT", "prodscout/0.1 (test)");
        m.insert("OPENAI_API_KEY", "sk-test");
        m.insert("PRODSCOUT_NER_URL", "http://localhost:8081");
        m.insert("PRODSCOUT_SENTIMENT_URL", "http://localhost:8082");
        m
    }

    #[test]
    fn defaults_applied_when_optional_vars_absent() {
        let env = full_env();
        let config = build_app_config(lookup_from_map(&env)).unwrap();

        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.submission_limit, 10);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.search_subreddits, vec!["buyitforlife"]);
    }

    #[test]
    fn missing_required_var_is_reported() {
        let mut env = full_env();
        env.remove("OPENAI_API_KEY");
        let err = build_app_config(lookup_from_map(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingEnvVar(var) if var == "OPENAI_API_KEY"
        ));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut env = full_env();
        env.insert("PRODSCOUT_BIND_ADDR", "not-an-addr");
        let err = build_app_config(lookup_from_map(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { var, .. } if var == "PRODSCOUT_BIND_ADDR"
        ));
    }

    #[test]
    fn subreddit_list_is_split_and_trimmed() {
        let mut env = full_env();
        env.insert("PRODSCOUT_SUBREDDITS", "buyitforlife, cooking ,,kitchens");
        let config = build_app_config(lookup_from_map(&env)).unwrap();
        assert_eq!(
            config.search_subreddits,
            vec!["buyitforlife", "cooking", "kitchens"]
        );
    }

    #[test]
    fn empty_subreddit_list_is_rejected() {
        let mut env = full_env();
        env.insert("PRODSCOUT_SUBREDDITS", " , ");
        let err = build_app_config(lookup_from_map(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { var, .. } if var == "PRODSCOUT_SUBREDDITS"
        ));
    }

    #[test]
    fn environment_parses_known_values() {
        assert_eq!(parse_environment("production"), Environment::Production);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("anything"), Environment::Development);
    }

    #[test]
    fn debug_redacts_secrets() {
        let mut env = full_env();
        env.insert("REDDIT_CLIENT_SECRET", "hunter2");
        let config = build_app_config(lookup_from_map(&env)).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("sk-test"));
        assert!(rendered.contains("[redacted]"));
    }
}
