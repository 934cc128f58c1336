use crate::app_config::{AppConfig, TwitterCredentials};
use crate::ConfigError;

const TWITTER_VARS: [&str; 4] = [
    "TWITTER_API_KEY",
    "TWITTER_API_KEY_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the Twitter credentials are
/// only partially set.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the Twitter credentials are
/// only partially set.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TRENDSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCOPE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("TRENDSCOPE_USER_AGENT", "trendscope/0.1 (trend-dashboard)");
    let default_geo = or_default("TRENDSCOPE_GEO", "US");
    let host_language = or_default("TRENDSCOPE_HL", "en-US");
    let tz_offset_minutes = parse_i32("TRENDSCOPE_TZ_OFFSET_MINUTES", "360")?;

    let twitter = twitter_credentials(&lookup)?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        default_geo,
        host_language,
        tz_offset_minutes,
        twitter,
    })
}

/// Reads the four Twitter credential vars as an all-or-nothing group.
///
/// Returns `Ok(None)` when none are set, and `MissingEnvVar` naming the first
/// absent var when only some are.
fn twitter_credentials<F>(lookup: &F) -> Result<Option<TwitterCredentials>, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let values: Vec<Option<String>> = TWITTER_VARS
        .iter()
        .map(|var| lookup(var).ok().filter(|v| !v.trim().is_empty()))
        .collect();

    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    if let Some(idx) = values.iter().position(Option::is_none) {
        return Err(ConfigError::MissingEnvVar(TWITTER_VARS[idx].to_string()));
    }

    let mut values = values.into_iter().flatten();
    let mut next = || values.next().unwrap_or_default();
    Ok(Some(TwitterCredentials {
        api_key: next(),
        api_key_secret: next(),
        access_token: next(),
        access_token_secret: next(),
    }))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
