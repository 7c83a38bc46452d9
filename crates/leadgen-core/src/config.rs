use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it from a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LEADGEN_ENV", "development"))?;
    let log_level = or_default("LEADGEN_LOG_LEVEL", "info");
    let data_path = PathBuf::from(or_default(
        "LEADGEN_DATA_PATH",
        "./public/prospects-data.json",
    ));
    let data_url = optional("LEADGEN_DATA_URL");
    let columns_path = optional("LEADGEN_COLUMNS_PATH").map(PathBuf::from);

    let page_size = parse_usize("LEADGEN_PAGE_SIZE", "50")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let fetch_timeout_secs = parse_u64("LEADGEN_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LEADGEN_USER_AGENT", "leadgen/0.1 (lead-explorer)");

    let id_prefix = or_default("LEADGEN_ID_PREFIX", "json");
    if id_prefix.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_ID_PREFIX".to_string(),
            reason: "id prefix must be non-empty".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_path,
        data_url,
        columns_path,
        page_size,
        fetch_timeout_secs,
        user_agent,
        id_prefix: id_prefix.trim().to_string(),
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
