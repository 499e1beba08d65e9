use crate::app_config::{AppConfig, Environment};
use crate::format::{CurrencyPosition, PriceFormat};
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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("SWATCH_ENV", "development"))
        .map_err(|reason| invalid("SWATCH_ENV", reason))?;
    let log_level = or_default("SWATCH_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("SWATCH_CATALOG_PATH", "./config/catalog.yaml"));

    let position = or_default("SWATCH_CURRENCY_POSITION", "left")
        .parse::<CurrencyPosition>()
        .map_err(|reason| invalid("SWATCH_CURRENCY_POSITION", reason))?;

    let decimals = or_default("SWATCH_PRICE_DECIMALS", "2")
        .parse::<u32>()
        .map_err(|e| invalid("SWATCH_PRICE_DECIMALS", e.to_string()))?;
    // Decimal carries at most 28 fractional digits.
    if decimals > 28 {
        return Err(invalid(
            "SWATCH_PRICE_DECIMALS",
            format!("{decimals} exceeds the maximum of 28"),
        ));
    }

    let price_format = PriceFormat {
        currency_symbol: or_default("SWATCH_CURRENCY_SYMBOL", "$"),
        position,
        decimals,
        decimal_separator: or_default("SWATCH_DECIMAL_SEPARATOR", "."),
        thousand_separator: or_default("SWATCH_THOUSAND_SEPARATOR", ","),
    };

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        price_format,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, String> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(format!(
            "unknown environment '{other}'; expected development, test or production"
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
