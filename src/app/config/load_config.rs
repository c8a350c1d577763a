//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use super::config_dto::ConfigDto;
use crate::domain::{AppConfig, AppError};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "RSVP_CONFIG";
/// Environment variable overriding `gateway.url`.
pub const GATEWAY_URL_ENV: &str = "RSVP_GATEWAY_URL";
/// File picked up from the working directory when nothing else is specified.
pub const DEFAULT_CONFIG_FILE: &str = "rsvp.toml";

const BUILTIN_CONFIG: &str = include_str!("../../../assets/rsvp.default.toml");

/// Pick the configuration file: explicit path, then `$RSVP_CONFIG`, then `./rsvp.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

/// Load the effective configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = match resolve_config_path(explicit) {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|err| {
                AppError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    err
                ))
            })?;
            tracing::debug!(path = %path.display(), "loading configuration");
            parse_config_content(&content)?
        }
        None => builtin_config()?,
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Parse file content layered over the built-in defaults.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let dto: ConfigDto = toml::from_str(content)?;
    let config = dto.merge_over(builtin_config()?);
    config.validate()?;
    Ok(config)
}

/// The configuration embedded in the binary.
pub fn builtin_config() -> Result<AppConfig, AppError> {
    let dto: ConfigDto = toml::from_str(BUILTIN_CONFIG)?;
    let event = dto
        .event
        .ok_or_else(|| AppError::config_error("Built-in configuration is missing [event]"))?;

    Ok(AppConfig {
        event,
        faq: dto.faq.unwrap_or_default(),
        countdown: dto.countdown.unwrap_or_default(),
        gateway: dto.gateway.unwrap_or_default(),
    })
}

fn apply_env_overrides(config: &mut AppConfig) -> Result<(), AppError> {
    let Ok(raw) = std::env::var(GATEWAY_URL_ENV) else {
        return Ok(());
    };
    if raw.trim().is_empty() {
        return Ok(());
    }
    let url = Url::parse(raw.trim()).map_err(|err| {
        AppError::InvalidConfig(format!("{} is not a valid URL: {}", GATEWAY_URL_ENV, err))
    })?;
    config.gateway.url = Some(url);
    Ok(())
}
