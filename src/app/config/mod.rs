//! Configuration loading: file discovery, environment overrides, and conversion to domain models.
//!
//! Pure schema/model types live in `domain::configuration`.

mod config_dto;
mod load_config;

pub use load_config::{
    CONFIG_ENV, DEFAULT_CONFIG_FILE, GATEWAY_URL_ENV, builtin_config, load_config,
    parse_config_content, resolve_config_path,
};
