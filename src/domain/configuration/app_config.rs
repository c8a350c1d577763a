//! Application configuration domain models.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::announcement::{Announcement, FaqEntry};
use crate::domain::countdown::TargetInstant;
use crate::domain::AppError;

/// Configuration loaded from `rsvp.toml`, merged over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub event: Announcement,
    pub faq: Vec<FaqEntry>,
    pub countdown: CountdownConfig,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.event.title.trim().is_empty() {
            return Err(AppError::InvalidConfig("event.title must not be empty".to_string()));
        }
        self.target()?;
        self.countdown.validate()?;
        self.gateway.validate()?;
        Ok(())
    }

    /// The instant the countdown runs toward.
    pub fn target(&self) -> Result<TargetInstant, AppError> {
        TargetInstant::parse(&self.event.starts_at)
    }
}

/// Countdown clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountdownConfig {
    /// Milliseconds between clock ticks.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self { tick_ms: default_tick_ms() }
    }
}

impl CountdownConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_ms == 0 {
            return Err(AppError::InvalidConfig("tick_ms must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// How a completed HTTP exchange is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckMode {
    /// Any response counts as delivered; the collector's reply is opaque.
    #[default]
    Transport,
    /// Error statuses (4xx/5xx) count as failures.
    Status,
}

/// Remote collector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Collector endpoint. Submissions fail fast when unset.
    #[serde(default)]
    pub url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Attempts per submission, counting the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay between attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub acknowledgement: AckMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            acknowledgement: AckMode::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(AppError::InvalidConfig("max_attempts must be greater than 0".to_string()));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        if let Some(url) = &self.url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::InvalidConfig(format!(
                    "gateway url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    15
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}
