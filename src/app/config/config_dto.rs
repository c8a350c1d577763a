//! Partial configuration as written in `rsvp.toml`.

use serde::Deserialize;

use crate::domain::{Announcement, AppConfig, CountdownConfig, FaqEntry, GatewayConfig};

/// Every section is optional; absent sections keep the base value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    pub event: Option<Announcement>,
    pub faq: Option<Vec<FaqEntry>>,
    pub countdown: Option<CountdownConfig>,
    pub gateway: Option<GatewayConfig>,
}

impl ConfigDto {
    /// Overlay this file's sections onto `base`.
    pub fn merge_over(self, base: AppConfig) -> AppConfig {
        AppConfig {
            event: self.event.unwrap_or(base.event),
            faq: self.faq.unwrap_or(base.faq),
            countdown: self.countdown.unwrap_or(base.countdown),
            gateway: self.gateway.unwrap_or(base.gateway),
        }
    }
}
