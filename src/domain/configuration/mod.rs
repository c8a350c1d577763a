mod app_config;

pub use app_config::{AckMode, AppConfig, CountdownConfig, GatewayConfig};
