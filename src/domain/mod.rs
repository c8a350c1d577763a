pub mod announcement;
pub mod configuration;
pub mod countdown;
pub mod error;
pub mod response;

pub use announcement::{Accordion, Announcement, FaqEntry};
pub use configuration::{AckMode, AppConfig, CountdownConfig, GatewayConfig};
pub use countdown::{Countdown, TargetInstant, TimeRemaining};
pub use error::AppError;
