//! Library entry points shared by the CLI and embedding callers.

use crate::adapters::{HttpSubmissionGateway, RetryPolicy, RetryingSubmissionGateway};
use crate::app::{ResponseFormController, TimeRemainingClock};
use crate::domain::{AppConfig, AppError, Countdown, GatewayConfig};
use crate::ports::TimeSource;

/// Gateway stack used for real submissions.
pub type CollectorGateway = RetryingSubmissionGateway<HttpSubmissionGateway>;

/// Build the HTTP gateway wrapped in the configured retry policy.
pub fn submission_gateway(config: &GatewayConfig) -> Result<CollectorGateway, AppError> {
    let http = HttpSubmissionGateway::from_config(config)?;
    Ok(RetryingSubmissionGateway::new(http, RetryPolicy::from_config(config)))
}

/// A fresh response form bound to the configured collector.
pub fn response_form(
    config: &AppConfig,
) -> Result<ResponseFormController<CollectorGateway>, AppError> {
    Ok(ResponseFormController::new(submission_gateway(&config.gateway)?))
}

/// Current countdown reading toward the event start.
pub fn countdown(config: &AppConfig, source: &impl TimeSource) -> Result<Countdown, AppError> {
    Ok(TimeRemainingClock::sample(config.target()?, source))
}

/// Start the live countdown toward the event start at the configured cadence.
pub fn start_countdown<S, F>(
    config: &AppConfig,
    source: S,
    on_tick: F,
) -> Result<TimeRemainingClock, AppError>
where
    S: TimeSource + Send + 'static,
    F: FnMut(Countdown) + Send + 'static,
{
    let target = config.target()?;
    Ok(TimeRemainingClock::start(target, source, config.countdown.cadence(), on_tick))
}
