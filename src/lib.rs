//! rsvp: event announcement with a live countdown and a guided response form.
//!
//! The response form is a pure state machine (`domain::response`) driven by
//! [`ResponseFormController`]; the countdown is a scoped ticker ([`TimeRemainingClock`]).
//! Both reach the outside world only through the ports in [`ports`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CollectorGateway, countdown, response_form, start_countdown, submission_gateway,
};
pub use app::config::load_config;
pub use app::{FormView, ResponseFormController, TimeRemainingClock};
pub use domain::response::{
    BusStop, Choice, Confirmation, Field, FieldEdit, FormState, Payload, Requirement,
    ResponseDraft, SubmissionOutcome,
};
pub use domain::{AppConfig, AppError, Countdown, TargetInstant, TimeRemaining};
pub use ports::{SubmissionError, SubmissionErrorKind, SubmissionGateway, TimeSource};
