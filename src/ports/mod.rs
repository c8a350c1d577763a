mod submission_gateway;
mod time_source;

pub use submission_gateway::{SubmissionError, SubmissionErrorKind, SubmissionGateway};
pub use time_source::TimeSource;
