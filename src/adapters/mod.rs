pub mod http_submission_gateway;
pub mod retrying_submission_gateway;
pub mod time_sources;

pub use http_submission_gateway::HttpSubmissionGateway;
pub use retrying_submission_gateway::{RetryPolicy, RetryingSubmissionGateway};
pub use time_sources::{FixedTimeSource, SystemTimeSource};
