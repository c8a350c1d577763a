mod fake_submission_gateway;
mod stepping_time_source;

pub use fake_submission_gateway::FakeSubmissionGateway;
pub use stepping_time_source::SteppingTimeSource;
