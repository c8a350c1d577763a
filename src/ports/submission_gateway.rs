//! Submission gateway port definition.

use std::fmt;

use thiserror::Error;

use crate::domain::response::Payload;

/// Broad category of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionErrorKind {
    /// The collector could not be reached; nothing was delivered.
    Connect,
    /// The request was sent but no answer arrived in time.
    Timeout,
    /// The collector answered with an error status.
    Status(u16),
    Other,
}

impl fmt::Display for SubmissionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionErrorKind::Connect => f.write_str("could not connect"),
            SubmissionErrorKind::Timeout => f.write_str("timed out"),
            SubmissionErrorKind::Status(code) => write!(f, "collector returned HTTP {}", code),
            SubmissionErrorKind::Other => f.write_str("request failed"),
        }
    }
}

/// A submission that did not reach the collector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SubmissionError {
    pub kind: SubmissionErrorKind,
    pub message: String,
}

impl SubmissionError {
    pub fn new(kind: SubmissionErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Port for delivering a response to the remote collector.
///
/// `Ok(())` means the exchange completed; the collector is not expected to return a
/// verifiable acknowledgement body.
pub trait SubmissionGateway {
    fn submit(&self, payload: &Payload) -> Result<(), SubmissionError>;
}

impl<G: SubmissionGateway + ?Sized> SubmissionGateway for Box<G> {
    fn submit(&self, payload: &Payload) -> Result<(), SubmissionError> {
        (**self).submit(payload)
    }
}
