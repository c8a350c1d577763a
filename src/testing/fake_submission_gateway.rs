use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::response::Payload;
use crate::ports::{SubmissionError, SubmissionGateway};

/// Records every payload and replays scripted results; succeeds once the script runs out.
#[derive(Clone, Default)]
pub struct FakeSubmissionGateway {
    pub received: Arc<Mutex<Vec<Payload>>>,
    script: Arc<Mutex<VecDeque<Result<(), SubmissionError>>>>,
}

impl FakeSubmissionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted(results: Vec<Result<(), SubmissionError>>) -> Self {
        Self { received: Arc::default(), script: Arc::new(Mutex::new(results.into())) }
    }

    pub fn failing(error: SubmissionError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<Payload> {
        self.received.lock().unwrap().clone()
    }
}

impl SubmissionGateway for FakeSubmissionGateway {
    fn submit(&self, payload: &Payload) -> Result<(), SubmissionError> {
        self.received.lock().unwrap().push(payload.clone());
        self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
