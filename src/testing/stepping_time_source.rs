use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::ports::TimeSource;

/// Time source that advances by a fixed step on every read.
#[derive(Clone)]
pub struct SteppingTimeSource {
    current: Arc<Mutex<DateTime<Utc>>>,
    step: Duration,
}

impl SteppingTimeSource {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { current: Arc::new(Mutex::new(start)), step }
    }
}

impl TimeSource for SteppingTimeSource {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current = now + self.step;
        now
    }
}
