//! Live countdown clock.
//!
//! The clock owns one ticker thread for as long as the handle lives. Dropping or stopping the
//! handle disconnects the ticker and joins it, so no tick is delivered afterwards.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::{Countdown, TargetInstant};
use crate::ports::TimeSource;

pub struct TimeRemainingClock {
    stop: Option<Sender<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl TimeRemainingClock {
    /// One reading without starting a ticker.
    pub fn sample(target: TargetInstant, source: &impl TimeSource) -> Countdown {
        target.countdown_from(source.now())
    }

    /// Start ticking toward `target`: one reading right away, then one every `cadence`.
    ///
    /// The ticker exits on its own after delivering the first elapsed reading.
    pub fn start<S, F>(target: TargetInstant, source: S, cadence: Duration, mut on_tick: F) -> Self
    where
        S: TimeSource + Send + 'static,
        F: FnMut(Countdown) + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let ticker = thread::spawn(move || {
            loop {
                let reading = target.countdown_from(source.now());
                on_tick(reading);
                if reading.is_elapsed() {
                    tracing::debug!("countdown elapsed, ticker exiting");
                    break;
                }
                match stopped.recv_timeout(cadence) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self { stop: Some(stop), ticker: Some(ticker) }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    /// Stop ticking and wait for the ticker to exit.
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        // Dropping the sender wakes the ticker even if it already exited.
        self.stop.take();
        if let Some(ticker) = self.ticker.take() {
            if ticker.join().is_err() {
                tracing::warn!("countdown ticker panicked");
            }
        }
    }
}

impl Drop for TimeRemainingClock {
    fn drop(&mut self) {
        self.release();
    }
}
