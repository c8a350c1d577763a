use chrono::{DateTime, Utc};

/// Port for reading the current wall-clock time.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
