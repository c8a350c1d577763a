pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;

pub use clock::TimeRemainingClock;
pub use controller::{FormView, ResponseFormController};
