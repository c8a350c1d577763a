//! Response form: draft, field policy, state machine, and collector payload.

mod confirmation;
mod draft;
mod machine;
mod payload;
pub mod policy;

pub use confirmation::Confirmation;
pub use draft::{BusStop, Choice, FieldEdit, ResponseDraft};
pub use machine::{Command, FormEvent, FormState, SubmissionOutcome, Transition};
pub use payload::Payload;
pub use policy::{Field, Requirement};
