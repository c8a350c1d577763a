//! Response form controller.
//!
//! Owns the form state for one visit, feeds user events through the state machine and performs
//! the single gateway call the machine asks for.

use crate::domain::response::{
    Command, Confirmation, Field, FieldEdit, FormEvent, FormState, Payload, Requirement,
    SubmissionOutcome, policy,
};
use crate::ports::{SubmissionError, SubmissionGateway};

type Listener = Box<dyn FnMut(&FormState)>;

/// Snapshot of what the form should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub state: &'static str,
    pub visible: Vec<Field>,
    pub missing: Vec<Requirement>,
    pub submit_enabled: bool,
    pub outcome: Option<SubmissionOutcome>,
}

pub struct ResponseFormController<G> {
    gateway: G,
    state: FormState,
    listeners: Vec<Listener>,
}

impl<G: SubmissionGateway> ResponseFormController<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway, state: FormState::default(), listeners: Vec::new() }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Register a redraw callback, invoked after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&FormState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        self.dispatch(FormEvent::Edit(edit));
    }

    pub fn view(&self) -> FormView {
        let draft = self.state.draft();
        FormView {
            state: self.state.name(),
            visible: policy::visible_fields(draft),
            missing: policy::missing(draft),
            submit_enabled: self.state.can_submit(),
            outcome: self.state.outcome(),
        }
    }

    /// Move to `Submitting` and hand back the payload to send.
    ///
    /// Returns `None` when submitting is not currently possible: the draft is incomplete, a
    /// submission is already in flight, or the response was already recorded.
    pub fn begin_submit(&mut self) -> Option<Payload> {
        match self.dispatch(FormEvent::Submit) {
            Some(Command::Send(payload)) => Some(payload),
            None => None,
        }
    }

    /// Resolve the in-flight submission.
    pub fn complete_submit(&mut self, result: Result<(), SubmissionError>) {
        let event = match result {
            Ok(()) => FormEvent::Acknowledged,
            Err(error) => {
                tracing::warn!(error = %error, "submission failed");
                FormEvent::Failed(error.to_string())
            }
        };
        self.dispatch(event);
    }

    /// Submit the draft through the gateway, at most one call per accepted submit.
    pub fn submit(&mut self) -> Option<SubmissionOutcome> {
        let payload = self.begin_submit()?;
        let result = self.gateway.submit(&payload);
        self.complete_submit(result);
        self.state.outcome()
    }

    /// Terminal message, available once the response is recorded.
    pub fn confirmation(&self) -> Option<Confirmation> {
        match &self.state {
            FormState::Submitted(draft) => Some(Confirmation::for_draft(draft)),
            _ => None,
        }
    }

    fn dispatch(&mut self, event: FormEvent) -> Option<Command> {
        let from = self.state.name();
        let transition = std::mem::take(&mut self.state).apply(event);
        self.state = transition.state;
        tracing::debug!(from, to = self.state.name(), "form event applied");

        for listener in &mut self.listeners {
            listener(&self.state);
        }
        transition.command
    }
}
