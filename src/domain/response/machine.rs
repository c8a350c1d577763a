//! Response form state machine.
//!
//! `Editing → Submitting → Submitted | SubmitError`, with `SubmitError → Submitting` on retry.
//! Transitions are pure; the only side effect is described by [`Command::Send`].

use super::draft::{FieldEdit, ResponseDraft};
use super::payload::Payload;
use super::policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing(ResponseDraft),
    Submitting(ResponseDraft),
    Submitted(ResponseDraft),
    SubmitError { draft: ResponseDraft, reason: String },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing(ResponseDraft::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit(FieldEdit),
    Submit,
    Acknowledged,
    Failed(String),
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Payload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub command: Option<Command>,
}

impl Transition {
    fn stay(state: FormState) -> Self {
        Self { state, command: None }
    }
}

/// Transient status of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Pending,
    Succeeded,
    Failed(String),
}

impl FormState {
    pub fn draft(&self) -> &ResponseDraft {
        match self {
            FormState::Editing(draft)
            | FormState::Submitting(draft)
            | FormState::Submitted(draft)
            | FormState::SubmitError { draft, .. } => draft,
        }
    }

    pub fn into_draft(self) -> ResponseDraft {
        match self {
            FormState::Editing(draft)
            | FormState::Submitting(draft)
            | FormState::Submitted(draft)
            | FormState::SubmitError { draft, .. } => draft,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormState::Editing(_) => "editing",
            FormState::Submitting(_) => "submitting",
            FormState::Submitted(_) => "submitted",
            FormState::SubmitError { .. } => "submit_error",
        }
    }

    pub fn outcome(&self) -> Option<SubmissionOutcome> {
        match self {
            FormState::Editing(_) => None,
            FormState::Submitting(_) => Some(SubmissionOutcome::Pending),
            FormState::Submitted(_) => Some(SubmissionOutcome::Succeeded),
            FormState::SubmitError { reason, .. } => Some(SubmissionOutcome::Failed(reason.clone())),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FormState::Submitted(_))
    }

    /// Whether a submit event would currently start a submission.
    pub fn can_submit(&self) -> bool {
        match self {
            FormState::Editing(draft) | FormState::SubmitError { draft, .. } => {
                policy::is_ready(draft)
            }
            FormState::Submitting(_) | FormState::Submitted(_) => false,
        }
    }

    pub fn apply(self, event: FormEvent) -> Transition {
        match (self, event) {
            (FormState::Editing(mut draft), FormEvent::Edit(edit))
            | (FormState::SubmitError { mut draft, .. }, FormEvent::Edit(edit)) => {
                draft.apply(edit);
                Transition::stay(FormState::Editing(draft))
            }

            (state, FormEvent::Submit) if state.can_submit() => {
                let draft = state.into_draft();
                let payload = Payload::from_draft(&draft);
                Transition {
                    state: FormState::Submitting(draft),
                    command: Some(Command::Send(payload)),
                }
            }

            (FormState::Submitting(draft), FormEvent::Acknowledged) => {
                Transition::stay(FormState::Submitted(draft))
            }
            (FormState::Submitting(draft), FormEvent::Failed(reason)) => {
                Transition::stay(FormState::SubmitError { draft, reason })
            }

            (state, _) => Transition::stay(state),
        }
    }
}
