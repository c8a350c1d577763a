use super::draft::{Choice, ResponseDraft};

const JOINING: &str =
    "Your response has been recorded. We are so looking forward to sharing this day with you.";
const NOT_JOINING: &str =
    "We are very sorry you cannot make it, but you will be in our thoughts on the day.";

/// Message shown once the collector has acknowledged the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub heading: String,
    pub body: &'static str,
    pub attending: bool,
}

impl Confirmation {
    pub fn for_draft(draft: &ResponseDraft) -> Self {
        let attending = draft.attending == Choice::Yes;
        Self {
            heading: format!("Thank you, {}!", draft.given_name.trim()),
            body: if attending { JOINING } else { NOT_JOINING },
            attending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::FieldEdit;

    #[test]
    fn declined_response_gets_the_sympathetic_message() {
        let draft = ResponseDraft::new()
            .with(FieldEdit::GivenName("Ana".into()))
            .with(FieldEdit::Attending(Choice::No));

        let confirmation = Confirmation::for_draft(&draft);
        assert_eq!(confirmation.heading, "Thank you, Ana!");
        assert_eq!(confirmation.body, NOT_JOINING);
        assert!(!confirmation.attending);
    }

    #[test]
    fn accepted_response_gets_the_affirmative_message() {
        let draft = ResponseDraft::new()
            .with(FieldEdit::GivenName(" Ana ".into()))
            .with(FieldEdit::Attending(Choice::Yes));

        let confirmation = Confirmation::for_draft(&draft);
        assert_eq!(confirmation.heading, "Thank you, Ana!");
        assert_eq!(confirmation.body, JOINING);
    }
}
