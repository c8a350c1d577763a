//! The in-progress response record and the edits that mutate it.

use std::fmt;
use std::str::FromStr;

/// Tri-state answer for yes/no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unset,
    Yes,
    No,
}

impl Choice {
    pub fn is_yes(self) -> bool {
        self == Choice::Yes
    }

    pub fn is_set(self) -> bool {
        self != Choice::Unset
    }
}

impl From<bool> for Choice {
    fn from(value: bool) -> Self {
        if value { Choice::Yes } else { Choice::No }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "si" | "sí" => Ok(Choice::Yes),
            "no" | "n" => Ok(Choice::No),
            other => Err(format!("expected yes or no, got '{}'", other)),
        }
    }
}

/// Bus pickup points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusStop {
    Getxo,
    Zumarraga,
}

impl BusStop {
    pub const ALL: [BusStop; 2] = [BusStop::Getxo, BusStop::Zumarraga];

    pub fn name(self) -> &'static str {
        match self {
            BusStop::Getxo => "Getxo",
            BusStop::Zumarraga => "Zumarraga",
        }
    }
}

impl fmt::Display for BusStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BusStop {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        BusStop::ALL.into_iter().find(|stop| stop.name().eq_ignore_ascii_case(wanted)).ok_or_else(
            || {
                let known: Vec<&str> = BusStop::ALL.iter().map(|stop| stop.name()).collect();
                format!("unknown stop '{}', expected one of: {}", wanted, known.join(", "))
            },
        )
    }
}

/// Response being filled in by one visitor.
///
/// Gated fields keep whatever value they last held even when their parent answer hides them;
/// the policy decides whether they count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseDraft {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub attending: Choice,
    pub has_dietary_restriction: Choice,
    pub dietary_detail: String,
    pub needs_bus: Choice,
    pub bus_stop: Option<BusStop>,
}

impl ResponseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single field edit.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::GivenName(value) => self.given_name = value,
            FieldEdit::FamilyName(value) => self.family_name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Attending(choice) => self.attending = choice,
            FieldEdit::HasDietaryRestriction(choice) => self.has_dietary_restriction = choice,
            FieldEdit::DietaryDetail(value) => self.dietary_detail = value,
            FieldEdit::NeedsBus(choice) => self.needs_bus = choice,
            FieldEdit::BusStop(stop) => self.bus_stop = Some(stop),
        }
    }

    /// Builder-style variant of [`ResponseDraft::apply`].
    pub fn with(mut self, edit: FieldEdit) -> Self {
        self.apply(edit);
        self
    }
}

/// A single user edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    GivenName(String),
    FamilyName(String),
    Email(String),
    Attending(Choice),
    HasDietaryRestriction(Choice),
    DietaryDetail(String),
    NeedsBus(Choice),
    BusStop(BusStop),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_a_stop_replaces_the_previous_one() {
        let draft = ResponseDraft::new()
            .with(FieldEdit::BusStop(BusStop::Getxo))
            .with(FieldEdit::BusStop(BusStop::Zumarraga));
        assert_eq!(draft.bus_stop, Some(BusStop::Zumarraga));
    }

    #[test]
    fn hiding_a_parent_keeps_stale_children() {
        let draft = ResponseDraft::new()
            .with(FieldEdit::Attending(Choice::Yes))
            .with(FieldEdit::NeedsBus(Choice::Yes))
            .with(FieldEdit::BusStop(BusStop::Getxo))
            .with(FieldEdit::Attending(Choice::No));
        assert_eq!(draft.needs_bus, Choice::Yes);
        assert_eq!(draft.bus_stop, Some(BusStop::Getxo));
    }

    #[test]
    fn choice_parses_common_spellings() {
        assert_eq!("YES".parse::<Choice>(), Ok(Choice::Yes));
        assert_eq!("sí".parse::<Choice>(), Ok(Choice::Yes));
        assert_eq!(" n ".parse::<Choice>(), Ok(Choice::No));
        assert!("maybe".parse::<Choice>().is_err());
    }

    #[test]
    fn bus_stop_parses_case_insensitively() {
        assert_eq!("zumarraga".parse::<BusStop>(), Ok(BusStop::Zumarraga));
        let err = "Bilbao".parse::<BusStop>().unwrap_err();
        assert!(err.contains("Getxo, Zumarraga"));
    }
}
