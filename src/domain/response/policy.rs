//! Which fields are shown and which answers are required, as pure functions of the draft.
//!
//! | Field                                  | Visible when                 | Required when        |
//! |----------------------------------------|------------------------------|----------------------|
//! | given name, family name, email         | always                       | always               |
//! | attending                              | always                       | always (yes or no)   |
//! | dietary restriction, needs bus         | attending = yes              | never (gates only)   |
//! | dietary detail                         | dietary restriction = yes    | never                |
//! | bus stop                               | attending = yes, bus = yes   | whenever visible     |

use std::fmt;

use super::draft::ResponseDraft;

/// Every field of the response form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GivenName,
    FamilyName,
    Email,
    Attending,
    HasDietaryRestriction,
    DietaryDetail,
    NeedsBus,
    BusStop,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::GivenName,
        Field::FamilyName,
        Field::Email,
        Field::Attending,
        Field::HasDietaryRestriction,
        Field::DietaryDetail,
        Field::NeedsBus,
        Field::BusStop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::GivenName => "Given name",
            Field::FamilyName => "Family name",
            Field::Email => "Email",
            Field::Attending => "Will you be joining us?",
            Field::HasDietaryRestriction => "Any food intolerance?",
            Field::DietaryDetail => "Which one?",
            Field::NeedsBus => "Will you need the bus?",
            Field::BusStop => "Pickup stop",
        }
    }
}

/// An unmet condition that keeps the response from being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    GivenName,
    FamilyName,
    Email,
    Attendance,
    BusStop,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Requirement::GivenName => "a given name",
            Requirement::FamilyName => "a family name",
            Requirement::Email => "a valid email address",
            Requirement::Attendance => "whether you will attend",
            Requirement::BusStop => "a pickup stop for the bus",
        };
        f.write_str(text)
    }
}

pub fn is_visible(field: Field, draft: &ResponseDraft) -> bool {
    match field {
        Field::GivenName | Field::FamilyName | Field::Email | Field::Attending => true,
        Field::HasDietaryRestriction | Field::NeedsBus => draft.attending.is_yes(),
        Field::DietaryDetail => {
            draft.attending.is_yes() && draft.has_dietary_restriction.is_yes()
        }
        Field::BusStop => draft.attending.is_yes() && draft.needs_bus.is_yes(),
    }
}

pub fn is_required(field: Field, draft: &ResponseDraft) -> bool {
    match field {
        Field::GivenName | Field::FamilyName | Field::Email | Field::Attending => true,
        Field::HasDietaryRestriction | Field::NeedsBus | Field::DietaryDetail => false,
        Field::BusStop => is_visible(Field::BusStop, draft),
    }
}

/// Fields currently shown, in display order.
pub fn visible_fields(draft: &ResponseDraft) -> Vec<Field> {
    Field::ALL.into_iter().filter(|field| is_visible(*field, draft)).collect()
}

/// Every requirement the draft does not yet satisfy.
pub fn missing(draft: &ResponseDraft) -> Vec<Requirement> {
    let mut missing = Vec::new();
    if draft.given_name.trim().is_empty() {
        missing.push(Requirement::GivenName);
    }
    if draft.family_name.trim().is_empty() {
        missing.push(Requirement::FamilyName);
    }
    if !looks_like_email(&draft.email) {
        missing.push(Requirement::Email);
    }
    if !draft.attending.is_set() {
        missing.push(Requirement::Attendance);
    }
    if is_required(Field::BusStop, draft) && draft.bus_stop.is_none() {
        missing.push(Requirement::BusStop);
    }
    missing
}

pub fn is_ready(draft: &ResponseDraft) -> bool {
    missing(draft).is_empty()
}

/// Shape check only: `local@domain.tld` without whitespace.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
