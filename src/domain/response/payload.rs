//! Flat key/value encoding the collector expects.
//!
//! Key names and value spellings are shared with the spreadsheet collector; renaming any of
//! them requires changing the collector too.

use super::draft::{Choice, ResponseDraft};

pub const KEY_GIVEN_NAME: &str = "nombre";
pub const KEY_FAMILY_NAME: &str = "apellidos";
pub const KEY_EMAIL: &str = "email";
pub const KEY_ATTENDING: &str = "asiste";
pub const KEY_DIETARY: &str = "intolerancias";
pub const KEY_DIETARY_DETAIL: &str = "otraIntolerancia";
pub const KEY_BUS: &str = "bus";
pub const KEY_BUS_STOP: &str = "parada";

const YES: &str = "si";
const NO: &str = "no";

/// Ordered form fields sent to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(&'static str, String)>,
}

impl Payload {
    /// Encode every draft field, including ones the policy currently treats as void.
    pub fn from_draft(draft: &ResponseDraft) -> Self {
        let fields = vec![
            (KEY_GIVEN_NAME, draft.given_name.trim().to_string()),
            (KEY_FAMILY_NAME, draft.family_name.trim().to_string()),
            (KEY_EMAIL, draft.email.trim().to_string()),
            (KEY_ATTENDING, encode_choice(draft.attending).to_string()),
            (KEY_DIETARY, encode_choice(draft.has_dietary_restriction).to_string()),
            (KEY_DIETARY_DETAIL, draft.dietary_detail.clone()),
            (KEY_BUS, encode_choice(draft.needs_bus).to_string()),
            (KEY_BUS_STOP, draft.bus_stop.map(|stop| stop.name()).unwrap_or_default().to_string()),
        ];
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn encode_choice(choice: Choice) -> &'static str {
    match choice {
        Choice::Unset => "",
        Choice::Yes => YES,
        Choice::No => NO,
    }
}
