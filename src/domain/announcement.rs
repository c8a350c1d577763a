//! Static event content and the FAQ accordion.

use serde::{Deserialize, Serialize};

/// Event details shown above the response form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Announcement {
    /// Headline, usually the couple's names.
    pub title: String,
    /// Ceremony start; RFC 3339 or naive local date-time.
    pub starts_at: String,
    pub venue: String,
    /// Short description of the ceremony.
    #[serde(default)]
    pub ceremony: String,
    /// Transport arrangements.
    #[serde(default)]
    pub transport: String,
    /// Last day to send a response, free text.
    #[serde(default)]
    pub respond_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Index-based open/closed toggle over a list of FAQ entries; at most one entry is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Open `index`, or close it when it is already open. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}
