//! Content store
//!
//! Files in the virtual tree only hold a reference. The page that embeds the
//! terminal supplies the actual text for each reference; a reference with no
//! text behind it reads as "Permission denied".

use std::collections::HashMap;

pub const CONTACT_CONTENT: &str = "contact-content";

const DEFAULT_CONTENT: &[(&str, &str)] = &[
    (
        "about-content",
        "LVL404 // DIGITAL VOID\n\n\
         We build strange things on the internet.\n\
         No pitch decks. No clients. Just ideas that refuse to behave.",
    ),
    (
        "sitch-content",
        "sitch.lol\n\nOur flagship experiment. Run `open sitch` to see it live.",
    ),
    (
        "merch-content",
        "MERCH\n\nOut of stock. Forever. The void keeps what it takes.",
    ),
    (
        "secret-content",
        "SECRET PROJECT X\n\n[REDACTED]\n\nYou were never here.",
    ),
    (
        CONTACT_CONTENT,
        "CONTACT\n\n\
         email:   404@lvl404.com\n\
         web:     https://sitch.lol\n\n\
         We don't take clients. We take ideas.",
    ),
];

/// Maps content references to displayable text.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    entries: HashMap<String, String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in texts with `overrides` layered on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut store = Self::default();
        for (reference, text) in DEFAULT_CONTENT {
            store.insert(reference, text);
        }
        for (reference, text) in overrides {
            store.insert(reference, text);
        }
        store
    }

    pub fn insert(&mut self, reference: &str, text: &str) {
        self.entries.insert(reference.to_string(), text.to_string());
    }

    pub fn get(&self, reference: &str) -> Option<&str> {
        self.entries.get(reference).map(String::as_str)
    }
}
