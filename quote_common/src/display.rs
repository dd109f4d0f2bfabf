//! Display targets and the host environment that owns them.
//!
//! A host (a web page, a terminal, a test) exposes targets by identifier. The widget
//! asks the host for the two targets it needs and writes plain text into them.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Identifiers of the targets the quote widget writes to.
#[derive(Debug, Clone, Copy, ValueEnum, Display, EnumString, Hash, Eq, PartialEq)]
pub enum TargetId {
    /// Target showing the quote body.
    #[value(name = "quote-content")]
    #[strum(serialize = "quote-content")]
    Content,
    /// Target showing the author line.
    #[value(name = "quote-author")]
    #[strum(serialize = "quote-author")]
    Author,
}

impl TargetId {
    /// Every target the widget needs.
    pub const ALL: [TargetId; 2] = [TargetId::Content, TargetId::Author];
}

/// Something whose shown text can be replaced.
pub trait DisplayTarget {
    /// Replace the displayed text.
    fn set_text(&self, text: &str);

    /// Currently displayed text.
    fn text(&self) -> String;
}

/// Host environment that hands out display targets by identifier.
pub trait DisplayHost {
    /// Handle type returned for a located target.
    type Target: DisplayTarget;

    /// Returns the current instance of `id`, or `None` if the host does not have it.
    fn target(&self, id: TargetId) -> Option<Self::Target>;
}

/// In-memory display target. Clones share the same text.
#[derive(Debug, Clone, Default)]
pub struct TextSlot {
    text: Arc<Mutex<String>>,
}

impl TextSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayTarget for TextSlot {
    fn set_text(&self, text: &str) {
        let mut current = self.text.lock().unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(text);
    }

    fn text(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory host holding any subset of the widget's targets.
#[derive(Debug, Clone, Default)]
pub struct Page {
    slots: HashMap<TargetId, TextSlot>,
}

impl Page {
    /// A page without any targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that has exactly the listed targets.
    pub fn with_targets(ids: &[TargetId]) -> Self {
        let slots = ids.iter().map(|id| (*id, TextSlot::new())).collect();
        Page { slots }
    }

    /// A page with both widget targets.
    pub fn full() -> Self {
        Self::with_targets(&TargetId::ALL)
    }

    /// Text shown by `id`, if the page has that target.
    pub fn text_of(&self, id: TargetId) -> Option<String> {
        self.slots.get(&id).map(TextSlot::text)
    }
}

impl DisplayHost for Page {
    type Target = TextSlot;

    fn target(&self, id: TargetId) -> Option<TextSlot> {
        self.slots.get(&id).cloned()
    }
}
