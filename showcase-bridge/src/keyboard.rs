//! Keyboard input as seen by document-level listeners.
//!
//! Only Escape means anything to the page (it dismisses lightboxes); every
//! other key is carried through untouched so listeners can ignore it.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name. "Esc" is the legacy spelling.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, Key::Escape)
    }
}
