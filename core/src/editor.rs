//! Bridge between the rich-text editor widget and the draft.
//!
//! The editor's serialized document is opaque here. Hydration happens
//! exactly once per mount so later store writes cannot fight live
//! edits; change capture is deduplicated so an unchanged serialization
//! is never re-recorded.

/// One editor mount's connection to the draft.
#[derive(Debug, Default)]
pub struct EditorBridge {
    hydrated: bool,
    last_recorded: Option<String>,
}

impl EditorBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the serialized document to load into the editor, only on
    /// the first call and only when there is a saved document. The
    /// hydrated document is also recorded, so the editor echoing it
    /// back is not treated as a change.
    pub fn take_hydration(&mut self, saved_doc: &str) -> Option<String> {
        if self.hydrated {
            return None;
        }
        self.hydrated = true;
        self.last_recorded = Some(saved_doc.to_string());
        (!saved_doc.is_empty()).then(|| saved_doc.to_string())
    }

    /// Offers the editor's current serialized document after a change
    /// event. Records it and returns true only if it differs from the
    /// last recorded one.
    pub fn record_change(&mut self, serialized: &str) -> bool {
        if self.last_recorded.as_deref() == Some(serialized) {
            return false;
        }
        self.last_recorded = Some(serialized.to_string());
        true
    }

    /// The most recently recorded serialized document, if any.
    pub fn recorded(&self) -> Option<&str> {
        self.last_recorded.as_deref()
    }
}

#[cfg(test)]
mod tests;
