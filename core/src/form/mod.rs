//! The two form components sharing the draft store.
//!
//! Field buffers live here, not in the store: the store only sees whole
//! patches at submit time. Each form remembers the store revision it
//! last hydrated from and re-pulls its buffers when the other form (or
//! a reset) writes, so neither side ever shows stale fields.

pub mod attributes;
pub mod seo;

pub use attributes::AttributeRows;

use crate::editor::EditorBridge;
use crate::storage::DraftStorage;
use crate::store::{DraftPatch, DraftStore};
use crate::types::{AttributeRow, FileRef, PublishState};
use crate::validate::{self, Field, FieldError, ProductInput};
use serde::Serialize;

/// The values a successful product submission merged into the store,
/// shaped for the success notification.
#[derive(Clone, Debug, Serialize)]
pub struct SubmittedProduct {
    pub link: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub attributes: Vec<AttributeRow>,
    pub files: Vec<FileRef>,
}

/// The values a successful pricing submission merged into the store.
#[derive(Clone, Debug, Serialize)]
pub struct SubmittedPricing {
    pub price: f64,
    pub state: PublishState,
}

/// The main product form: identity fields, SEO fields, gallery files,
/// attribute rows, and the rich-text description.
pub struct ProductForm {
    pub link: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub attributes: AttributeRows,
    pub files: Vec<FileRef>,
    /// Live editor content; its full text is the serialized document.
    pub editor_text: String,
    pub errors: Vec<FieldError>,
    editor: EditorBridge,
    seo_title_edited: bool,
    seo_description_edited: bool,
    seen_revision: u64,
}

impl ProductForm {
    /// Mounts the form over the store, hydrating every buffer. The
    /// editor is hydrated through its bridge, exactly once.
    pub fn new<S: DraftStorage>(store: &DraftStore<S>) -> Self {
        let draft = store.get();
        let mut editor = EditorBridge::new();
        let editor_text = editor.take_hydration(&draft.description_doc).unwrap_or_default();
        Self {
            link: draft.link.clone(),
            code: draft.code.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            seo_title: draft.seo_title.clone(),
            seo_description: draft.seo_description.clone(),
            attributes: AttributeRows::from_saved(draft.attributes.clone()),
            files: draft.files.clone(),
            editor_text,
            errors: Vec::new(),
            editor,
            seo_title_edited: false,
            seo_description_edited: false,
            seen_revision: store.revision(),
        }
    }

    /// Re-pulls the field buffers if the store advanced since this form
    /// last saw it. In-progress edits are replaced, like a form reset
    /// from the shared state. The editor pane is deliberately left
    /// alone: hydration is one-shot.
    pub fn sync<S: DraftStorage>(&mut self, store: &DraftStore<S>) {
        if store.revision() == self.seen_revision {
            return;
        }
        let draft = store.get();
        self.link = draft.link.clone();
        self.code = draft.code.clone();
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.seo_title = draft.seo_title.clone();
        self.seo_description = draft.seo_description.clone();
        self.attributes = AttributeRows::from_saved(draft.attributes.clone());
        self.files = draft.files.clone();
        self.seen_revision = store.revision();
    }

    /// First validation message for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

/// Field change handlers.
impl ProductForm {
    /// Records a change to the product name, refreshing the SEO title
    /// while it has not been manually edited.
    pub fn name_changed(&mut self) {
        self.seo_title = seo::auto_fill(&self.name, self.seo_title_edited, &self.seo_title);
    }

    /// Records a change to the description, refreshing the SEO
    /// description while it has not been manually edited.
    pub fn description_changed(&mut self) {
        self.seo_description = seo::auto_fill(
            &self.description,
            self.seo_description_edited,
            &self.seo_description,
        );
    }

    /// Marks the SEO title manually edited; auto-fill stops for the
    /// rest of this session.
    pub fn seo_title_changed(&mut self) {
        self.seo_title_edited = true;
    }

    /// Marks the SEO description manually edited.
    pub fn seo_description_changed(&mut self) {
        self.seo_description_edited = true;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.name_changed();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.description_changed();
    }

    pub fn set_seo_title(&mut self, value: impl Into<String>) {
        self.seo_title = value.into();
        self.seo_title_changed();
    }

    pub fn set_seo_description(&mut self, value: impl Into<String>) {
        self.seo_description = value.into();
        self.seo_description_changed();
    }

    /// Offers the editor's current text to the bridge after a change
    /// event. Returns true if it differed and was recorded.
    pub fn editor_changed(&mut self) -> bool {
        self.editor.record_change(&self.editor_text)
    }

    /// Appends selected files. Constraints are enforced at submit, not
    /// here, so the user sees what they dropped.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileRef>) {
        self.files.extend(files);
    }

    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }
}

/// Submission.
impl ProductForm {
    /// Validates the buffers and, on success, merges them into the
    /// store as one patch. The recorded editor document is pushed here,
    /// not on every keystroke. On failure the errors are kept for
    /// inline display and the store is untouched.
    pub fn submit<S: DraftStorage>(&mut self, store: &mut DraftStore<S>) -> Option<SubmittedProduct> {
        self.errors = validate::validate_product(&ProductInput {
            link: &self.link,
            code: &self.code,
            name: &self.name,
            description: &self.description,
            seo_title: &self.seo_title,
            seo_description: &self.seo_description,
            files: &self.files,
        });
        if !self.errors.is_empty() {
            return None;
        }

        let description_doc = self
            .editor
            .recorded()
            .unwrap_or(self.editor_text.as_str())
            .to_string();
        let submitted = SubmittedProduct {
            link: self.link.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            seo_title: self.seo_title.clone(),
            seo_description: self.seo_description.clone(),
            attributes: self.attributes.to_vec(),
            files: self.files.clone(),
        };

        store.patch(DraftPatch {
            link: Some(submitted.link.clone()),
            code: Some(submitted.code.clone()),
            name: Some(submitted.name.clone()),
            description: Some(submitted.description.clone()),
            seo_title: Some(submitted.seo_title.clone()),
            seo_description: Some(submitted.seo_description.clone()),
            attributes: Some(submitted.attributes.clone()),
            files: Some(submitted.files.clone()),
            description_doc: Some(description_doc),
            ..DraftPatch::default()
        });
        self.seen_revision = store.revision();

        Some(submitted)
    }
}

/// The price and publish-state form.
pub struct PricingForm {
    pub price_text: String,
    pub state: PublishState,
    pub errors: Vec<FieldError>,
    seen_revision: u64,
}

impl PricingForm {
    pub fn new<S: DraftStorage>(store: &DraftStore<S>) -> Self {
        let draft = store.get();
        Self {
            price_text: draft.price.to_string(),
            state: draft.state,
            errors: Vec::new(),
            seen_revision: store.revision(),
        }
    }

    /// Re-pulls the buffers if the store advanced since this form last
    /// saw it.
    pub fn sync<S: DraftStorage>(&mut self, store: &DraftStore<S>) {
        if store.revision() == self.seen_revision {
            return;
        }
        let draft = store.get();
        self.price_text = draft.price.to_string();
        self.state = draft.state;
        self.seen_revision = store.revision();
    }

    /// First validation message for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Coerces the price text and, on success, merges price and publish
    /// state into the store as one patch.
    pub fn submit<S: DraftStorage>(&mut self, store: &mut DraftStore<S>) -> Option<SubmittedPricing> {
        match validate::parse_price(&self.price_text) {
            Ok(price) => {
                self.errors.clear();
                store.patch(DraftPatch {
                    price: Some(price),
                    state: Some(self.state),
                    ..DraftPatch::default()
                });
                self.seen_revision = store.revision();
                Some(SubmittedPricing {
                    price,
                    state: self.state,
                })
            }
            Err(error) => {
                self.errors = vec![error];
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
