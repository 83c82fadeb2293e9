//! Shared draft store.
//!
//! Single owner of the in-progress [`Draft`]. Both form components read
//! and write it; every mutation is one atomic merge followed by a write
//! through the storage port. There is no field validation here, that is
//! the form layer's job before patching.

use crate::storage::DraftStorage;
use crate::types::{AttributeRow, Draft, FileRef, PublishState};

/// A partial-field update. Fields left `None` are untouched by the merge.
#[derive(Clone, Debug, Default)]
pub struct DraftPatch {
    pub link: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub attributes: Option<Vec<AttributeRow>>,
    pub files: Option<Vec<FileRef>>,
    pub description_doc: Option<String>,
    pub price: Option<f64>,
    pub state: Option<PublishState>,
}

/// A single-field write, the `set` counterpart of [`DraftPatch`].
#[derive(Clone, Debug)]
pub enum DraftField {
    Link(String),
    Code(String),
    Name(String),
    Description(String),
    SeoTitle(String),
    SeoDescription(String),
    Attributes(Vec<AttributeRow>),
    Files(Vec<FileRef>),
    DescriptionDoc(String),
    Price(f64),
    State(PublishState),
}

impl From<DraftField> for DraftPatch {
    fn from(field: DraftField) -> Self {
        let mut patch = DraftPatch::default();
        match field {
            DraftField::Link(v) => patch.link = Some(v),
            DraftField::Code(v) => patch.code = Some(v),
            DraftField::Name(v) => patch.name = Some(v),
            DraftField::Description(v) => patch.description = Some(v),
            DraftField::SeoTitle(v) => patch.seo_title = Some(v),
            DraftField::SeoDescription(v) => patch.seo_description = Some(v),
            DraftField::Attributes(v) => patch.attributes = Some(v),
            DraftField::Files(v) => patch.files = Some(v),
            DraftField::DescriptionDoc(v) => patch.description_doc = Some(v),
            DraftField::Price(v) => patch.price = Some(v),
            DraftField::State(v) => patch.state = Some(v),
        }
        patch
    }
}

pub struct DraftStore<S> {
    draft: Draft,
    storage: S,
    revision: u64,
}

/// Read operations.
impl<S: DraftStorage> DraftStore<S> {
    /// Opens the store, restoring any previously saved draft.
    ///
    /// Absence and an unreadable payload both degrade to the default
    /// draft; the unreadable payload is logged and overwritten on the
    /// next mutation.
    pub fn open(storage: S) -> Self {
        let draft = match storage.load() {
            Ok(Some(draft)) => draft,
            Ok(None) => Draft::default(),
            Err(err) => {
                tracing::warn!("discarding saved draft: {err}");
                Draft::default()
            }
        };
        Self {
            draft,
            storage,
            revision: 0,
        }
    }

    pub fn get(&self) -> &Draft {
        &self.draft
    }

    /// Monotone change counter. Observers compare it against the last
    /// value they saw to detect writes made elsewhere.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Mutation operations.
impl<S: DraftStorage> DraftStore<S> {
    /// Merges the present fields of `patch` into the draft, then
    /// persists the whole draft.
    pub fn patch(&mut self, patch: DraftPatch) {
        let DraftPatch {
            link,
            code,
            name,
            description,
            seo_title,
            seo_description,
            attributes,
            files,
            description_doc,
            price,
            state,
        } = patch;

        if let Some(v) = link {
            self.draft.link = v;
        }
        if let Some(v) = code {
            self.draft.code = v;
        }
        if let Some(v) = name {
            self.draft.name = v;
        }
        if let Some(v) = description {
            self.draft.description = v;
        }
        if let Some(v) = seo_title {
            self.draft.seo_title = v;
        }
        if let Some(v) = seo_description {
            self.draft.seo_description = v;
        }
        if let Some(v) = attributes {
            self.draft.attributes = v;
        }
        if let Some(v) = files {
            self.draft.files = v;
        }
        if let Some(v) = description_doc {
            self.draft.description_doc = v;
        }
        if let Some(v) = price {
            self.draft.price = v;
        }
        if let Some(v) = state {
            self.draft.state = v;
        }

        self.commit();
    }

    /// Single-field variant of [`patch`](Self::patch).
    pub fn set(&mut self, field: DraftField) {
        self.patch(field.into());
    }

    /// Restores the default draft and persists it.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.commit();
    }

    /// A failed write is logged and swallowed; the in-memory draft stays
    /// authoritative and the next mutation retries the write.
    fn commit(&mut self) {
        self.revision += 1;
        if let Err(err) = self.storage.save(&self.draft) {
            tracing::warn!("failed to persist draft: {err}");
        }
    }
}
