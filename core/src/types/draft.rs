use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// The in-progress product record edited across both forms.
///
/// Fields hold whatever the user has typed so far; nothing here is
/// validated. Validation runs in [`crate::validate`] at submit time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub link: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub attributes: Vec<AttributeRow>,
    /// References to local gallery files; empty means none selected.
    pub files: Vec<FileRef>,
    /// Serialized rich-text document. Opaque: stored and forwarded,
    /// never interpreted.
    pub description_doc: String,
    pub price: f64,
    pub state: PublishState,
}

/// One key/value row of the specifications grid.
///
/// `id` is unique within a draft and stable across reorders and
/// removals. `attribute` and `values` may be empty while editing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub id: String,
    pub attribute: String,
    pub values: String,
}

impl AttributeRow {
    /// Creates an empty row with a fresh unique id.
    pub fn empty() -> Self {
        Self {
            id: fresh_row_id(),
            attribute: String::new(),
            values: String::new(),
        }
    }
}

/// Generates a random row id.
pub(crate) fn fresh_row_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reference to a local file selected for the product gallery.
/// Only the reference is held; the file is never copied or read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Publish state of the product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    #[default]
    Public,
    Draft,
    Contact,
}

impl PublishState {
    pub const ALL: [PublishState; 3] = [
        PublishState::Public,
        PublishState::Draft,
        PublishState::Contact,
    ];

    /// Human-readable label for selects.
    pub fn label(&self) -> &'static str {
        match self {
            PublishState::Public => "Public",
            PublishState::Draft => "Draft",
            PublishState::Contact => "Contact",
        }
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishState::Public => write!(f, "public"),
            PublishState::Draft => write!(f, "draft"),
            PublishState::Contact => write!(f, "contact"),
        }
    }
}
