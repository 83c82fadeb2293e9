pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Theme};

pub(crate) mod draft;
pub use draft::{AttributeRow, Draft, FileRef, PublishState};
