//! SEO auto-fill.
//!
//! The derived fields follow their sources until the user edits them
//! directly. The edited flags live on the mounted form, not in the
//! persisted draft, so a fresh session resumes auto-fill even after a
//! manual edit in an earlier one.

/// Returns the value a derived SEO field should hold after its source
/// changed. Pure and called once at the mutation point, so a derived
/// update can never trigger another one.
pub fn auto_fill(source: &str, edited: bool, current: &str) -> String {
    if edited {
        current.to_string()
    } else {
        source.to_string()
    }
}
