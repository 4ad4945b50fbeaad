use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// One heading-delimited block of a changelog, corresponding to a
/// single release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSection {
    /// Version label as written in the heading (may carry a leading
    /// "v"); `None` when the heading has no recognizable label
    pub version: Option<String>,
    /// Heading text with the leading `#` marks stripped
    pub title: String,
    /// Release date captured from the heading, when present
    pub date: Option<String>,
    /// Free-text content belonging to the heading, line breaks preserved
    pub body: String,
}
