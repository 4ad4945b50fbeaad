use crate::config::ChangelogConfig;
use crate::parser::Parser;
use crate::types::{Result, VersionSection};

/// Strips at most one leading "v" from a version label.
#[must_use]
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Finds the first section whose normalized version label equals the
/// normalized target, scanning in document order. Sections without a
/// version label never match.
#[must_use]
pub fn find_version_section<'a>(
    sections: &'a [VersionSection],
    target_version: &str,
) -> Option<&'a VersionSection> {
    let target = normalize_version(target_version);

    sections.iter().find(|section| {
        section
            .version
            .as_deref()
            .is_some_and(|label| normalize_version(label) == target)
    })
}

/// Parses changelog text and returns the body of the section matching
/// `target_version`, or `None` when no section matches. Pure function
/// of its inputs.
///
/// # Errors
/// Returns `ParseError` when the text cannot be parsed into sections.
pub fn extract_version_body(changelog_text: &str, target_version: &str) -> Result<Option<String>> {
    extract_with_config(changelog_text, target_version, &ChangelogConfig::default())
}

/// Same as [`extract_version_body`], with explicit parser configuration.
///
/// # Errors
/// Returns `ParseError` when the configuration or text is invalid.
pub fn extract_with_config(
    changelog_text: &str,
    target_version: &str,
    config: &ChangelogConfig,
) -> Result<Option<String>> {
    let parser = Parser::new(config)?;
    let sections = parser.parse(changelog_text)?;

    Ok(find_version_section(&sections, target_version).map(|section| section.body.clone()))
}
