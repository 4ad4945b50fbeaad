use regex::Regex;

use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::types::{Result, VersionSection};
use crate::utils::{
    HEADING_DATE_PATTERN, LINK_LABEL_PATTERN, SECTION_HEADING_PATTERN, VERSION_LABEL_PATTERN,
};

#[derive(Debug, Default)]
struct ParserState {
    current: Option<VersionSection>,
    sections: Vec<VersionSection>,
}

impl ParserState {
    fn finalize_current(&mut self) {
        if let Some(mut section) = self.current.take() {
            section.body = section.body.trim().to_string();
            self.sections.push(section);
        }
    }
}

/// Line-scanning changelog parser producing version sections in
/// document order.
#[derive(Debug, Clone)]
pub struct Parser {
    heading_pattern: Option<Regex>,
}

impl Parser {
    /// Creates a parser from the given configuration.
    ///
    /// # Errors
    /// Returns `ParseError` if a configured heading pattern is not a
    /// valid regular expression.
    pub fn new(config: &ChangelogConfig) -> Result<Self> {
        let heading_pattern = match &config.heading_pattern {
            Some(pattern) => Some(Regex::new(pattern).map_err(|err| {
                ChangelogError::ParseError(format!("invalid heading pattern {pattern:?}: {err}"))
            })?),
            None => None,
        };

        Ok(Self { heading_pattern })
    }

    /// Parses changelog text into an ordered list of version sections.
    ///
    /// Empty input parses to an empty list. Text before the first
    /// heading is ignored.
    ///
    /// # Errors
    /// Returns `ParseError` when the input cannot be treated as
    /// changelog text at all.
    pub fn parse(&self, content: &str) -> Result<Vec<VersionSection>> {
        if content.contains('\0') {
            return Err(ChangelogError::ParseError(
                "input contains NUL bytes and is not changelog text".to_string(),
            ));
        }

        let mut state = ParserState::default();
        for line in content.lines() {
            self.parse_line(line, &mut state);
        }
        state.finalize_current();

        Ok(state.sections)
    }

    fn is_heading(&self, line: &str) -> bool {
        match &self.heading_pattern {
            Some(pattern) => pattern.is_match(line),
            None => SECTION_HEADING_PATTERN.is_match(line),
        }
    }

    fn parse_line(&self, line: &str, state: &mut ParserState) {
        if LINK_LABEL_PATTERN.is_match(line) {
            return;
        }

        if self.is_heading(line) {
            state.finalize_current();
            state.current = Some(Self::read_heading(line));
        } else {
            Self::handle_body_line(line, state);
        }
    }

    fn read_heading(line: &str) -> VersionSection {
        let title = line.trim_start_matches('#').trim_start().to_string();

        let version = VERSION_LABEL_PATTERN
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|label| label.as_str().to_string());

        let date = HEADING_DATE_PATTERN
            .captures(&title)
            .and_then(|captures| captures.get(1))
            .map(|date| date.as_str().to_string());

        VersionSection {
            version,
            title,
            date,
            body: String::new(),
        }
    }

    fn handle_body_line(line: &str, state: &mut ParserState) {
        if let Some(section) = state.current.as_mut() {
            section.body.push_str(line);
            section.body.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<VersionSection> {
        Parser::new(&ChangelogConfig::default())
            .unwrap()
            .parse(content)
            .unwrap()
    }

    #[test]
    fn test_parse_sections_in_document_order() {
        let content = "\
# Changelog

## [2.0.0] - 2024-05-01
### Added
- Second release

## [1.0.0] - 2024-01-01
### Added
- First release
";
        let sections = parse(content);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].version, None);
        assert_eq!(sections[1].version.as_deref(), Some("2.0.0"));
        assert_eq!(sections[2].version.as_deref(), Some("1.0.0"));
        assert_eq!(sections[1].body, "### Added\n- Second release");
        assert_eq!(sections[2].body, "### Added\n- First release");
    }

    #[test]
    fn test_heading_metadata_capture() {
        let sections = parse("## [v1.5.0] - 2023-11-02\n- Something\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].version.as_deref(), Some("v1.5.0"));
        assert_eq!(sections[0].title, "[v1.5.0] - 2023-11-02");
        assert_eq!(sections[0].date.as_deref(), Some("2023-11-02"));
    }

    #[test]
    fn test_heading_without_version_label() {
        let sections = parse("## Unreleased\n- Pending change\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].version, None);
        assert_eq!(sections[0].body, "- Pending change");
    }

    #[test]
    fn test_link_labels_are_skipped() {
        let content = "\
## [1.0.0]
- Change

[1.0.0]: https://example.com/compare/v0.9.0...v1.0.0
";
        let sections = parse(content);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "- Change");
    }

    #[test]
    fn test_category_headings_stay_in_body() {
        let sections = parse("## [1.0.0]\n### Fixed\n- A bug\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "### Fixed\n- A bug");
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_text_before_first_heading_is_ignored() {
        let sections = parse("stray preamble line\n## [1.0.0]\n- Change\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_nul_bytes_are_rejected() {
        let parser = Parser::new(&ChangelogConfig::default()).unwrap();
        let result = parser.parse("## [1.0.0]\n\0binary\n");

        assert!(matches!(result, Err(ChangelogError::ParseError(_))));
    }

    #[test]
    fn test_custom_heading_pattern() {
        let config = ChangelogConfig {
            heading_pattern: Some(r"^## ".to_string()),
        };
        let parser = Parser::new(&config).unwrap();

        // h1 title no longer opens a section under the override
        let sections = parser.parse("# Changelog\n## [1.0.0]\n- Change\n").unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_invalid_heading_pattern_fails_construction() {
        let config = ChangelogConfig {
            heading_pattern: Some("[unclosed".to_string()),
        };

        assert!(matches!(
            Parser::new(&config),
            Err(ChangelogError::ParseError(_))
        ));
    }
}
