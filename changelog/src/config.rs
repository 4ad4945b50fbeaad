/// Configuration options for changelog parsing behavior
#[derive(Debug, Clone, Default)]
pub struct ChangelogConfig {
    /// Override for the pattern that recognizes section headings.
    /// `None` uses the conventional h1/h2 markdown heading rule.
    pub heading_pattern: Option<String>,
}
