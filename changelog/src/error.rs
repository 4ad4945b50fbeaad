use thiserror::Error;

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog input: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse changelog: {0}")]
    ParseError(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(err) => format!("File operation failed: {err}"),
            Self::ParseError(msg) => format!("Failed to parse changelog: {msg}"),
            Self::RegexError(err) => format!("Regular expression error: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
