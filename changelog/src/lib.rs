//! Changelog parsing and version-targeted release-note extraction.
//!
//! A changelog document is parsed into an ordered sequence of
//! [`VersionSection`] records; [`extract_version_body`] returns the
//! body of the section matching a target version, treating a single
//! leading "v" as insignificant.

pub mod config;
pub mod error;
pub mod extract;
pub mod parser;
pub mod types;
pub mod utils;

pub use config::ChangelogConfig;
pub use error::ChangelogError;
pub use extract::{
    extract_version_body, extract_with_config, find_version_section, normalize_version,
};
pub use parser::Parser;
pub use types::{Result, VersionSection};
