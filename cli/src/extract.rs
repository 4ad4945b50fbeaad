use std::fs;

use changelog::{ChangelogConfig, Parser, find_version_section};

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    let (content, version) = resolve_input(cli)?;

    let parser = Parser::new(&ChangelogConfig::default())?;
    let sections = parser.parse(&content)?;

    if verbose {
        println!("Parsed {} changelog sections", sections.len());
    }

    let body = find_version_section(&sections, &version).map(|section| section.body.as_str());

    if verbose {
        match body {
            Some(_) => println!("Found section for version '{version}'"),
            None => println!("No section found for version '{version}'"),
        }
    }

    // no match prints an empty line and still succeeds
    println!("{}", body.unwrap_or_default());

    Ok(())
}

/// Resolves the changelog text and target version from the parsed
/// arguments. With --file the single positional is the version; the
/// document comes from disk.
fn resolve_input(cli: Cli) -> Result<(String, String)> {
    match cli.file {
        Some(path) => {
            let version = cli.version.or(cli.changelog).ok_or_else(|| {
                CliError::Other("missing target version argument".to_string())
            })?;

            let content = fs::read_to_string(&path).map_err(|err| {
                CliError::Io(err).with_context(format!("Failed to read {}", path.display()))
            })?;

            Ok((content, version))
        }
        None => match (cli.changelog, cli.version) {
            (Some(content), Some(version)) => Ok((content, version)),
            _ => Err(CliError::Other(
                "expected <CHANGELOG> and <VERSION> arguments".to_string(),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args(changelog: Option<&str>, version: Option<&str>, file: Option<&str>) -> Cli {
        Cli {
            changelog: changelog.map(ToString::to_string),
            version: version.map(ToString::to_string),
            file: file.map(PathBuf::from),
            verbose: false,
        }
    }

    #[test]
    fn test_resolve_positional_arguments() {
        let (content, version) =
            resolve_input(args(Some("## [1.0.0]\n- Change\n"), Some("1.0.0"), None)).unwrap();

        assert_eq!(content, "## [1.0.0]\n- Change\n");
        assert_eq!(version, "1.0.0");
    }

    #[test]
    fn test_resolve_file_input_takes_lone_positional_as_version() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        std::fs::write(&path, "## [1.0.0]\n- Change\n").unwrap();

        let (content, version) =
            resolve_input(args(Some("1.0.0"), None, path.to_str())).unwrap();

        assert_eq!(content, "## [1.0.0]\n- Change\n");
        assert_eq!(version, "1.0.0");
    }

    #[test]
    fn test_resolve_unreadable_file_fails() {
        let result = resolve_input(args(Some("1.0.0"), None, Some("/nonexistent/CHANGELOG.md")));

        assert!(matches!(result, Err(CliError::WithContext(..))));
    }

    #[test]
    fn test_resolve_missing_arguments_fails() {
        assert!(resolve_input(args(Some("text"), None, None)).is_err());
        assert!(resolve_input(args(None, None, None)).is_err());
    }
}
