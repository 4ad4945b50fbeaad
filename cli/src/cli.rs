use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "changelog-extract")]
#[command(
    author,
    version,
    about = "Extract one version's release notes from a changelog"
)]
pub struct Cli {
    /// Full changelog document contents (omit when using --file)
    #[clap(value_name = "CHANGELOG")]
    pub changelog: Option<String>,

    /// Version to extract, with an optional leading "v" (e.g. "v1.2.0")
    #[clap(value_name = "VERSION")]
    pub version: Option<String>,

    /// Read the changelog document from a file instead of the first argument
    #[clap(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
