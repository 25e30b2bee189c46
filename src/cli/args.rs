// src/cli/args.rs
use std::path::PathBuf;

use announcement_id_shared_kernel::TargetPath;
use clap::{Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// Every input can come from the environment, so a bare invocation with
/// `VERSION` set is the normal CI usage.
#[derive(Parser, Debug)]
#[command(
    name = "announcement_id",
    version = crate::VERSION,
    about = "Sync latestAnnouncementId with the release version"
)]
pub struct Args {
    /// New announcement id, usually the release version [default: $VERSION]
    #[arg(long = "release-version", value_name = "VERSION", help_heading = "Input")]
    pub release_version: Option<String>,

    /// Source file holding the announcement field
    #[arg(
        long,
        env = "PROVIDER_PATH",
        default_value = TargetPath::DEFAULT,
        value_hint = ValueHint::FilePath,
        help_heading = "Input"
    )]
    pub target: PathBuf,

    /// Fail instead of silently rewriting when the field is missing
    #[arg(long, env = "ANNOUNCEMENT_STRICT", help_heading = "Behavior")]
    pub strict: bool,

    /// Report what would change without touching the file
    #[arg(long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Write through a temp file and rename instead of truncating in place
    #[arg(long, help_heading = "Behavior")]
    pub atomic: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,
}
