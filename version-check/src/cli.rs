use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use version_check::output::{write_human, write_json};
use version_check::{
    CheckConfig, DEFAULT_FIELD, DEFAULT_LINE_MANIFEST, DEFAULT_STRUCTURED_MANIFEST, check_versions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Check that a crate's `Cargo.toml` and its `package.json` carry the same version.
///
/// Exit codes: 0 = versions match, 1 = versions differ,
/// 2 = a manifest is missing or has no parseable version.
#[derive(Debug, Parser)]
#[command(name = "version-check", version)]
pub struct Cli {
    /// Manifest made of `key = "value"` lines
    #[arg(
        long,
        visible_alias = "cargo-toml",
        value_name = "PATH",
        default_value = DEFAULT_LINE_MANIFEST
    )]
    pub line_manifest: PathBuf,

    /// JSON manifest with a top-level version field
    #[arg(
        long,
        visible_alias = "package-json",
        value_name = "PATH",
        default_value = DEFAULT_STRUCTURED_MANIFEST
    )]
    pub structured_manifest: PathBuf,

    /// Name of the version field in both manifests
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FIELD)]
    pub field: String,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Verbosity level for diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn to_config(&self) -> CheckConfig {
        let mut config = CheckConfig::default();
        config.line_manifest.clone_from(&self.line_manifest);
        config.structured_manifest.clone_from(&self.structured_manifest);
        config.field.clone_from(&self.field);
        config
    }
}

/// Run the check and write the report, returning the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<u8> {
    let report = check_versions(&cli.to_config());

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Human => write_human(&report, &mut stdout)?,
        OutputFormat::Json => write_json(&report, &mut stdout)?,
    }

    Ok(report.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_point_at_parent_manifests() {
        let cli = Cli::try_parse_from(["version-check"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.line_manifest, PathBuf::from("../Cargo.toml"));
        assert_eq!(config.structured_manifest, PathBuf::from("../package.json"));
        assert_eq!(config.field, "version");
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_path_overrides_and_aliases() {
        let cli = Cli::try_parse_from([
            "version-check",
            "--cargo-toml",
            "crates/core/Cargo.toml",
            "--package-json",
            "npm/package.json",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.line_manifest, PathBuf::from("crates/core/Cargo.toml"));
        assert_eq!(config.structured_manifest, PathBuf::from("npm/package.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }
}
