use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod export;
pub mod list;
pub mod version;

/// Environment variable consulted when `--schema-dir` is omitted.
pub const SCHEMA_DIR_ENV: &str = "SHAPEGUARD_SCHEMA_DIR";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a record against a schema.
    Check(CheckArgs),
    /// Print a schema as an equivalent JSON Schema document.
    Export(ExportArgs),
    /// List schemas found in a schema directory.
    List(ListArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Export(args) => export::run(args, format),
        Command::List(args) => list::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (`{"field": "kind", ...}`).
    #[arg(long, value_name = "FILE", required_unless_present = "name", conflicts_with = "name")]
    pub schema: Option<PathBuf>,
    /// Name of a schema in the schema directory.
    #[arg(long, requires = "schema_dir")]
    pub name: Option<String>,
    /// Directory of `<name>.schema.json` files.
    #[arg(long, value_name = "DIR", env = SCHEMA_DIR_ENV)]
    pub schema_dir: Option<PathBuf>,
    /// Record as inline JSON.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the record from a file. Without --json or --file the record is read from stdin.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Schema file to export.
    #[arg(long, value_name = "FILE", required_unless_present = "name", conflicts_with = "name")]
    pub schema: Option<PathBuf>,
    /// Name of a schema in the schema directory.
    #[arg(long, requires = "schema_dir")]
    pub name: Option<String>,
    /// Directory of `<name>.schema.json` files.
    #[arg(long, value_name = "DIR", env = SCHEMA_DIR_ENV)]
    pub schema_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory of `<name>.schema.json` files.
    #[arg(long, value_name = "DIR", env = SCHEMA_DIR_ENV)]
    pub schema_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
