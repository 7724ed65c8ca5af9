mod error;

use std::path::{Path, PathBuf};

use clap::{Args, Parser};
use json_comments::StripComments;
use refsweep::CleanOptions;
use serde_json::Value;
use tracing::info;

use crate::error::CliResult;

pub use error::CliError;

/// Search keys used when `--search-in` is not given.
pub const DEFAULT_SEARCH_KEYS: &[&str] = &["name", "fromDict", "sourceName"];

/// Clean keys used when `--target-keys` is not given.
pub const DEFAULT_TARGET_KEYS: &[&str] = &["name"];

#[derive(Parser, Debug, Clone)]
#[command(
    name = "refsweep",
    version,
    about = "Remove no longer referenced items from a nested JSON document"
)]
pub struct Cli {
    /// Path to the file containing the nested object to be cleaned
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keys whose values are collected and counted
    #[arg(
        short = 's',
        long = "search-in",
        value_name = "KEY",
        num_args = 0..,
        default_values_t = DEFAULT_SEARCH_KEYS.iter().map(ToString::to_string)
    )]
    pub search_in: Vec<String>,

    /// Keys that trigger removal of their parent when orphaned
    #[arg(
        short = 't',
        long = "target-keys",
        value_name = "KEY",
        num_args = 0..,
        default_values_t = DEFAULT_TARGET_KEYS.iter().map(ToString::to_string)
    )]
    pub target_keys: Vec<String>,

    /// Dot-joined paths in which items will never be removed
    #[arg(short = 'i', long = "ignore-paths", value_name = "PATH", num_args = 0..)]
    pub ignore_paths: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write output to this path instead of `cleaned_<FILE>` next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the root is not
/// an object or array, a search key holds a container value, or the output
/// cannot be written. No output file is produced on failure.
pub fn run(cli: Cli) -> CliResult<()> {
    let root = load_document(&cli.file)?;

    let options = CleanOptions {
        search_keys: cli.search_in,
        clean_keys: cli.target_keys,
        ignore_paths: cli.ignore_paths,
    };
    let cleaned = refsweep::clean(&root, &options)?;

    let json = if cli.output.compact {
        serde_json::to_vec(&cleaned)?
    } else {
        serde_json::to_vec_pretty(&cleaned)?
    };

    let out_path = cli
        .output
        .output
        .unwrap_or_else(|| default_output_path(&cli.file));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::CreateOutputDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    std::fs::write(&out_path, json).map_err(|e| CliError::WriteOutput {
        path: out_path.clone(),
        source: e,
    })?;

    info!(path = %out_path.display(), "wrote cleaned document");
    Ok(())
}

/// Read a JSON document, stripping `//` and `/* */` comments first.
fn load_document(path: &Path) -> CliResult<Value> {
    let file = std::fs::File::open(path).map_err(|e| CliError::ReadInput {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = StripComments::new(std::io::BufReader::new(file));
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("cleaned_{name}"))
}
