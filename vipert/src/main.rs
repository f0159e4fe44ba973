//! Vipert CLI - tokenize Viper source files.
//!
//! This is the entry point of the vipert tool. It uses clap for argument
//! parsing, reads a source file and an optional keyword file, runs the
//! lexer, and prints the token stream in the selected format.

mod error;
mod output;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use viperc_lex::Lexer;

use error::{Result, VipertError};
use output::{print_json, print_plain};

/// Keywords recognized when no keyword file is supplied.
const DEFAULT_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "False", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "None", "not", "or", "pass", "raise", "return", "True", "try", "while", "with", "yield",
];

/// Vipert - tokenizer front-end for the Viper language
#[derive(Parser, Debug)]
#[command(name = "vipert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Viper source files", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// File with whitespace-separated keywords (default: built-in set)
    #[arg(short, long, env = "VIPERT_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: Format,

    /// Enable verbose output
    #[arg(short, long, env = "VIPERT_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "VIPERT_NO_COLOR")]
    no_color: bool,
}

/// Output formats for the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Token stream grouped by source line
    Plain,
    /// JSON array of tokens
    Json,
}

/// Main entry point for the vipert CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    run(&cli)
}

/// Tokenizes the requested file and prints the result.
fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.file)?;
    let keywords = load_keywords(cli.keywords.as_deref())?;

    tracing::debug!(
        file = %cli.file.display(),
        keywords = keywords.len(),
        "tokenizing"
    );

    let tokens = Lexer::new(&source, &keywords).analyze();
    tracing::debug!(tokens = tokens.len(), "lexing finished");

    let stdout = std::io::stdout();
    match cli.format {
        Format::Plain => print_plain(&mut stdout.lock(), &tokens),
        Format::Json => print_json(&mut stdout.lock(), &tokens),
    }
}

/// Initializes the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| VipertError::Logging(e.to_string()))?;

    Ok(())
}

/// Loads the keyword set from a file, or falls back to the built-in set.
///
/// The file format is whitespace-separated words, one keyword per word.
fn load_keywords(path: Option<&Path>) -> Result<HashSet<String>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| VipertError::Keywords {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(text.split_whitespace().map(str::to_owned).collect())
        }
        None => Ok(DEFAULT_KEYWORDS.iter().map(|s| (*s).to_owned()).collect()),
    }
}
