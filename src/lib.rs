//! Bsdgen library crate
//!
//! This crate provides the core functionality for the `bsdgen` CLI. It is
//! organized into small modules: `prompt` (interactive input collection),
//! `render` (license template substitution), `output` (file writing), and
//! `clipboard` (cross-platform clipboard helper). The binary `src/main.rs`
//! calls `bsdgen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod output;
pub mod prompt;
pub mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::clipboard::copy_to_clipboard;
use crate::output::write_license;
use crate::prompt::{is_valid_author, is_valid_year, prompt_author, prompt_year};
use crate::render::render_license;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Copyright year (4 digits). Skips the year prompt when given.
    #[arg(long = "year")]
    year: Option<String>,

    /// Author name. Skips the author prompt when given.
    #[arg(long = "author")]
    author: Option<String>,

    /// Output path for the generated license file
    #[arg(short = 'o', long = "output", default_value = "LICENSE")]
    output: PathBuf,

    /// Copy the rendered license to the clipboard as well
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,
}

/// Run the bsdgen CLI.
///
/// This function is the high-level entrypoint used by the `bsdgen` binary. It
/// parses CLI arguments, collects whichever of year/author was not supplied
/// by flag via interactive prompts, renders the BSD 3-Clause text, and writes
/// it to the output path (default `LICENSE`, overwriting unconditionally).
/// Errors are printed to stderr and cause the process to exit with a non-zero
/// code.
///
/// Behavior summary:
/// - interactive prompts re-try indefinitely on invalid input;
/// - values supplied by `--year`/`--author` are validated once and an invalid
///   value is fatal (flags never re-prompt);
/// - clipboard failures are warnings, never fatal.
///
/// Example:
///
/// ```no_run
/// bsdgen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let year = resolve_year(cli.year.as_deref(), &mut input, &mut out).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    let author = resolve_author(cli.author.as_deref(), &mut input, &mut out).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let license = render_license(&year, &author);

    if let Err(e) = write_license(&cli.output, &license) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    println!("BSD 3-Clause License file generated.");

    if cli.clipboard && let Err(e) = copy_to_clipboard(&license) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
}

/// Use the `--year` value when present (validated once, fatal if invalid),
/// otherwise fall back to the interactive prompt loop.
fn resolve_year<R: BufRead, W: Write>(
    flag: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<String, String> {
    match flag {
        Some(y) => {
            let y = y.trim();
            if is_valid_year(y) {
                Ok(y.to_string())
            } else {
                Err(format!("invalid year {:?}: expected 4 digits", y))
            }
        }
        None => prompt_year(input, out),
    }
}

/// Use the `--author` value when present, otherwise prompt for one.
fn resolve_author<R: BufRead, W: Write>(
    flag: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<String, String> {
    match flag {
        Some(a) => {
            let a = a.trim();
            if is_valid_author(a) {
                Ok(a.to_string())
            } else {
                Err("invalid author name: must be non-empty".into())
            }
        }
        None => prompt_author(input, out),
    }
}
