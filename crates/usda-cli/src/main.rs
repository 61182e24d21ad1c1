//! `yaml2usda` CLI — convert YAML (or JSON) documents into USDA layers.
//!
//! ## Usage
//!
//! ```sh
//! # Convert one file; writes ./scene.yml.usda
//! yaml2usda scene.yml
//!
//! # Convert several files into another directory
//! yaml2usda -o build/ shots/a.yml shots/b.yml
//!
//! # JSON input is picked by extension
//! yaml2usda layout.json
//!
//! # Dry run: convert, but only report what would be written
//! yaml2usda --dryrun scene.yml
//!
//! # Read stdin, write stdout
//! cat scene.yml | yaml2usda -
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Path argument meaning stdin for input and stdout for output.
const STDIO: &str = "-";

#[derive(Parser)]
#[command(
    name = "yaml2usda",
    version,
    about = "Convert YAML documents to USDA scene description files"
)]
struct Cli {
    /// Dry run mode: print what *would* be written without writing it
    #[arg(short, long, alias = "dry-run")]
    dryrun: bool,

    /// Directory that receives the generated `.usda` files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// YAML files to convert (`.json` files are read as JSON, `-` is stdin)
    #[arg(required = true)]
    filepath: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // A failing file is reported and skipped; the rest still convert.
    let mut failed = 0;
    for path in &cli.filepath {
        if let Err(err) = convert(path, &cli) {
            error!("{:#}", err);
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{} of {} file(s) failed to convert",
            failed,
            cli.filepath.len()
        );
    }
    Ok(())
}

/// Initialize logging on stderr, filtered by `RUST_LOG` (default `info`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Convert one input and write (or, in dry run mode, announce) its output.
fn convert(path: &str, cli: &Cli) -> Result<()> {
    let source = read_input(path)?;
    debug!("Read {} bytes from {}", source.len(), display_name(path));

    let usda = if is_json(path) {
        usda_core::json_to_usda(&source)
    } else {
        usda_core::yaml_to_usda(&source)
    }
    .with_context(|| format!("Failed to convert {}", display_name(path)))?;

    if path == STDIO {
        if cli.dryrun {
            println!("Would write: <stdout>");
        } else {
            print!("{}", usda);
        }
        return Ok(());
    }

    let outpath = output_path(path, &cli.output_dir);
    if cli.dryrun {
        println!("Would write: {}", outpath.display());
        return Ok(());
    }

    info!("Attempting to write: {}", outpath.display());
    std::fs::write(&outpath, usda)
        .with_context(|| format!("Failed to write file: {}", outpath.display()))?;
    info!("Success.");
    Ok(())
}

/// `<output_dir>/<basename>.usda`, keeping the input's own extension in the
/// name (`shots/a.yml` → `a.yml.usda`).
fn output_path(input: &str, output_dir: &Path) -> PathBuf {
    let base = Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());
    output_dir.join(format!("{}.usda", base))
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn display_name(path: &str) -> &str {
    if path == STDIO {
        "<stdin>"
    } else {
        path
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == STDIO {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}
