//! `jcanon` CLI -- canonicalize and validate JSON files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize (stdin → stdout)
//! echo '{"b":2,"a":1}' | jcanon fmt
//!
//! # Canonicalize from file to file
//! jcanon fmt -i data.json -o data.canonical.json
//!
//! # Validate only; exit status reports the result
//! jcanon check -i data.json
//! ```
//!
//! `fmt` runs the full tokenize → parse → write pipeline and emits the
//! canonical form (2-space indent, key-sorted objects, `.0` on integral
//! floats). `check` stops after the parse. Any failure is reported on
//! stderr with file-path context and a non-zero exit status.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jcanon_core::Arena;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jcanon", version, about = "Canonical JSON formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a JSON document in canonical form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a JSON document and report whether it is well-formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let arena = Arena::new();
            let root = jcanon_core::parse(&text, &arena)
                .with_context(|| source_name(input.as_deref()))?;
            let canonical = jcanon_core::write(&root);
            write_output(output.as_deref(), &canonical)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let arena = Arena::new();
            jcanon_core::parse(&text, &arena).with_context(|| source_name(input.as_deref()))?;
            println!("ok");
        }
    }

    Ok(())
}

/// Context label for parse errors: the input path, or "<stdin>".
fn source_name(path: Option<&str>) -> String {
    format!("failed to parse {}", path.unwrap_or("<stdin>"))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
