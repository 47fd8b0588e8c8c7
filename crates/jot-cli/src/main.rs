//! `jot` CLI — check and inspect JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a document (stdin)
//! echo '{"name":"Alice"}' | jot check
//!
//! # Check a file
//! jot check -i data.json
//!
//! # Print just the top-level kind
//! jot kind -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{Kind, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jot", version, about = "JSON document checker and inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report its top-level shape
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the top-level kind of a document
    Kind {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let source = read_input(input.as_deref())?;
            let value = jot_core::parse(&source).context("document is not well-formed")?;
            println!("ok: {}", describe(&value));
        }
        Commands::Kind { input } => {
            let source = read_input(input.as_deref())?;
            let value = jot_core::parse(&source).context("document is not well-formed")?;
            println!("{}", value.kind());
        }
    }

    Ok(())
}

/// One-line summary of a parsed document's top level.
fn describe(value: &Value) -> String {
    match value.kind() {
        Kind::Object => {
            let len = value.object().get().len();
            let noun = if len == 1 { "entry" } else { "entries" };
            format!("object with {len} {noun}")
        }
        Kind::Array => {
            let len = value.array().get().len();
            let noun = if len == 1 { "element" } else { "elements" };
            format!("array with {len} {noun}")
        }
        kind => kind.to_string(),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
