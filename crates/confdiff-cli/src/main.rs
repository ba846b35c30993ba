//! `confdiff` CLI — normalize, hash, clean, diff, and extract defaults from
//! JSON configuration documents.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical key order (stdin → stdout)
//! echo '{"b":1,"a":2}' | confdiff normalize
//!
//! # Fingerprint of the meaningful content
//! confdiff hash -i desired.json
//!
//! # Minimal update payload of desired against observed state
//! confdiff diff --reference observed.json -i desired.json --pretty
//!
//! # Defaults declared by a schema, merged with string overrides
//! confdiff defaults -i schema.json --overrides user.json --autotype
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); `--verbose` raises it
//! to `debug`. Logs go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use confdiff_core::{NestedObject, Object};
use serde_json::Value;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "confdiff",
    version,
    about = "Diff, fingerprint, and default-extraction tool for JSON configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-serialize a JSON object with keys in canonical order
    Normalize {
        #[command(flatten)]
        io: IoArgs,
        /// Indent the output for reading
        #[arg(long)]
        pretty: bool,
    },
    /// Print the SHA-256 fingerprint of a JSON object's cleaned content
    Hash {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Remove empty strings, empty collections, and nulls from a JSON object
    Clean {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long)]
        pretty: bool,
    },
    /// Report keys that are new or changed in the input relative to a reference
    Diff {
        /// Reference (previously observed) JSON object
        #[arg(short, long)]
        reference: String,
        #[command(flatten)]
        io: IoArgs,
        #[arg(long)]
        pretty: bool,
    },
    /// Extract the default configuration declared by a schema document
    Defaults {
        #[command(flatten)]
        io: IoArgs,
        /// Two-level JSON object of user values merged over the defaults
        #[arg(long)]
        overrides: Option<String>,
        /// Coerce string override values to numbers, booleans, or null
        #[arg(long, requires = "overrides")]
        autotype: bool,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Normalize { io, pretty } => {
            let json = read_input(io.input.as_deref())?;
            let out = if pretty {
                let object = parse_object(&json, "input")?;
                confdiff_core::to_pretty_json(&Value::Object(object))?
            } else {
                confdiff_core::normalize(&json).context("Failed to normalize JSON")?
            };
            write_output(io.output.as_deref(), &out)?;
        }
        Commands::Hash { input } => {
            let object = parse_object(&read_input(input.as_deref())?, "input")?;
            let digest = confdiff_core::hash_object(&object).context("Failed to hash JSON")?;
            println!("{digest}");
        }
        Commands::Clean { io, pretty } => {
            let object = parse_object(&read_input(io.input.as_deref())?, "input")?;
            let cleaned = confdiff_core::clean(&Value::Object(object));
            write_output(io.output.as_deref(), &render(&cleaned, pretty)?)?;
        }
        Commands::Diff {
            reference,
            io,
            pretty,
        } => {
            let reference = parse_object(&read_input(Some(reference.as_str()))?, "reference")?;
            let input = parse_object(&read_input(io.input.as_deref())?, "input")?;
            let patch = confdiff_core::diff(&reference, &input);
            tracing::debug!(changed = patch.len(), "computed diff");
            write_output(io.output.as_deref(), &render(&Value::Object(patch), pretty)?)?;
        }
        Commands::Defaults {
            io,
            overrides,
            autotype,
            pretty,
        } => {
            let schema = parse_object(&read_input(io.input.as_deref())?, "schema")?;
            let mut defaults = confdiff_core::extract_defaults(&schema)
                .context("Failed to extract defaults from schema")?;
            if let Some(path) = overrides {
                let user = load_overrides(&path, autotype)?;
                defaults = confdiff_core::overlay_nested(&defaults, &user);
            }
            let flat = confdiff_core::flatten(&defaults);
            write_output(io.output.as_deref(), &render(&Value::Object(flat), pretty)?)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--verbose` wins over `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the overrides file as a map of maps, optionally autotyping every
/// string value one level down.
fn load_overrides(path: &str, autotype: bool) -> Result<NestedObject> {
    let raw = parse_object(&read_input(Some(path))?, "overrides")?;
    let mut nested = confdiff_core::unflatten(&raw)
        .with_context(|| format!("Overrides in {path} must group values by section"))?;
    if autotype {
        for values in nested.values_mut() {
            *values = confdiff_core::autotype_map(values);
        }
    }
    Ok(nested)
}

fn parse_object(json: &str, what: &str) -> Result<Object> {
    serde_json::from_str(json).with_context(|| format!("The {what} must be a JSON object"))
}

/// Canonical compact output, or indented with `--pretty`.
fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        confdiff_core::to_pretty_json(value)?
    } else {
        serde_json::to_string(&confdiff_core::canonicalize(value))?
    };
    Ok(text)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
