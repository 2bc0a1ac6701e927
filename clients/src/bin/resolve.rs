//! `shacl-resolve`: resolves a pre-parsed SHACL/OWL schema into the typed
//! model consumed by code emitters.
//!
//! **Inputs:**
//! - `--schema <path>`: schema document as JSON (defaults to the bundled SPDX 3.0.0 sample)
//! - `--config <path>`: TOML resolver overrides
//!
//! **Outputs:**
//! - `<out>`: the resolved model as JSON (stdout when `--out` is absent)
//!
//! Exits non-zero when any class failed to resolve.
//!
//! **Usage:**
//! ```
//! shacl-resolve [--schema <path>] [--config <path>] [--out <path>] [--strict] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use shacl_model_resolver::{resolve, ResolverConfig};
use shacl_model_spec::SchemaDocument;
use tracing_subscriber::EnvFilter;

/// Resolve a SHACL/OWL schema into a typed model.
#[derive(Parser)]
#[command(name = "shacl-resolve", about = "Resolve a SHACL/OWL schema into a typed model")]
struct Args {
    /// Schema document (JSON). Uses the bundled SPDX 3.0.0 sample when absent.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Resolver configuration overrides (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file for the resolved model. Writes to stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable the strict-only checks.
    #[arg(long)]
    strict: bool,

    /// Log per-stage detail.
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("shacl_model={level}"))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_schema(path: Option<&PathBuf>) -> Result<SchemaDocument> {
    let Some(path) = path else {
        tracing::debug!("using bundled sample schema");
        return Ok(SchemaDocument::sample().clone());
    };
    tracing::debug!(path = %path.display(), "loading schema");
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    SchemaDocument::from_json_str(&text)
        .with_context(|| format!("Failed to parse schema {}", path.display()))
}

fn load_config(path: Option<&PathBuf>) -> Result<ResolverConfig> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading resolver config");
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    ResolverConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let schema = load_schema(args.schema.as_ref())?;
    let mut config = load_config(args.config.as_ref())?;
    config.strict |= args.strict;

    eprintln!(
        "Schema v{}: {} namespaces, {} classes, {} properties, {} shapes, {} individuals",
        schema.version,
        schema.namespaces.len(),
        schema.class_count(),
        schema.property_count(),
        schema.property_shape_count(),
        schema.individual_count()
    );

    let resolution = resolve(&schema, &config).context("Schema resolution failed")?;
    let model = &resolution.model;
    let json = serde_json::to_string_pretty(&resolution)
        .context("Failed to serialize resolved model")?;

    match &args.out {
        Some(out) => {
            fs::write(out, &json)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            eprintln!("  Written: {}", out.display());
        }
        None => println!("{json}"),
    }

    eprintln!(
        "Resolved {} classes ({} properties), {} enums, {} individuals, {} constant groups",
        model.classes.len(),
        model.property_count(),
        model.enums.len(),
        model.individuals.len(),
        model.property_constants.len()
    );

    if !resolution.is_clean() {
        for warning in &resolution.warnings {
            eprintln!("  warning: {warning}");
        }
        bail!("{} class(es) failed to resolve", resolution.warnings.len());
    }
    Ok(())
}
