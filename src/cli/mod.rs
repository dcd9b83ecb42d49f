//! Command-line interface for aiva-vrs.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **generate**: Generate the identifier for a variant
//! - **parse**: Split identifiers into chromosome, digest and type
//! - **validate**: Check one or more identifiers
//! - **normalize**: Canonicalize chromosome names
//! - **query**: Show the table and lookup query for identifiers
//! - **serve**: Start the JSON HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Generate an identifier
//! aiva-vrs generate chr1 12345 A T
//!
//! # Deletions use an empty alternate allele
//! aiva-vrs generate chr7 55174772 GGAATTAAGAGAAGC ""
//!
//! # JSON output for scripting
//! aiva-vrs parse ga4gh:VA:7:EByCs2w8wDg4HTJ7WD6DnXA9Gmzk --format json
//!
//! # Start the API
//! aiva-vrs serve --port 8080
//! ```

use clap::{Parser, Subcommand};

pub mod generate;
pub mod normalize;
pub mod parse;
pub mod query;
pub mod validate;

#[derive(Parser)]
#[command(name = "aiva-vrs")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Generate and parse deterministic GA4GH-style variant identifiers")]
#[command(
    long_about = "aiva-vrs derives a stable, content-addressed identifier for a genomic variant.\n\nThe identifier is a truncated SHA-512 digest of the assembly, normalized chromosome, position and alleles, so identical variants always receive the same identifier without a central registry.\n\nVariants with a '*' allele receive a plaintext ga4gh:VA:SPECIAL identifier instead."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the identifier for a variant
    Generate(generate::GenerateArgs),

    /// Parse identifiers into their components
    Parse(parse::ParseArgs),

    /// Check whether identifiers are well formed
    Validate(validate::ValidateArgs),

    /// Normalize chromosome names
    Normalize(normalize::NormalizeArgs),

    /// Show the storage table and lookup query for identifiers
    Query(query::QueryArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
