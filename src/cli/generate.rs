use clap::Args;

use crate::cli::OutputFormat;
use crate::codec::encode;
use crate::core::types::VrsId;
use crate::core::variant::{VariantDescriptor, DEFAULT_ASSEMBLY};

#[derive(Args)]
pub struct GenerateArgs {
    /// Chromosome (e.g. chr1, 1, chrM, MT)
    #[arg(required = true)]
    pub chromosome: String,

    /// Position on the chromosome
    #[arg(required = true)]
    pub position: String,

    /// Reference allele (use "" for insertions)
    #[arg(required = true)]
    pub reference_allele: String,

    /// Alternate allele (use "" for deletions)
    #[arg(required = true)]
    pub alternate_allele: String,

    /// Genome assembly
    #[arg(long, default_value = DEFAULT_ASSEMBLY)]
    pub assembly: String,
}

/// Execute generate subcommand
///
/// # Errors
///
/// Returns an error if the identifier cannot be encoded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let variant = VariantDescriptor::new(
        args.chromosome,
        args.position,
        args.reference_allele,
        args.alternate_allele,
    )
    .with_assembly(args.assembly);

    if verbose {
        if variant.is_special() {
            eprintln!("Wildcard allele present, identifier is not hashed");
        } else {
            eprintln!("Canonical record: {}", variant.canonical_record());
        }
    }

    let vrs_id = encode(&variant)?;

    match format {
        OutputFormat::Text => println!("{vrs_id}"),
        OutputFormat::Json => print_json(&variant, &vrs_id)?,
        OutputFormat::Tsv => print_tsv(&variant, &vrs_id),
    }

    Ok(())
}

fn print_json(variant: &VariantDescriptor, vrs_id: &VrsId) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "vrs_id": vrs_id.to_string(),
        "chromosome": variant.chromosome,
        "normalized_chromosome": vrs_id.chromosome(),
        "position": variant.position,
        "reference_allele": variant.reference_allele,
        "alternate_allele": variant.alternate_allele,
        "assembly": variant.assembly,
        "special": vrs_id.is_special(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(variant: &VariantDescriptor, vrs_id: &VrsId) {
    println!("vrs_id\tchromosome\tposition\treference_allele\talternate_allele\tassembly");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        vrs_id,
        variant.chromosome,
        variant.position,
        variant.reference_allele,
        variant.alternate_allele,
        variant.assembly,
    );
}
