use clap::Args;

use crate::cli::OutputFormat;
use crate::core::chromosome::normalize_chromosome;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Chromosome names to normalize
    #[arg(required = true, num_args = 1..)]
    pub chromosomes: Vec<String>,
}

/// Execute normalize subcommand
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: NormalizeArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let pairs: Vec<(&str, String)> = args
        .chromosomes
        .iter()
        .map(|chrom| (chrom.as_str(), normalize_chromosome(chrom)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (_, normalized) in &pairs {
                println!("{normalized}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = pairs
                .iter()
                .map(|(input, normalized)| {
                    serde_json::json!({"input": input, "normalized": normalized})
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\tnormalized");
            for (input, normalized) in &pairs {
                println!("{input}\t{normalized}");
            }
        }
    }

    Ok(())
}
