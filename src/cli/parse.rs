use clap::Args;

use crate::cli::OutputFormat;
use crate::codec::parse_vrs_id;
use crate::core::types::{IdOutcome, ParsedVrsId, SPECIAL_SEGMENT};

#[derive(Args)]
pub struct ParseArgs {
    /// Identifiers to parse (ga4gh:VA:{chromosome}:{digest})
    #[arg(required = true, num_args = 1..)]
    pub vrs_ids: Vec<String>,
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if any identifier is malformed, after reporting all of them.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let results: Vec<IdOutcome<ParsedVrsId>> = args
        .vrs_ids
        .iter()
        .map(|id| IdOutcome::from_result(id, parse_vrs_id(id)))
        .collect();

    match format {
        OutputFormat::Text => print_text(&results, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv(&results),
    }

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} identifiers could not be parsed", results.len());
    }

    Ok(())
}

fn print_text(results: &[IdOutcome<ParsedVrsId>], verbose: bool) {
    let multiple = results.len() > 1;
    for (i, result) in results.iter().enumerate() {
        match (&result.value, &result.error) {
            (Some(parsed), _) => {
                if multiple {
                    if i > 0 {
                        println!();
                    }
                    println!("VRS ID: {}", result.vrs_id);
                }
                if verbose && parsed.chromosome == SPECIAL_SEGMENT {
                    eprintln!("Special identifier: digest holds the plaintext variant");
                }
                println!("Chromosome: {}", parsed.chromosome);
                println!("Digest: {}", parsed.digest);
                println!("Type: {}", parsed.id_type);
            }
            (None, error) => {
                eprintln!(
                    "{}: {}",
                    result.vrs_id,
                    error.as_deref().unwrap_or("invalid identifier")
                );
            }
        }
    }
}

fn print_tsv(results: &[IdOutcome<ParsedVrsId>]) {
    println!("vrs_id\tchromosome\tdigest\ttype\terror");
    for result in results {
        match &result.value {
            Some(parsed) => println!(
                "{}\t{}\t{}\t{}\t",
                result.vrs_id, parsed.chromosome, parsed.digest, parsed.id_type
            ),
            None => println!(
                "{}\t\t\t\t{}",
                result.vrs_id,
                result.error.as_deref().unwrap_or_default()
            ),
        }
    }
}
