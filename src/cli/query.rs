use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::IdOutcome;
use crate::storage::{build_variant_query, VariantQuery};

#[derive(Args)]
pub struct QueryArgs {
    /// Identifiers to look up
    #[arg(required = true, num_args = 1..)]
    pub vrs_ids: Vec<String>,
}

/// Execute query subcommand
///
/// # Errors
///
/// Returns an error if any identifier is malformed, after reporting all of them.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: QueryArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let results: Vec<IdOutcome<VariantQuery>> = args
        .vrs_ids
        .iter()
        .map(|id| IdOutcome::from_result(id, build_variant_query(id)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (i, result) in results.iter().enumerate() {
                match &result.value {
                    Some(query) => {
                        if i > 0 {
                            println!();
                        }
                        println!("Table: {}", query.table);
                        println!("Query: {}", query.sql);
                        println!(
                            "Params: vrs_id={}, chromosome={}",
                            query.params.vrs_id, query.params.chromosome
                        );
                    }
                    None => eprintln!(
                        "{}: {}",
                        result.vrs_id,
                        result.error.as_deref().unwrap_or("invalid identifier")
                    ),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => {
            println!("vrs_id\ttable\tsql\tchromosome\terror");
            for result in &results {
                match &result.value {
                    Some(query) => println!(
                        "{}\t{}\t{}\t{}\t",
                        result.vrs_id, query.table, query.sql, query.params.chromosome
                    ),
                    None => println!(
                        "{}\t\t\t\t{}",
                        result.vrs_id,
                        result.error.as_deref().unwrap_or_default()
                    ),
                }
            }
        }
    }

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} identifiers could not be queried", results.len());
    }

    Ok(())
}
