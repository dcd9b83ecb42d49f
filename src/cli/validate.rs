use clap::Args;

use crate::cli::OutputFormat;
use crate::codec::parse_vrs_id;

#[derive(Args)]
pub struct ValidateArgs {
    /// Identifiers to check
    #[arg(required = true, num_args = 1..)]
    pub vrs_ids: Vec<String>,
}

/// Execute validate subcommand
///
/// # Errors
///
/// Returns an error if any identifier is invalid, after reporting all of them.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let results: Vec<(&str, Option<String>)> = args
        .vrs_ids
        .iter()
        .map(|id| (id.as_str(), parse_vrs_id(id).err().map(|e| e.to_string())))
        .collect();

    match format {
        OutputFormat::Text => {
            for (id, error) in &results {
                match error {
                    None => println!("{id}: valid"),
                    Some(reason) if verbose => println!("{id}: invalid ({reason})"),
                    Some(_) => println!("{id}: invalid"),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = results
                .iter()
                .map(|(id, error)| {
                    serde_json::json!({
                        "vrs_id": id,
                        "valid": error.is_none(),
                        "error": error,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("vrs_id\tvalid");
            for (id, error) in &results {
                println!("{id}\t{}", error.is_none());
            }
        }
    }

    let invalid = results.iter().filter(|(_, error)| error.is_some()).count();
    if invalid > 0 {
        anyhow::bail!("{invalid} of {} identifiers are invalid", results.len());
    }

    Ok(())
}
