use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod codec;
mod core;
mod storage;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("aiva_vrs=debug,info")
    } else {
        EnvFilter::new("aiva_vrs=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Generate(args) => {
            cli::generate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Validate(args) => {
            cli::validate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Normalize(args) => {
            cli::normalize::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Query(args) => {
            cli::query::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
