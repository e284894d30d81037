use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod corpus;
mod detection;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("plagcheck=debug,info")
    } else {
        EnvFilter::new("plagcheck=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Detect(args) => {
            cli::detect::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Corpus(args) => {
            cli::corpus::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
