use clap::{Args, Subcommand};

use crate::cli::{CorpusSource, OutputFormat};
use crate::corpus::store::ReferenceCorpus;

#[derive(Args)]
pub struct CorpusArgs {
    #[command(subcommand)]
    pub command: CorpusCommands,
}

#[derive(Subcommand)]
pub enum CorpusCommands {
    /// List the documents in the corpus
    List(CorpusSource),

    /// Print the corpus as a JSON manifest
    Export(CorpusSource),
}

/// Execute corpus subcommand
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CorpusArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CorpusCommands::List(source) => {
            let corpus = source.load()?;
            if verbose {
                eprintln!("Loaded corpus with {} documents", corpus.len());
            }
            list(&corpus, format)
        }
        CorpusCommands::Export(source) => {
            let corpus = source.load()?;
            println!("{}", corpus.to_json()?);
            Ok(())
        }
    }
}

fn list(corpus: &ReferenceCorpus, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Reference corpus: {} documents", corpus.len());
            for (i, doc) in corpus.iter().enumerate() {
                println!("{}. {} ({} bytes)", i + 1, doc.id, doc.len());
            }
        }
        OutputFormat::Json => {
            let docs: Vec<_> = corpus
                .iter()
                .map(|doc| serde_json::json!({ "id": doc.id, "bytes": doc.len() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        OutputFormat::Tsv => {
            println!("id\tbytes");
            for doc in corpus {
                println!("{}\t{}", doc.id, doc.len());
            }
        }
    }
    Ok(())
}
