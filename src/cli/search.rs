use clap::Args;

use crate::cli::{selected_algorithms, CorpusSource, OutputFormat};
use crate::core::types::{Algorithm, DocumentId};
use crate::corpus::store::ReferenceCorpus;
use crate::matching::engine::MatchingEngine;

#[derive(Args)]
pub struct SearchArgs {
    /// Sentence to look for
    #[arg(required = true)]
    pub sentence: String,

    #[command(flatten)]
    pub corpus: CorpusSource,

    /// Matching algorithm; runs all four when omitted
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
}

/// Documents containing `sentence` under one algorithm
struct SearchHit {
    algorithm: Algorithm,
    documents: Vec<DocumentId>,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the sentence is blank or the corpus cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sentence = args.sentence.trim();
    if sentence.is_empty() {
        anyhow::bail!("Search sentence is empty");
    }

    let corpus = args.corpus.load()?;

    if verbose {
        eprintln!("Loaded corpus with {} documents", corpus.len());
    }

    let hits: Vec<SearchHit> = selected_algorithms(args.algorithm)
        .into_iter()
        .map(|algorithm| search(&corpus, sentence, algorithm))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(sentence, &hits),
        OutputFormat::Json => print_json_results(sentence, &hits)?,
        OutputFormat::Tsv => print_tsv_results(&hits),
    }

    Ok(())
}

fn search(corpus: &ReferenceCorpus, sentence: &str, algorithm: Algorithm) -> SearchHit {
    let engine = MatchingEngine::new(algorithm);
    let documents = corpus
        .iter()
        .filter(|doc| engine.find(&doc.text, sentence))
        .map(|doc| doc.id.clone())
        .collect();

    SearchHit {
        algorithm,
        documents,
    }
}

fn print_text_results(sentence: &str, hits: &[SearchHit]) {
    println!("Sentence: \"{sentence}\"");
    for hit in hits {
        if hit.documents.is_empty() {
            println!("  {}: not found", hit.algorithm);
        } else {
            let docs: Vec<String> = hit.documents.iter().map(ToString::to_string).collect();
            println!("  {}: found in {}", hit.algorithm, docs.join(", "));
        }
    }
}

fn print_json_results(sentence: &str, hits: &[SearchHit]) -> anyhow::Result<()> {
    let results: Vec<_> = hits
        .iter()
        .map(|hit| {
            serde_json::json!({
                "algorithm": hit.algorithm,
                "found": !hit.documents.is_empty(),
                "documents": hit.documents,
            })
        })
        .collect();

    let output = serde_json::json!({
        "sentence": sentence,
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(hits: &[SearchHit]) {
    println!("algorithm\tfound\tdocuments");
    for hit in hits {
        let docs: Vec<&str> = hit.documents.iter().map(DocumentId::as_str).collect();
        println!(
            "{}\t{}\t{}",
            hit.algorithm.cli_name(),
            !hit.documents.is_empty(),
            docs.join(",")
        );
    }
}
