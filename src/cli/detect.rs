use std::path::PathBuf;

use clap::Args;

use crate::cli::{selected_algorithms, CorpusSource, OutputFormat};
use crate::core::types::Algorithm;
use crate::detection::{DetectionConfig, DetectionResult, DetectionSession, ScanMode};
use crate::parsing::sentences::read_sentences;

#[derive(Args)]
pub struct DetectArgs {
    /// Candidate document to check. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub corpus: CorpusSource,

    /// Matching algorithm (rabin-karp, kmp, boyer-moore, hamming, or 1-4).
    /// Runs all four in turn when omitted
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Stop at the first matching document for each sentence
    #[arg(long)]
    pub first_match: bool,

    /// Mismatches tolerated per window by the hamming algorithm
    #[arg(long, default_value = "0")]
    pub max_mismatches: usize,

    /// Also list the flagged sentences
    #[arg(long)]
    pub show_sentences: bool,
}

/// Execute detect subcommand
///
/// # Errors
///
/// Returns an error if the candidate or corpus cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DetectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sentences = read_sentences(&args.input)?;
    let corpus = args.corpus.load()?;

    if verbose {
        eprintln!(
            "Parsed {} sentences from input; corpus has {} documents",
            sentences.len(),
            corpus.len()
        );
    }

    if corpus.is_empty() {
        eprintln!("Warning: Corpus is empty, no documents to compare against.");
    }

    let scan_mode = if args.first_match {
        ScanMode::FirstMatch
    } else {
        ScanMode::Exhaustive
    };

    let mut results = Vec::new();
    for algorithm in selected_algorithms(args.algorithm) {
        let config = DetectionConfig::new(algorithm)
            .with_scan_mode(scan_mode)
            .with_max_mismatches(args.max_mismatches);
        let session = DetectionSession::new(sentences.iter().cloned(), &corpus, config);
        results.push(session.run()?);
    }

    match format {
        OutputFormat::Text => print_text_results(&results, &sentences, args.show_sentences),
        OutputFormat::Json => print_json_results(&results, &sentences)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn print_text_results(results: &[DetectionResult], sentences: &[String], show_sentences: bool) {
    for result in results {
        println!("{}: {}%", result.algorithm(), format_ratio(result.ratio()));
        println!("Documents from which the test file was plagiarized: ");

        for (i, id) in result.matched_documents().iter().enumerate() {
            println!("{}. {}", i + 1, id);
        }

        if show_sentences {
            println!("Plagiarized sentences:");
            for (sentence, _) in sentences
                .iter()
                .zip(result.flags())
                .filter(|(_, &flagged)| flagged)
            {
                println!("  - {sentence}");
            }
        }

        println!("{}", "-".repeat(51));
    }
}

fn print_json_results(results: &[DetectionResult], sentences: &[String]) -> anyhow::Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|result| {
            let flagged: Vec<&str> = sentences
                .iter()
                .zip(result.flags())
                .filter(|(_, &flagged)| flagged)
                .map(|(s, _)| s.as_str())
                .collect();

            serde_json::json!({
                "algorithm": result.algorithm(),
                "ratio": result.ratio(),
                "total_sentences": result.total_sentences(),
                "matched_sentences": result.matched_sentences(),
                "matched_documents": result.matched_documents(),
                "plagiarized_sentences": flagged,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[DetectionResult]) {
    println!("algorithm\tratio\tmatched_sentences\ttotal_sentences\tmatched_documents");
    for result in results {
        let docs: Vec<&str> = result
            .matched_documents()
            .iter()
            .map(|d| d.as_str())
            .collect();
        println!(
            "{}\t{:.4}\t{}\t{}\t{}",
            result.algorithm().cli_name(),
            result.ratio(),
            result.matched_sentences(),
            result.total_sentences(),
            docs.join(","),
        );
    }
}

/// Format a percentage without trailing zeros (50 -> "50", 33.333.. -> "33.3333")
fn format_ratio(ratio: f64) -> String {
    let formatted = format!("{ratio:.4}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(50.0), "50");
        assert_eq!(format_ratio(0.0), "0");
        assert_eq!(format_ratio(100.0), "100");
        assert_eq!(format_ratio(100.0 / 3.0), "33.3333");
        assert_eq!(format_ratio(12.5), "12.5");
    }
}
