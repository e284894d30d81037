//! Command-line interface for plagcheck.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **detect**: Report how much of a candidate document appears in the corpus
//! - **search**: Find which corpus documents contain one sentence
//! - **corpus**: List or export the reference corpus
//!
//! ## Usage
//!
//! ```text
//! # Compare a candidate against a directory of reference texts with all four algorithms
//! plagcheck detect testfile.txt --corpus references/
//!
//! # Use a single algorithm
//! plagcheck detect testfile.txt --corpus references/ --algorithm kmp
//!
//! # Pipe the candidate through stdin, JSON output for scripting
//! cat essay.txt | plagcheck detect - --corpus corpus.json --format json
//!
//! # Which documents contain this sentence?
//! plagcheck search "It was the best of times" --corpus references/
//!
//! # Snapshot a directory as a JSON manifest
//! plagcheck corpus export --corpus references/ > corpus.json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::types::Algorithm;
use crate::corpus::store::ReferenceCorpus;

pub mod corpus;
pub mod detect;
pub mod search;

#[derive(Parser)]
#[command(name = "plagcheck")]
#[command(version)]
#[command(about = "Detect sentences copied verbatim from a reference corpus")]
#[command(
    long_about = "plagcheck splits a candidate document into sentences and searches each one in a corpus of reference documents.\n\nFour interchangeable exact-matching algorithms are available:\n- rabin-karp (1): rolling hash with verification\n- kmp (2): Knuth-Morris-Pratt prefix function\n- boyer-moore (3): bad-character rule\n- hamming (4): sliding-window Hamming distance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the share of a candidate's sentences found in the corpus
    Detect(detect::DetectArgs),

    /// Find the corpus documents containing a sentence
    Search(search::SearchArgs),

    /// Inspect the reference corpus
    Corpus(corpus::CorpusArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Corpus location arguments shared by every subcommand
#[derive(clap::Args)]
pub struct CorpusSource {
    /// Reference corpus: a directory of .txt files, a .txt file, or a .json manifest.
    /// May be given more than once.
    #[arg(short = 'c', long = "corpus", required = true)]
    pub paths: Vec<PathBuf>,
}

impl CorpusSource {
    /// Load and merge every corpus path
    ///
    /// # Errors
    ///
    /// Returns an error if any path cannot be loaded or two documents share an id.
    pub fn load(&self) -> anyhow::Result<ReferenceCorpus> {
        let mut corpus = ReferenceCorpus::new();
        for path in &self.paths {
            corpus.merge(load_corpus_path(path)?)?;
        }
        Ok(corpus)
    }
}

fn load_corpus_path(path: &Path) -> anyhow::Result<ReferenceCorpus> {
    if path.is_dir() {
        return Ok(ReferenceCorpus::load_from_dir(path)?);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("json") => Ok(ReferenceCorpus::load_from_file(path)?),
        _ => {
            let mut corpus = ReferenceCorpus::new();
            corpus.add_text_file(path)?;
            Ok(corpus)
        }
    }
}

/// Algorithms to run: the selected one, or all four in order
fn selected_algorithms(algorithm: Option<Algorithm>) -> Vec<Algorithm> {
    algorithm.map_or_else(|| Algorithm::ALL.to_vec(), |a| vec![a])
}
