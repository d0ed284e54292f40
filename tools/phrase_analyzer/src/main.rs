//! phrase-analyzer: hybrid phrase + word frequency analyzer for exam questions.
//!
//! Reads exported question records (JSONL / JSON files or directories), counts
//! catalog multi-word expressions and leftover words, and writes a ranked
//! JSON report for the whole corpus and for each category.
//!
//! - Longest-match-first phrase scanning, one consumption mask per text
//! - rayon work-stealing over corpus shards, merged in order at the end
//! - Per-category breakdown on unfiltered runs

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use phrase_analyzer::aggregate::{category_counts, Aggregator};
use phrase_analyzer::config::{AnalysisConfig, DEFAULT_MIN_FREQ, DEFAULT_TOP_N};
use phrase_analyzer::corpus::{CorpusSource, FileCorpus};
use phrase_analyzer::report::{self, FrequencyReport};
use phrase_analyzer::PhraseCatalog;

#[derive(Parser)]
#[command(name = "phrase-analyzer", version, about = "Hybrid phrase + word frequency analyzer for exam questions")]
struct Args {
    /// Input paths: .jsonl / .json question exports, or directories of them
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Only analyze this category (exact label)
    #[arg(short, long)]
    category: Option<String>,

    /// Cap for the combined ranking
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Minimum occurrence count to be listed
    #[arg(long, default_value_t = DEFAULT_MIN_FREQ)]
    min_freq: u64,

    /// Number of threads (0 = auto-detect)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// JSON output file
    #[arg(short, long, default_value = "word_frequency_results.json")]
    output: PathBuf,

    /// Max records to load (for quick testing)
    #[arg(long)]
    max_records: Option<usize>,

    /// Skip the console summary
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            category: self.category.clone(),
            top_n: self.top,
            min_freq: self.min_freq,
            threads: self.threads,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("phrase_analyzer=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.config();

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()?;
    }
    info!(threads = rayon::current_num_threads(), "thread pool ready");

    let t0 = Instant::now();
    let records = FileCorpus::new(args.inputs.iter().cloned())
        .with_max_records(args.max_records)
        .load()?;
    if records.is_empty() {
        bail!("no questions found in {} input path(s)", args.inputs.len());
    }

    let categories = category_counts(&records);
    if !args.quiet {
        report::print_categories(&categories, config.category.as_deref());
    }

    let catalog = PhraseCatalog::builtin();
    info!(phrases = catalog.len(), stop_words = catalog.stop_words().len(), "catalog ready");

    let analysis = Aggregator::new(catalog, config.clone()).run(&records);
    let report = FrequencyReport::new(&config, analysis);
    info!(
        questions = report.parameters.total_questions,
        elapsed_s = t0.elapsed().as_secs_f64(),
        "analysis complete"
    );

    report::write_json(&report, &args.output)?;
    info!(path = %args.output.display(), "results saved");

    if !args.quiet {
        report::print_summary(&report);
    }
    Ok(())
}
