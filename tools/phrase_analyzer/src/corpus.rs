//! Corpus loading from question exports on disk.
//!
//! Accepts `.jsonl` files (one record per line), `.json` files (an array of
//! records, or an object with a `questions` array), and directories that are
//! walked recursively for both. Bad lines are logged and skipped.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::record::QuestionRecord;

/// Anything that can hand the aggregator a list of question records.
pub trait CorpusSource {
    fn load(&self) -> Result<Vec<QuestionRecord>>;
}

/// Records already in memory.
impl CorpusSource for Vec<QuestionRecord> {
    fn load(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FileCorpus {
    inputs: Vec<PathBuf>,
    max_records: Option<usize>,
}

impl FileCorpus {
    pub fn new<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            max_records: None,
        }
    }

    /// Stop after this many records (for quick runs).
    pub fn with_max_records(mut self, max: Option<usize>) -> Self {
        self.max_records = max;
        self
    }

    /// Corpus files under the inputs, sorted so runs are reproducible.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.inputs {
            if input.is_dir() {
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                {
                    if entry.file_type().is_file() && is_corpus_file(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
            } else if input.is_file() {
                files.push(input.clone());
            } else {
                bail!("input not found: {}", input.display());
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

impl CorpusSource for FileCorpus {
    fn load(&self) -> Result<Vec<QuestionRecord>> {
        let files = self.collect_files()?;
        info!(files = files.len(), "reading corpus");

        let mut records = Vec::new();
        for path in &files {
            let before = records.len();
            if is_jsonl(path) {
                read_jsonl(path, &mut records)?;
            } else {
                read_json(path, &mut records)?;
            }
            debug!(path = %path.display(), records = records.len() - before, "read file");

            if let Some(max) = self.max_records {
                if records.len() >= max {
                    records.truncate(max);
                    break;
                }
            }
        }
        info!(records = records.len(), "corpus loaded");
        Ok(records)
    }
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl"))
}

fn is_corpus_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl") || e.eq_ignore_ascii_case("json"))
}

fn read_jsonl(path: &Path, records: &mut Vec<QuestionRecord>) -> Result<()> {
    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(path = %path.display(), line = line_no, error = %e, "unreadable line, skipping");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<QuestionRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => warn!(path = %path.display(), line = line_no, error = %e, "bad record, skipping"),
        }
    }
    Ok(())
}

fn read_json(path: &Path, records: &mut Vec<QuestionRecord>) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => bail!("{}: expected an array of questions", path.display()),
        },
        _ => bail!("{}: expected an array of questions", path.display()),
    };

    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<QuestionRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => warn!(path = %path.display(), index = i, error = %e, "bad record, skipping"),
        }
    }
    Ok(())
}
