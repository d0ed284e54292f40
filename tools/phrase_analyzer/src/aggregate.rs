//! Drives frequency engines over a corpus: one whole-corpus pass plus an
//! independent pass per category.
//!
//! The whole-corpus pass is sharded: contiguous batches of records go to
//! separate engines on the rayon pool and the engines are merged back in
//! batch order, which reproduces a sequential pass exactly.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use crate::catalog::PhraseCatalog;
use crate::config::AnalysisConfig;
use crate::engine::{AnalysisResult, FrequencyEngine};
use crate::record::QuestionRecord;

/// `top_n` and `min_freq` used for each category before the caps below are
/// applied. They do not follow the run's settings.
pub const CATEGORY_TOP_N: usize = 50;
pub const CATEGORY_MIN_FREQ: u64 = 2;
pub const CATEGORY_COMBINED_CAP: usize = 30;
pub const CATEGORY_PHRASES_CAP: usize = 15;
pub const CATEGORY_WORDS_CAP: usize = 30;

const PROGRESS_EVERY: usize = 1_000;
const MIN_BATCH: usize = 100;

/// Frequency summary for the records of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub question_count: usize,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Per-category reports, most populated category first. Serialized as a JSON
/// object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown(Vec<(String, CategoryReport)>);

impl CategoryBreakdown {
    pub fn get(&self, name: &str) -> Option<&CategoryReport> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, report)| report)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryReport)> {
        self.0.iter().map(|(n, report)| (n.as_str(), report))
    }
}

impl FromIterator<(String, CategoryReport)> for CategoryBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, CategoryReport)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(n, report)| (n, report)))
    }
}

impl<'de> Deserialize<'de> for CategoryBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = CategoryBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category reports")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, CategoryReport>()? {
                    entries.push(entry);
                }
                Ok(CategoryBreakdown(entries))
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// Output of [`Aggregator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusAnalysis {
    /// Records that passed the category filter.
    pub total_questions: usize,
    pub result: AnalysisResult,
    /// Present only for unfiltered runs.
    pub by_category: Option<CategoryBreakdown>,
}

/// Feed every text unit of a record into an engine: question text, joined
/// option texts, and the hint when it passes the language filter.
pub fn feed(engine: &mut FrequencyEngine<'_>, record: &QuestionRecord) {
    engine.analyze(record.question_text());
    engine.analyze(&record.options_text());
    if let Some(hint) = record.hint_text() {
        engine.analyze(hint);
    }
}

/// Category labels with their record counts, most populated first. Ties keep
/// first-seen order.
pub fn category_counts(records: &[QuestionRecord]) -> Vec<(String, usize)> {
    let refs: Vec<&QuestionRecord> = records.iter().collect();
    group_by_category(&refs)
        .into_iter()
        .map(|(name, group)| (name.to_owned(), group.len()))
        .collect()
}

fn group_by_category<'r>(records: &[&'r QuestionRecord]) -> Vec<(&'r str, Vec<&'r QuestionRecord>)> {
    let mut groups: Vec<(&str, Vec<&QuestionRecord>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for &record in records {
        let category = record.category();
        match index.get(category) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(category, groups.len());
                groups.push((category, vec![record]));
            }
        }
    }
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups
}

pub struct Aggregator<'c> {
    catalog: &'c PhraseCatalog,
    config: AnalysisConfig,
}

impl<'c> Aggregator<'c> {
    pub fn new(catalog: &'c PhraseCatalog, config: AnalysisConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Whole-corpus result plus, for unfiltered runs, the per-category breakdown.
    pub fn run(&self, records: &[QuestionRecord]) -> CorpusAnalysis {
        let selected: Vec<&QuestionRecord> = match self.config.category.as_deref() {
            Some(filter) => records.iter().filter(|r| r.in_category(filter)).collect(),
            None => records.iter().collect(),
        };
        info!(
            total = records.len(),
            selected = selected.len(),
            category = self.config.category_label(),
            "analyzing corpus"
        );

        let t0 = Instant::now();
        let engine = self.analyze_parallel(&selected);
        info!(elapsed_s = t0.elapsed().as_secs_f64(), "corpus pass complete");
        let result = engine.get_results(self.config.top_n, self.config.min_freq);

        let by_category = if self.config.category.is_none() {
            Some(self.category_breakdown(&selected))
        } else {
            None
        };

        CorpusAnalysis {
            total_questions: selected.len(),
            result,
            by_category,
        }
    }

    /// Single engine, records in order.
    pub fn analyze_sequential(&self, records: &[&QuestionRecord]) -> FrequencyEngine<'c> {
        self.feed_all(records, true)
    }

    /// Corpus progress goes out at `info`; per-category passes only at `debug`.
    fn feed_all(&self, records: &[&QuestionRecord], corpus_progress: bool) -> FrequencyEngine<'c> {
        let mut engine = FrequencyEngine::new(self.catalog);
        for (i, record) in records.iter().enumerate() {
            feed(&mut engine, record);
            if (i + 1) % PROGRESS_EVERY == 0 {
                if corpus_progress {
                    info!(done = i + 1, total = records.len(), "progress");
                } else {
                    debug!(done = i + 1, total = records.len(), "category progress");
                }
            }
        }
        engine
    }

    /// One engine per batch on the rayon pool, merged in batch order.
    pub fn analyze_parallel(&self, records: &[&QuestionRecord]) -> FrequencyEngine<'c> {
        let num_threads = rayon::current_num_threads();
        let batch_size = MIN_BATCH.max(records.len() / (num_threads * 4).max(1));
        if records.len() <= batch_size {
            return self.analyze_sequential(records);
        }

        let done = AtomicUsize::new(0);
        let total = records.len();
        debug!(batches = total.div_ceil(batch_size), batch_size, "sharding corpus");

        let shards: Vec<FrequencyEngine<'c>> = records
            .par_chunks(batch_size)
            .map(|batch| {
                let mut engine = FrequencyEngine::new(self.catalog);
                for record in batch {
                    feed(&mut engine, record);
                }
                let before = done.fetch_add(batch.len(), Ordering::Relaxed);
                let after = before + batch.len();
                if after / PROGRESS_EVERY > before / PROGRESS_EVERY || after == total {
                    info!(done = after, total, "progress");
                }
                engine
            })
            .collect();

        let mut merged = FrequencyEngine::new(self.catalog);
        for shard in shards {
            merged.merge(shard);
        }
        merged
    }

    /// A fresh engine per category label, with the smaller category caps and
    /// a fixed threshold. Categories come out most populated first.
    pub fn category_breakdown(&self, records: &[&QuestionRecord]) -> CategoryBreakdown {
        let groups = group_by_category(records);
        info!(categories = groups.len(), "analyzing categories");

        let reports: Vec<(String, CategoryReport)> = groups
            .into_par_iter()
            .map(|(name, group)| {
                let engine = self.feed_all(&group, false);
                let result = engine
                    .get_results(CATEGORY_TOP_N, CATEGORY_MIN_FREQ)
                    .truncated(CATEGORY_COMBINED_CAP, CATEGORY_PHRASES_CAP, CATEGORY_WORDS_CAP);
                let report = CategoryReport {
                    question_count: group.len(),
                    result,
                };
                (name.to_owned(), report)
            })
            .collect();
        reports.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ExpressionKind;
    use crate::record::UNCATEGORIZED;
    use serde_json::json;

    fn record(question: &str, options: &[&str], tip: Option<&str>, category: &str) -> QuestionRecord {
        serde_json::from_value(json!({
            "question_text": question,
            "options": options,
            "tip": tip,
            "category": category,
        }))
        .unwrap()
    }

    fn corpus() -> Vec<QuestionRecord> {
        vec![
            record(
                "We had to ____ the meeting because of the storm.",
                &["call off", "put up with", "look after", "carry on", "give up"],
                Some("Call off means to cancel something."),
                "Vocabulary",
            ),
            record(
                "Because of the storm, the vast majority stayed home.",
                &["however", "in spite of", "because of", "thus", "due to"],
                Some("Neden bildiren bağlaç kullanılır."),
                "Grammar",
            ),
            record(
                "Scientists carry out research to find out why storms form.",
                &["carry out", "give up", "take over", "set up", "point out"],
                None,
                "Vocabulary",
            ),
        ]
    }

    fn count(result: &AnalysisResult, expr: &str) -> Option<u64> {
        result.combined.iter().find(|e| e.expression == expr).map(|e| e.count)
    }

    #[test]
    fn test_feed_skips_non_target_hint() {
        let catalog = PhraseCatalog::builtin();
        let records = corpus();

        let mut engine = FrequencyEngine::new(catalog);
        feed(&mut engine, &records[0]);
        // question, options, hint
        assert_eq!(engine.texts_analyzed(), 3);
        assert_eq!(engine.phrase_table().get("call off"), 2);

        let mut engine = FrequencyEngine::new(catalog);
        feed(&mut engine, &records[1]);
        assert_eq!(engine.texts_analyzed(), 2);
        assert!(!engine.word_table().contains("neden"));
    }

    #[test]
    fn test_run_whole_corpus() {
        let records = corpus();
        let config = AnalysisConfig::default().with_min_freq(2);
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);

        assert_eq!(analysis.total_questions, 3);
        assert_eq!(analysis.result.stats.total_texts_analyzed, 7);
        assert_eq!(count(&analysis.result, "because of"), Some(3));
        assert_eq!(count(&analysis.result, "storm"), Some(2));
        assert_eq!(count(&analysis.result, "give up"), Some(2));
        assert_eq!(count(&analysis.result, "scientists"), None);
        assert!(analysis.result.combined.iter().all(|e| e.count >= 2));
        let first = &analysis.result.combined[0];
        assert_eq!(first.expression, "because of");
        assert_eq!(first.kind, Some(ExpressionKind::Phrase));
    }

    #[test]
    fn test_category_breakdown() {
        let records = corpus();
        let config = AnalysisConfig::default().with_min_freq(1);
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);

        let by_category = analysis.by_category.unwrap();
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category.names().collect::<Vec<_>>(), vec!["Vocabulary", "Grammar"]);
        let vocab = by_category.get("Vocabulary").unwrap();
        assert_eq!(vocab.question_count, 2);
        assert_eq!(vocab.result.stats.total_texts_analyzed, 5);
        assert!(vocab.result.combined.len() <= CATEGORY_COMBINED_CAP);
        assert!(vocab.result.phrases_only.len() <= CATEGORY_PHRASES_CAP);
        assert_eq!(count(&vocab.result, "give up"), Some(2));
        // singletons stay out at the fixed category threshold
        assert_eq!(count(&vocab.result, "scientists"), None);

        let grammar = by_category.get("Grammar").unwrap();
        assert_eq!(grammar.question_count, 1);
        assert_eq!(count(&grammar.result, "because of"), Some(2));
        assert_eq!(count(&grammar.result, "give up"), None);
    }

    #[test]
    fn test_category_threshold_ignores_run_min_freq() {
        let twice = || record("They had to give up because of rain.", &[], None, "Grammar");
        let records = vec![twice(), twice()];
        let config = AnalysisConfig::default().with_min_freq(5);
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);

        assert!(analysis.result.combined.is_empty());
        let by_category = analysis.by_category.unwrap();
        let grammar = by_category.get("Grammar").unwrap();
        for expr in ["give up", "because of", "rain"] {
            assert_eq!(count(&grammar.result, expr), Some(2), "{expr}");
        }
    }

    #[test]
    fn test_breakdown_serializes_in_count_order() {
        let mut records = corpus();
        records.push(record("Alpha sorts first by name.", &[], None, "Alpha"));
        let analysis = Aggregator::new(PhraseCatalog::builtin(), AnalysisConfig::default()).run(&records);

        let by_category = analysis.by_category.unwrap();
        let json = serde_json::to_string(&by_category).unwrap();
        let vocab = json.find("\"Vocabulary\"").unwrap();
        let grammar = json.find("\"Grammar\"").unwrap();
        let alpha = json.find("\"Alpha\"").unwrap();
        assert!(vocab < grammar && grammar < alpha);

        let back: CategoryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, by_category);
    }

    #[test]
    fn test_filter_never_matches_missing_category() {
        let mut records = corpus();
        records.push(serde_json::from_value(json!({"question_text": "No label here."})).unwrap());
        let config = AnalysisConfig::default().with_category(UNCATEGORIZED);
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);
        assert_eq!(analysis.total_questions, 0);

        let analysis = Aggregator::new(PhraseCatalog::builtin(), AnalysisConfig::default()).run(&records);
        let by_category = analysis.by_category.unwrap();
        assert_eq!(by_category.get(UNCATEGORIZED).unwrap().question_count, 1);
    }

    #[test]
    fn test_category_filter() {
        let records = corpus();
        let config = AnalysisConfig::default().with_category("Grammar").with_min_freq(1);
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);

        assert_eq!(analysis.total_questions, 1);
        assert!(analysis.by_category.is_none());
        assert_eq!(count(&analysis.result, "because of"), Some(2));
        assert_eq!(count(&analysis.result, "call off"), None);
    }

    #[test]
    fn test_unknown_category_is_empty_result() {
        let records = corpus();
        let config = AnalysisConfig::default().with_category("Reading");
        let analysis = Aggregator::new(PhraseCatalog::builtin(), config).run(&records);
        assert_eq!(analysis.total_questions, 0);
        assert!(analysis.result.combined.is_empty());
        assert_eq!(analysis.result.stats.total_texts_analyzed, 0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = corpus();
        let records: Vec<QuestionRecord> = (0..1_500).map(|i| base[i % base.len()].clone()).collect();
        let refs: Vec<&QuestionRecord> = records.iter().collect();
        let aggregator = Aggregator::new(PhraseCatalog::builtin(), AnalysisConfig::default());

        let sequential = aggregator.analyze_sequential(&refs);
        let parallel = aggregator.analyze_parallel(&refs);
        assert_eq!(parallel.combined_table(), sequential.combined_table());
        assert_eq!(parallel.phrase_table(), sequential.phrase_table());
        assert_eq!(parallel.word_table(), sequential.word_table());
        assert_eq!(parallel.stats(), sequential.stats());
        assert_eq!(parallel.get_results(500, 2), sequential.get_results(500, 2));
    }

    #[test]
    fn test_category_counts_order() {
        let counts = category_counts(&corpus());
        assert_eq!(
            counts,
            vec![("Vocabulary".to_owned(), 2), ("Grammar".to_owned(), 1)]
        );
    }
}
