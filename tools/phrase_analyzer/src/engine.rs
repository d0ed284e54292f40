//! Hybrid frequency engine: multi-word expressions first, then unigrams.
//!
//! Each text unit is tokenized and scanned tier by tier, from the longest
//! catalog expressions down to two-word ones. A matched expression claims its
//! token positions in a per-text consumption mask; remaining positions are
//! counted as single words after stop-word and shape filtering. A token
//! position therefore contributes to at most one counted expression.

use serde::{Deserialize, Serialize};

use crate::catalog::PhraseCatalog;
use crate::normalize::normalize;
use crate::table::FrequencyTable;

/// Fixed cap for the phrase-only ranking.
pub const PHRASES_ONLY_CAP: usize = 200;
/// Fixed cap for the word-only ranking.
pub const WORDS_ONLY_CAP: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionKind {
    Phrase,
    Word,
}

/// One row of a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub expression: String,
    pub count: u64,
    /// Only set in the combined ranking, where phrases and words mix.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExpressionKind>,
    pub word_count: usize,
}

impl RankedEntry {
    fn new(expression: &str, count: u64, kind: Option<ExpressionKind>) -> Self {
        Self {
            expression: expression.to_owned(),
            count,
            kind,
            word_count: expression.split(' ').count(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_texts_analyzed: u64,
    pub total_phrase_matches: u64,
    pub total_word_matches: u64,
    pub unique_phrases_found: usize,
    pub unique_words_found: usize,
    pub unique_combined: usize,
    pub phrase_dictionary_size: usize,
}

/// Read-only snapshot of an engine's tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub combined: Vec<RankedEntry>,
    pub phrases_only: Vec<RankedEntry>,
    pub words_only: Vec<RankedEntry>,
    pub stats: AnalysisStats,
}

impl AnalysisResult {
    /// Shrink the ranked lists, e.g. for per-category summaries.
    pub fn truncated(mut self, combined: usize, phrases: usize, words: usize) -> Self {
        self.combined.truncate(combined);
        self.phrases_only.truncate(phrases);
        self.words_only.truncate(words);
        self
    }
}

/// Accumulates phrase, word and combined frequency tables over many texts.
///
/// The catalog is borrowed; any number of engines may share one.
#[derive(Debug, Clone)]
pub struct FrequencyEngine<'c> {
    catalog: &'c PhraseCatalog,
    phrases: FrequencyTable,
    words: FrequencyTable,
    combined: FrequencyTable,
    texts_analyzed: u64,
    phrase_matches: u64,
    word_matches: u64,
}

impl<'c> FrequencyEngine<'c> {
    pub fn new(catalog: &'c PhraseCatalog) -> Self {
        Self {
            catalog,
            phrases: FrequencyTable::new(),
            words: FrequencyTable::new(),
            combined: FrequencyTable::new(),
            texts_analyzed: 0,
            phrase_matches: 0,
            word_matches: 0,
        }
    }

    /// Analyze one text unit. Text that normalizes to nothing is ignored
    /// and does not count as analyzed.
    pub fn analyze(&mut self, text: &str) {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return;
        }
        self.texts_analyzed += 1;

        let tokens: Vec<&str> = cleaned.split(' ').collect();
        let mut consumed = vec![false; tokens.len()];
        self.match_phrases(&tokens, &mut consumed);
        self.count_words(&tokens, &consumed);
    }

    /// Longest tier first, leftmost start first within a tier.
    fn match_phrases(&mut self, tokens: &[&str], consumed: &mut [bool]) {
        let n = tokens.len();
        let catalog = self.catalog;
        for (len, tier) in catalog.tiers_longest_first() {
            if len < 2 || len > n {
                continue;
            }
            for start in 0..=n - len {
                let span = start..start + len;
                if consumed[span.clone()].iter().any(|&c| c) {
                    continue;
                }
                let candidate = tokens[span.clone()].join(" ");
                if tier.contains(&candidate) {
                    self.phrases.increment(&candidate);
                    self.combined.increment(&candidate);
                    self.phrase_matches += 1;
                    consumed[span].fill(true);
                }
            }
        }
    }

    fn count_words(&mut self, tokens: &[&str], consumed: &[bool]) {
        for (&token, &used) in tokens.iter().zip(consumed) {
            if used {
                continue;
            }
            if let Some(word) = unigram(token, self.catalog) {
                self.words.increment(word);
                self.combined.increment(word);
                self.word_matches += 1;
            }
        }
    }

    /// Ranked snapshot. `combined` is capped at `top_n`; the phrase and word
    /// lists use their fixed caps. Entries below `min_freq` are dropped.
    pub fn get_results(&self, top_n: usize, min_freq: u64) -> AnalysisResult {
        let combined = self
            .combined
            .ranked(min_freq, top_n)
            .into_iter()
            .map(|(expr, count)| {
                let kind = if self.catalog.is_phrase(expr) {
                    ExpressionKind::Phrase
                } else {
                    ExpressionKind::Word
                };
                RankedEntry::new(expr, count, Some(kind))
            })
            .collect();

        let phrases_only = self
            .phrases
            .ranked(min_freq, PHRASES_ONLY_CAP)
            .into_iter()
            .map(|(expr, count)| RankedEntry::new(expr, count, None))
            .collect();

        let words_only = self
            .words
            .ranked(min_freq, WORDS_ONLY_CAP)
            .into_iter()
            .map(|(expr, count)| RankedEntry::new(expr, count, None))
            .collect();

        AnalysisResult {
            combined,
            phrases_only,
            words_only,
            stats: self.stats(),
        }
    }

    pub fn stats(&self) -> AnalysisStats {
        AnalysisStats {
            total_texts_analyzed: self.texts_analyzed,
            total_phrase_matches: self.phrase_matches,
            total_word_matches: self.word_matches,
            unique_phrases_found: self.phrases.len(),
            unique_words_found: self.words.len(),
            unique_combined: self.combined.len(),
            phrase_dictionary_size: self.catalog.len(),
        }
    }

    /// Fold another engine's tables and counters into this one.
    ///
    /// Both engines must use the same catalog. Merging engines that analyzed
    /// consecutive slices of a corpus, in slice order, gives exactly the
    /// state of one engine that analyzed the whole corpus.
    pub fn merge(&mut self, other: FrequencyEngine<'_>) {
        debug_assert!(std::ptr::eq(self.catalog, other.catalog));
        self.phrases.merge(other.phrases);
        self.words.merge(other.words);
        self.combined.merge(other.combined);
        self.texts_analyzed += other.texts_analyzed;
        self.phrase_matches += other.phrase_matches;
        self.word_matches += other.word_matches;
    }

    pub fn catalog(&self) -> &'c PhraseCatalog {
        self.catalog
    }

    pub fn phrase_table(&self) -> &FrequencyTable {
        &self.phrases
    }

    pub fn word_table(&self) -> &FrequencyTable {
        &self.words
    }

    pub fn combined_table(&self) -> &FrequencyTable {
        &self.combined
    }

    pub fn texts_analyzed(&self) -> u64 {
        self.texts_analyzed
    }
}

/// Filter a leftover token down to a countable word, if it is one.
fn unigram<'t>(token: &'t str, catalog: &PhraseCatalog) -> Option<&'t str> {
    let word = token.trim_matches('\'');
    if word.chars().count() < 2 {
        return None;
    }
    if catalog.is_stop_word(word) {
        return None;
    }
    if !word.chars().all(is_letter) {
        return None;
    }
    Some(word)
}

/// Alphabetic but not numeric, so letter-numbers such as `ⅻ` are rejected.
/// Combining marks that Unicode counts as alphabetic still pass.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
