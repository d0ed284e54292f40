//! Insertion-ordered frequency counter.
//!
//! Ranking is a stable sort on count, so expressions with equal counts keep
//! the order in which they were first seen.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Expression -> slot in `entries`.
    index: HashMap<String, usize>,
    /// (expression, count) in first-seen order.
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `expression`.
    pub fn add(&mut self, expression: &str, n: u64) {
        match self.index.get(expression) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.index.insert(expression.to_owned(), self.entries.len());
                self.entries.push((expression.to_owned(), n));
            }
        }
    }

    pub fn increment(&mut self, expression: &str) {
        self.add(expression, 1);
    }

    pub fn get(&self, expression: &str) -> u64 {
        self.index
            .get(expression)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn contains(&self, expression: &str) -> bool {
        self.index.contains_key(expression)
    }

    /// Number of distinct expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(e, c)| (e.as_str(), *c))
    }

    /// Entries with `count >= min_count`, most frequent first, at most `limit`.
    pub fn ranked(&self, min_count: u64, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().filter(|&(_, c)| c >= min_count).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Sum `other` into `self`. Expressions new to `self` are appended in
    /// `other`'s first-seen order, so merging tables built from consecutive
    /// slices of a corpus reproduces the table of a single pass.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (expression, count) in other.entries {
            match self.index.get(&expression) {
                Some(&slot) => self.entries[slot].1 += count,
                None => {
                    self.index.insert(expression.clone(), self.entries.len());
                    self.entries.push((expression, count));
                }
            }
        }
    }

    /// Counts keyed by expression, ignoring first-seen order.
    pub fn to_map(&self) -> HashMap<String, u64> {
        self.entries.iter().cloned().collect()
    }
}
