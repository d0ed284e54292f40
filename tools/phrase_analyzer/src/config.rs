use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 500;
pub const DEFAULT_MIN_FREQ: u64 = 2;

/// Parameters of one analysis run, handed to the aggregator by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Only analyze records with exactly this category label.
    pub category: Option<String>,
    /// Cap for the combined ranking.
    pub top_n: usize,
    /// Entries below this count are left out of every ranking.
    pub min_freq: u64,
    /// Worker threads for the corpus pass (0 = all cores).
    pub threads: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            category: None,
            top_n: DEFAULT_TOP_N,
            min_freq: DEFAULT_MIN_FREQ,
            threads: 0,
        }
    }
}

impl AnalysisConfig {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_min_freq(mut self, min_freq: u64) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Label written to the report for the category filter.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("ALL")
    }
}
