//! Hybrid phrase + word frequency analysis for exam-question corpora.
//!
//! Multi-word expressions from a fixed catalog (phrasal verbs, collocations,
//! prepositional phrases, linkers) are matched first, longest and leftmost
//! first; the remaining tokens are counted as single words. Results are ranked
//! for the whole corpus and per category.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod normalize;
pub mod record;
pub mod report;
pub mod table;

pub use aggregate::{Aggregator, CategoryBreakdown, CategoryReport, CorpusAnalysis};
pub use catalog::PhraseCatalog;
pub use config::AnalysisConfig;
pub use corpus::{CorpusSource, FileCorpus};
pub use engine::{AnalysisResult, AnalysisStats, ExpressionKind, FrequencyEngine, RankedEntry};
pub use record::QuestionRecord;
pub use report::FrequencyReport;
pub use table::FrequencyTable;
