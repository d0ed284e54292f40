//! Report assembly, JSON output and the console summary.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::aggregate::{CategoryBreakdown, CorpusAnalysis};
use crate::config::AnalysisConfig;
use crate::engine::{AnalysisResult, ExpressionKind};

/// Number of rows shown in each console table.
const CONSOLE_COMBINED_ROWS: usize = 50;
const CONSOLE_PHRASE_ROWS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParameters {
    /// Category filter, or `"ALL"`.
    pub category: String,
    pub top_n: usize,
    pub min_freq: u64,
    pub total_questions: usize,
}

/// Everything written to the JSON output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub generated_at: DateTime<Local>,
    pub parameters: ReportParameters,
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_category: Option<CategoryBreakdown>,
}

impl FrequencyReport {
    pub fn new(config: &AnalysisConfig, analysis: CorpusAnalysis) -> Self {
        Self {
            generated_at: Local::now(),
            parameters: ReportParameters {
                category: config.category_label().to_owned(),
                top_n: config.top_n,
                min_freq: config.min_freq,
                total_questions: analysis.total_questions,
            },
            result: analysis.result,
            by_category: analysis.by_category,
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_json(report: &FrequencyReport, path: &Path) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

pub fn format_num(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Category list with record counts; `selected` is marked.
pub fn print_categories(categories: &[(String, usize)], selected: Option<&str>) {
    println!("\n  {} categories:", categories.len());
    for (name, count) in categories {
        let marker = if selected == Some(name.as_str()) { "  <--" } else { "" };
        println!("   - {:<40} {:>8}{}", name, format_num(*count as u64), marker);
    }
}

pub fn print_summary(report: &FrequencyReport) {
    let stats = &report.result.stats;

    println!("\n{}", "═".repeat(78));
    println!(
        "  PHRASE + WORD FREQUENCY  ({} questions, category: {})",
        format_num(report.parameters.total_questions as u64),
        report.parameters.category,
    );
    println!("{}", "═".repeat(78));

    println!("  Texts analyzed:        {:>12}", format_num(stats.total_texts_analyzed));
    println!("  Phrase matches:        {:>12}", format_num(stats.total_phrase_matches));
    println!("  Word matches:          {:>12}", format_num(stats.total_word_matches));
    println!("  Unique phrases:        {:>12}", format_num(stats.unique_phrases_found as u64));
    println!("  Unique words:          {:>12}", format_num(stats.unique_words_found as u64));
    println!("  Catalog size:          {:>12}", format_num(stats.phrase_dictionary_size as u64));

    println!("\n{}", "─".repeat(78));
    println!("  TOP {} EXPRESSIONS (combined)", CONSOLE_COMBINED_ROWS);
    println!("{}", "─".repeat(78));
    println!("  {:<4} {:<45} {:>10}  {}", "#", "Expression", "Count", "Type");
    println!("  {} {} {}  {}", "─".repeat(4), "─".repeat(45), "─".repeat(10), "─".repeat(8));
    for (i, entry) in report.result.combined.iter().take(CONSOLE_COMBINED_ROWS).enumerate() {
        let kind = match entry.kind {
            Some(ExpressionKind::Phrase) => "phrase",
            _ => "word",
        };
        println!(
            "  {:<4} {:<45} {:>10}  {}",
            i + 1,
            entry.expression,
            format_num(entry.count),
            kind,
        );
    }

    println!("\n{}", "─".repeat(78));
    println!("  TOP {} MULTI-WORD EXPRESSIONS", CONSOLE_PHRASE_ROWS);
    println!("{}", "─".repeat(78));
    println!("  {:<4} {:<45} {:>10}", "#", "Expression", "Count");
    println!("  {} {} {}", "─".repeat(4), "─".repeat(45), "─".repeat(10));
    for (i, entry) in report.result.phrases_only.iter().take(CONSOLE_PHRASE_ROWS).enumerate() {
        println!("  {:<4} {:<45} {:>10}", i + 1, entry.expression, format_num(entry.count));
    }

    if let Some(by_category) = &report.by_category {
        println!("\n{}", "─".repeat(78));
        println!("  CATEGORIES");
        println!("{}", "─".repeat(78));
        println!("  {:<40} {:>10} {:>10}  {}", "Category", "Questions", "Texts", "Top expression");
        for (name, cat) in by_category.iter() {
            let top = cat
                .result
                .combined
                .first()
                .map(|e| e.expression.as_str())
                .unwrap_or("-");
            println!(
                "  {:<40} {:>10} {:>10}  {}",
                name,
                format_num(cat.question_count as u64),
                format_num(cat.result.stats.total_texts_analyzed),
                top,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_num() {
        assert_eq!(format_num(0), "0");
        assert_eq!(format_num(999), "999");
        assert_eq!(format_num(1_000), "1,000");
        assert_eq!(format_num(1_234_567), "1,234,567");
    }

    #[test]
    fn test_report_json_shape() {
        let analysis = CorpusAnalysis {
            total_questions: 4,
            result: AnalysisResult::default(),
            by_category: None,
        };
        let report = FrequencyReport::new(&AnalysisConfig::default(), analysis);
        let value = serde_json::to_value(&report).unwrap();

        for key in ["generated_at", "parameters", "combined", "phrases_only", "words_only", "stats"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value.get("by_category").is_none());
        assert!(value.get("result").is_none());
        assert_eq!(value["parameters"]["category"], "ALL");
        assert_eq!(value["parameters"]["total_questions"], 4);
    }
}
