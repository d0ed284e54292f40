//! Corpus record: one exam question as exported from the question store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used for records that carry no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Letters of the non-target (Turkish) alphabet. A hint containing any of
/// them is treated as translated text and left out of the counts.
pub const NON_TARGET_CHARS: &[char] = &['ç', 'ş', 'ğ', 'ü', 'ö', 'ı', 'Ç', 'Ş', 'Ğ', 'Ü', 'Ö', 'İ'];

/// Text fields of the wrong JSON type read as absent; the record is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question_text: Option<String>,
    /// Array of strings or `{"text": ..}` / `{"value": ..}` objects, or a
    /// string holding such an array. Anything else reads as no options.
    #[serde(default)]
    pub options: Value,
    /// Optional study hint; may be in either language.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
}

impl QuestionRecord {
    pub fn question_text(&self) -> &str {
        self.question_text.as_deref().unwrap_or_default()
    }

    /// All option texts joined by a space.
    pub fn options_text(&self) -> String {
        options_text(&self.options)
    }

    /// The hint, if present and free of non-target-language letters.
    pub fn hint_text(&self) -> Option<&str> {
        self.tip
            .as_deref()
            .filter(|tip| !tip.is_empty() && !tip.contains(NON_TARGET_CHARS))
    }

    /// Exact match on the stored label. Records without a category never
    /// match, not even a filter of [`UNCATEGORIZED`].
    pub fn in_category(&self, filter: &str) -> bool {
        self.category.as_deref() == Some(filter)
    }

    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Extract the text of every option. Malformed entries contribute nothing.
pub fn options_text(options: &Value) -> String {
    match options {
        Value::Array(items) => items.iter().map(option_text).collect::<Vec<_>>().join(" "),
        // Stringified JSON array (JSONB columns exported as text)
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed @ Value::Array(_)) => options_text(&parsed),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

fn option_text(option: &Value) -> &str {
    match option {
        Value::String(s) => s,
        Value::Object(map) => ["text", "value"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .unwrap_or_default(),
        _ => "",
    }
}
