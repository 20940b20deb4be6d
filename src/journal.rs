//! Journal files and aggregate summaries over analyzed entries.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::sentiment::{EmotionBreakdown, SentimentLabel, SentimentResult};

/// Number of indicators reported in [`JournalSummary::top_indicators`].
pub const TOP_INDICATOR_COUNT: usize = 5;

/// A single journal entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Caller-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Entry text.
    pub text: String,
}

/// Loads journal entries from a JSON or YAML file.
///
/// The format is chosen by extension (`.json`, `.yaml`, `.yml`). Files
/// with any other extension are parsed as YAML, which also accepts JSON.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<JournalEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    parse_entries(&content, path)
}

fn parse_entries(content: &str, path: &Path) -> Result<Vec<JournalEntry>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries: Vec<JournalEntry> = if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse journal JSON: {}", path.display()))?
    } else {
        serde_yaml::from_str(content)
            .with_context(|| format!("Failed to parse journal YAML: {}", path.display()))?
    };

    if let Some(index) = entries.iter().position(|e| e.text.trim().is_empty()) {
        bail!(
            "Journal entry {} in {} has no text",
            index + 1,
            path.display()
        );
    }
    Ok(entries)
}

/// Aggregate view over a set of analyzed entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSummary {
    /// Number of entries summarized.
    pub entry_count: usize,
    /// Mean score.
    pub average_score: f64,
    /// Mean confidence.
    pub average_confidence: f64,
    /// Entries per label.
    pub label_counts: BTreeMap<SentimentLabel, usize>,
    /// Emotion with the highest mean intensity, if any is non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_emotion: Option<String>,
    /// Mean intensity per emotion.
    pub average_emotions: EmotionBreakdown,
    /// Fraction of entries with growth language.
    pub resilience_rate: f64,
    /// Most frequent indicators, case-insensitively grouped.
    pub top_indicators: Vec<String>,
}

/// Summarizes analyzed entries.
pub fn summarize(results: &[SentimentResult]) -> JournalSummary {
    if results.is_empty() {
        return JournalSummary::default();
    }
    let n = results.len() as f64;

    let mut label_counts = BTreeMap::new();
    let mut emotion_totals = EmotionBreakdown::default();
    let mut resilient = 0usize;
    // key -> (count, first appearance, display form)
    let mut indicator_stats: HashMap<String, (usize, usize, String)> = HashMap::new();

    for result in results {
        *label_counts.entry(result.label).or_insert(0) += 1;
        for (name, value) in result.emotions.iter() {
            if let Some(total) = emotion_totals.get_mut(name) {
                *total += value;
            }
        }
        if result.resilience.detected {
            resilient += 1;
        }
        for indicator in &result.resilience.indicators {
            let order = indicator_stats.len();
            indicator_stats
                .entry(indicator.to_lowercase())
                .or_insert_with(|| (0, order, indicator.clone()))
                .0 += 1;
        }
    }

    let mut average_emotions = EmotionBreakdown::default();
    for (name, total) in emotion_totals.iter() {
        if let Some(slot) = average_emotions.get_mut(name) {
            *slot = total / n;
        }
    }

    let mut ranked: Vec<_> = indicator_stats.into_values().collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    JournalSummary {
        entry_count: results.len(),
        average_score: results.iter().map(|r| r.score).sum::<f64>() / n,
        average_confidence: results.iter().map(|r| r.confidence).sum::<f64>() / n,
        label_counts,
        dominant_emotion: average_emotions.dominant().map(|(name, _)| name.to_string()),
        average_emotions,
        resilience_rate: resilient as f64 / n,
        top_indicators: ranked
            .into_iter()
            .take(TOP_INDICATOR_COUNT)
            .map(|(_, _, display)| display)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::analyze_local_sentiment;
    use tempfile::TempDir;

    #[test]
    fn loads_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("week.json");
        fs::write(
            &json,
            r#"[{"id": "1", "date": "2024-03-01", "text": "Great day"}, {"text": "Rough day"}]"#,
        )
        .unwrap();
        let entries = load_entries(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_deref(), Some("1"));
        assert!(entries[1].date.is_none());

        let yaml = dir.path().join("week.yml");
        fs::write(&yaml, "- text: Great day\n  date: 2024-03-01\n- text: Rough day\n").unwrap();
        let entries = load_entries(&yaml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn rejects_blank_entries_and_missing_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"text": "fine"}, {"text": "  "}]"#).unwrap();
        let err = load_entries(&path).unwrap_err();
        assert!(err.to_string().contains("entry 2"));

        let err = load_entries(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read journal file"));
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let summary = summarize(&[]);
        assert_eq!(summary.entry_count, 0);
        assert!(summary.average_score.abs() < f64::EPSILON);
        assert!(summary.dominant_emotion.is_none());
        assert!(summary.label_counts.is_empty());
        assert!(summary.top_indicators.is_empty());
    }

    #[test]
    fn summary_aggregates_entries() {
        let results: Vec<_> = [
            "Had an amazing day, so happy and proud!",
            "I completely failed the project, total disaster",
            "Struggled, but I learned so much from this challenge",
        ]
        .iter()
        .map(|t| analyze_local_sentiment(t))
        .collect();

        let summary = summarize(&results);
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.label_counts.values().sum::<usize>(), 3);
        let expected = results.iter().map(|r| r.score).sum::<f64>() / 3.0;
        assert!((summary.average_score - expected).abs() < 1e-12);
        assert!((summary.resilience_rate - 1.0 / 3.0).abs() < 1e-12);
        assert!(summary
            .top_indicators
            .contains(&"learned so much from".to_string()));
        assert!(summary.average_emotions.joy > 0.0);
        assert!(summary.dominant_emotion.is_some());
    }

    #[test]
    fn top_indicators_rank_by_frequency_then_first_seen() {
        let results: Vec<_> = [
            "Next time I will plan. Another challenge.",
            "A new challenge today, but in hindsight fine.",
            "Challenge accepted. Next time again.",
        ]
        .iter()
        .map(|t| analyze_local_sentiment(t))
        .collect();

        let summary = summarize(&results);
        assert_eq!(summary.top_indicators[0].to_lowercase(), "challenge");
        assert_eq!(summary.top_indicators[1].to_lowercase(), "next time");
        assert_eq!(summary.top_indicators[2].to_lowercase(), "in hindsight");
    }
}
