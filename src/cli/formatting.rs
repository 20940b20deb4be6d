//! Output rendering shared by the analysis commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::journal::JournalSummary;
use crate::sentiment::SentimentResult;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// Human-readable summary.
    Text,
}

/// Serializes a value as pretty JSON or YAML.
pub fn to_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string_pretty(value).context("Failed to serialize JSON")
        }
    }
}

fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join(", ")
    }
}

/// Renders a single result for a terminal.
pub fn render_result_text(result: &SentimentResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Label:       {} (score {:.2}, confidence {:.2})\n",
        result.label, result.score, result.confidence
    ));
    out.push_str(&format!("Method:      {}\n", result.analysis_method));
    out.push_str(&format!("Positive:    {}\n", word_list(&result.positive_words)));
    out.push_str(&format!("Negative:    {}\n", word_list(&result.negative_words)));

    let emotions: Vec<String> = result
        .emotions
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(name, v)| format!("{name} {v:.2}"))
        .collect();
    out.push_str(&format!("Emotions:    {}\n", word_list(&emotions)));

    if result.resilience.detected {
        out.push_str(&format!(
            "Resilience:  {:.2} ({})\n",
            result.resilience.score,
            result.resilience.indicators.join(", ")
        ));
    } else {
        out.push_str("Resilience:  none detected\n");
    }

    if let Some(notes) = &result.cultural_notes {
        out.push_str(&format!("Notes:       {notes}\n"));
    }
    out
}

/// Renders a journal summary for a terminal.
pub fn render_summary_text(summary: &JournalSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Entries:     {}\n", summary.entry_count));
    out.push_str(&format!(
        "Average:     score {:.2}, confidence {:.2}\n",
        summary.average_score, summary.average_confidence
    ));
    let labels: Vec<String> = summary
        .label_counts
        .iter()
        .map(|(label, count)| format!("{label} {count}"))
        .collect();
    out.push_str(&format!("Labels:      {}\n", word_list(&labels)));
    out.push_str(&format!(
        "Dominant:    {}\n",
        summary.dominant_emotion.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Resilience:  {:.0}% of entries\n",
        summary.resilience_rate * 100.0
    ));
    out.push_str(&format!("Top growth:  {}\n", word_list(&summary.top_indicators)));
    out
}
