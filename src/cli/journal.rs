//! Journal command: analyzes a file of entries and summarizes them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use super::formatting::{render_result_text, render_summary_text, to_structured, OutputFormat};
use crate::enrich::SmartAnalyzer;
use crate::journal::{load_entries, summarize, JournalEntry, JournalSummary};
use crate::sentiment::{
    analyze_local_sentiment, analyze_with_cultural_context, CulturalContext, SentimentResult,
};

/// Journal command options.
#[derive(Parser)]
pub struct JournalCommand {
    /// JSON or YAML file holding a list of entries.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Enriches every entry with a language model.
    #[arg(long)]
    pub deep: bool,

    /// Overrides the model used for deep analysis.
    #[arg(long, value_name = "MODEL", requires = "deep")]
    pub model: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// One analyzed entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEntry {
    /// Entry identifier, if the file gave one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entry date, if the file gave one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Analysis result.
    pub result: SentimentResult,
}

/// Full output of the journal command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalReport {
    /// Per-entry results in file order.
    pub entries: Vec<AnalyzedEntry>,
    /// Aggregate over all entries.
    pub summary: JournalSummary,
}

/// Analyzes entries in order, sequentially when a model is involved.
pub async fn analyze_entries(
    entries: Vec<JournalEntry>,
    context: Option<&CulturalContext>,
    analyzer: Option<&SmartAnalyzer>,
) -> JournalReport {
    let mut analyzed = Vec::with_capacity(entries.len());
    for entry in entries {
        let result = match (analyzer, context) {
            (Some(analyzer), _) => analyzer.analyze(&entry.text, context).await,
            (None, Some(context)) => analyze_with_cultural_context(&entry.text, context),
            (None, None) => analyze_local_sentiment(&entry.text),
        };
        analyzed.push(AnalyzedEntry {
            id: entry.id,
            date: entry.date,
            result,
        });
    }

    let results: Vec<SentimentResult> = analyzed.iter().map(|e| e.result.clone()).collect();
    JournalReport {
        entries: analyzed,
        summary: summarize(&results),
    }
}

fn render_report_text(report: &JournalReport) -> String {
    let mut out = String::new();
    for (index, entry) in report.entries.iter().enumerate() {
        let heading = match (&entry.id, &entry.date) {
            (Some(id), Some(date)) => format!("#{id} ({date})"),
            (Some(id), None) => format!("#{id}"),
            (None, Some(date)) => date.clone(),
            (None, None) => format!("Entry {}", index + 1),
        };
        out.push_str(&format!("== {heading}\n"));
        out.push_str(&render_result_text(&entry.result));
        out.push('\n');
    }
    out.push_str("== Summary\n");
    out.push_str(&render_summary_text(&report.summary));
    out
}

impl JournalCommand {
    /// Executes the journal command.
    pub async fn execute(self) -> Result<()> {
        let entries = load_entries(&self.path)?;
        info!(count = entries.len(), path = %self.path.display(), "Loaded journal entries");

        let analyzer = if self.deep {
            Some(super::build_analyzer(self.model.as_deref())?)
        } else {
            None
        };
        let context = super::default_context();

        let report = analyze_entries(entries, context.as_ref(), analyzer.as_ref()).await;
        let output = match self.format {
            OutputFormat::Text => render_report_text(&report),
            format => to_structured(&report, format)?,
        };
        println!("{}", output.trim_end());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::test_utils::ScriptedClient;
    use crate::sentiment::AnalysisMethod;

    fn entries() -> Vec<JournalEntry> {
        vec![
            JournalEntry {
                id: Some("a".to_string()),
                date: None,
                text: "Had an amazing day".to_string(),
            },
            JournalEntry {
                id: None,
                date: Some("2024-05-02".to_string()),
                text: "I completely failed the project, total disaster".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn local_report_preserves_order() {
        let report = analyze_entries(entries(), None, None).await;
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].id.as_deref(), Some("a"));
        assert_eq!(report.summary.entry_count, 2);
        assert!(report
            .entries
            .iter()
            .all(|e| e.result.analysis_method == AnalysisMethod::Local));

        let text = render_report_text(&report);
        assert!(text.contains("== #a"));
        assert!(text.contains("== 2024-05-02"));
        assert!(text.contains("== Summary"));
    }

    #[tokio::test]
    async fn deep_report_falls_back_per_entry() {
        let mock = ScriptedClient::new(vec![
            Ok(r#"{"score": 0.9, "label": "very_positive"}"#.to_string()),
            Err(anyhow::anyhow!("connection reset")),
        ]);
        let analyzer = SmartAnalyzer::new(Box::new(mock));

        let report = analyze_entries(entries(), None, Some(&analyzer)).await;
        assert_eq!(report.entries[0].result.analysis_method, AnalysisMethod::Llm);
        assert_eq!(
            report.entries[1].result.analysis_method,
            AnalysisMethod::Local
        );
    }
}
