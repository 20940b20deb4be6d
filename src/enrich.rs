//! Optional language-model enrichment of local sentiment results.
//!
//! The local lexicon pass always runs first. The model is then asked for
//! its own assessment, which is merged over the local result. Any failure
//! along the way (transport, HTTP status, unreadable reply) is logged and
//! the local result is returned unchanged.

pub mod prompts;

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::ai::{AiClient, AiClientMetadata, AiError};
use crate::sentiment::{
    analyze_local_sentiment, analyze_with_cultural_context, AnalysisMethod, CulturalContext,
    ResilienceSignal, SentimentLabel, SentimentResult,
};

/// A model's assessment of a journal entry, as parsed from its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmAssessment {
    /// Polarity in `[-1, 1]`.
    pub score: f64,
    /// Discrete label.
    pub label: SentimentLabel,
    /// Self-reported confidence in `[0, 1]`.
    pub confidence: Option<f64>,
    /// Emotion intensities keyed by category name.
    pub emotions: HashMap<String, f64>,
    /// Growth phrases quoted from the entry.
    pub resilience_indicators: Vec<String>,
    /// Background-aware framing notes.
    pub cultural_notes: Option<String>,
}

/// Wire form of the model's JSON reply.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssessment {
    score: f64,
    label: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    emotions: HashMap<String, f64>,
    #[serde(default)]
    resilience_indicators: Vec<String>,
    #[serde(default)]
    cultural_notes: Option<String>,
}

/// Extracts the JSON object from a model reply, tolerating markdown fences
/// and leading or trailing prose.
fn extract_json(content: &str) -> &str {
    let fenced = if content.contains("```json") {
        content
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
    } else if content.contains("```") {
        content.split("```").nth(1)
    } else {
        None
    };
    let candidate = fenced.unwrap_or(content).trim();

    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if start < end => &candidate[start..=end],
        _ => candidate,
    }
}

/// Parses a model reply into an assessment.
pub fn parse_assessment(content: &str) -> Result<LlmAssessment> {
    let json = extract_json(content);
    let raw: RawAssessment = serde_json::from_str(json).map_err(|e| {
        debug!(raw_content = %content, "Model reply is not a valid assessment");
        AiError::AssessmentParsingFailed(format!("JSON parsing error: {e}"))
    })?;

    if !raw.score.is_finite() {
        return Err(AiError::AssessmentParsingFailed("score is not a finite number".to_string()).into());
    }
    let label: SentimentLabel = raw
        .label
        .parse()
        .map_err(AiError::AssessmentParsingFailed)?;

    Ok(LlmAssessment {
        score: raw.score.clamp(-1.0, 1.0),
        label,
        confidence: raw
            .confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0)),
        emotions: raw
            .emotions
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(k, v)| (k, v.clamp(0.0, 1.0)))
            .collect(),
        resilience_indicators: raw
            .resilience_indicators
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        cultural_notes: raw
            .cultural_notes
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

/// Merges a model assessment over a local result.
///
/// The model's score and label replace the local ones; emotions it names
/// replace the local values; its indicators are appended without
/// duplicates; confidence is the larger of the two. Word lists and the
/// comparative score stay as the lexicon computed them.
pub fn merge_assessment(mut local: SentimentResult, assessment: LlmAssessment) -> SentimentResult {
    local.score = assessment.score;
    local.label = assessment.label;
    if let Some(confidence) = assessment.confidence {
        local.confidence = local.confidence.max(confidence);
    }

    for (name, value) in assessment.emotions {
        match local.emotions.get_mut(&name) {
            Some(slot) => *slot = value,
            None => debug!(emotion = %name, "Ignoring unknown emotion from model"),
        }
    }

    let mut indicators = std::mem::take(&mut local.resilience.indicators);
    for indicator in assessment.resilience_indicators {
        let seen = indicators
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&indicator));
        if !seen {
            indicators.push(indicator);
        }
    }
    local.resilience = ResilienceSignal::from_indicators(indicators);

    if let Some(notes) = assessment.cultural_notes {
        local.push_note(&notes);
    }

    local.analysis_method = AnalysisMethod::Llm;
    local
}

/// Sentiment analyzer that enriches local results with a language model.
pub struct SmartAnalyzer {
    client: Box<dyn AiClient>,
}

impl SmartAnalyzer {
    /// Creates an analyzer backed by the given client.
    pub fn new(client: Box<dyn AiClient>) -> Self {
        Self { client }
    }

    /// Returns metadata about the underlying client.
    pub fn metadata(&self) -> AiClientMetadata {
        self.client.get_metadata()
    }

    /// Asks the model for an assessment of `text`, given the local result.
    pub async fn assess(
        &self,
        text: &str,
        local: &SentimentResult,
        context: Option<&CulturalContext>,
    ) -> Result<LlmAssessment> {
        let user_prompt = prompts::generate_user_prompt(text, local, context);
        let reply = self
            .client
            .send_request(prompts::SYSTEM_PROMPT, &user_prompt)
            .await?;
        parse_assessment(&reply)
    }

    /// Analyzes `text` locally, then enriches the result with the model.
    ///
    /// Never fails: when enrichment is unavailable the local result (with
    /// cultural annotation when a context is given) is returned.
    pub async fn analyze(&self, text: &str, context: Option<&CulturalContext>) -> SentimentResult {
        let local = match context {
            Some(context) => analyze_with_cultural_context(text, context),
            None => analyze_local_sentiment(text),
        };

        match self.assess(text, &local, context).await {
            Ok(assessment) => {
                info!(
                    local_label = %local.label,
                    model_label = %assessment.label,
                    "Merged model assessment"
                );
                merge_assessment(local, assessment)
            }
            Err(e) => {
                let meta = self.metadata();
                warn!(
                    provider = %meta.provider,
                    model = %meta.model,
                    error = %e,
                    "Deep analysis failed, falling back to local result"
                );
                local
            }
        }
    }
}
