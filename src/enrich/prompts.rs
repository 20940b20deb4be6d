//! Prompt templates for language-model sentiment assessment.

use crate::sentiment::{CulturalContext, SentimentResult};

/// System prompt describing the assessment task and the reply format.
pub const SYSTEM_PROMPT: &str = r#"You are a supportive career coach reading a private journal entry in which the author records accomplishments and setbacks at work. Assess the emotional tone of the entry with care for how people from different backgrounds describe their own success.

Reply with a single JSON object and nothing else. Use exactly these keys:

{
  "score": <number from -1 (very negative) to 1 (very positive)>,
  "label": "very_positive" | "positive" | "neutral" | "negative" | "very_negative" | "mixed",
  "confidence": <number from 0 to 1>,
  "emotions": {
    "joy": <0-1>, "pride": <0-1>, "hope": <0-1>, "gratitude": <0-1>,
    "frustration": <0-1>, "anxiety": <0-1>, "sadness": <0-1>, "determination": <0-1>
  },
  "resilienceIndicators": [<short phrases from the entry that show growth or reframing>],
  "culturalNotes": <one or two sentences on how the author's background may shape this framing, or null>
}

Use "mixed" when the entry holds real wins and real difficulties in similar measure. Quote resilience phrases as they appear in the entry."#;

/// Builds the user prompt for a journal entry.
///
/// The local result is included as a starting point so the model can correct
/// rather than redo the lexicon pass.
pub fn generate_user_prompt(
    text: &str,
    local: &SentimentResult,
    context: Option<&CulturalContext>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("Journal entry:\n\"\"\"\n");
    prompt.push_str(text.trim());
    prompt.push_str("\n\"\"\"\n\n");

    prompt.push_str(&format!(
        "A word-list pass rated this entry {} (score {:.2}). Positive words: {}. Negative words: {}.\n",
        local.label,
        local.score,
        join_or_none(&local.positive_words),
        join_or_none(&local.negative_words),
    ));

    if !local.resilience.indicators.is_empty() {
        prompt.push_str(&format!(
            "Growth language already spotted: {}.\n",
            local.resilience.indicators.join(", ")
        ));
    }

    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str("\nAuthor context:\n");
        if let Some(ethnicity) = &context.ethnicity {
            prompt.push_str(&format!("- Ethnicity: {ethnicity}\n"));
        }
        if let Some(profession) = &context.profession {
            prompt.push_str(&format!("- Profession: {profession}\n"));
        }
        if context.first_gen() {
            prompt.push_str("- First-generation professional\n");
        }
        if context.collectivist() {
            prompt.push_str("- Collectivist cultural orientation\n");
        }
    }

    prompt.push_str("\nReturn only the JSON object.");
    prompt
}

fn join_or_none(words: &[String]) -> String {
    if words.is_empty() {
        "none".to_string()
    } else {
        words.join(", ")
    }
}
