//! Emotion category scoring.

use super::lexicon::EMOTION_WORDS;
use super::types::EmotionBreakdown;

/// Number of matched words that saturates a category at 1.0.
const SATURATION_HITS: f64 = 3.0;

/// Scores each emotion category by counting trigger words that occur in
/// the text (case-insensitive substring match).
pub fn analyze_emotions(text: &str) -> EmotionBreakdown {
    let lower = text.to_lowercase();
    let mut breakdown = EmotionBreakdown::default();

    for (name, words) in EMOTION_WORDS {
        let hits = words.iter().filter(|w| lower.contains(**w)).count();
        if let Some(slot) = breakdown.get_mut(name) {
            *slot = (hits as f64 / SATURATION_HITS).min(1.0);
        }
    }

    breakdown
}
