//! Local sentiment, emotion and resilience analysis of journal text.
//!
//! Everything in this module is a pure function of its input: the lexicon
//! tables and compiled patterns are immutable statics, so results are
//! reproducible and safe to compute from any thread.

pub mod afinn;
pub mod confidence;
pub mod cultural;
pub mod emotion;
pub mod lexicon;
pub mod resilience;
pub mod types;

use tracing::debug;

pub use afinn::{score_polarity, PolarityScore};
pub use confidence::estimate_confidence;
pub use cultural::apply_cultural_context;
pub use emotion::analyze_emotions;
pub use resilience::detect_resilience;
pub use types::{
    AnalysisMethod, CulturalContext, EmotionBreakdown, ResilienceSignal, SentimentLabel,
    SentimentResult,
};

const VERY_POSITIVE_THRESHOLD: f64 = 0.5;
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;
const VERY_NEGATIVE_THRESHOLD: f64 = -0.5;
/// Minimum smaller/larger word-list ratio for the `mixed` override.
const MIXED_RATIO: f64 = 0.5;

/// Maps a comparative score to a label using fixed thresholds.
pub fn label_for_comparative(comparative: f64) -> SentimentLabel {
    if comparative >= VERY_POSITIVE_THRESHOLD {
        SentimentLabel::VeryPositive
    } else if comparative >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if comparative <= VERY_NEGATIVE_THRESHOLD {
        SentimentLabel::VeryNegative
    } else if comparative <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Returns true when both word lists are present and the smaller is at
/// least half the size of the larger.
pub fn is_mixed(positive_count: usize, negative_count: usize) -> bool {
    if positive_count == 0 || negative_count == 0 {
        return false;
    }
    let smaller = positive_count.min(negative_count) as f64;
    let larger = positive_count.max(negative_count) as f64;
    smaller / larger >= MIXED_RATIO
}

/// Classifies a polarity score. The `mixed` override wins over thresholds.
pub fn classify(polarity: &PolarityScore) -> SentimentLabel {
    if is_mixed(polarity.positive.len(), polarity.negative.len()) {
        SentimentLabel::Mixed
    } else {
        label_for_comparative(polarity.comparative)
    }
}

/// Analyzes text using only the embedded lexicons.
///
/// Total over all input, including empty and whitespace-only text, which
/// yields a neutral, zero-confidence result.
pub fn analyze_local_sentiment(text: &str) -> SentimentResult {
    let polarity = score_polarity(text);
    let label = classify(&polarity);
    let emotions = analyze_emotions(text);
    let resilience = detect_resilience(text);
    let confidence = estimate_confidence(text, polarity.sentiment_word_count());

    debug!(
        tokens = polarity.tokens,
        raw_score = polarity.score,
        comparative = polarity.comparative,
        %label,
        confidence,
        resilience = resilience.indicators.len(),
        "Local sentiment analysis complete"
    );

    SentimentResult {
        score: polarity.comparative.clamp(-1.0, 1.0),
        comparative: polarity.comparative,
        label,
        confidence,
        emotions,
        resilience,
        positive_words: polarity.positive,
        negative_words: polarity.negative,
        cultural_notes: None,
        analysis_method: AnalysisMethod::Local,
    }
}

/// Analyzes text locally and annotates the result with cultural context.
pub fn analyze_with_cultural_context(text: &str, context: &CulturalContext) -> SentimentResult {
    apply_cultural_context(analyze_local_sentiment(text), text, context)
}
