//! Detection of growth-oriented reframing language.

use tracing::trace;

use super::lexicon::{GROWTH_KEYWORD_PATTERNS, RESILIENCE_PATTERNS};
use super::types::ResilienceSignal;

/// Collects resilience indicators from the text.
///
/// Phrase patterns are tested first, in order, each contributing the first
/// literal substring it matched. Growth keywords follow, skipping any that
/// an earlier indicator already contains.
pub fn detect_resilience(text: &str) -> ResilienceSignal {
    let mut indicators: Vec<String> = RESILIENCE_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
        .collect();

    for (keyword, pattern) in GROWTH_KEYWORD_PATTERNS.iter() {
        if !pattern.is_match(text) {
            continue;
        }
        let already_captured = indicators
            .iter()
            .any(|indicator| indicator.to_lowercase().contains(keyword));
        if !already_captured {
            indicators.push((*keyword).to_string());
        }
    }

    trace!(count = indicators.len(), "Resilience indicators collected");
    ResilienceSignal::from_indicators(indicators)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_growth_language() {
        let signal = detect_resilience("I completely failed the project, total disaster");
        assert!(!signal.detected);
        assert!(signal.indicators.is_empty());
        assert!(signal.score.abs() < f64::EPSILON);
    }

    #[test]
    fn learned_from_and_keywords() {
        let signal = detect_resilience(
            "I struggled but learned so much from this challenge, growing stronger",
        );
        assert!(signal.detected);
        assert_eq!(signal.indicators[0], "learned so much from");
        assert!(signal.indicators.contains(&"growing stronger".to_string()));
        assert!(signal.indicators.contains(&"challenge".to_string()));
        // Both words are inside the "growing stronger" phrase already.
        assert!(!signal.indicators.contains(&"growing".to_string()));
        assert!(!signal.indicators.contains(&"stronger".to_string()));
        assert!((signal.score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn phrase_keeps_original_case() {
        let signal = detect_resilience("Silver Lining: the demo still worked");
        assert_eq!(signal.indicators, vec!["Silver Lining"]);
    }

    #[test]
    fn phrases_precede_keywords() {
        let signal = detect_resilience("Not there yet, but I overcame the worst part");
        assert_eq!(signal.indicators, vec!["overcame", "yet"]);
    }

    #[test]
    fn score_saturates_at_five() {
        let signal = detect_resilience(
            "I overcame it, bounced back, found the silver lining, kept going, \
             and next time I will practice with more effort",
        );
        assert!(signal.indicators.len() >= 5);
        assert!((signal.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn keyword_needs_whole_word() {
        let signal = detect_resilience("The yeti was betterment-free");
        assert!(!signal.indicators.contains(&"yet".to_string()));
    }
}
