//! Annotation of results with caller-declared cultural context.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{AnalysisMethod, CulturalContext, SentimentResult};

static WE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bwe\b").unwrap());
static I_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bi\b").unwrap());
static MINIMIZING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:lucky|just)\b").unwrap());

/// Boost applied to a positive score under collective framing.
const COLLECTIVE_BOOST: f64 = 1.1;

/// Note added when collective language dominates.
pub const COLLECTIVE_NOTE: &str = "Your reflection centers the team (\"we\" over \"I\"). \
    In collectivist cultures this is a common way to describe achievement, so the \
    positive impact has been weighted accordingly. Your individual contribution still counts.";

/// Note added when a first-generation professional downplays success.
pub const FIRST_GEN_NOTE: &str = "Words like \"lucky\" or \"just\" can minimize real effort, \
    a pattern common among first-generation professionals. Consider naming the skills \
    and work that made this happen.";

/// Annotates a local result with context-specific notes.
///
/// Only `score`, `cultural_notes` and `analysis_method` may change; the label,
/// emotions and resilience sub-results are left as computed.
pub fn apply_cultural_context(
    mut result: SentimentResult,
    text: &str,
    context: &CulturalContext,
) -> SentimentResult {
    let mut annotated = false;

    if context.collectivist() {
        let we_count = WE_PATTERN.find_iter(text).count();
        let i_count = I_PATTERN.find_iter(text).count();
        if we_count > i_count {
            debug!(we_count, i_count, "Collective framing detected");
            result.push_note(COLLECTIVE_NOTE);
            if result.score > 0.0 {
                result.score = (result.score * COLLECTIVE_BOOST).min(1.0);
            }
            annotated = true;
        }
    }

    if context.first_gen() && MINIMIZING_PATTERN.is_match(text) {
        debug!("Minimizing language detected for first-generation context");
        result.push_note(FIRST_GEN_NOTE);
        annotated = true;
    }

    if annotated {
        result.analysis_method = AnalysisMethod::Hybrid;
    }
    result
}
