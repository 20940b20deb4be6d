//! Static word lists and patterns used by the analyzers.

use std::sync::LazyLock;

use regex::Regex;

/// Trigger words per emotion category, in `EmotionBreakdown::NAMES` order.
pub const EMOTION_WORDS: [(&str, &[&str]); 8] = [
    (
        "joy",
        &[
            "happy",
            "joy",
            "excited",
            "thrilled",
            "delighted",
            "glad",
            "wonderful",
            "elated",
        ],
    ),
    (
        "pride",
        &[
            "proud",
            "accomplished",
            "achieved",
            "succeeded",
            "nailed",
            "earned",
            "mastered",
        ],
    ),
    (
        "hope",
        &[
            "hope",
            "optimistic",
            "looking forward",
            "believe",
            "possibility",
            "can't wait",
        ],
    ),
    (
        "gratitude",
        &[
            "grateful",
            "thankful",
            "appreciate",
            "thanks",
            "blessed",
            "fortunate",
        ],
    ),
    (
        "frustration",
        &[
            "frustrated",
            "annoyed",
            "irritated",
            "stuck",
            "blocked",
            "fed up",
            "angry",
        ],
    ),
    (
        "anxiety",
        &[
            "anxious",
            "worried",
            "nervous",
            "stressed",
            "overwhelmed",
            "scared",
            "afraid",
            "uneasy",
        ],
    ),
    (
        "sadness",
        &[
            "sad",
            "disappointed",
            "depressed",
            "upset",
            "hurt",
            "lonely",
            "discouraged",
            "heartbroken",
        ],
    ),
    (
        "determination",
        &[
            "determined",
            "committed",
            "focused",
            "persist",
            "keep going",
            "won't give up",
            "driven",
            "resolve",
        ],
    ),
];

/// Growth-framing phrases, tested in order. Each match contributes its
/// literal text as a resilience indicator.
const RESILIENCE_PATTERN_SOURCES: [&str; 15] = [
    r"(?i)\blearn(?:ed|t|ing)?\s+(?:\w+\s+){0,3}?from\b",
    r"(?i)\bover(?:came|come|coming)\b",
    r"(?i)\bsilver\s+lining\b",
    r"(?i)\bbounc(?:ed|e|ing)\s+back\b",
    r"(?i)\bgr(?:ew|ow|owing)\s+from\b",
    r"(?i)\b(?:came\s+out|grew|growing|become|became|getting|feel)\s+stronger\b",
    r"(?i)\blessons?\s+learned\b",
    r"(?i)\bnext\s+time\b",
    r"(?i)\bturned\s+(?:it\s+|things\s+)?around\b",
    r"(?i)\bmade\s+the\s+best\s+of\b",
    r"(?i)\b(?:an?\s+)?opportunity\s+to\s+(?:learn|grow|improve)\b",
    r"(?i)\bpush(?:ed)?\s+through\b",
    r"(?i)\b(?:didn't|did\s+not|never|won't|will\s+not)\s+give\s+up\b|\bnever\s+gave\s+up\b",
    r"(?i)\b(?:kept|keep|keeping)\s+going\b",
    r"(?i)\bin\s+hindsight\b",
];

/// Compiled resilience patterns.
pub static RESILIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RESILIENCE_PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(source).unwrap())
        .collect()
});

/// Plain growth-mindset keywords, matched as whole words.
pub const GROWTH_KEYWORDS: [&str; 11] = [
    "yet",
    "learning",
    "growing",
    "progress",
    "improve",
    "improving",
    "better",
    "stronger",
    "challenge",
    "practice",
    "effort",
];

/// Compiled whole-word matchers for [`GROWTH_KEYWORDS`].
pub static GROWTH_KEYWORD_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    GROWTH_KEYWORDS
        .iter()
        .map(|kw| (*kw, Regex::new(&format!(r"(?i)\b{kw}\b")).unwrap()))
        .collect()
});

/// Tokens that flip the polarity of the token that follows them.
pub const NEGATORS: [&str; 16] = [
    "not", "no", "never", "don't", "dont", "doesn't", "didn't", "isn't", "wasn't", "aren't",
    "weren't", "can't", "cannot", "won't", "shouldn't", "couldn't",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::EmotionBreakdown;

    #[test]
    fn emotion_table_matches_breakdown_order() {
        let names: Vec<&str> = EMOTION_WORDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, EmotionBreakdown::NAMES);
    }

    #[test]
    fn emotion_lists_are_lowercase_and_sized() {
        for (name, words) in EMOTION_WORDS {
            assert!(
                (3..=10).contains(&words.len()),
                "{name} has {} words",
                words.len()
            );
            for word in words {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }

    #[test]
    fn resilience_patterns_compile() {
        assert_eq!(RESILIENCE_PATTERNS.len(), 15);
        assert_eq!(GROWTH_KEYWORD_PATTERNS.len(), GROWTH_KEYWORDS.len());
    }

    #[test]
    fn learned_from_allows_short_gap() {
        let pattern = &RESILIENCE_PATTERNS[0];
        assert!(pattern.is_match("I learned so much from it"));
        assert!(pattern.is_match("Learned from my mistakes"));
        assert!(!pattern.is_match("I learned that nothing ever comes easily from anyone"));
    }

    #[test]
    fn keyword_matchers_respect_word_boundaries() {
        let (_, yet) = GROWTH_KEYWORD_PATTERNS
            .iter()
            .find(|(kw, _)| *kw == "yet")
            .unwrap();
        assert!(yet.is_match("not there yet"));
        assert!(!yet.is_match("a yeti appeared"));
    }
}
