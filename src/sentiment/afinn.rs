//! AFINN-style polarity lexicon and the base scorer built on it.
//!
//! Each entry maps a lowercase word to an integer valence in `[-5, 5]`.
//! A token directly preceded by a negator contributes the opposite valence.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::lexicon::NEGATORS;

#[rustfmt::skip]
const POLARITY_ENTRIES: &[(&str, i32)] = &[
    // positive
    ("abilities", 2), ("ability", 2), ("accept", 1), ("accepted", 1),
    ("accomplish", 2), ("accomplished", 2), ("accomplishment", 2), ("accomplishments", 2),
    ("achieve", 2), ("achieved", 2), ("achievement", 2), ("achievements", 2),
    ("admire", 3), ("admired", 3), ("adore", 3), ("advantage", 2),
    ("amazed", 2), ("amazing", 4), ("appreciate", 2), ("appreciated", 2),
    ("appreciation", 2), ("approval", 2), ("approved", 2), ("awesome", 4),
    ("beautiful", 3), ("benefit", 2), ("best", 3), ("better", 2),
    ("bless", 2), ("blessed", 3), ("bliss", 3), ("boost", 1),
    ("brave", 2), ("breakthrough", 3), ("brilliant", 4), ("calm", 2),
    ("celebrate", 3), ("celebrated", 3), ("celebration", 3), ("champion", 2),
    ("cheer", 2), ("cheerful", 2), ("clarity", 2), ("clever", 2),
    ("comfort", 2), ("comfortable", 2), ("competent", 2), ("confidence", 2),
    ("confident", 2), ("congrats", 2), ("congratulations", 2), ("cool", 1),
    ("courage", 2), ("courageous", 2), ("creative", 2), ("curious", 1),
    ("delight", 3), ("delighted", 3), ("determined", 2), ("eager", 2),
    ("ease", 2), ("easy", 1), ("effective", 2), ("efficient", 2),
    ("empower", 2), ("empowered", 2), ("encourage", 2), ("encouraged", 2),
    ("energetic", 2), ("enjoy", 2), ("enjoyed", 2), ("enthusiastic", 3),
    ("excellent", 3), ("excited", 3), ("exciting", 3), ("fabulous", 4),
    ("fair", 2), ("fantastic", 4), ("favorite", 2), ("fine", 2),
    ("fortunate", 2), ("free", 1), ("fresh", 1), ("friendly", 2),
    ("fulfilled", 2), ("fun", 4), ("glad", 3), ("good", 3),
    ("grand", 3), ("grateful", 3), ("great", 3), ("growth", 2),
    ("happiness", 3), ("happy", 3), ("helpful", 2), ("hero", 2),
    ("honest", 2), ("hope", 2), ("hopeful", 2), ("impressed", 3),
    ("impressive", 3), ("improve", 2), ("improved", 2), ("improvement", 2),
    ("improving", 2), ("innovative", 2), ("inspire", 2), ("inspired", 2),
    ("inspiring", 3), ("joy", 3), ("joyful", 3), ("kind", 2),
    ("laugh", 1), ("like", 2), ("liked", 2), ("love", 3),
    ("loved", 3), ("lovely", 3), ("lucky", 3), ("motivated", 2),
    ("motivating", 2), ("nice", 3), ("ok", 2), ("okay", 2),
    ("optimistic", 2), ("outstanding", 5), ("passion", 1), ("peace", 2),
    ("perfect", 3), ("pleased", 3), ("positive", 2), ("powerful", 2),
    ("praise", 3), ("praised", 3), ("productive", 2), ("progress", 2),
    ("promoted", 1), ("proud", 2), ("recognition", 2), ("recognized", 2),
    ("relief", 1), ("relieved", 2), ("resolve", 2), ("respect", 2),
    ("rewarding", 2), ("satisfied", 2), ("smart", 1), ("smile", 2),
    ("solid", 2), ("solved", 1), ("strength", 2), ("strong", 2),
    ("stronger", 2), ("succeed", 3), ("succeeded", 3), ("success", 2),
    ("successful", 3), ("superb", 5), ("support", 2), ("supported", 2),
    ("supportive", 2), ("terrific", 4), ("thank", 2), ("thankful", 2),
    ("thanks", 2), ("thrilled", 5), ("triumph", 4), ("trust", 1),
    ("useful", 2), ("valuable", 2), ("victory", 3), ("win", 4),
    ("winner", 4), ("winning", 4), ("wins", 4), ("won", 3),
    ("wonderful", 4), ("worth", 2), ("wow", 4), ("yay", 2),
    // negative
    ("abandon", -2), ("abandoned", -2), ("afraid", -2), ("aggravated", -2),
    ("alone", -2), ("anger", -3), ("angry", -3), ("annoyed", -2),
    ("annoying", -2), ("anxiety", -2), ("anxious", -2), ("ashamed", -2),
    ("awful", -3), ("awkward", -2), ("bad", -3), ("betrayed", -3),
    ("bitter", -2), ("blame", -2), ("blamed", -2), ("blocked", -1),
    ("bored", -2), ("boring", -3), ("broke", -1), ("broken", -1),
    ("burden", -2), ("burnout", -2), ("chaos", -2), ("cheated", -3),
    ("clueless", -2), ("collapse", -2), ("complain", -2), ("confused", -2),
    ("confusing", -2), ("crash", -2), ("crisis", -3), ("criticism", -2),
    ("criticized", -2), ("cry", -1), ("crying", -2), ("damage", -3),
    ("danger", -2), ("defeated", -2), ("depressed", -2), ("depressing", -2),
    ("despair", -3), ("desperate", -3), ("destroyed", -3), ("difficult", -1),
    ("disappointed", -2), ("disappointing", -2), ("disappointment", -2), ("disaster", -2),
    ("discouraged", -2), ("disgusted", -3), ("dislike", -2), ("doubt", -1),
    ("doubts", -1), ("dread", -2), ("dumb", -3), ("embarrassed", -2),
    ("embarrassing", -2), ("exhausted", -2), ("fail", -2), ("failed", -2),
    ("failing", -2), ("fails", -2), ("failure", -2), ("fear", -2),
    ("fearful", -2), ("fired", -2), ("fool", -2), ("frustrated", -2),
    ("frustrating", -2), ("frustration", -2), ("furious", -3), ("guilty", -3),
    ("hard", -1), ("hate", -3), ("hated", -3), ("helpless", -2),
    ("hopeless", -2), ("horrible", -3), ("hurt", -2), ("ignored", -2),
    ("inadequate", -2), ("incompetent", -2), ("insecure", -2), ("irritated", -3),
    ("isolated", -1), ("jealous", -2), ("lonely", -2), ("lose", -3),
    ("losing", -3), ("loss", -3), ("lost", -3), ("mad", -3),
    ("mess", -2), ("messed", -2), ("miserable", -3), ("mistake", -2),
    ("mistakes", -2), ("nervous", -2), ("overwhelmed", -2), ("pain", -2),
    ("painful", -2), ("panic", -3), ("pathetic", -2), ("pressure", -1),
    ("problem", -2), ("problems", -2), ("regret", -2), ("rejected", -1),
    ("rejection", -2), ("sad", -2), ("scared", -2), ("shame", -2),
    ("sick", -2), ("sorry", -1), ("stress", -1), ("stressed", -2),
    ("struggle", -2), ("struggled", -2), ("struggling", -2), ("stuck", -2),
    ("stupid", -2), ("terrible", -3), ("tired", -2), ("ugly", -3),
    ("unfair", -2), ("unhappy", -2), ("upset", -2), ("useless", -2),
    ("weak", -2), ("worried", -3), ("worry", -3), ("worse", -3),
    ("worst", -3), ("worthless", -2), ("wrong", -2),
];

static POLARITY: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| POLARITY_ENTRIES.iter().copied().collect());

/// Raw output of the lexicon scorer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolarityScore {
    /// Sum of token valences.
    pub score: i32,
    /// Number of tokens in the text.
    pub tokens: usize,
    /// `score / tokens`, or 0 for token-free text.
    pub comparative: f64,
    /// Tokens with positive contribution, in text order.
    pub positive: Vec<String>,
    /// Tokens with negative contribution, in text order.
    pub negative: Vec<String>,
}

impl PolarityScore {
    /// Number of tokens that carried any polarity.
    pub fn sentiment_word_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }
}

/// Returns the valence of a single lowercase word, if it is in the lexicon.
pub fn valence(word: &str) -> Option<i32> {
    POLARITY.get(word).copied()
}

/// Splits text into lowercase tokens, keeping apostrophes and hyphens
/// inside words.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => '\'',
            c if c.is_alphanumeric() || c == '\'' || c == '-' => c,
            _ => ' ',
        })
        .collect();

    normalized
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Scores text against the polarity lexicon.
pub fn score_polarity(text: &str) -> PolarityScore {
    let tokens = tokenize(text);
    let mut result = PolarityScore {
        tokens: tokens.len(),
        ..PolarityScore::default()
    };

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut value) = valence(token) else {
            continue;
        };
        if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
            value = -value;
        }
        result.score += value;
        if value > 0 {
            result.positive.push(token.clone());
        } else if value < 0 {
            result.negative.push(token.clone());
        }
    }

    if result.tokens > 0 {
        result.comparative = f64::from(result.score) / result.tokens as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_has_no_duplicates() {
        assert_eq!(POLARITY.len(), POLARITY_ENTRIES.len());
    }

    #[test]
    fn valences_are_bounded_and_nonzero() {
        for (word, value) in POLARITY_ENTRIES {
            assert!(
                (-5..=5).contains(value) && *value != 0,
                "{word} has valence {value}"
            );
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Great job, team! Don't stop -- really."),
            vec!["great", "job", "team", "don't", "stop", "really"]
        );
    }

    #[test]
    fn tokenize_normalizes_curly_apostrophes() {
        assert_eq!(tokenize("I didn\u{2019}t"), vec!["i", "didn't"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn score_sums_valences() {
        let score = score_polarity("I completely failed the project, total disaster");
        assert_eq!(score.score, -4);
        assert_eq!(score.tokens, 7);
        assert_eq!(score.negative, vec!["failed", "disaster"]);
        assert!(score.positive.is_empty());
        assert!((score.comparative - (-4.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn negation_flips_valence() {
        let score = score_polarity("this is not good");
        assert_eq!(score.score, -3);
        assert_eq!(score.negative, vec!["good"]);

        let score = score_polarity("no problem at all");
        assert_eq!(score.score, 2);
        assert_eq!(score.positive, vec!["problem"]);
    }

    #[test]
    fn empty_text_has_zero_comparative() {
        let score = score_polarity("");
        assert_eq!(score.tokens, 0);
        assert!(score.comparative.abs() < f64::EPSILON);
        assert_eq!(score.sentiment_word_count(), 0);
    }

    #[test]
    fn repeated_words_are_kept() {
        let score = score_polarity("happy happy day");
        assert_eq!(score.positive, vec!["happy", "happy"]);
        assert_eq!(score.score, 6);
    }
}
