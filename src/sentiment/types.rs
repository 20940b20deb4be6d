//! Result and input types for sentiment analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete sentiment label derived from the comparative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    /// Comparative score of 0.5 or above.
    VeryPositive,
    /// Comparative score of 0.1 or above.
    Positive,
    /// Between the positive and negative thresholds.
    Neutral,
    /// Comparative score of -0.1 or below.
    Negative,
    /// Comparative score of -0.5 or below.
    VeryNegative,
    /// Balanced positive and negative vocabulary.
    Mixed,
}

impl SentimentLabel {
    /// Returns the wire name of the label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryPositive => "very_positive",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::VeryNegative => "very_negative",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "very_positive" => Ok(Self::VeryPositive),
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            "very_negative" => Ok(Self::VeryNegative),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// How a result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMethod {
    /// Lexicon scoring only.
    #[default]
    Local,
    /// Lexicon scoring annotated with cultural context.
    Hybrid,
    /// Lexicon scoring merged with a language-model assessment.
    Llm,
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::Llm => write!(f, "llm"),
        }
    }
}

/// Per-category emotion intensities, each in `[0, 1]`.
///
/// Categories are scored independently and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionBreakdown {
    /// Happiness and delight.
    pub joy: f64,
    /// Satisfaction in an accomplishment.
    pub pride: f64,
    /// Forward-looking optimism.
    pub hope: f64,
    /// Thankfulness.
    pub gratitude: f64,
    /// Being blocked or annoyed.
    pub frustration: f64,
    /// Worry and stress.
    pub anxiety: f64,
    /// Disappointment and low mood.
    pub sadness: f64,
    /// Resolve to keep going.
    pub determination: f64,
}

impl EmotionBreakdown {
    /// Category names in declaration order.
    pub const NAMES: [&'static str; 8] = [
        "joy",
        "pride",
        "hope",
        "gratitude",
        "frustration",
        "anxiety",
        "sadness",
        "determination",
    ];

    /// Returns `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let values = [
            self.joy,
            self.pride,
            self.hope,
            self.gratitude,
            self.frustration,
            self.anxiety,
            self.sadness,
            self.determination,
        ];
        Self::NAMES.into_iter().zip(values)
    }

    /// Returns a mutable reference to the named category.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name.to_lowercase().as_str() {
            "joy" => Some(&mut self.joy),
            "pride" => Some(&mut self.pride),
            "hope" => Some(&mut self.hope),
            "gratitude" => Some(&mut self.gratitude),
            "frustration" => Some(&mut self.frustration),
            "anxiety" => Some(&mut self.anxiety),
            "sadness" => Some(&mut self.sadness),
            "determination" => Some(&mut self.determination),
            _ => None,
        }
    }

    /// Returns the strongest non-zero category, earliest wins ties.
    pub fn dominant(&self) -> Option<(&'static str, f64)> {
        self.iter()
            .filter(|(_, v)| *v > 0.0)
            .fold(None, |best, (name, value)| match best {
                Some((_, b)) if b >= value => best,
                _ => Some((name, value)),
            })
    }
}

/// Growth-oriented reframing detected in a text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResilienceSignal {
    /// True iff at least one indicator was found.
    pub detected: bool,
    /// `min(1, indicators / 5)`.
    pub score: f64,
    /// Matched phrases and keywords, in detection order.
    pub indicators: Vec<String>,
}

impl ResilienceSignal {
    /// Number of indicators that saturates the score.
    pub const SATURATION: usize = 5;

    /// Builds a signal whose `detected` and `score` agree with `indicators`.
    pub fn from_indicators(indicators: Vec<String>) -> Self {
        let score = (indicators.len() as f64 / Self::SATURATION as f64).min(1.0);
        Self {
            detected: !indicators.is_empty(),
            score,
            indicators,
        }
    }
}

/// Caller-declared context used to annotate a result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalContext {
    /// Self-described ethnicity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    /// First-generation professional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_gen: Option<bool>,
    /// Prefers collective over individual framing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collectivist_orientation: Option<bool>,
    /// Profession or field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

impl CulturalContext {
    /// Returns whether the first-generation flag is set.
    pub fn first_gen(&self) -> bool {
        self.is_first_gen.unwrap_or(false)
    }

    /// Returns whether the collectivist flag is set.
    pub fn collectivist(&self) -> bool {
        self.collectivist_orientation.unwrap_or(false)
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.ethnicity.is_none()
            && self.is_first_gen.is_none()
            && self.collectivist_orientation.is_none()
            && self.profession.is_none()
    }
}

/// Full analysis of a single journal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    /// Normalized polarity in `[-1, 1]`.
    pub score: f64,
    /// Raw polarity divided by token count.
    pub comparative: f64,
    /// Discrete label.
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Emotion intensities.
    pub emotions: EmotionBreakdown,
    /// Resilience signal.
    pub resilience: ResilienceSignal,
    /// Tokens that contributed positive polarity.
    pub positive_words: Vec<String>,
    /// Tokens that contributed negative polarity.
    pub negative_words: Vec<String>,
    /// Notes added by cultural or model annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_notes: Option<String>,
    /// How the result was produced.
    pub analysis_method: AnalysisMethod,
}

impl SentimentResult {
    /// Appends a note, separating it from existing notes with a space.
    pub fn push_note(&mut self, note: &str) {
        match &mut self.cultural_notes {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(note);
            }
            _ => self.cultural_notes = Some(note.to_string()),
        }
    }
}
