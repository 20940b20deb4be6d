//! Confidence estimation from polarity density and length.

/// Word count at which the length factor saturates.
const LENGTH_SATURATION: f64 = 50.0;
/// Minimum denominator for the sentiment-word ratio.
const MIN_SENTIMENT_BASIS: f64 = 5.0;
const RATIO_WEIGHT: f64 = 0.6;
const LENGTH_WEIGHT: f64 = 0.4;

/// Estimates confidence in `[0, 1]` for a text with the given number of
/// polarity-bearing words.
///
/// Short texts are capped low no matter how intense their vocabulary: with
/// fewer than 50 words the length term never reaches its full weight.
pub fn estimate_confidence(text: &str, sentiment_word_count: usize) -> f64 {
    let word_count = text.split_whitespace().count() as f64;

    let basis = (word_count * 0.1).max(MIN_SENTIMENT_BASIS);
    let sentiment_ratio = (sentiment_word_count as f64 / basis).min(1.0);
    let length_factor = (word_count / LENGTH_SATURATION).min(1.0);

    RATIO_WEIGHT * sentiment_ratio + LENGTH_WEIGHT * length_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero() {
        assert!(estimate_confidence("", 0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_word() {
        let c = estimate_confidence("ok", 1);
        // 0.6 * (1 / 5) + 0.4 * (1 / 50)
        assert!((c - 0.128).abs() < 1e-12);
    }

    #[test]
    fn long_rich_text_saturates() {
        let text = "great ".repeat(60);
        let c = estimate_confidence(&text, 60);
        assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_basis_grows_with_length() {
        let text = "word ".repeat(100);
        // basis is 10 words, so 5 sentiment words give half the ratio
        let c = estimate_confidence(&text, 5);
        assert!((c - (0.6 * 0.5 + 0.4)).abs() < 1e-12);
    }

    #[test]
    fn non_decreasing_in_length_up_to_saturation() {
        let mut previous = 0.0;
        for n in 1..=50 {
            let text = "word ".repeat(n);
            let c = estimate_confidence(&text, 3);
            assert!(c >= previous, "confidence dropped at {n} words");
            previous = c;
        }
    }
}
