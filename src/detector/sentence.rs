use crate::config::DetectorWeights;
use crate::detector::engine::{detect_with_weights, round2};
use crate::detector::types::{DetectOptions, SentenceResult, WordResult};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word characters survive, everything else becomes a separator.
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());

/// Analyze a sentence word by word with the default calibrated weights.
pub fn detect_sentence(input: &str, options: &DetectOptions) -> SentenceResult {
    detect_sentence_with_weights(input, options, &DetectorWeights::default())
}

/// Tokenize, run the word pipeline per token and aggregate. A sentence is
/// slop when more than 30% of its words are, or when the mean confidence
/// clears the threshold.
pub fn detect_sentence_with_weights(
    input: &str,
    options: &DetectOptions,
    weights: &DetectorWeights,
) -> SentenceResult {
    let lowered = input.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, " ");
    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() >= 3)
        .collect();

    if tokens.is_empty() {
        return SentenceResult::default();
    }

    let mut words = Vec::with_capacity(tokens.len());
    let mut slop_word_count = 0usize;
    let mut human_slop_count = 0usize;
    let mut score_sum = 0.0;

    for token in &tokens {
        let result = detect_with_weights(token, options, weights);
        let confidence = result.confidence.max(result.gibberish_confidence);

        if result.is_slop {
            slop_word_count += 1;
            if result.is_likely_human {
                human_slop_count += 1;
            }
        }
        score_sum += confidence;

        words.push(WordResult {
            word: token.to_string(),
            is_slop: result.is_slop,
            confidence,
        });
    }

    let total_words = words.len();
    let slop_percentage = slop_word_count as f64 / total_words as f64;
    let avg_score = score_sum / total_words as f64;

    let is_slop = slop_percentage > 0.3 || avg_score > options.threshold;
    let is_likely_human = human_slop_count as f64 > slop_word_count as f64 * 0.5;

    SentenceResult {
        is_slop,
        is_likely_human,
        slop_score: round2(avg_score),
        slop_word_count,
        total_words,
        slop_percentage: round2(slop_percentage),
        words,
    }
}
