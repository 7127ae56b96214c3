use crate::layouts::KnownLayout;
use serde::Serialize;

/// Per-call knobs for the word-level pipeline.
#[derive(Debug, Clone, Copy)]
pub struct DetectOptions {
    /// Keyboard layout used for the geometric factors.
    pub layout: KnownLayout,
    /// Confidence threshold for classifying slop.
    pub threshold: f64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            layout: KnownLayout::Qwerty,
            threshold: 0.5,
        }
    }
}

/// The twelve normalized scoring factors, each in [0, 1] where 1 reads as
/// "more slop-like". Kept on the result for debugging and transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factors {
    pub proximity: f64,
    pub home_row: f64,
    pub hand_clustering: f64,
    pub vowel_ratio: f64,
    pub entropy: f64,
    pub keyboard_walk: f64,
    pub repetition: f64,
    pub same_finger: f64,
    pub home_row_concentration: f64,
    pub limited_vowels: f64,
    pub unpronounceable: f64,
    pub consonant_clusters: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResult {
    /// Keysmash OR gibberish.
    pub is_slop: bool,
    pub is_keysmash: bool,
    pub is_gibberish: bool,
    /// Whether the slop looks typed by a human rather than generated.
    pub is_likely_human: bool,
    /// Keysmash confidence, rounded to 2 decimals.
    pub confidence: f64,
    /// Gibberish confidence, rounded to 2 decimals.
    pub gibberish_confidence: f64,
    /// Unrounded factors; absent when the input was too short to analyze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<Factors>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub word: String,
    pub is_slop: bool,
    /// max(keysmash confidence, gibberish confidence)
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    pub is_slop: bool,
    pub is_likely_human: bool,
    /// Mean per-word confidence, rounded to 2 decimals.
    pub slop_score: f64,
    pub slop_word_count: usize,
    pub total_words: usize,
    /// Fraction of words judged slop, rounded to 2 decimals.
    pub slop_percentage: f64,
    pub words: Vec<WordResult>,
}
