use crate::config::DetectorWeights;
use crate::detector::types::{DetectOptions, DetectResult, Factors};
use crate::detector::{features, normalize};
use crate::layouts::get_layout;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify a single word with the default calibrated weights.
pub fn detect(input: &str, options: &DetectOptions) -> DetectResult {
    detect_with_weights(input, options, &DetectorWeights::default())
}

/// Classify a single word. Pure: same input, options and weights always
/// produce the same result.
pub fn detect_with_weights(
    input: &str,
    options: &DetectOptions,
    weights: &DetectorWeights,
) -> DetectResult {
    let layout = get_layout(options.layout);

    if input.chars().count() < 2 {
        return DetectResult::default();
    }

    // Emails are scored on their local part; the domain contributes a
    // separate suspicion score unless it belongs to a common provider.
    let mut text = input.to_string();
    let mut is_email_input = false;
    let mut domain_score = 0.0;

    if features::is_email(input) {
        is_email_input = true;

        let domain = features::email_domain(input);
        if !features::is_common_domain(domain) && domain.chars().count() >= 3 {
            domain_score = features::home_row_concentration(domain)
                .max(features::keyboard_walk_score(domain));
        }

        text = features::email_local_part(input)
            .chars()
            .filter(|c| !matches!(c, '.' | '_' | '-'))
            .collect();
    }

    let text_len = text.chars().count();
    if text_len < 3 {
        return DetectResult::default();
    }

    let factors = Factors {
        proximity: normalize::proximity(features::average_key_distance(&text, layout)),
        home_row: normalize::home_row(features::home_row_percentage(&text, layout)),
        hand_clustering: normalize::hand_clustering(features::hand_clustering_score(&text, layout)),
        vowel_ratio: normalize::vowel_deviation(features::vowel_ratio(&text)),
        entropy: normalize::entropy(features::character_entropy(&text), text_len),
        keyboard_walk: features::keyboard_walk_score(&text),
        repetition: features::repetition_score(&text),
        same_finger: features::same_finger_ratio(&text, layout),
        home_row_concentration: normalize::home_row_concentration(
            features::home_row_concentration(&text),
        ),
        limited_vowels: features::limited_vowel_diversity(&text),
        unpronounceable: features::unpronouncability_score(&text),
        consonant_clusters: features::consonant_cluster_score(&text),
    };

    let mut confidence = factors.proximity * weights.weight_proximity
        + factors.home_row * weights.weight_home_row
        + factors.hand_clustering * weights.weight_hand_clustering
        + factors.vowel_ratio * weights.weight_vowel_ratio
        + factors.entropy * weights.weight_entropy
        + factors.keyboard_walk * weights.weight_keyboard_walk
        + factors.repetition * weights.weight_repetition
        + factors.same_finger * weights.weight_same_finger
        + factors.home_row_concentration * weights.weight_home_row_concentration
        + factors.limited_vowels * weights.weight_limited_vowels;

    // Proximity plus a clear walk pattern is almost certainly a keysmash;
    // this catches top/bottom row walks the weighted sum underrates.
    if factors.proximity >= 0.9 && factors.keyboard_walk >= 0.8 {
        confidence += weights.boost_walk_strong;
    } else if factors.keyboard_walk >= 0.5 && factors.proximity >= 0.7 {
        confidence += weights.boost_walk_partial;
    }

    if is_email_input && domain_score > 0.5 {
        confidence += domain_score * weights.boost_email_domain;
    }
    if is_email_input && domain_score <= 0.5 {
        confidence *= weights.penalty_email;
    }

    // Short strings are noisy unless they carry a walk pattern.
    if text_len <= 5 && factors.keyboard_walk < 0.1 {
        confidence *= weights.penalty_short;
    }

    // Gibberish: unpronounceable random strings that need not be
    // keyboard-based at all.
    let mut gibberish_confidence = factors.unpronounceable * weights.weight_gib_unpronounceable
        + factors.consonant_clusters * weights.weight_gib_consonants
        + factors.vowel_ratio * weights.weight_gib_vowel_ratio;

    if text_len > 10 && factors.unpronounceable > 0.6 {
        gibberish_confidence += weights.boost_gib_long;
    }

    confidence = confidence.clamp(0.0, 1.0);
    gibberish_confidence = gibberish_confidence.clamp(0.0, 1.0);

    let is_keysmash = confidence >= options.threshold;
    let is_gibberish = gibberish_confidence >= options.threshold && !is_keysmash;
    let is_slop = is_keysmash || is_gibberish;

    // Keysmashes with keyboard structure read as human mashing; structureless
    // gibberish leans bot/random generation.
    let is_likely_human = if is_keysmash {
        factors.proximity > 0.5
            || factors.home_row_concentration > 0.5
            || factors.keyboard_walk > 0.3
    } else if is_gibberish {
        factors.proximity > 0.3 && factors.home_row_concentration > 0.3
    } else {
        false
    };

    DetectResult {
        is_slop,
        is_keysmash,
        is_gibberish,
        is_likely_human,
        confidence: round2(confidence),
        gibberish_confidence: round2(gibberish_confidence),
        factors: Some(factors),
    }
}
