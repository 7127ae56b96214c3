use proptest::prelude::*;
use slop_detector::layouts::KnownLayout;
use slop_detector::{detect, detect_sentence, DetectOptions};
use strum::IntoEnumIterator;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn confidences_stay_clamped(input in "[ -~]{0,200}") {
        let r = detect(&input, &DetectOptions::default());
        prop_assert!((0.0..=1.0).contains(&r.confidence), "confidence {}", r.confidence);
        prop_assert!(
            (0.0..=1.0).contains(&r.gibberish_confidence),
            "gibberish {}",
            r.gibberish_confidence
        );
        if let Some(f) = r.factors {
            for (name, v) in [
                ("proximity", f.proximity),
                ("home_row", f.home_row),
                ("hand_clustering", f.hand_clustering),
                ("vowel_ratio", f.vowel_ratio),
                ("entropy", f.entropy),
                ("keyboard_walk", f.keyboard_walk),
                ("repetition", f.repetition),
                ("same_finger", f.same_finger),
                ("home_row_concentration", f.home_row_concentration),
                ("limited_vowels", f.limited_vowels),
                ("unpronounceable", f.unpronounceable),
                ("consonant_clusters", f.consonant_clusters),
            ] {
                prop_assert!((0.0..=1.0).contains(&v), "{} = {}", name, v);
            }
        }
    }

    #[test]
    fn labels_are_mutually_exclusive(input in "[ -~]{0,200}", threshold in 0.0..=1.0f64) {
        let r = detect(&input, &DetectOptions { threshold, ..Default::default() });
        prop_assert!(!(r.is_keysmash && r.is_gibberish));
        prop_assert_eq!(r.is_slop, r.is_keysmash || r.is_gibberish);
        if r.is_likely_human {
            prop_assert!(r.is_slop);
        }
    }

    #[test]
    fn threshold_never_moves_confidences(input in "[ -~]{0,200}", threshold in 0.0..=1.0f64) {
        let base = detect(&input, &DetectOptions::default());
        let other = detect(&input, &DetectOptions { threshold, ..Default::default() });
        prop_assert_eq!(base.confidence, other.confidence);
        prop_assert_eq!(base.gibberish_confidence, other.gibberish_confidence);
    }

    #[test]
    fn detection_is_deterministic(input in "[ -~]{0,200}") {
        let opts = DetectOptions::default();
        prop_assert_eq!(detect(&input, &opts), detect(&input, &opts));
        prop_assert_eq!(detect_sentence(&input, &opts), detect_sentence(&input, &opts));
    }

    #[test]
    fn every_layout_yields_clamped_results(input in "[ -~]{1,80}") {
        for layout in KnownLayout::iter() {
            let r = detect(&input, &DetectOptions { layout, ..Default::default() });
            prop_assert!(r.confidence.is_finite());
            prop_assert!((0.0..=1.0).contains(&r.confidence), "{}: {}", layout, r.confidence);
            prop_assert!((0.0..=1.0).contains(&r.gibberish_confidence));
        }
    }

    #[test]
    fn sentence_aggregates_are_consistent(input in "[ -~]{0,200}") {
        let r = detect_sentence(&input, &DetectOptions::default());
        prop_assert_eq!(r.total_words, r.words.len());
        prop_assert!(r.slop_word_count <= r.total_words);
        prop_assert!((0.0..=1.0).contains(&r.slop_score));
        prop_assert!((0.0..=1.0).contains(&r.slop_percentage));
        prop_assert_eq!(
            r.slop_word_count,
            r.words.iter().filter(|w| w.is_slop).count()
        );
    }
}
