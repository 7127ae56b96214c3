use rstest::rstest;
use slop_detector::detector::features;
use slop_detector::detector::normalize;
use slop_detector::layouts::{get_layout, KnownLayout};

fn qwerty() -> &'static slop_detector::layouts::KeyboardLayout {
    get_layout(KnownLayout::Qwerty)
}

// --- EMAIL HELPERS ---

#[rstest]
#[case("john@example.com", true)]
#[case("a@b.co", true)]
#[case("not an email", false)]
#[case("missing@tld", false)]
#[case("@nolocal.com", false)]
#[case("two@@signs.com", false)]
fn test_is_email(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(features::is_email(input), expected, "{}", input);
}

#[test]
fn test_email_parts() {
    assert_eq!(features::email_local_part("john.doe@gmail.com"), "john.doe");
    assert_eq!(features::email_local_part("noat"), "noat");
    assert_eq!(features::email_domain("john@gmail.com"), "gmail");
    assert_eq!(features::email_domain("x@mail.co.uk"), "mail.co");
    assert_eq!(features::email_domain("noat"), "");
}

#[rstest]
#[case("gmail", true)]
#[case("Gmail", true)]
#[case("protonmail", true)]
#[case("asdfgh", false)]
fn test_common_domains(#[case] domain: &str, #[case] expected: bool) {
    assert_eq!(features::is_common_domain(domain), expected);
}

// --- GEOMETRIC FEATURES ---

#[rstest]
#[case("as", 1.0)] // adjacent home keys
#[case("qp", 9.0)] // across the row
#[case("a", 0.0)] // below minimum length
#[case("!!", 0.0)] // nothing mappable... '!' is not on qwerty
fn test_average_key_distance(#[case] input: &str, #[case] expected: f64) {
    let d = features::average_key_distance(input, qwerty());
    assert!((d - expected).abs() < 0.001, "{}: {}", input, d);
}

#[rstest]
#[case("asdf", 1.0)]
#[case("qwer", 0.0)]
#[case("", 0.0)]
fn test_home_row_percentage(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::home_row_percentage(input, qwerty()), expected);
}

#[rstest]
#[case("asdf", 1.0)] // all left hand
#[case("fjfj", 0.5)] // even split
#[case("jkl", 1.0)]
fn test_hand_clustering(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::hand_clustering_score(input, qwerty()), expected);
}

#[rstest]
#[case("ft", 1.0)] // left index twice
#[case("fj", 0.0)] // both index, different hands
#[case("ed", 1.0)] // left middle twice
#[case("ab", 0.0)]
fn test_same_finger_ratio(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::same_finger_ratio(input, qwerty()), expected);
}

// --- TEXT FEATURES ---

#[rstest]
#[case("hello", 0.4)]
#[case("xyz", 0.0)]
#[case("aeiou", 1.0)]
#[case("h3llo", 0.25)] // digits are not letters
#[case("", 0.0)]
fn test_vowel_ratio(#[case] input: &str, #[case] expected: f64) {
    assert!((features::vowel_ratio(input) - expected).abs() < 1e-9);
}

#[test]
fn test_entropy() {
    assert_eq!(features::character_entropy("aaaa"), 0.0);
    assert!((features::character_entropy("ab") - 1.0).abs() < 1e-9);
    // case-insensitive
    assert_eq!(features::character_entropy("AAaa"), 0.0);
}

#[test]
fn test_entropy_is_bit_exact_across_calls() {
    // many distinct characters: the summation order must be fixed or
    // repeated calls drift in the last bits
    let input = "*qU{:zorX|l{&m8";
    let first = features::character_entropy(input);
    for _ in 0..20 {
        assert_eq!(features::character_entropy(input), first);
    }
}

#[rstest]
#[case("asdf", 1.0)] // 4 pattern hits / sqrt(4) = 2, clamped
#[case("qwerty", 1.0)]
#[case("hello", 0.0)]
#[case("", 0.0)]
fn test_keyboard_walk_score(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::keyboard_walk_score(input), expected);
}

#[test]
fn test_walk_catalog_counts_duplicates() {
    // "sdf" and "jkl" are listed twice on purpose
    let dupes = features::KEYBOARD_WALK_PATTERNS
        .iter()
        .filter(|p| **p == "sdf")
        .count();
    assert_eq!(dupes, 2);
}

#[rstest]
#[case("hahahaha", 1.0)] // saturates: adjacent + whole-string repeats
#[case("wsadwsadwsad", 1.0)]
#[case("abcdefgh", 0.0)]
#[case("abc", 0.0)] // below minimum length
fn test_repetition_score(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::repetition_score(input), expected);
}

#[rstest]
#[case("asdf", 1.0)]
#[case("qwerty", 0.0)]
#[case("1234", 0.0)] // no letters
fn test_home_row_concentration(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::home_row_concentration(input), expected);
}

#[rstest]
#[case("hjkl", 1.0)] // letters but no vowels
#[case("asdfghjklasdfghjkl", 1.0)] // scarce vowels, all 'a'
#[case("asdf", 0.6)] // 'a' is the only vowel
#[case("hello", 0.0)]
#[case("1234", 0.0)] // no letters at all
fn test_limited_vowel_diversity(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::limited_vowel_diversity(input), expected);
}

#[rstest]
#[case("the", 0.0)] // "th" and "he" are common everywhere
#[case("zzzzz", 1.0)] // uncommon bigrams + triple repeat
#[case("xq", 0.0)] // below minimum length
fn test_unpronouncability(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::unpronouncability_score(input), expected);
}

#[test]
fn test_unpronouncability_gibberish_is_high() {
    assert!(features::unpronouncability_score("xjqzvwkpbd") > 0.9);
    assert!(features::unpronouncability_score("imagination") < 0.4);
}

#[rstest]
#[case("rhythms", 1.0)] // one 7-consonant run
#[case("hello", 0.0)]
#[case("abc", 0.0)] // below minimum length
fn test_consonant_clusters(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(features::consonant_cluster_score(input), expected);
}

#[test]
fn test_consonant_cluster_partial() {
    // "abcdfg": 5-consonant run over 6 letters
    let score = features::consonant_cluster_score("abcdfg");
    assert!((score - 5.0 / 6.0).abs() < 1e-9);
}

// --- NORMALIZERS ---

#[rstest]
#[case(0.5, 1.0)]
#[case(1.0, 1.0)]
#[case(2.5, 0.5)]
#[case(4.0, 0.0)]
#[case(6.0, 0.0)]
fn test_normalize_proximity(#[case] distance: f64, #[case] expected: f64) {
    assert!((normalize::proximity(distance) - expected).abs() < 1e-9);
}

#[rstest]
#[case(0.2, 0.0)]
#[case(0.5, 0.5)]
#[case(0.9, 1.0)]
fn test_normalize_home_row(#[case] pct: f64, #[case] expected: f64) {
    assert!((normalize::home_row(pct) - expected).abs() < 1e-9);
}

#[rstest]
#[case(0.5, 0.0)]
#[case(0.7, 0.5)]
#[case(0.95, 1.0)]
fn test_normalize_hand_clustering(#[case] clustering: f64, #[case] expected: f64) {
    assert!((normalize::hand_clustering(clustering) - expected).abs() < 1e-9);
}

#[rstest]
#[case(0.38, 0.0)] // exactly normal
#[case(0.45, 0.0)] // inside the tolerance band
#[case(0.08, 1.0)] // deviation 0.3
#[case(0.18, 0.5)] // deviation 0.2
fn test_normalize_vowel_deviation(#[case] ratio: f64, #[case] expected: f64) {
    assert!((normalize::vowel_deviation(ratio) - expected).abs() < 1e-9);
}

#[test]
fn test_normalize_entropy_adapts_to_length() {
    // long text: ceiling is 4 bits
    assert_eq!(normalize::entropy(4.0, 100), 0.0);
    assert_eq!(normalize::entropy(1.0, 100), 1.0);
    // short text cannot reach 4 bits, so the ceiling shrinks
    assert_eq!(normalize::entropy(2.0, 4), 0.0);
}

#[rstest]
#[case(0.3, 0.0)]
#[case(0.525, 0.5)]
#[case(0.8, 1.0)]
fn test_normalize_home_row_concentration(#[case] conc: f64, #[case] expected: f64) {
    assert!((normalize::home_row_concentration(conc) - expected).abs() < 1e-9);
}
