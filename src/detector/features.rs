//! Raw feature extractors. Each one lower-cases its input and degrades to a
//! defined value below its minimum length, so the engine never has to guard.

use crate::geometry::key_distance;
use crate::languages::ALL_BIGRAMS;
use crate::layouts::{KeyboardLayout, HOME_ROW};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// The most commonly smashed keys (QWERTY home row, ';' excluded).
const HOME_ROW_CHARS: [char; 9] = ['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'];

/// Adjacent-key sequences people actually roll out. Catalog order mirrors
/// pattern strength; a few short patterns are listed twice and intentionally
/// count double.
pub const KEYBOARD_WALK_PATTERNS: [&str; 103] = [
    // Full row walks (very strong signal)
    "qwerty", "qwertyuiop", "asdfgh", "asdfghjkl", "zxcvbn", "zxcvbnm",
    // Horizontal walks - 4+ chars
    "qwert", "werty", "ertyu", "rtyui", "tyuio", "yuiop",
    "asdf", "sdfg", "dfgh", "fghj", "ghjk", "hjkl",
    "zxcv", "xcvb", "cvbn", "vbnm",
    // Horizontal walks - 3 chars
    "qwe", "wer", "ert", "rty", "tyu", "yui", "uio", "iop",
    "asd", "sdf", "dfg", "fgh", "ghj", "hjk", "jkl",
    "zxc", "xcv", "cvb", "vbn", "bnm",
    // Reverse walks - long
    "ytrewq", "trewq", "poiuy", "poiuyt", "lkjhgfdsa", "lkjhgf", "lkjhg", "lkjh",
    "fdsa", "gfdsa", "hgfdsa", "mnbvcxz", "mnbvcx", "mnbvc", "mnbv",
    // Reverse walks - short
    "ewq", "rew", "tre", "ytr", "uyt", "iuy", "oiu", "poi",
    "lkj", "kjh", "jhg", "hgf", "gfd", "fds", "dsa",
    "vcx", "cxz", "nmb", "mbv", "bvc",
    // Diagonals
    "qaz", "wsx", "edc", "rfv", "tgb", "yhn", "ujm",
    "zaq", "xsw", "cde", "vfr", "bgt", "nhy", "mju",
    // Cross-row patterns
    "qweasd", "qweasdzxc", "asdzxc", "wertsdfg", "ertdfgh",
    // Common short patterns
    "jkl;", "fghjkl", "sdfghjkl", "sdf", "fds", "jkl", "lkj",
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Providers whose domains should never be treated as suspicious.
static COMMON_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "gmail", "yahoo", "hotmail", "outlook", "icloud", "aol", "mail", "protonmail", "zoho",
        "yandex", "gmx", "live", "msn", "comcast", "verizon", "att", "cox", "sbcglobal",
    ]
    .into_iter()
    .collect()
});

pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Part before the '@'; the whole input when there is no local part.
pub fn email_local_part(email: &str) -> &str {
    match email.find('@') {
        Some(at) if at > 0 => &email[..at],
        _ => email,
    }
}

/// Domain name without its TLD; empty when there is no '@'.
pub fn email_domain(email: &str) -> &str {
    let Some(at) = email.find('@') else {
        return "";
    };
    let domain = &email[at + 1..];
    match domain.rfind('.') {
        Some(dot) if dot > 0 => &domain[..dot],
        _ => domain,
    }
}

pub fn is_common_domain(domain: &str) -> bool {
    COMMON_DOMAINS.contains(domain.to_lowercase().as_str())
}

/// Average staggered Euclidean distance between consecutive mappable keys.
pub fn average_key_distance(text: &str, layout: &KeyboardLayout) -> f64 {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    if chars.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut valid_pairs = 0u32;
    for pair in chars.windows(2) {
        if let (Some(a), Some(b)) = (layout.get(&pair[0]), layout.get(&pair[1])) {
            total += key_distance(a, b);
            valid_pairs += 1;
        }
    }

    if valid_pairs > 0 {
        total / valid_pairs as f64
    } else {
        0.0
    }
}

/// Fraction of mappable characters sitting on the layout's home row.
pub fn home_row_percentage(text: &str, layout: &KeyboardLayout) -> f64 {
    let mut home = 0u32;
    let mut valid = 0u32;
    for c in text.to_lowercase().chars() {
        if let Some(pos) = layout.get(&c) {
            valid += 1;
            if pos.row == HOME_ROW {
                home += 1;
            }
        }
    }
    if valid > 0 {
        home as f64 / valid as f64
    } else {
        0.0
    }
}

/// Share of the dominant hand: 0.5 = even split, 1.0 = all one hand.
pub fn hand_clustering_score(text: &str, layout: &KeyboardLayout) -> f64 {
    let mut left = 0u32;
    let mut right = 0u32;
    for c in text.to_lowercase().chars() {
        if let Some(pos) = layout.get(&c) {
            match pos.hand {
                crate::geometry::Hand::Left => left += 1,
                crate::geometry::Hand::Right => right += 1,
            }
        }
    }
    let total = left + right;
    if total == 0 {
        return 0.0;
    }
    left.max(right) as f64 / total as f64
}

/// Vowel share among ASCII letters.
pub fn vowel_ratio(text: &str) -> f64 {
    let letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0.0;
    }
    let vowels = letters.iter().filter(|c| VOWELS.contains(c)).count();
    vowels as f64 / letters.len() as f64
}

/// Shannon entropy over all characters, in bits. Low entropy = repetitive.
/// Counts are accumulated in character order so the floating-point sum is
/// reproducible across calls.
pub fn character_entropy(text: &str) -> f64 {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    if chars.is_empty() {
        return 0.0;
    }

    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    for &c in &chars {
        *freq.entry(c).or_insert(0) += 1;
    }

    let len = chars.len() as f64;
    let mut entropy = 0.0;
    for &count in freq.values() {
        let p = count as f64 / len;
        entropy -= p * p.log2();
    }
    entropy
}

/// Walk-pattern hits normalized by sqrt(len); longer strings naturally
/// contain more candidate substrings.
pub fn keyboard_walk_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let matches = KEYBOARD_WALK_PATTERNS
        .iter()
        .filter(|p| lower.contains(*p))
        .count();

    let len = text.chars().count() as f64;
    let normalized = matches as f64 / len.sqrt().max(1.0);
    normalized.min(1.0)
}

/// Adjacent repeated blocks of 2/3/4 characters, plus a bonus when the whole
/// string is one repeating unit (gaming patterns like "wsadwsadwsad").
pub fn repetition_score(text: &str) -> f64 {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let len = chars.len();
    if len < 4 {
        return 0.0;
    }

    let mut repeats = 0usize;

    for i in 0..len.saturating_sub(3) {
        if chars[i..i + 2] == chars[i + 2..i + 4] {
            repeats += 1;
        }
    }

    for i in 0..len.saturating_sub(5) {
        if chars[i..i + 3] == chars[i + 3..i + 6] {
            repeats += 1;
        }
    }

    // 4-char repeats weigh double
    for i in 0..len.saturating_sub(7) {
        if chars[i..i + 4] == chars[i + 4..i + 8] {
            repeats += 2;
        }
    }

    for unit_len in 2..=6.min(len / 2) {
        let reps = len / unit_len;
        if reps < 2 {
            continue;
        }
        let unit = &chars[..unit_len];
        let full = chars[..unit_len * reps]
            .chunks(unit_len)
            .all(|chunk| chunk == unit);
        if full {
            repeats += reps;
            break;
        }
    }

    (repeats as f64 / (len as f64 / 2.0)).min(1.0)
}

/// Fraction of consecutive pairs typed with the same finger of the same hand.
pub fn same_finger_ratio(text: &str, layout: &KeyboardLayout) -> f64 {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    if chars.len() < 2 {
        return 0.0;
    }

    let mut same = 0u32;
    let mut valid_pairs = 0u32;
    for pair in chars.windows(2) {
        if let (Some(a), Some(b)) = (layout.get(&pair[0]), layout.get(&pair[1])) {
            valid_pairs += 1;
            if a.finger == b.finger && a.hand == b.hand {
                same += 1;
            }
        }
    }

    if valid_pairs > 0 {
        same as f64 / valid_pairs as f64
    } else {
        0.0
    }
}

/// Share of letters drawn from the fixed QWERTY home-row set. Chaotic
/// smashes concentrate there even without sequential patterns.
pub fn home_row_concentration(text: &str) -> f64 {
    let letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0.0;
    }
    let home = letters.iter().filter(|c| HOME_ROW_CHARS.contains(c)).count();
    home as f64 / letters.len() as f64
}

/// Real words have diverse vowels; home-row smashes usually only have 'a'.
pub fn limited_vowel_diversity(text: &str) -> f64 {
    let letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0.0;
    }

    let total_vowels = letters.iter().filter(|c| VOWELS.contains(c)).count();
    if total_vowels == 0 {
        return 1.0; // letters but no vowels at all
    }

    let a_count = letters.iter().filter(|&&c| c == 'a').count();
    let a_ratio = a_count as f64 / total_vowels as f64;
    let vowel_ratio = total_vowels as f64 / letters.len() as f64;

    if vowel_ratio < 0.15 && a_ratio > 0.8 {
        return 1.0;
    }
    if vowel_ratio < 0.2 && a_ratio > 0.9 {
        return 0.8;
    }
    if a_ratio == 1.0 {
        return 0.6;
    }
    0.0
}

/// Ratio of bigrams not common in any of the 20 supported languages, plus a
/// penalty for triple-repeated characters ("sssss").
pub fn unpronouncability_score(text: &str) -> f64 {
    let lower: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if lower.chars().count() < 3 {
        return 0.0;
    }

    let bytes = lower.as_bytes();
    let mut common = 0usize;
    let mut total = 0usize;
    for i in 0..bytes.len() - 1 {
        let bigram = &lower[i..i + 2];
        total += 1;
        if ALL_BIGRAMS.contains(bigram) {
            common += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }

    let uncommon_ratio = 1.0 - common as f64 / total as f64;

    let triple_repeat = bytes.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]);
    let repeat_penalty = if triple_repeat { 0.2 } else { 0.0 };

    (uncommon_ratio + repeat_penalty).min(1.0)
}

/// Total length of 4+ character consonant runs relative to letter count.
pub fn consonant_cluster_score(text: &str) -> f64 {
    let letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if letters.len() < 4 {
        return 0.0;
    }

    let mut cluster_len = 0usize;
    let mut run = 0usize;
    for &c in letters.iter().chain(std::iter::once(&'a')) {
        if VOWELS.contains(&c) {
            if run >= 4 {
                cluster_len += run;
            }
            run = 0;
        } else {
            run += 1;
        }
    }

    if cluster_len == 0 {
        return 0.0;
    }
    (cluster_len as f64 / letters.len() as f64).min(1.0)
}
