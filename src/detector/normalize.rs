//! Piecewise-linear ramps mapping raw feature values onto [0, 1], where 1
//! reads as "more keysmash-like". The other six factors already live in
//! [0, 1] and pass through unchanged.

/// Keysmashes have LOW average key distance (adjacent keys).
pub fn proximity(avg_distance: f64) -> f64 {
    // avg distance runs from ~1 (adjacent) to 5+ (far apart)
    if avg_distance <= 1.0 {
        return 1.0;
    }
    if avg_distance >= 4.0 {
        return 0.0;
    }
    1.0 - (avg_distance - 1.0) / 3.0
}

/// Normal typing sits around 30-40% home row; smashes at 50-80%.
pub fn home_row(home_row_pct: f64) -> f64 {
    if home_row_pct <= 0.3 {
        return 0.0;
    }
    if home_row_pct >= 0.7 {
        return 1.0;
    }
    (home_row_pct - 0.3) / 0.4
}

/// Smashes often favor one hand (clustering > 0.7).
pub fn hand_clustering(clustering: f64) -> f64 {
    if clustering <= 0.5 {
        return 0.0;
    }
    if clustering >= 0.9 {
        return 1.0;
    }
    (clustering - 0.5) / 0.4
}

/// Deviation from the ~38% vowel share of ordinary English text.
pub fn vowel_deviation(ratio: f64) -> f64 {
    let deviation = (ratio - 0.38).abs();
    if deviation <= 0.1 {
        return 0.0;
    }
    if deviation >= 0.3 {
        return 1.0;
    }
    (deviation - 0.1) / 0.2
}

/// Low entropy = repetitive. The ceiling adapts to the text length since a
/// short string cannot reach 4 bits.
pub fn entropy(entropy: f64, text_len: usize) -> f64 {
    let max_expected = (text_len.max(2) as f64).log2().min(4.0);
    if entropy >= max_expected {
        return 0.0;
    }
    if entropy <= 1.5 {
        return 1.0;
    }
    1.0 - (entropy - 1.5) / (max_expected - 1.5)
}

/// Ordinary English is ~35% home-row letters; chaotic smashes hit 60-100%.
pub fn home_row_concentration(concentration: f64) -> f64 {
    if concentration <= 0.35 {
        return 0.0;
    }
    if concentration >= 0.7 {
        return 1.0;
    }
    (concentration - 0.35) / 0.35
}
