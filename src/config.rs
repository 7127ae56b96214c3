use clap::Args;

/// Factor weights and boost/penalty constants for the decision engine.
/// The defaults are the calibrated contract; every value can be overridden
/// from the CLI for experimentation.
#[derive(Args, Debug, Clone)]
pub struct DetectorWeights {
    // === KEYSMASH FACTORS ===
    #[arg(long, default_value_t = 0.10)]
    pub weight_proximity: f64,
    #[arg(long, default_value_t = 0.08)]
    pub weight_home_row: f64,
    #[arg(long, default_value_t = 0.06)]
    pub weight_hand_clustering: f64,
    #[arg(long, default_value_t = 0.06)]
    pub weight_vowel_ratio: f64,
    #[arg(long, default_value_t = 0.05)]
    pub weight_entropy: f64,
    #[arg(long, default_value_t = 0.15)]
    pub weight_keyboard_walk: f64,
    #[arg(long, default_value_t = 0.05)]
    pub weight_repetition: f64,
    #[arg(long, default_value_t = 0.04)]
    pub weight_same_finger: f64,

    // The two strongest signals: chaotic smashes concentrate on the home
    // row and rarely produce any vowel other than 'a'.
    #[arg(long, default_value_t = 0.24)]
    pub weight_home_row_concentration: f64,
    #[arg(long, default_value_t = 0.17)]
    pub weight_limited_vowels: f64,

    // === BOOSTS & PENALTIES ===
    #[arg(long, default_value_t = 0.30)]
    pub boost_walk_strong: f64,
    #[arg(long, default_value_t = 0.15)]
    pub boost_walk_partial: f64,
    #[arg(long, default_value_t = 0.2)]
    pub boost_email_domain: f64,
    #[arg(long, default_value_t = 0.7)]
    pub penalty_email: f64,
    #[arg(long, default_value_t = 0.6)]
    pub penalty_short: f64,

    // === GIBBERISH FACTORS ===
    #[arg(long, default_value_t = 0.5)]
    pub weight_gib_unpronounceable: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_gib_consonants: f64,
    #[arg(long, default_value_t = 0.2)]
    pub weight_gib_vowel_ratio: f64,
    #[arg(long, default_value_t = 0.15)]
    pub boost_gib_long: f64,
}

impl Default for DetectorWeights {
    fn default() -> Self {
        Self {
            weight_proximity: 0.10,
            weight_home_row: 0.08,
            weight_hand_clustering: 0.06,
            weight_vowel_ratio: 0.06,
            weight_entropy: 0.05,
            weight_keyboard_walk: 0.15,
            weight_repetition: 0.05,
            weight_same_finger: 0.04,
            weight_home_row_concentration: 0.24,
            weight_limited_vowels: 0.17,
            boost_walk_strong: 0.30,
            boost_walk_partial: 0.15,
            boost_email_domain: 0.2,
            penalty_email: 0.7,
            penalty_short: 0.6,
            weight_gib_unpronounceable: 0.5,
            weight_gib_consonants: 0.3,
            weight_gib_vowel_ratio: 0.2,
            boost_gib_long: 0.15,
        }
    }
}
