//! Common-bigram tables for the 20 most common languages on the internet.
//! Non-Latin scripts use romanized bigrams.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Es,
    Ar,
    Pt,
    Id,
    Fr,
    Ja,
    Ru,
    De,
    Ko,
    It,
    Tr,
    Vi,
    Pl,
    Nl,
    Th,
    Hi,
    Fa,
    Sv,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese",
            Self::Es => "Spanish",
            Self::Ar => "Arabic",
            Self::Pt => "Portuguese",
            Self::Id => "Indonesian",
            Self::Fr => "French",
            Self::Ja => "Japanese",
            Self::Ru => "Russian",
            Self::De => "German",
            Self::Ko => "Korean",
            Self::It => "Italian",
            Self::Tr => "Turkish",
            Self::Vi => "Vietnamese",
            Self::Pl => "Polish",
            Self::Nl => "Dutch",
            Self::Th => "Thai",
            Self::Hi => "Hindi",
            Self::Fa => "Persian",
            Self::Sv => "Swedish",
        }
    }
}

pub static BIGRAMS_EN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "th", "he", "in", "en", "nt", "er", "on", "an", "re", "ed", "nd", "at", "ou", "es", "ea",
        "ti", "to", "it", "st", "io", "le", "is", "or", "ar", "as", "te", "se", "me", "of", "al",
        "de", "so", "ne", "ve", "ha", "hi", "ri", "ro", "ic", "ng", "co", "ma", "ce", "li", "ch",
        "ll", "be", "ge", "us", "wa", "wh", "ee", "no", "pe", "el", "oo", "ss", "tt", "ff", "pp",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_ES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "de", "en", "el", "la", "es", "os", "as", "on", "er", "an", "ue", "ar", "al", "ad", "ra",
        "or", "ci", "ón", "io", "te", "co", "ta", "se", "no", "ie", "do", "un", "re", "ca", "pa",
        "to", "ri", "ro", "qu", "nt", "ti", "da", "po", "so", "me", "pe", "lo", "le", "na", "tr",
        "si", "di", "mo", "ma", "mi",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_PT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "de", "os", "as", "do", "da", "em", "es", "er", "ra", "en", "qu", "ão", "co", "ar", "ao",
        "te", "se", "an", "or", "ta", "al", "re", "on", "om", "nt", "me", "is", "po", "to", "ro",
        "ca", "no", "pa", "ri", "ad", "ma", "st", "ti", "ia", "io", "na", "am", "nd", "el", "pe",
        "mo", "pr", "so", "mi", "um",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_FR: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "es", "le", "de", "en", "on", "re", "nt", "er", "te", "an", "ou", "ai", "et", "se", "it",
        "la", "is", "me", "qu", "ti", "ue", "ur", "ne", "ce", "ns", "ie", "co", "tr", "ra", "pa",
        "ar", "il", "au", "ta", "ir", "or", "eu", "ss", "io", "ch", "pe", "in", "st", "ve", "pr",
        "po", "ri", "ma", "un", "to",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_DE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "en", "er", "ch", "de", "nd", "ei", "ie", "ge", "in", "te", "be", "un", "es", "st", "an",
        "au", "he", "ne", "re", "ng", "se", "di", "ic", "sch", "le", "da", "it", "zu", "al", "ht",
        "si", "we", "wi", "mi", "or", "li", "ti", "ar", "nt", "ha", "is", "hr", "ss", "so", "ab",
        "us", "on", "ig", "el", "ur",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_IT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "er", "on", "an", "re", "en", "to", "io", "ti", "el", "ta", "te", "in", "ch", "la", "al",
        "le", "co", "de", "or", "no", "ne", "ra", "ri", "at", "ar", "li", "es", "nt", "ca", "st",
        "is", "pe", "it", "se", "si", "ro", "ia", "so", "un", "ol", "os", "ma", "me", "tt", "il",
        "lo", "nd", "po", "pr", "ss",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_NL: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "en", "de", "an", "er", "he", "et", "te", "in", "ge", "va", "ee", "ij", "ng", "aa", "nd",
        "or", "st", "oo", "ar", "ie", "ve", "el", "al", "be", "is", "on", "le", "di", "me", "re",
        "da", "op", "ze", "we", "oe", "wo", "ni", "om", "ch", "ke", "ti", "ig", "at", "je", "wa",
        "li", "ag", "ko", "zo", "ui",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_PL: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ie", "ni", "ch", "an", "rz", "po", "na", "ow", "cz", "pr", "st", "za", "od", "wa", "je",
        "sz", "go", "do", "ro", "mi", "ta", "ko", "te", "ra", "em", "ka", "al", "to", "ia", "dz",
        "sk", "no", "wi", "si", "ws", "ży", "że", "ść", "li", "en", "wy", "by", "ty", "da", "ba",
        "pa", "ma", "lu", "mo", "ze",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_SV: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "en", "ar", "er", "de", "an", "tt", "et", "in", "or", "te", "ra", "st", "ör", "om", "ng",
        "av", "ti", "al", "på", "ig", "at", "ta", "ka", "re", "me", "äl", "ha", "nd", "ge", "so",
        "ri", "un", "li", "fö", "la", "le", "is", "sk", "va", "ro", "da", "il", "ke", "nt", "ad",
        "na", "vi", "mi", "ån", "el",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_TR: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ar", "la", "er", "le", "an", "in", "de", "en", "ir", "ak", "da", "bi", "ri", "il", "ta",
        "al", "ın", "ka", "ya", "ır", "ma", "ol", "dı", "ba", "li", "ek", "or", "me", "is", "si",
        "ra", "ler", "el", "un", "te", "ne", "nd", "ik", "ği", "mı", "şı", "üz", "öz", "çı", "na",
        "as", "ge", "be", "ye", "sa",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_ID: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "an", "ng", "me", "en", "ka", "er", "da", "di", "pe", "ak", "be", "ar", "in", "ya", "te",
        "ta", "se", "la", "ke", "ra", "ma", "al", "at", "ri", "ti", "pa", "ba", "ga", "sa", "ha",
        "un", "na", "or", "el", "it", "us", "ia", "is", "am", "as", "tu", "ol", "on", "ad", "uk",
        "em", "ur", "il", "ap", "ah",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_VI: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ng", "nh", "ch", "th", "tr", "ph", "gi", "kh", "qu", "ho", "ha", "hi", "an", "on", "en",
        "in", "un", "ao", "ai", "oi", "ua", "ue", "uo", "ie", "ia", "iu", "ay", "ey", "oy", "uy",
        "ău", "âu", "êu", "iê", "uô", "ươ", "la", "le", "lo", "lu", "ma", "me", "mi", "mo", "mu",
        "na", "ne", "ni", "no", "nu",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_RU: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "to", "na", "st", "en", "ko", "no", "ov", "po", "ra", "ro", "ta", "os", "go", "vo", "an",
        "et", "ni", "te", "ne", "pr", "za", "ve", "li", "ka", "ya", "da", "od", "ch", "sh", "sk",
        "ti", "ol", "it", "is", "al", "ze", "or", "er", "ot", "on", "om", "at", "ob", "pe", "be",
        "so", "mo", "de", "ry", "mi",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_AR: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "al", "la", "an", "in", "wa", "ma", "fi", "li", "ya", "ha", "el", "il", "ab", "ad", "ar",
        "as", "at", "am", "ah", "ay", "ba", "bi", "da", "di", "fa", "ka", "ki", "mi", "na", "ni",
        "ra", "ri", "sa", "si", "ta", "th", "sh", "kh", "gh", "dh", "qe", "qa", "hu", "hi", "ul",
        "un", "ur", "us", "oo", "ee",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_FA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "an", "ar", "az", "ba", "be", "da", "de", "di", "do", "es", "fa", "ha", "in", "ir", "is",
        "ka", "ke", "kh", "ko", "ma", "mi", "mo", "na", "ne", "ni", "ra", "re", "ri", "ro", "sa",
        "se", "sh", "ta", "te", "to", "va", "ya", "ye", "za", "ze", "am", "at", "as", "ad", "al",
        "om", "on", "or", "os", "oo",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_HI: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ka", "ki", "ke", "ko", "ku", "ha", "hi", "he", "ho", "hu", "na", "ni", "ne", "no", "nu",
        "ma", "mi", "me", "mo", "mu", "ra", "ri", "re", "ro", "ru", "la", "li", "le", "lo", "lu",
        "sa", "si", "se", "so", "su", "ta", "ti", "te", "to", "tu", "pa", "pi", "pe", "po", "pu",
        "ya", "ba", "da", "ga", "ja", "aa", "ee", "ii", "oo", "uu", "ai", "au", "an", "in", "un",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_JA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ka", "ki", "ku", "ke", "ko", "sa", "si", "su", "se", "so", "ta", "ti", "tu", "te", "to",
        "na", "ni", "nu", "ne", "no", "ha", "hi", "hu", "he", "ho", "ma", "mi", "mu", "me", "mo",
        "ya", "yu", "yo", "ra", "ri", "ru", "re", "ro", "wa", "wo", "ga", "gi", "gu", "ge", "go",
        "za", "zu", "ze", "zo", "da", "de", "do", "ba", "bi", "bu", "be", "bo", "pa", "pi", "pu",
        "sh", "ch", "ts", "nn", "tt", "kk", "ss", "pp", "ou", "ei",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_KO: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ha", "an", "eu", "eo", "ga", "da", "na", "ra", "ma", "ba", "sa", "ja", "cha", "ka", "ta",
        "pa", "yo", "wa", "wi", "we", "ng", "ui", "ae", "oe", "uh", "oh", "ah", "ee", "oo", "ya",
        "ye", "yu", "in", "un", "en", "on", "im", "um", "em", "om", "go", "do", "no", "ro", "mo",
        "bo", "so", "jo", "geu", "deu",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_ZH: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "sh", "ch", "zh", "ng", "an", "en", "in", "un", "ai", "ei", "ao", "ou", "ia", "ie", "iu",
        "ua", "uo", "üe", "er", "de", "le", "ge", "he", "ke", "me", "ne", "re", "se", "te", "ze",
        "ba", "bi", "bu", "da", "di", "du", "fa", "fu", "ga", "gu", "ha", "hu", "ji", "ju", "ka",
        "ku", "la", "li", "lu", "ma", "mi", "mu", "na", "ni", "nu", "pa", "pi", "pu", "qi", "qu",
        "ri", "ru", "si", "su", "ti", "tu", "xi", "xu", "yi", "yu",
    ]
    .into_iter()
    .collect()
});

pub static BIGRAMS_TH: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ai", "an", "ao", "at", "am", "ak", "ap", "ang", "en", "in", "on", "un", "ek", "ok", "uk",
        "om", "um", "em", "im", "ong", "th", "ph", "ch", "kh", "ng", "kw", "kr", "kl", "pr", "pl",
        "tr", "ra", "ri", "ro", "ru", "re", "la", "li", "lo", "lu", "ma", "mi", "mo", "mu", "me",
        "na", "ni", "no", "nu", "ne", "sa", "si", "so", "su", "se", "ta", "ti", "to", "tu", "te",
    ]
    .into_iter()
    .collect()
});

/// Union of the bigram tables of every supported language.
pub static ALL_BIGRAMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    use strum::IntoEnumIterator;
    let mut all = HashSet::new();
    for lang in Language::iter() {
        all.extend(get_bigrams(lang).iter().copied());
    }
    all
});

pub fn get_bigrams(lang: Language) -> &'static HashSet<&'static str> {
    match lang {
        Language::En => &BIGRAMS_EN,
        Language::Es => &BIGRAMS_ES,
        Language::Pt => &BIGRAMS_PT,
        Language::Fr => &BIGRAMS_FR,
        Language::De => &BIGRAMS_DE,
        Language::It => &BIGRAMS_IT,
        Language::Nl => &BIGRAMS_NL,
        Language::Pl => &BIGRAMS_PL,
        Language::Sv => &BIGRAMS_SV,
        Language::Tr => &BIGRAMS_TR,
        Language::Id => &BIGRAMS_ID,
        Language::Vi => &BIGRAMS_VI,
        Language::Ru => &BIGRAMS_RU,
        Language::Ar => &BIGRAMS_AR,
        Language::Fa => &BIGRAMS_FA,
        Language::Hi => &BIGRAMS_HI,
        Language::Ja => &BIGRAMS_JA,
        Language::Ko => &BIGRAMS_KO,
        Language::Zh => &BIGRAMS_ZH,
        Language::Th => &BIGRAMS_TH,
    }
}

/// Bigram table for an ISO 639-1 code, falling back to English for
/// unrecognized codes.
pub fn bigrams_for_code(code: &str) -> &'static HashSet<&'static str> {
    Language::from_str(&code.to_lowercase())
        .map(get_bigrams)
        .unwrap_or(&BIGRAMS_EN)
}
