//! Weighted lexicons and negators used by the estimator.
//!
//! Entries are lowercase substrings. English entries are stems matched
//! inside tokens ("stress" matches "stressed"); Chinese entries are matched
//! anywhere in the raw string.

/// Contribution of one negative lexicon hit.
pub const NEGATIVE_WEIGHT: f64 = -0.3;
/// Contribution of one positive lexicon hit.
pub const POSITIVE_WEIGHT: f64 = 0.3;

/// Latin path: a negated hit flips sign and keeps 80% of its magnitude.
pub const LATIN_NEGATION_FACTOR: f64 = -0.8;
/// Ideograph path: a negated negative hit.
pub const IDEOGRAPH_NEGATED_NEGATIVE: f64 = 0.2;
/// Ideograph path: a negated positive hit.
pub const IDEOGRAPH_NEGATED_POSITIVE: f64 = -0.2;

pub const NEGATIVE_TERMS: &[&str] = &[
    // English stems
    "sad", "tired", "angry", "lost", "dark", "heavy", "stress", "pain", "anxious", "lonely",
    "upset", "hurt", "awful", // Chinese
    "难过", "伤心", "累", "生气", "愤怒", "焦虑", "压力", "痛", "烦", "失落", "孤独", "沮丧",
    "崩溃", "害怕",
];

pub const POSITIVE_TERMS: &[&str] = &[
    // English stems
    "happy", "bright", "joy", "excited", "light", "love", "good", "calm", "glad", "great",
    "peace", "grateful", // Chinese
    "开心", "快乐", "高兴", "幸福", "喜欢", "爱", "兴奋", "轻松", "满足", "平静", "期待",
    "感恩",
];

/// Whole tokens that negate the following token.
pub const LATIN_NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "didn't", "isn't", "wasn't", "aren't",
    "can't", "cannot", "won't", "hardly", "without",
];

/// Single characters that negate the match right after them.
pub const IDEOGRAPH_NEGATORS: &[char] = &['不', '没', '别', '无', '未', '非'];

/// Polarity of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Negative,
    Positive,
}

impl Polarity {
    /// Both polarities with their term lists.
    pub fn lexicons() -> [(Polarity, &'static [&'static str]); 2] {
        [
            (Polarity::Negative, NEGATIVE_TERMS),
            (Polarity::Positive, POSITIVE_TERMS),
        ]
    }

    /// Weight of an un-negated hit.
    pub fn weight(self) -> f64 {
        match self {
            Polarity::Negative => NEGATIVE_WEIGHT,
            Polarity::Positive => POSITIVE_WEIGHT,
        }
    }

    /// Weight of a hit preceded by an ideograph negator.
    pub fn ideograph_negated_weight(self) -> f64 {
        match self {
            Polarity::Negative => IDEOGRAPH_NEGATED_NEGATIVE,
            Polarity::Positive => IDEOGRAPH_NEGATED_POSITIVE,
        }
    }
}

pub fn is_latin_negator(token: &str) -> bool {
    LATIN_NEGATORS.contains(&token)
}

pub fn is_ideograph_negator(c: char) -> bool {
    IDEOGRAPH_NEGATORS.contains(&c)
}
