//! Local sentiment and intensity estimator.
//!
//! Gives live feedback while the user types, before any network round trip.
//! The estimate is a fast heuristic: two small weighted lexicons, a negator
//! set per script family, and a length/punctuation driven intensity.
//!
//! # Module Structure
//!
//! - `script`: picks the scoring strategy (`ScriptFamily`)
//! - `lexicon`: weighted terms and negators

pub mod lexicon;
mod script;

pub use script::{ScriptFamily, classify_script};

use crate::cocktail::LOW_INTENSITY;
use lexicon::{LATIN_NEGATION_FACTOR, Polarity, is_ideograph_negator, is_latin_negator};

/// Intensity reported for empty input.
pub const IDLE_INTENSITY: f64 = LOW_INTENSITY;

const LENGTH_SCALE: f64 = 100.0;
const EXCLAMATION_BONUS: f64 = 0.2;
const MAGNITUDE_BONUS: f64 = 0.2;
const MAGNITUDE_THRESHOLD: f64 = 0.5;

/// Live (mood, intensity) pair for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodReading {
    /// -1.0 (deep / negative) to 1.0 (bright / positive)
    pub mood_value: f64,
    /// 0.1 to 1.0
    pub intensity: f64,
}

impl MoodReading {
    /// Reading for empty input.
    pub const IDLE: MoodReading = MoodReading {
        mood_value: 0.0,
        intensity: IDLE_INTENSITY,
    };
}

/// What the live status line should say about the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingStatus {
    /// Nothing typed yet.
    Silent,
    /// Text is being analysed.
    Capturing,
}

impl ReadingStatus {
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            ReadingStatus::Silent
        } else {
            ReadingStatus::Capturing
        }
    }
}

/// Estimates mood and intensity of `text`.
///
/// Total and deterministic: every input yields a reading with
/// `mood_value` in [-1, 1] and `intensity` in [0.1, 1].
pub fn estimate(text: &str) -> MoodReading {
    if text.is_empty() {
        return MoodReading::IDLE;
    }

    let lowered = text.to_lowercase();
    let score = match classify_script(text) {
        ScriptFamily::LatinToken => score_latin(&lowered),
        ScriptFamily::Ideograph => score_ideograph(&lowered),
    };

    MoodReading {
        mood_value: score.clamp(-1.0, 1.0),
        intensity: intensity(text, score),
    }
}

/// Scores whole tokens; a negator token inverts and dampens the next token.
fn score_latin(lowered: &str) -> f64 {
    let normalized = lowered.replace('\u{2019}', "'");
    let tokens = tokenize(&normalized);
    let mut score = 0.0;

    for (index, token) in tokens.iter().enumerate() {
        let negated = index > 0 && is_latin_negator(tokens[index - 1]);

        for (polarity, terms) in Polarity::lexicons() {
            if !terms.iter().any(|term| token.contains(term)) {
                continue;
            }
            let weight = polarity.weight();
            score += if negated {
                weight * LATIN_NEGATION_FACTOR
            } else {
                weight
            };
        }
    }

    score
}

/// Scores every (possibly overlapping) occurrence of every term in the raw
/// string; a negator character right before a match softens and flips it.
fn score_ideograph(lowered: &str) -> f64 {
    let mut score = 0.0;

    for (polarity, terms) in Polarity::lexicons() {
        for term in terms {
            let mut start = 0;
            while let Some(found) = lowered[start..].find(term) {
                let at = start + found;
                let negated = lowered[..at]
                    .chars()
                    .next_back()
                    .is_some_and(is_ideograph_negator);

                score += if negated {
                    polarity.ideograph_negated_weight()
                } else {
                    polarity.weight()
                };

                // Resume one character later so overlapping hits are found.
                let step = lowered[at..].chars().next().map_or(1, char::len_utf8);
                start = at + step;
            }
        }
    }

    score
}

fn intensity(text: &str, raw_score: f64) -> f64 {
    let length = text.chars().count() as f64;
    let mut intensity = (length / LENGTH_SCALE).min(1.0);

    if text.contains('!') || text.contains('！') {
        intensity += EXCLAMATION_BONUS;
    }
    if raw_score.abs() > MAGNITUDE_THRESHOLD {
        intensity += MAGNITUDE_BONUS;
    }

    intensity.clamp(IDLE_INTENSITY, 1.0)
}

/// Splits on whitespace and punctuation, keeping apostrophes inside words.
fn tokenize(lowered: &str) -> Vec<&str> {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .collect()
}
