//! Soundscape plan derived from a cocktail's mood.
//!
//! This only describes what an ambient player should do (scale, pacing,
//! envelope). Producing audio is left to whatever front end plays it.

use serde::Serialize;

use crate::cocktail::SonicVibe;

/// Moods above this are played on the bright (major) scale.
pub const BRIGHT_THRESHOLD: f64 = -0.1;

/// C major pentatonic and friends, C4 upward (Hz).
pub const MAJOR_SCALE: [f64; 7] = [261.63, 293.66, 329.63, 392.00, 440.00, 523.25, 587.33];
/// C minor pentatonic and friends, C3 upward (Hz).
pub const MINOR_SCALE: [f64; 7] = [130.81, 155.56, 174.61, 196.00, 233.08, 261.63, 311.13];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// Attack/release envelope of a single note, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Envelope {
    pub attack_secs: f64,
    pub release_secs: f64,
    pub peak_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundscapePlan {
    /// Genre from the cocktail's vibe, or a scale based default.
    pub label: String,
    pub bright: bool,
    pub scale: Vec<f64>,
    pub waveform: Waveform,
    /// Time between notes.
    pub note_interval_ms: u64,
    pub envelope: Envelope,
}

impl SoundscapePlan {
    pub fn for_mood(mood_value: f64, vibe: Option<&SonicVibe>) -> Self {
        let bright = mood_value > BRIGHT_THRESHOLD;

        let label = vibe
            .map(|v| v.genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                if mood_value > 0.0 {
                    "Serene Major".to_string()
                } else {
                    "Ambient Minor".to_string()
                }
            });

        if bright {
            Self {
                label,
                bright,
                scale: MAJOR_SCALE.to_vec(),
                waveform: Waveform::Sine,
                note_interval_ms: 2500,
                envelope: Envelope {
                    attack_secs: 0.05,
                    release_secs: 3.0,
                    peak_gain: 0.15,
                },
            }
        } else {
            Self {
                label,
                bright,
                scale: MINOR_SCALE.to_vec(),
                waveform: Waveform::Triangle,
                note_interval_ms: 4000,
                envelope: Envelope {
                    attack_secs: 0.8,
                    release_secs: 5.0,
                    peak_gain: 0.1,
                },
            }
        }
    }
}
