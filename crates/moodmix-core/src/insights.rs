//! Trends over the cocktail history ("Insights & Trends").

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cocktail::MoodCocktail;
use crate::error::Result;
use crate::language::Language;

/// Mood values within this distance of zero count as neutral.
pub const NEUTRAL_BAND: f64 = 0.2;

/// The wave needs at least this many entries to be worth drawing.
pub const MIN_WAVE_ENTRIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoodBand {
    Negative,
    Neutral,
    Positive,
}

impl MoodBand {
    pub fn of(mood_value: f64) -> Self {
        if mood_value < -NEUTRAL_BAND {
            MoodBand::Negative
        } else if mood_value > NEUTRAL_BAND {
            MoodBand::Positive
        } else {
            MoodBand::Neutral
        }
    }
}

/// One point of the emotional wave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub average_mood: f64,
    pub average_intensity: f64,
    pub count: usize,
}

/// Band counts for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBreakdown {
    pub total: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
    pub average_mood: f64,
    pub dominant: MoodBand,
}

/// Written reflection on a period, with a drink suggested for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub summary_text: String,
    pub dominant_mood: String,
    pub suggested_drink_name: String,
    pub suggested_drink_description: String,
}

/// Outcome of asking for a period report.
#[derive(Debug, Clone, PartialEq)]
pub enum PeriodReport {
    /// No cocktails fall inside the requested window.
    NotEnoughData,
    Summary(PeriodSummary),
}

/// Writes a [`PeriodSummary`] for the recent history.
#[async_trait]
pub trait PeriodReporter: Send + Sync {
    /// Reports on the cocktails created in the last `days` days before `now`.
    ///
    /// # Returns
    ///
    /// - `Ok(PeriodReport::NotEnoughData)`: the window is empty; no remote call is made
    /// - `Ok(PeriodReport::Summary(_))`: summary written in `language`
    /// - `Err(MoodError::Generation)`: the summary could not be produced
    async fn report(
        &self,
        history: &[MoodCocktail],
        now: DateTime<Utc>,
        days: u32,
        language: Language,
    ) -> Result<PeriodReport>;
}

/// Per-day averages for the last `days` days, oldest first.
///
/// Days without cocktails are omitted. Returns `None` when the window holds
/// fewer than [`MIN_WAVE_ENTRIES`] cocktails.
pub fn emotional_wave(
    history: &[MoodCocktail],
    now: DateTime<Utc>,
    days: u32,
) -> Option<Vec<DailyMood>> {
    let in_window = within_window(history, now, days);
    if in_window.len() < MIN_WAVE_ENTRIES {
        return None;
    }

    let mut by_day: BTreeMap<NaiveDate, (f64, f64, usize)> = BTreeMap::new();
    for (created, cocktail) in in_window {
        let entry = by_day.entry(created.date_naive()).or_insert((0.0, 0.0, 0));
        entry.0 += cocktail.mood_value;
        entry.1 += cocktail.intensity;
        entry.2 += 1;
    }

    Some(
        by_day
            .into_iter()
            .map(|(date, (mood, intensity, count))| DailyMood {
                date,
                average_mood: mood / count as f64,
                average_intensity: intensity / count as f64,
                count,
            })
            .collect(),
    )
}

/// Band counts and the dominant band for the last `days` days.
///
/// Returns `None` for an empty window. When no single band has the highest
/// count the period is reported as neutral.
pub fn period_breakdown(
    history: &[MoodCocktail],
    now: DateTime<Utc>,
    days: u32,
) -> Option<PeriodBreakdown> {
    let in_window = within_window(history, now, days);
    if in_window.is_empty() {
        return None;
    }

    let (mut negative, mut neutral, mut positive) = (0, 0, 0);
    let mut mood_sum = 0.0;
    for (_, cocktail) in &in_window {
        mood_sum += cocktail.mood_value;
        match MoodBand::of(cocktail.mood_value) {
            MoodBand::Negative => negative += 1,
            MoodBand::Neutral => neutral += 1,
            MoodBand::Positive => positive += 1,
        }
    }

    let max = negative.max(neutral).max(positive);
    let leaders: Vec<MoodBand> = [
        (MoodBand::Negative, negative),
        (MoodBand::Neutral, neutral),
        (MoodBand::Positive, positive),
    ]
    .into_iter()
    .filter(|(_, count)| *count == max)
    .map(|(band, _)| band)
    .collect();
    let dominant = match leaders.as_slice() {
        [single] => *single,
        _ => MoodBand::Neutral,
    };

    let total = in_window.len();
    Some(PeriodBreakdown {
        total,
        negative,
        neutral,
        positive,
        average_mood: mood_sum / total as f64,
        dominant,
    })
}

/// Cocktails created in the last `days` days, in history order.
pub fn in_period(history: &[MoodCocktail], now: DateTime<Utc>, days: u32) -> Vec<&MoodCocktail> {
    within_window(history, now, days)
        .into_iter()
        .map(|(_, cocktail)| cocktail)
        .collect()
}

fn within_window(
    history: &[MoodCocktail],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<(DateTime<Utc>, &MoodCocktail)> {
    let since = now - Duration::days(i64::from(days));
    history
        .iter()
        .filter_map(|cocktail| {
            DateTime::<Utc>::from_timestamp_millis(cocktail.created_at)
                .map(|created| (created, cocktail))
        })
        .filter(|(created, _)| *created > since && *created <= now)
        .collect()
}
