//! [`PeriodReporter`] backed by a [`TextAgent`].

use crate::agent::{AgentError, AgentRequest, TextAgent, strip_code_fence};
use crate::prompts::{self, ReportFigures};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moodmix_core::insights::{
    PeriodReport, PeriodReporter, PeriodSummary, in_period, period_breakdown,
};
use moodmix_core::{Language, MoodCocktail, MoodError, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Newest entries of the window that are sent along with the counts.
pub const MAX_REPORTED_ENTRIES: usize = 20;

/// What the model sees of one cocktail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportedEntry<'a> {
    date: String,
    name: &'a str,
    mood_value: f64,
    intensity: f64,
    sensation: &'a str,
}

impl<'a> ReportedEntry<'a> {
    fn of(cocktail: &'a MoodCocktail) -> Self {
        let date = DateTime::<Utc>::from_timestamp_millis(cocktail.created_at)
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Self {
            date,
            name: &cocktail.name,
            mood_value: (cocktail.mood_value * 100.0).round() / 100.0,
            intensity: (cocktail.intensity * 100.0).round() / 100.0,
            sensation: &cocktail.sensation,
        }
    }
}

/// Asks an agent to reflect on a window of the history.
pub struct AgentPeriodReporter {
    agent: Arc<dyn TextAgent>,
}

impl AgentPeriodReporter {
    pub fn new(agent: Arc<dyn TextAgent>) -> Self {
        Self { agent }
    }

    async fn try_report(
        &self,
        figures: &ReportFigures,
        entries: &Value,
        language: Language,
    ) -> std::result::Result<PeriodSummary, AgentError> {
        let request = AgentRequest::new(prompts::render_report_prompt(figures, entries, language)?)
            .with_system_instruction(prompts::REPORTER_INSTRUCTION)
            .with_response_schema(prompts::period_summary_schema());

        let raw = self.agent.execute(request).await?;
        let summary: PeriodSummary = serde_json::from_str(strip_code_fence(&raw))
            .map_err(|e| AgentError::Parse(format!("Invalid summary JSON: {}", e)))?;

        if summary.summary_text.trim().is_empty() {
            return Err(AgentError::Parse("summary has no text".into()));
        }
        if summary.suggested_drink_name.trim().is_empty() {
            return Err(AgentError::Parse("summary suggests no drink".into()));
        }
        Ok(summary)
    }
}

#[async_trait]
impl PeriodReporter for AgentPeriodReporter {
    async fn report(
        &self,
        history: &[MoodCocktail],
        now: DateTime<Utc>,
        days: u32,
        language: Language,
    ) -> Result<PeriodReport> {
        let Some(breakdown) = period_breakdown(history, now, days) else {
            tracing::debug!("[Reporter] No cocktails in the last {} days", days);
            return Ok(PeriodReport::NotEnoughData);
        };

        let figures = ReportFigures {
            days,
            total: breakdown.total,
            negative: breakdown.negative,
            neutral: breakdown.neutral,
            positive: breakdown.positive,
            average_mood: breakdown.average_mood,
        };
        let entries: Vec<ReportedEntry<'_>> = in_period(history, now, days)
            .into_iter()
            .take(MAX_REPORTED_ENTRIES)
            .map(ReportedEntry::of)
            .collect();
        let entries = serde_json::to_value(entries)?;

        match self.try_report(&figures, &entries, language).await {
            Ok(summary) => {
                tracing::info!(
                    "[Reporter] Summarized {} cocktails over {} days",
                    breakdown.total,
                    days
                );
                Ok(PeriodReport::Summary(summary))
            }
            Err(e) => {
                tracing::error!("[Reporter] Period report failed: {}", e);
                Err(MoodError::generation(format!("period report: {}", e)))
            }
        }
    }
}
