mod policy;
mod rules;
mod tables;

pub use policy::{LeadPriority, LeadTemperature};
pub use tables::{
    ContactPreferencePoints, ImportantFactorPoints, IntentPoints, PropertyTypePoints,
    ScoringTables, TimelinePoints,
};

use super::domain::QualificationAnswers;
use serde::{Deserialize, Serialize};

pub const MAX_LEAD_SCORE: u8 = 100;

/// Stateless scorer applying one set of point tables to questionnaire answers.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    tables: ScoringTables,
}

impl LeadScorer {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn score(&self, answers: &QualificationAnswers) -> LeadScoreResult {
        calculate_lead_score(answers, &self.tables)
    }
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::new(ScoringTables::standard())
    }
}

/// Points earned per category before the total is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub timeline: u8,
    pub intent: u8,
    pub property_details: u8,
    pub contact_readiness: u8,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> u16 {
        u16::from(self.timeline)
            + u16::from(self.intent)
            + u16::from(self.property_details)
            + u16::from(self.contact_readiness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScoreResult {
    pub score: u8,
    pub temperature: LeadTemperature,
    pub priority: LeadPriority,
    pub breakdown: ScoreBreakdown,
}

/// Categories are summed uncapped; only the total is clamped to 0..=100.
pub fn calculate_lead_score(
    answers: &QualificationAnswers,
    tables: &ScoringTables,
) -> LeadScoreResult {
    let breakdown = rules::score_answers(answers, tables);
    let score = breakdown.raw_total().min(u16::from(MAX_LEAD_SCORE)) as u8;
    let temperature = LeadTemperature::from_score(score);

    LeadScoreResult {
        score,
        temperature,
        priority: temperature.priority(),
        breakdown,
    }
}
