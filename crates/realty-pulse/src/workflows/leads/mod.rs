//! Lead capture: questionnaire scoring, intake validation, and follow-up routing.

pub mod domain;
pub mod intake;
pub mod notifier;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactPreference, ImportantFactor, Intent, LeadId, PropertyType, QualificationAnswers,
    Timeline,
};
pub use intake::{LeadContact, LeadIntakeError, LeadSubmission};
pub use notifier::{LeadNotification, LeadNotifier, NotifyError};
pub use router::lead_router;
pub use scoring::{
    calculate_lead_score, ContactPreferencePoints, ImportantFactorPoints, IntentPoints,
    LeadPriority, LeadScoreResult, LeadScorer, LeadTemperature, PropertyTypePoints,
    ScoreBreakdown, ScoringTables, TimelinePoints,
};
pub use service::{LeadIntakeService, LeadReceipt, LeadServiceError};
