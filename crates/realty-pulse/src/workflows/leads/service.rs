use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::domain::{LeadId, QualificationAnswers};
use super::intake::{LeadIntakeError, LeadSubmission};
use super::notifier::{LeadNotification, LeadNotifier, NotifyError};
use super::scoring::{LeadScoreResult, LeadScorer, ScoringTables};

/// Service composing intake validation, the scorer, and the outbound notifier.
pub struct LeadIntakeService<N> {
    scorer: Arc<LeadScorer>,
    notifier: Arc<N>,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

/// Acknowledgement returned to the form once a lead is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadReceipt {
    pub lead_id: LeadId,
    pub template: String,
    #[serde(flatten)]
    pub result: LeadScoreResult,
}

impl<N> LeadIntakeService<N>
where
    N: LeadNotifier + 'static,
{
    pub fn new(notifier: Arc<N>, tables: ScoringTables) -> Self {
        Self {
            scorer: Arc::new(LeadScorer::new(tables)),
            notifier,
        }
    }

    /// Scores answers without capturing a lead.
    pub fn score(&self, answers: &QualificationAnswers) -> LeadScoreResult {
        self.scorer.score(answers)
    }

    /// Validate, score, and hand the lead to the notifier.
    pub fn submit(&self, submission: LeadSubmission) -> Result<LeadReceipt, LeadServiceError> {
        let contact = submission.validated_contact()?;
        let result = self.scorer.score(&submission.answers);
        let lead_id = next_lead_id();

        let mut notification =
            LeadNotification::new(lead_id.clone(), contact, &result, Utc::now());
        if let Some(page) = submission.source_page {
            notification.details.insert("source_page".to_string(), page);
        }
        if let Some(range) = submission.answers.value_range {
            notification.details.insert("value_range".to_string(), range);
        }
        let template = notification.template.clone();

        self.notifier.notify(notification)?;

        info!(
            lead_id = %lead_id.0,
            score = result.score,
            temperature = result.temperature.label(),
            priority = result.priority.label(),
            "lead captured"
        );

        Ok(LeadReceipt {
            lead_id,
            template,
            result,
        })
    }
}

/// Error raised by the lead intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Intake(#[from] LeadIntakeError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
