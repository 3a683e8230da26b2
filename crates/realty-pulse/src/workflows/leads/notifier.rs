use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::LeadId;
use super::intake::LeadContact;
use super::scoring::{LeadPriority, LeadScoreResult, LeadTemperature};

/// Outbound hook for agent alerts and nurture sequences (e-mail or CRM adapters).
pub trait LeadNotifier: Send + Sync {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Payload handed to the notifier; delivery and retries belong to the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub template: String,
    pub lead_id: LeadId,
    pub contact: LeadContact,
    pub score: u8,
    pub temperature: LeadTemperature,
    pub priority: LeadPriority,
    pub received_at: DateTime<Utc>,
    pub details: BTreeMap<String, String>,
}

impl LeadNotification {
    pub fn template_for(priority: LeadPriority) -> &'static str {
        match priority {
            LeadPriority::Immediate => "agent_hot_lead_alert",
            LeadPriority::SameDay => "agent_warm_lead_alert",
            LeadPriority::Nurture => "lead_nurture_sequence",
            LeadPriority::Drip => "lead_drip_sequence",
        }
    }

    pub fn new(
        lead_id: LeadId,
        contact: LeadContact,
        result: &LeadScoreResult,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            template: Self::template_for(result.priority).to_string(),
            lead_id,
            contact,
            score: result.score,
            temperature: result.temperature,
            priority: result.priority,
            received_at,
            details: BTreeMap::new(),
        }
    }
}
