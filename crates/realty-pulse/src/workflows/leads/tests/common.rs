use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::leads::domain::{
    ContactPreference, ImportantFactor, Intent, PropertyType, QualificationAnswers, Timeline,
};
use crate::workflows::leads::intake::LeadSubmission;
use crate::workflows::leads::notifier::{LeadNotification, LeadNotifier, NotifyError};
use crate::workflows::leads::scoring::{LeadScorer, ScoringTables};
use crate::workflows::leads::{lead_router, LeadIntakeService};

pub(super) fn scorer() -> LeadScorer {
    LeadScorer::new(ScoringTables::standard())
}

pub(super) fn motivated_answers() -> QualificationAnswers {
    QualificationAnswers {
        intent: Intent::Both,
        timeline: Timeline::Within30Days,
        property_type: Some(PropertyType::MultiFamily),
        value_range: None,
        important_factor: Some(ImportantFactor::Speed),
        pre_approved: Some(true),
        contact_preference: Some(ContactPreference::Asap),
    }
}

pub(super) fn browsing_answers() -> QualificationAnswers {
    QualificationAnswers::new(Intent::Browsing, Timeline::SixPlusMonths)
}

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        name: "  Dana   Whitfield ".to_string(),
        email: "Dana.Whitfield@Example.com".to_string(),
        phone: Some("+1 (856) 555-0142".to_string()),
        source_page: Some("/market/burlington-county".to_string()),
        answers: motivated_answers(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    pub(super) events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl LeadNotifier for OfflineNotifier {
    fn notify(&self, _notification: LeadNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) fn build_service() -> (LeadIntakeService<MemoryNotifier>, MemoryNotifier) {
    let notifier = MemoryNotifier::default();
    let service = LeadIntakeService::new(Arc::new(notifier.clone()), ScoringTables::standard());
    (service, notifier)
}

pub(super) fn router_with_service(service: LeadIntakeService<MemoryNotifier>) -> axum::Router {
    lead_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
