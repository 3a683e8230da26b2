use super::common::*;
use crate::workflows::leads::notifier::LeadNotification;
use crate::workflows::leads::scoring::{LeadPriority, LeadTemperature, ScoringTables};
use crate::workflows::leads::service::LeadServiceError;
use crate::workflows::leads::LeadIntakeService;
use std::sync::Arc;

#[test]
fn submit_scores_and_notifies_agent() {
    let (service, notifier) = build_service();

    let receipt = service.submit(submission()).expect("lead accepted");

    assert!(receipt.lead_id.0.starts_with("lead-"));
    assert_eq!(receipt.result.score, 100);
    assert_eq!(receipt.result.priority, LeadPriority::Immediate);
    assert_eq!(receipt.template, "agent_hot_lead_alert");

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.lead_id, receipt.lead_id);
    assert_eq!(event.contact.email, "dana.whitfield@example.com");
    assert_eq!(event.temperature, LeadTemperature::Hot);
    assert_eq!(
        event.details.get("source_page").map(String::as_str),
        Some("/market/burlington-county")
    );
}

#[test]
fn cold_leads_route_to_drip_sequence() {
    let (service, notifier) = build_service();
    let mut submission = submission();
    submission.answers = browsing_answers();

    let receipt = service.submit(submission).expect("lead accepted");

    assert_eq!(receipt.result.priority, LeadPriority::Drip);
    assert_eq!(notifier.events()[0].template, "lead_drip_sequence");
}

#[test]
fn invalid_contact_never_reaches_notifier() {
    let (service, notifier) = build_service();
    let mut submission = submission();
    submission.email = "not-an-email".to_string();

    let error = service.submit(submission).expect_err("rejected");

    assert!(matches!(error, LeadServiceError::Intake(_)));
    assert!(notifier.events().is_empty());
}

#[test]
fn notifier_failures_surface_to_caller() {
    let service = LeadIntakeService::new(Arc::new(OfflineNotifier), ScoringTables::standard());

    let error = service.submit(submission()).expect_err("transport down");

    assert!(matches!(error, LeadServiceError::Notify(_)));
    assert!(error.to_string().contains("smtp relay offline"));
}

#[test]
fn lead_ids_are_unique() {
    let (service, _) = build_service();
    let first = service.submit(submission()).expect("first");
    let second = service.submit(submission()).expect("second");

    assert_ne!(first.lead_id, second.lead_id);
}

#[test]
fn templates_cover_every_priority() {
    assert_eq!(
        LeadNotification::template_for(LeadPriority::SameDay),
        "agent_warm_lead_alert"
    );
    assert_eq!(
        LeadNotification::template_for(LeadPriority::Nurture),
        "lead_nurture_sequence"
    );
}
