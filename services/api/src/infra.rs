use metrics_exporter_prometheus::PrometheusHandle;
use realty_pulse::workflows::leads::{LeadNotification, LeadNotifier, NotifyError};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps notifications in memory until an e-mail or CRM adapter is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadNotifier for InMemoryLeadNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotifyError::Transport("notification log poisoned".to_string()))?;
        info!(
            lead_id = %notification.lead_id.0,
            template = %notification.template,
            "lead notification queued"
        );
        guard.push(notification);
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryLeadNotifier {
    pub(crate) fn events(&self) -> Vec<LeadNotification> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}
