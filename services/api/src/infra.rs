use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use visafunnel::funnel::{
    ChannelError, ContactDetails, LeadId, LeadRecord, LeadRepository, LeadStatus, RepositoryError,
    VerificationChannel,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.lead_id) {
            guard.insert(record.lead_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn review_queue(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut verified: Vec<LeadRecord> = guard
            .values()
            .filter(|record| record.status == LeadStatus::Verified)
            .cloned()
            .collect();
        verified.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        verified.truncate(limit);
        Ok(verified)
    }
}

/// Stand-in for the external notification provider: logs the issuance and
/// accepts a single configured code. Replaced by the real SMS/e-mail
/// adapter in deployment.
#[derive(Clone)]
pub(crate) struct StubVerificationChannel {
    accepted_code: Arc<str>,
}

impl StubVerificationChannel {
    pub(crate) fn new(accepted_code: &str) -> Self {
        Self {
            accepted_code: Arc::from(accepted_code),
        }
    }
}

impl VerificationChannel for StubVerificationChannel {
    fn issue(&self, lead_id: &LeadId, contact: &ContactDetails) -> Result<(), ChannelError> {
        info!(
            lead = %lead_id.0,
            email = %contact.email,
            "verification code issued (stub channel)"
        );
        Ok(())
    }

    fn confirm(&self, _lead_id: &LeadId, code: &str) -> Result<bool, ChannelError> {
        Ok(code == self.accepted_code.as_ref())
    }
}
