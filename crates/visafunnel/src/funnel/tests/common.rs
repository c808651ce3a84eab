use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::funnel::domain::{ContactDetails, EligibilityProfile, LeadId, LeadStatus, LeadSubmission};
use crate::funnel::repository::{
    ChannelError, LeadRecord, LeadRepository, RepositoryError, VerificationChannel,
};
use crate::funnel::scoring::EligibilityEngine;
use crate::funnel::{funnel_router, LeadIntakeService};

pub(super) const DEMO_CODE: &str = "424242";

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        full_name: "Priya Sharma".to_string(),
        email: "priya.sharma@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
    }
}

/// Scenario: top-tier profile scoring 100 across every category.
pub(super) fn full_profile() -> EligibilityProfile {
    EligibilityProfile {
        education: Some("phd".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("ielts".to_string()),
        ielts_score: Some("8.0".to_string()),
        has_work_experience: Some("yes".to_string()),
        work_experience_years: Some("6".to_string()),
        financial_capacity: Some("above-60".to_string()),
        ..EligibilityProfile::default()
    }
}

/// Scenario: bachelor with a mid CGPA, TOEFL, and moderate funds (scores 79).
pub(super) fn bachelor_toefl_profile() -> EligibilityProfile {
    EligibilityProfile {
        education: Some("bachelor".to_string()),
        education_grade: Some("7.5".to_string()),
        grade_type: Some("cgpa".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("toefl".to_string()),
        ielts_score: Some("95".to_string()),
        has_work_experience: Some("yes".to_string()),
        work_experience_years: Some("3".to_string()),
        financial_capacity: Some("20-40".to_string()),
        ..EligibilityProfile::default()
    }
}

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        contact: contact(),
        profile: full_profile(),
    }
}

pub(super) fn submission_with(profile: EligibilityProfile) -> LeadSubmission {
    LeadSubmission {
        contact: contact(),
        profile,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new()
}

pub(super) fn build_service() -> (
    LeadIntakeService<MemoryRepository, MemoryChannel>,
    Arc<MemoryRepository>,
    Arc<MemoryChannel>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let channel = Arc::new(MemoryChannel::default());
    let service = LeadIntakeService::new(repository.clone(), channel.clone());
    (service, repository, channel)
}

pub(super) fn funnel_router_with_service(
    service: LeadIntakeService<MemoryRepository, MemoryChannel>,
) -> axum::Router {
    funnel_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
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
        guard.insert(record.lead_id.clone(), record);
        Ok(())
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

/// Channel double that records issued codes and accepts only [`DEMO_CODE`].
#[derive(Default, Clone)]
pub(super) struct MemoryChannel {
    issued: Arc<Mutex<Vec<LeadId>>>,
}

impl MemoryChannel {
    pub(super) fn issued(&self) -> Vec<LeadId> {
        self.issued.lock().expect("channel mutex poisoned").clone()
    }
}

impl VerificationChannel for MemoryChannel {
    fn issue(&self, lead_id: &LeadId, _contact: &ContactDetails) -> Result<(), ChannelError> {
        self.issued
            .lock()
            .expect("channel mutex poisoned")
            .push(lead_id.clone());
        Ok(())
    }

    fn confirm(&self, _lead_id: &LeadId, code: &str) -> Result<bool, ChannelError> {
        Ok(code == DEMO_CODE)
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn review_queue(&self, _limit: usize) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
