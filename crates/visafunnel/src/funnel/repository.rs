use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ContactDetails, EligibilityProfile, LeadId, LeadStatus};
use super::scoring::EligibilityResult;

/// Stored representation of a lead: contact, profile, status, and the most
/// recent scoring result (provisional until the lead is verified).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id: LeadId,
    pub contact: ContactDetails,
    pub profile: EligibilityProfile,
    pub status: LeadStatus,
    pub evaluation: Option<EligibilityResult>,
    pub received_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn status_view(&self) -> LeadStatusView {
        LeadStatusView {
            lead_id: self.lead_id.clone(),
            status: self.status.label(),
            score: self.evaluation.as_ref().map(|result| result.score),
            is_eligible: self.evaluation.as_ref().map(|result| result.is_eligible),
            suggestion: self
                .evaluation
                .as_ref()
                .map(|result| result.suggestion.clone()),
        }
    }
}

/// Sanitized lead status exposed over the API; never includes the raw
/// profile answers.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    /// Verified leads awaiting admin review, newest first.
    fn review_queue(&self, limit: usize) -> Result<Vec<LeadRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lead already exists")]
    Conflict,
    #[error("lead not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// One-time-code collaborator. Code generation, storage, and delivery
/// (SMS/e-mail) live outside this service; adapters bridge to the real
/// provider.
pub trait VerificationChannel: Send + Sync {
    /// Issue a fresh code to the lead's contact address.
    fn issue(&self, lead_id: &LeadId, contact: &ContactDetails) -> Result<(), ChannelError>;
    /// Check a code the applicant submitted; `false` means wrong or expired.
    fn confirm(&self, lead_id: &LeadId, code: &str) -> Result<bool, ChannelError>;
}

/// Verification channel transport error.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("verification channel unavailable: {0}")]
    Transport(String),
}
