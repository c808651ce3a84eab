use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use super::domain::{LeadId, LeadStatus, LeadSubmission};
use super::intake::{IntakeGuard, IntakeViolation};
use super::report::{build_report, EligibilityReport};
use super::repository::{
    ChannelError, LeadRecord, LeadRepository, RepositoryError, VerificationChannel,
};
use super::scoring::{EligibilityEngine, EligibilityResult};

/// Service composing the intake guard, lead store, verification channel, and
/// scoring engine.
pub struct LeadIntakeService<R, C> {
    guard: IntakeGuard,
    repository: Arc<R>,
    channel: Arc<C>,
    engine: EligibilityEngine,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, C> LeadIntakeService<R, C>
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    pub fn new(repository: Arc<R>, channel: Arc<C>) -> Self {
        Self {
            guard: IntakeGuard::new(),
            repository,
            channel,
            engine: EligibilityEngine::new(),
        }
    }

    /// Accept a new lead: sanitize, score the raw profile once, store the
    /// record, and issue a one-time verification code.
    ///
    /// The intake score is provisional; most scoring fields are still absent
    /// at this point, so a low score is expected and not meaningful.
    pub fn submit(&self, submission: LeadSubmission) -> Result<LeadRecord, FunnelServiceError> {
        let (contact, profile) = self.guard.sanitize(submission)?;
        let lead_id = next_lead_id();

        let provisional = self.engine.score(&profile);
        let record = LeadRecord {
            lead_id: lead_id.clone(),
            contact,
            profile,
            status: LeadStatus::Submitted,
            evaluation: Some(provisional),
            received_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        self.channel.issue(&lead_id, &stored.contact)?;
        info!(lead = %lead_id.0, "lead received, verification code issued");

        Ok(stored)
    }

    /// Confirm a one-time code, then re-score the stored profile. This
    /// second score is the authoritative one and is persisted.
    pub fn verify(
        &self,
        lead_id: &LeadId,
        code: &str,
    ) -> Result<EligibilityResult, FunnelServiceError> {
        let mut record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;

        if !self.channel.confirm(lead_id, code)? {
            return Err(FunnelServiceError::VerificationRejected);
        }

        let result = self.engine.score(&record.profile);
        record.status = LeadStatus::Verified;
        record.evaluation = Some(result.clone());
        self.repository.update(record)?;

        info!(
            lead = %lead_id.0,
            score = result.score,
            eligible = result.is_eligible,
            "lead verified and scored"
        );

        Ok(result)
    }

    /// Fetch a lead record for status views.
    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, FunnelServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Verified leads awaiting admin review.
    pub fn review_queue(&self, limit: usize) -> Result<Vec<LeadRecord>, FunnelServiceError> {
        Ok(self.repository.review_queue(limit)?)
    }

    /// Build the report content for the external document renderer.
    pub fn report(
        &self,
        lead_id: &LeadId,
        generated_on: NaiveDate,
    ) -> Result<EligibilityReport, FunnelServiceError> {
        let record = self.get(lead_id)?;
        build_report(&record, generated_on).ok_or(FunnelServiceError::NotScored)
    }
}

/// Error raised by the lead intake service.
#[derive(Debug, thiserror::Error)]
pub enum FunnelServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error("verification code rejected")]
    VerificationRejected,
    #[error("lead has not been scored yet")]
    NotScored,
}
