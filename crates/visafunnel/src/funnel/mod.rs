//! Lead intake, verification, eligibility scoring, and report content for
//! the study-visa admissions funnel.

pub mod domain;
pub(crate) mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ContactDetails, EligibilityProfile, LeadId, LeadStatus, LeadSubmission};
pub use intake::IntakeViolation;
pub use report::{build_report, EligibilityReport, ReportSection, REPORT_ADMISSION_CUTOFF};
pub use repository::{
    ChannelError, LeadRecord, LeadRepository, LeadStatusView, RepositoryError, VerificationChannel,
};
pub use router::funnel_router;
pub use scoring::{EligibilityEngine, EligibilityResult, ELIGIBILITY_THRESHOLD};
pub use service::{FunnelServiceError, LeadIntakeService};
