//! Lead intake and eligibility scoring for the study-visa admissions funnel.
//!
//! The [`funnel`] module carries the domain: applicant profiles, the
//! deterministic eligibility scoring engine, the intake/verification service,
//! and the report builder consumed by the document renderer. The remaining
//! modules supply configuration, telemetry, and the application error type.

pub mod config;
pub mod error;
pub mod funnel;
pub mod telemetry;
