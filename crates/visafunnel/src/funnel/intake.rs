use super::domain::{ContactDetails, EligibilityProfile, LeadSubmission};

/// Validation errors raised by the intake guard.
///
/// These cover structural shape only. Semantically odd category values or
/// unparsable numbers are never rejected here; the scoring engine degrades
/// them to default tiers by contract.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("applicant name is required")]
    MissingName,
    #[error("'{0}' is not a usable email address")]
    InvalidEmail(String),
    #[error("'{0}' is not a usable phone number")]
    InvalidPhone(String),
}

/// Guard that checks contact shape and normalizes profile fields before a
/// submission reaches storage or the scoring engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert a raw submission into sanitized contact and profile records.
    pub fn sanitize(
        &self,
        submission: LeadSubmission,
    ) -> Result<(ContactDetails, EligibilityProfile), IntakeViolation> {
        let LeadSubmission { contact, profile } = submission;

        let full_name = contact.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(IntakeViolation::MissingName);
        }

        let email = contact.email.trim().to_string();
        if !is_plausible_email(&email) {
            return Err(IntakeViolation::InvalidEmail(email));
        }

        let phone = contact.phone.trim().to_string();
        if phone.chars().filter(|c| c.is_ascii_digit()).count() < 7 {
            return Err(IntakeViolation::InvalidPhone(phone));
        }

        let contact = ContactDetails {
            full_name,
            email,
            phone,
        };

        Ok((contact, normalize_profile(profile)))
    }
}

/// Deliverability is the notification channel's problem; this only rejects
/// values that cannot be an address at all.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Categorical answers are matched exactly by the rubric, so intake folds
/// case and whitespace once here. Numeric strings are only trimmed; parsing
/// stays the engine's concern.
fn normalize_profile(profile: EligibilityProfile) -> EligibilityProfile {
    EligibilityProfile {
        education: categorical(profile.education),
        education_grade: trimmed(profile.education_grade),
        grade_type: categorical(profile.grade_type),
        has_language_test: categorical(profile.has_language_test),
        language_test: categorical(profile.language_test),
        ielts_score: trimmed(profile.ielts_score),
        has_work_experience: categorical(profile.has_work_experience),
        work_experience_years: trimmed(profile.work_experience_years),
        financial_capacity: categorical(profile.financial_capacity),
    }
}

fn categorical(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_ascii_lowercase())
        .filter(|raw| !raw.is_empty())
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
