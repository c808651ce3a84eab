use serde::{Deserialize, Serialize};

/// Identifier wrapper for funnel leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Contact details collected at the top of the funnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// Applicant eligibility data as it arrives from the web form.
///
/// Every field is independently optional; most are absent at initial intake
/// and only filled in once the applicant completes the full questionnaire.
/// Categorical fields hold free-form strings so that unrecognized values can
/// degrade to the rubric's default tier instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityProfile {
    /// Highest credential: "phd", "master", "bachelor", "12th", or "10th".
    #[serde(default)]
    pub education: Option<String>,
    /// Grade achieved for the credential; interpretation depends on `grade_type`.
    #[serde(default)]
    pub education_grade: Option<String>,
    /// "cgpa" (out of 10) or "percentage".
    #[serde(default)]
    pub grade_type: Option<String>,
    /// "yes" when a language test was taken; anything else means no test.
    #[serde(default)]
    pub has_language_test: Option<String>,
    /// "ielts", "toefl", or "pte".
    #[serde(default)]
    pub language_test: Option<String>,
    /// Overall score for whichever test was declared. The field name predates
    /// TOEFL/PTE support and is kept for wire compatibility.
    #[serde(default)]
    pub ielts_score: Option<String>,
    /// "yes" when the applicant has work experience.
    #[serde(default)]
    pub has_work_experience: Option<String>,
    /// Whole years of work experience.
    #[serde(default)]
    pub work_experience_years: Option<String>,
    /// Funds bucket in lakhs: "above-60", "40-60", "20-40", or "below-20".
    #[serde(default)]
    pub financial_capacity: Option<String>,
}

/// Raw lead payload accepted by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub contact: ContactDetails,
    #[serde(default)]
    pub profile: EligibilityProfile,
}

/// Lifecycle status of a lead within the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Received and provisionally scored; awaiting code confirmation.
    Submitted,
    /// Identity confirmed; the stored score is authoritative.
    Verified,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Submitted => "submitted",
            LeadStatus::Verified => "verified",
        }
    }
}
