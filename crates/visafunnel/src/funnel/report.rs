use chrono::NaiveDate;
use serde::Serialize;

use super::repository::LeadRecord;

/// Score at or above which the exported report declares the applicant
/// admissible. Deliberately stricter than the engine's eligibility
/// threshold of 60; the two definitions coexist and must not be unified.
pub const REPORT_ADMISSION_CUTOFF: u8 = 70;

/// Fully-laid-out report content handed to the external document renderer.
/// Consumes only the stored score and notes; it never re-runs the engine.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub lead_id: String,
    pub applicant_name: String,
    pub generated_on: NaiveDate,
    pub score: u8,
    pub eligible_for_admission: bool,
    pub verdict: &'static str,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// Build report content from a stored record. Returns `None` when the lead
/// has never been scored.
pub fn build_report(record: &LeadRecord, generated_on: NaiveDate) -> Option<EligibilityReport> {
    let evaluation = record.evaluation.as_ref()?;
    let eligible = evaluation.score >= REPORT_ADMISSION_CUTOFF;
    let verdict = if eligible {
        "Eligible for admission"
    } else {
        "Not eligible for admission"
    };

    let mut sections = vec![
        ReportSection {
            heading: "Applicant",
            lines: vec![
                format!("Name: {}", record.contact.full_name),
                format!("Email: {}", record.contact.email),
                format!("Phone: {}", record.contact.phone),
            ],
        },
        ReportSection {
            heading: "Assessment",
            lines: vec![
                format!("Eligibility score: {} / 100", evaluation.score),
                format!("Verdict: {verdict}"),
                format!("Profile status: {}", record.status.label()),
            ],
        },
    ];

    if !evaluation.strengths.is_empty() {
        sections.push(ReportSection {
            heading: "Strengths",
            lines: evaluation.strengths.clone(),
        });
    }
    if !evaluation.weaknesses.is_empty() {
        sections.push(ReportSection {
            heading: "Areas to improve",
            lines: evaluation.weaknesses.clone(),
        });
    }
    sections.push(ReportSection {
        heading: "Recommendation",
        lines: vec![evaluation.suggestion.clone()],
    });

    Some(EligibilityReport {
        lead_id: record.lead_id.0.clone(),
        applicant_name: record.contact.full_name.clone(),
        generated_on,
        score: evaluation.score,
        eligible_for_admission: eligible,
        verdict,
        sections,
    })
}

impl EligibilityReport {
    /// Plain-text rendering, one heading per section. The PDF renderer lays
    /// this content out; nothing here depends on a page format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Study Visa Eligibility Report - {}\n",
            self.applicant_name
        ));
        out.push_str(&format!("Generated on {}\n", self.generated_on));
        for section in &self.sections {
            out.push('\n');
            out.push_str(section.heading);
            out.push('\n');
            for line in &section.lines {
                out.push_str("  - ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}
