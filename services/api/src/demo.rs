use chrono::{Local, Utc};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use visafunnel::error::AppError;
use visafunnel::funnel::{
    build_report, ContactDetails, EligibilityEngine, EligibilityProfile, LeadId, LeadRecord,
    LeadStatus,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON eligibility profile. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Render the full report text instead of the score summary.
    #[arg(long)]
    pub(crate) report: bool,
    /// Applicant name to print on the rendered report.
    #[arg(long, default_value = "Walk-in applicant")]
    pub(crate) applicant_name: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = match &args.profile {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let profile: EligibilityProfile = serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("profile JSON did not parse: {err}")))?;

    let result = EligibilityEngine::new().score(&profile);

    if args.report {
        let record = LeadRecord {
            lead_id: LeadId("walk-in".to_string()),
            contact: ContactDetails {
                full_name: args.applicant_name.clone(),
                email: "n/a".to_string(),
                phone: "n/a".to_string(),
            },
            profile,
            status: LeadStatus::Verified,
            evaluation: Some(result),
            received_at: Utc::now(),
        };
        // Always Some here, the evaluation was just attached.
        if let Some(report) = build_report(&record, Local::now().date_naive()) {
            print!("{}", report.render_text());
        }
        return Ok(());
    }

    println!("Eligibility score: {} / 100", result.score);
    println!(
        "Eligible: {}",
        if result.is_eligible { "yes" } else { "no" }
    );
    if !result.strengths.is_empty() {
        println!("Strengths:");
        for note in &result.strengths {
            println!("  - {note}");
        }
    }
    if !result.weaknesses.is_empty() {
        println!("Areas to improve:");
        for note in &result.weaknesses {
            println!("  - {note}");
        }
    }
    println!("Suggestion: {}", result.suggestion);

    Ok(())
}
