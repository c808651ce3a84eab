//! Score-bracket-to-message ladder, evaluated top-down, first match wins.

const FALLBACK: &str = "Your profile needs improvement before applying. Book a \
                        session with one of our counselors for guidance.";

const LADDER: &[(u8, &str)] = &[
    (
        85,
        "Excellent profile! You are a highly competitive applicant for study-visa admission.",
    ),
    (
        75,
        "Great profile. You have a strong chance of admission to your preferred programs.",
    ),
    (
        65,
        "Good profile with solid prospects. Addressing the highlighted areas would strengthen your application.",
    ),
    (
        55,
        "Your profile shows potential. We recommend improving the highlighted areas before applying.",
    ),
];

pub(crate) fn for_score(score: u8) -> &'static str {
    LADDER
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, message)| *message)
        .unwrap_or(FALLBACK)
}
