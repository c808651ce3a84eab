//! The admission rubric as ordered decision tables.
//!
//! Each category keeps its thresholds in a `Band` slice ordered from the
//! highest tier down; the first band whose `min` the value meets wins. Point
//! totals: education 40 (35 base + 5 bonus), language 30, work 15,
//! financial 20.

use super::super::domain::EligibilityProfile;
use super::CategoryScore;

#[derive(Clone, Copy)]
enum Tone {
    Strength,
    Weakness,
}

/// One row of an ordered threshold table.
struct Band {
    min: f64,
    points: u32,
    tone: Tone,
    note: &'static str,
}

const fn band(min: f64, points: u32, tone: Tone, note: &'static str) -> Band {
    Band {
        min,
        points,
        tone,
        note,
    }
}

const BOTTOM: f64 = f64::NEG_INFINITY;

/// Base points by highest credential held.
const EDUCATION_BASE: &[(&str, u32)] = &[
    ("phd", 35),
    ("master", 30),
    ("bachelor", 25),
    ("12th", 20),
    ("10th", 15),
];

/// Bachelor grade bonus on the CGPA scale (out of 10).
const CGPA_BONUS: &[Band] = &[
    band(8.5, 5, Tone::Strength, "Excellent CGPA"),
    band(7.0, 3, Tone::Strength, "Good CGPA"),
    band(6.0, 1, Tone::Weakness, "CGPA could be higher"),
    band(BOTTOM, 0, Tone::Weakness, "Low CGPA, consider academic improvement"),
];

/// Bachelor grade bonus on the percentage scale.
const PERCENTAGE_BONUS: &[Band] = &[
    band(75.0, 5, Tone::Strength, "Strong bachelor percentage"),
    band(60.0, 3, Tone::Strength, "Good bachelor percentage"),
    band(
        BOTTOM,
        0,
        Tone::Weakness,
        "Bachelor percentage below the preferred range",
    ),
];

/// 12th-grade bonus; always percentage-style regardless of the declared
/// grade type.
const TWELFTH_BONUS: &[Band] = &[
    band(85.0, 5, Tone::Strength, "Excellent 12th grade percentage"),
    band(70.0, 3, Tone::Strength, "Good 12th grade percentage"),
    band(60.0, 1, Tone::Weakness, "12th grade percentage could be higher"),
    band(BOTTOM, 0, Tone::Weakness, "Low 12th grade percentage"),
];

/// IELTS overall bands (0-9 scale).
const IELTS_BANDS: &[Band] = &[
    band(7.5, 30, Tone::Strength, "Excellent IELTS score"),
    band(6.5, 25, Tone::Strength, "Good IELTS score"),
    band(6.0, 20, Tone::Strength, "Acceptable IELTS score"),
    band(5.5, 15, Tone::Weakness, "IELTS score below the competitive range"),
    band(BOTTOM, 10, Tone::Weakness, "Low IELTS score, a retake is recommended"),
];

/// TOEFL iBT bands (0-120 scale).
const TOEFL_BANDS: &[Band] = &[
    band(100.0, 30, Tone::Strength, "Excellent TOEFL score"),
    band(90.0, 25, Tone::Strength, "Good TOEFL score"),
    band(80.0, 20, Tone::Strength, "Acceptable TOEFL score"),
    band(BOTTOM, 15, Tone::Weakness, "TOEFL score below the competitive range"),
];

/// PTE Academic bands (0-90 scale).
const PTE_BANDS: &[Band] = &[
    band(70.0, 30, Tone::Strength, "Excellent PTE score"),
    band(60.0, 25, Tone::Strength, "Good PTE score"),
    band(50.0, 20, Tone::Strength, "Acceptable PTE score"),
    band(BOTTOM, 15, Tone::Weakness, "PTE score below the competitive range"),
];

const NO_TEST_WEAKNESS: &str =
    "No language test provided; an approved test is required for admission";

const TENTH_GRADE_WEAKNESS: &str =
    "10th grade is the minimum qualification; further study is recommended";

/// Floor contribution when no work experience is declared. Lack of
/// experience is never penalized with a weakness.
const WORK_FLOOR_POINTS: u32 = 5;

/// Floor contribution when no funds bucket is declared.
const FINANCIAL_FLOOR_POINTS: u32 = 10;

/// Funds buckets in lakhs, highest first.
const FINANCIAL_TABLE: &[(&str, u32, Tone, &str)] = &[
    (
        "above-60",
        20,
        Tone::Strength,
        "Strong financial capacity (above 60 lakhs)",
    ),
    (
        "40-60",
        17,
        Tone::Strength,
        "Good financial capacity (40-60 lakhs)",
    ),
    (
        "20-40",
        14,
        Tone::Strength,
        "Adequate financial capacity (20-40 lakhs)",
    ),
    (
        "below-20",
        10,
        Tone::Weakness,
        "Limited financial capacity (below 20 lakhs); consider education loans",
    ),
];

fn lookup<'a>(bands: &'a [Band], value: f64) -> Option<&'a Band> {
    bands.iter().find(|row| value >= row.min)
}

fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|raw| !raw.is_empty())
}

/// Numeric fields arrive as strings; anything that fails to parse to a
/// finite number is treated as absent.
fn numeric(value: &Option<String>) -> Option<(f64, &str)> {
    let raw = field(value)?;
    let parsed = raw.parse::<f64>().ok().filter(|n| n.is_finite())?;
    Some((parsed, raw))
}

fn apply(score: CategoryScore, row: Option<&Band>, raw: &str) -> CategoryScore {
    let Some(row) = row else {
        return score;
    };

    let mut score = score;
    score.points += row.points;
    let note = format!("{} ({})", row.note, raw);
    match row.tone {
        Tone::Strength => score.strength(note),
        Tone::Weakness => score.weakness(note),
    }
}

pub(crate) fn score_education(profile: &EligibilityProfile) -> CategoryScore {
    let Some(level) = field(&profile.education) else {
        return CategoryScore::default();
    };
    let Some(&(_, base)) = EDUCATION_BASE.iter().find(|(name, _)| *name == level) else {
        return CategoryScore::default();
    };

    let score = CategoryScore::points(base);
    match level {
        "bachelor" => {
            let grade = numeric(&profile.education_grade);
            let kind = field(&profile.grade_type);
            let (Some((grade, raw)), Some(kind)) = (grade, kind) else {
                return score;
            };
            let table = match kind {
                "cgpa" => CGPA_BONUS,
                "percentage" => PERCENTAGE_BONUS,
                _ => return score,
            };
            apply(score, lookup(table, grade), raw)
        }
        "12th" => match numeric(&profile.education_grade) {
            Some((grade, raw)) => apply(score, lookup(TWELFTH_BONUS, grade), raw),
            None => score,
        },
        "10th" => score.weakness(TENTH_GRADE_WEAKNESS.to_string()),
        _ => score,
    }
}

pub(crate) fn score_language(profile: &EligibilityProfile) -> CategoryScore {
    let declared = field(&profile.has_language_test) == Some("yes");
    let test = field(&profile.language_test);
    let overall = numeric(&profile.ielts_score);

    let (true, Some(test), Some((value, raw))) = (declared, test, overall) else {
        return CategoryScore::default().weakness(NO_TEST_WEAKNESS.to_string());
    };

    let table = match test {
        "ielts" => IELTS_BANDS,
        "toefl" => TOEFL_BANDS,
        "pte" => PTE_BANDS,
        // An unrecognized test with the flag set scores zero and stays
        // silent. Observed behavior, kept pending a product decision.
        _ => return CategoryScore::default(),
    };

    apply(CategoryScore::default(), lookup(table, value), raw)
}

pub(crate) fn score_work_experience(profile: &EligibilityProfile) -> CategoryScore {
    let declared = field(&profile.has_work_experience) == Some("yes");
    let years = field(&profile.work_experience_years).and_then(|raw| raw.parse::<i64>().ok());

    let (true, Some(years)) = (declared, years) else {
        return CategoryScore::points(WORK_FLOOR_POINTS);
    };

    if years >= 5 {
        CategoryScore::points(15)
            .strength(format!("{years} years of work experience is a strong asset"))
    } else if years >= 3 {
        CategoryScore::points(12).strength(format!("{years} years of relevant work experience"))
    } else if years >= 1 {
        let plural = if years == 1 { "" } else { "s" };
        CategoryScore::points(10).strength(format!("{years} year{plural} of work experience"))
    } else {
        CategoryScore::points(5).strength("Some work experience".to_string())
    }
}

pub(crate) fn score_financial(profile: &EligibilityProfile) -> CategoryScore {
    let Some(bucket) = field(&profile.financial_capacity) else {
        return CategoryScore::points(FINANCIAL_FLOOR_POINTS);
    };
    let Some(&(_, points, tone, note)) = FINANCIAL_TABLE
        .iter()
        .find(|(name, _, _, _)| *name == bucket)
    else {
        return CategoryScore::points(FINANCIAL_FLOOR_POINTS);
    };

    let score = CategoryScore::points(points);
    match tone {
        Tone::Strength => score.strength(note.to_string()),
        Tone::Weakness => score.weakness(note.to_string()),
    }
}
