use super::common::*;
use crate::funnel::domain::EligibilityProfile;
use crate::funnel::scoring::ELIGIBILITY_THRESHOLD;

#[test]
fn top_tier_profile_scores_one_hundred() {
    let result = engine().score(&full_profile());

    assert_eq!(result.score, 100);
    assert!(result.is_eligible);
    assert!(result.weaknesses.is_empty());
    assert!(result.suggestion.contains("highly competitive"));
}

#[test]
fn tenth_grade_only_profile_scores_thirty() {
    let profile = EligibilityProfile {
        education: Some("10th".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    // education 15, language 0 + weakness, work floor 5, financial floor 10
    assert_eq!(result.score, 30);
    assert!(!result.is_eligible);
    assert!(result.strengths.is_empty());
    assert!(result
        .weaknesses
        .iter()
        .any(|note| note.contains("minimum qualification")));
    assert!(result
        .weaknesses
        .iter()
        .any(|note| note.contains("No language test")));
    assert!(result.suggestion.contains("counselor"));
}

#[test]
fn bachelor_toefl_profile_scores_seventy_nine() {
    let result = engine().score(&bachelor_toefl_profile());

    // education 25+3, toefl 25, work 12, financial 14
    assert_eq!(result.score, 79);
    assert!(result.is_eligible);
    assert!(result.suggestion.contains("strong chance"));
}

#[test]
fn strongest_bachelor_profile_stays_within_clamp() {
    let profile = EligibilityProfile {
        education: Some("bachelor".to_string()),
        education_grade: Some("9.0".to_string()),
        grade_type: Some("cgpa".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("ielts".to_string()),
        ielts_score: Some("8.0".to_string()),
        has_work_experience: Some("yes".to_string()),
        work_experience_years: Some("10".to_string()),
        financial_capacity: Some("above-60".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    // 25+5 + 30 + 15 + 20 with no clamp triggered
    assert_eq!(result.score, 95);
    assert!(result.score <= 100);
}

#[test]
fn empty_profile_scores_fifteen_without_error() {
    let result = engine().score(&EligibilityProfile::default());

    // work and financial floors only, plus the fixed language weakness
    assert_eq!(result.score, 15);
    assert!(!result.is_eligible);
    assert_eq!(result.weaknesses.len(), 1);
    assert!(result.strengths.is_empty());
}

#[test]
fn eligibility_flag_tracks_the_threshold() {
    // bachelor 25 + ielts 6.0 -> 20 + work floor 5 + financial floor 10 = 60
    let at_threshold = EligibilityProfile {
        education: Some("bachelor".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("ielts".to_string()),
        ielts_score: Some("6.0".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&at_threshold);
    assert_eq!(result.score, ELIGIBILITY_THRESHOLD);
    assert!(result.is_eligible);

    // dropping to the 5.5 band loses 5 points and eligibility
    let below = EligibilityProfile {
        ielts_score: Some("5.5".to_string()),
        ..at_threshold
    };
    let result = engine().score(&below);
    assert_eq!(result.score, 55);
    assert!(!result.is_eligible);
    assert_eq!(result.is_eligible, result.score >= ELIGIBILITY_THRESHOLD);
}

#[test]
fn scoring_is_deterministic() {
    let profile = bachelor_toefl_profile();
    let first = engine().score(&profile);
    let second = engine().score(&profile);
    assert_eq!(first, second);
}

#[test]
fn ielts_bands_never_decrease_with_higher_scores() {
    let mut last_points = 0;
    for overall in ["5.0", "5.5", "6.0", "6.5", "7.5", "9.0"] {
        let profile = EligibilityProfile {
            has_language_test: Some("yes".to_string()),
            language_test: Some("ielts".to_string()),
            ielts_score: Some(overall.to_string()),
            ..EligibilityProfile::default()
        };
        // isolate the language contribution by subtracting the fixed floors
        let score = engine().score(&profile).score - 15;
        assert!(
            score >= last_points,
            "band for {overall} dropped below the previous band"
        );
        last_points = score;
    }
}

#[test]
fn unparsable_numbers_degrade_to_absent() {
    let profile = EligibilityProfile {
        education: Some("bachelor".to_string()),
        education_grade: Some("n/a".to_string()),
        grade_type: Some("cgpa".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("ielts".to_string()),
        ielts_score: Some("band eight".to_string()),
        has_work_experience: Some("yes".to_string()),
        work_experience_years: Some("several".to_string()),
        financial_capacity: Some("plenty".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    // bachelor base 25, no bonus; unparsable test score falls back to the
    // no-test weakness; work and financial take their silent floors
    assert_eq!(result.score, 25 + 0 + 5 + 10);
    assert!(result
        .weaknesses
        .iter()
        .any(|note| note.contains("No language test")));
}

#[test]
fn unknown_language_test_scores_zero_silently() {
    let profile = EligibilityProfile {
        has_language_test: Some("yes".to_string()),
        language_test: Some("duolingo".to_string()),
        ielts_score: Some("120".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    assert_eq!(result.score, 15);
    assert!(result.strengths.is_empty());
    assert!(result.weaknesses.is_empty());
}

#[test]
fn twelfth_grade_bonus_ignores_declared_grade_type() {
    let profile = EligibilityProfile {
        education: Some("12th".to_string()),
        education_grade: Some("86".to_string()),
        grade_type: Some("cgpa".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    // 20 base + 5 percentage-style bonus, floors for the rest
    assert_eq!(result.score, 20 + 5 + 5 + 10);
    assert!(result
        .strengths
        .iter()
        .any(|note| note.contains("12th grade")));
}

#[test]
fn low_cgpa_awards_partial_bonus_with_weakness() {
    let profile = EligibilityProfile {
        education: Some("bachelor".to_string()),
        education_grade: Some("6.2".to_string()),
        grade_type: Some("cgpa".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    assert_eq!(result.score, 25 + 1 + 5 + 10);
    assert!(result
        .weaknesses
        .iter()
        .any(|note| note.contains("could be higher")));
}

#[test]
fn single_year_of_experience_reads_singular() {
    let profile = EligibilityProfile {
        has_work_experience: Some("yes".to_string()),
        work_experience_years: Some("1".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    assert!(result
        .strengths
        .iter()
        .any(|note| note.contains("1 year of work experience")));
}

#[test]
fn notes_follow_category_evaluation_order() {
    let profile = EligibilityProfile {
        education: Some("bachelor".to_string()),
        education_grade: Some("5.0".to_string()),
        grade_type: Some("cgpa".to_string()),
        financial_capacity: Some("below-20".to_string()),
        ..EligibilityProfile::default()
    };

    let result = engine().score(&profile);

    assert_eq!(result.weaknesses.len(), 3);
    assert!(result.weaknesses[0].contains("CGPA"));
    assert!(result.weaknesses[1].contains("language test"));
    assert!(result.weaknesses[2].contains("financial"));
}

#[test]
fn suggestion_ladder_brackets() {
    let cases = [
        (full_profile(), "highly competitive"),
        (bachelor_toefl_profile(), "strong chance"),
    ];
    for (profile, expected) in cases {
        let result = engine().score(&profile);
        assert!(
            result.suggestion.contains(expected),
            "score {} produced '{}'",
            result.score,
            result.suggestion
        );
    }

    // master 30 + ielts 6.5 -> 25 + floors 15 = 70, the "good profile" tier
    let mid = EligibilityProfile {
        education: Some("master".to_string()),
        has_language_test: Some("yes".to_string()),
        language_test: Some("ielts".to_string()),
        ielts_score: Some("6.5".to_string()),
        ..EligibilityProfile::default()
    };
    let result = engine().score(&mid);
    assert_eq!(result.score, 70);
    assert!(result.suggestion.contains("Good profile"));
}
