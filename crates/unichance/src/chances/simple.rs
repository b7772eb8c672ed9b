use super::domain::{University, UserProfile};
use super::outcome::{
    Algorithm, ChanceFactor, ChanceTier, EligibilityIssue, MatchDetails, ScoreComponent,
    ScoringResult, TierThresholds,
};
use super::rules::{self, BASE_SCORE};

pub(crate) const FLOOR: i16 = 5;
pub(crate) const CEILING: i16 = 95;
pub(crate) const TIERS: TierThresholds = TierThresholds {
    high: 70,
    medium: 40,
};

const BUDGET_POINTS: i16 = 15;

/// Flat additive model: every factor adds or subtracts a fixed number of points from 50.
pub(crate) fn score(profile: &UserProfile, university: &University) -> ScoringResult {
    let mut result = ScoringResult::blank(university, Algorithm::Simple);

    if let Some(issue) = rules::eligibility_issue(profile, university) {
        result.percentage = Some(FLOOR as u8);
        result.tier = ChanceTier::Low;
        result.explanation = match issue {
            EligibilityIssue::Level => {
                "This program is offered at a different study level.".to_string()
            }
            EligibilityIssue::Discipline => {
                "This program does not offer your chosen discipline.".to_string()
            }
        };
        return result;
    }

    let (mut components, signals) = rules::score_academic_factors(profile, university);

    let budget_fits = signals.budget.fits();
    components.push(ScoreComponent {
        factor: ChanceFactor::Budget,
        points: if budget_fits {
            BUDGET_POINTS
        } else {
            -BUDGET_POINTS
        },
        notes: signals.budget.clause().to_string(),
    });

    let total = components
        .iter()
        .fold(BASE_SCORE, |total, component| total + component.points);
    let percentage = total.clamp(FLOOR, CEILING) as u8;

    let mut clauses = signals.academic_clauses();
    clauses.insert(2, signals.budget.clause());

    result.percentage = Some(percentage);
    result.tier = TIERS.tier_for(percentage);
    result.explanation = rules::sentence(&clauses);
    result.match_details = MatchDetails {
        gpa_match: signals.gpa.is_match(),
        english_match: signals.english.is_match(),
        budget_match: budget_fits,
        discipline_match: signals.discipline_match,
        standardized_test_match: signals.standardized.is_compliant(),
    };
    result.components = components;
    result
}
