use super::config::ProBudgetMode;
use super::domain::{University, UserProfile};
use super::outcome::{
    Algorithm, ChanceFactor, EligibilityIssue, MatchDetails, ScoreComponent, ScoringResult,
    TierThresholds,
};
use super::percentiles::applicant_percentiles;
use super::rules::{self, BASE_SCORE};

const FLOOR: f64 = 5.0;
const DECOUPLED_CEILING: f64 = 95.0;
const COUPLED_CEILING: f64 = 85.0;

pub(crate) const DECOUPLED_TIERS: TierThresholds = TierThresholds {
    high: 60,
    medium: 30,
};
pub(crate) const COUPLED_TIERS: TierThresholds = TierThresholds {
    high: 65,
    medium: 35,
};

const COMFORTABLE_BUDGET_POINTS: i16 = 5;
const TIGHT_BUDGET_POINTS: i16 = 3;
const OVER_BUDGET_POINTS: i16 = -25;

/// Multiplier for positive contributions given the undampened provisional score.
pub(crate) fn diminishing_multiplier(provisional: f64) -> f64 {
    if provisional >= 90.0 {
        0.25
    } else if provisional >= 80.0 {
        0.5
    } else {
        1.0
    }
}

/// Totals after splitting contributions by sign and dampening the positive side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AdjustedScore {
    pub positive: f64,
    pub negative: f64,
    pub multiplier: f64,
}

impl AdjustedScore {
    pub(crate) fn from_points(points: impl IntoIterator<Item = i16>) -> Self {
        let (positive, negative) = points.into_iter().fold((0.0, 0.0), |(pos, neg), points| {
            if points >= 0 {
                (pos + f64::from(points), neg)
            } else {
                (pos, neg + f64::from(points))
            }
        });

        let provisional = f64::from(BASE_SCORE) + positive + negative;
        Self {
            positive,
            negative,
            multiplier: diminishing_multiplier(provisional),
        }
    }

    pub(crate) fn total(&self) -> f64 {
        f64::from(BASE_SCORE) + self.positive * self.multiplier + self.negative
    }
}

/// Additive model with diminishing returns on strong profiles and a configurable budget mode.
pub(crate) fn score(
    profile: &UserProfile,
    university: &University,
    mode: ProBudgetMode,
) -> ScoringResult {
    let mut result = ScoringResult::blank(university, Algorithm::Pro);

    if let Some(issue) = rules::eligibility_issue(profile, university) {
        result.eligibility_issue = Some(issue);
        result.explanation = match issue {
            EligibilityIssue::Level => {
                "Not eligible: this program is offered at a different study level.".to_string()
            }
            EligibilityIssue::Discipline => {
                "Not eligible: this program does not offer your chosen discipline.".to_string()
            }
        };
        return result;
    }

    let (mut components, signals) = rules::score_academic_factors(profile, university);
    let budget = signals.budget;

    if mode == ProBudgetMode::Coupled {
        let (points, notes) = if budget.comfortable() {
            (COMFORTABLE_BUDGET_POINTS, "tuition comfortably within budget")
        } else if budget.fits() {
            (TIGHT_BUDGET_POINTS, "tuition within budget")
        } else {
            (OVER_BUDGET_POINTS, "tuition exceeds budget")
        };
        components.push(ScoreComponent {
            factor: ChanceFactor::Budget,
            points,
            notes: notes.to_string(),
        });
    }

    let adjusted = AdjustedScore::from_points(components.iter().map(|component| component.points));
    let (ceiling, tiers) = match mode {
        ProBudgetMode::Decoupled => (DECOUPLED_CEILING, DECOUPLED_TIERS),
        ProBudgetMode::Coupled => (COUPLED_CEILING, COUPLED_TIERS),
    };
    let percentage = adjusted.total().round().clamp(FLOOR, ceiling) as u8;

    let mut clauses = signals.academic_clauses();
    if mode == ProBudgetMode::Coupled {
        clauses.insert(2, budget.clause());
    }
    let mut explanation = rules::sentence(&clauses);
    if mode == ProBudgetMode::Decoupled {
        explanation.push_str(" The percentage reflects academic criteria only.");
    }
    let dampened = adjusted.multiplier < 1.0;
    if dampened {
        explanation.push_str(&format!(
            " Diminishing returns counted strengths at {:.0}% of their weight.",
            adjusted.multiplier * 100.0
        ));
    }

    result.percentage = Some(percentage);
    result.tier = tiers.tier_for(percentage);
    result.explanation = explanation;
    result.match_details = MatchDetails {
        gpa_match: signals.gpa.is_match(),
        english_match: signals.english.is_match(),
        budget_match: budget.fits(),
        discipline_match: signals.discipline_match,
        standardized_test_match: signals.standardized.is_compliant(),
    };
    result.components = components;
    result.financial_status = budget.affordability();
    result.diminishing_returns = dampened.then_some(adjusted.multiplier);
    result.percentiles = applicant_percentiles(profile);
    result
}
