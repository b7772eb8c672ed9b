use super::common::*;
use crate::chances::domain::{
    BudgetBracket, GreRequirement, GreScores, ProgramLevel, RawNumber, StandardizedTest,
    UserProfile,
};
use crate::chances::{
    Affordability, Algorithm, ChanceFactor, ChanceTier, EligibilityIssue, ProBudgetMode,
    ScoringResult, TestPercentiles,
};

fn decoupled(profile: &UserProfile) -> ScoringResult {
    engine(ProBudgetMode::Decoupled).score_one(profile, &university(), Algorithm::Pro)
}

fn coupled(profile: &UserProfile) -> ScoringResult {
    engine(ProBudgetMode::Coupled).score_one(profile, &university(), Algorithm::Pro)
}

#[test]
fn decoupled_score_reflects_academics_only() {
    let result = decoupled(&profile());

    assert_eq!(result.algorithm, Algorithm::Pro);
    assert_eq!(result.percentage, Some(70));
    assert_eq!(result.tier, ChanceTier::High);
    assert_eq!(result.financial_status, Some(Affordability::Affordable));
    assert!(result.diminishing_returns.is_none());
    assert!(result
        .explanation
        .ends_with("The percentage reflects academic criteria only."));
    assert!(!result
        .components
        .iter()
        .any(|component| component.factor == ChanceFactor::Budget));
}

#[test]
fn decoupled_budget_never_moves_the_percentage() {
    let mut broke = profile();
    broke.budget = Some(BudgetBracket::UpTo10k);
    let mut silent = profile();
    silent.budget = None;

    let affordable = decoupled(&profile());
    let unaffordable = decoupled(&broke);
    let unknown = decoupled(&silent);

    assert_eq!(affordable.percentage, unaffordable.percentage);
    assert_eq!(affordable.percentage, unknown.percentage);
    assert_eq!(unaffordable.financial_status, Some(Affordability::NotAffordable));
    assert!(!unaffordable.match_details.budget_match);
    assert_eq!(unknown.financial_status, None);
}

#[test]
fn strong_profiles_hit_diminishing_returns() {
    let result = decoupled(&strong_profile());

    // 20 + 20 + 10 + 5 of strengths at a quarter weight.
    assert_eq!(result.percentage, Some(64));
    assert_eq!(result.tier, ChanceTier::High);
    assert_eq!(result.diminishing_returns, Some(0.25));
    assert!(result.explanation.contains("25% of their weight"));
}

#[test]
fn moderately_strong_profiles_keep_half_their_bonus() {
    let mut applicant = profile();
    applicant.english_score = Some(RawNumber::Number(7.0));

    let result = decoupled(&applicant);

    assert_eq!(result.percentage, Some(65));
    assert_eq!(result.diminishing_returns, Some(0.5));
    assert!(result.explanation.contains("50% of their weight"));
}

#[test]
fn weaknesses_are_counted_in_full() {
    let result = decoupled(&weak_profile());

    // -20 GPA, -20 English, +10 discipline.
    assert_eq!(result.percentage, Some(20));
    assert_eq!(result.tier, ChanceTier::Low);
    assert_eq!(result.financial_status, Some(Affordability::NotAffordable));
}

#[test]
fn ineligible_programs_have_no_percentage() {
    let mut applicant = strong_profile();
    applicant.level = ProgramLevel::Bachelor;

    let result = decoupled(&applicant);

    assert_eq!(result.percentage, None);
    assert_eq!(result.tier, ChanceTier::NotEligible);
    assert_eq!(result.eligibility_issue, Some(EligibilityIssue::Level));
    assert_eq!(result.financial_status, None);
    assert!(result.components.is_empty());
    assert!(result.explanation.starts_with("Not eligible"));
}

#[test]
fn level_is_reported_before_discipline() {
    let mut applicant = profile();
    applicant.level = ProgramLevel::Phd;
    applicant.disciplines = vec!["Marine Biology".to_string()];
    assert_eq!(
        decoupled(&applicant).eligibility_issue,
        Some(EligibilityIssue::Level)
    );

    applicant.level = ProgramLevel::Master;
    assert_eq!(
        decoupled(&applicant).eligibility_issue,
        Some(EligibilityIssue::Discipline)
    );
}

#[test]
fn coupled_mode_rewards_comfortable_budgets() {
    let result = coupled(&profile());

    assert_eq!(result.percentage, Some(75));
    assert_eq!(result.tier, ChanceTier::High);
    assert!(result
        .components
        .iter()
        .any(|component| component.factor == ChanceFactor::Budget && component.points == 5));
    assert!(!result.explanation.contains("academic criteria only"));
}

#[test]
fn coupled_mode_gives_less_for_tight_budgets() {
    let mut applicant = profile();
    applicant.budget = Some(BudgetBracket::UpTo20k);

    let result = coupled(&applicant);

    assert_eq!(result.percentage, Some(73));
    assert!(result.match_details.budget_match);
}

#[test]
fn coupled_mode_penalizes_exceeding_the_budget() {
    let mut applicant = profile();
    applicant.budget = Some(BudgetBracket::UpTo10k);

    let result = coupled(&applicant);

    assert_eq!(result.percentage, Some(45));
    assert_eq!(result.tier, ChanceTier::Medium);
    assert_eq!(result.financial_status, Some(Affordability::NotAffordable));
}

#[test]
fn gre_percentiles_are_attached_to_the_result() {
    let mut applicant = profile();
    applicant.standardized_test = Some(StandardizedTest::Gre);
    applicant.gre = GreScores {
        verbal: Some(RawNumber::Number(160.0)),
        quant: Some(RawNumber::from("161.5")),
        writing: None,
    };
    let mut university = university();
    university.requirements.gre = Some(GreRequirement {
        required: true,
        min_verbal: Some(150.0),
        min_quant: Some(150.0),
        min_writing: None,
    });

    let result = engine(ProBudgetMode::Decoupled).score_one(&applicant, &university, Algorithm::Pro);

    assert_eq!(
        result.percentiles,
        Some(TestPercentiles::Gre {
            verbal: Some(86),
            quant: Some(76),
            writing: None,
        })
    );
    assert!(result.match_details.standardized_test_match);
}

#[test]
fn percentages_stay_within_each_mode_range() {
    let gpas = ["0", "2.8", "3.2", "3.6", "4.0"];
    let english = [None, Some(6.0), Some(6.5), Some(9.0)];
    let budgets = [None, Some(BudgetBracket::UpTo10k), Some(BudgetBracket::UpTo50k)];

    for gpa in gpas {
        for score_value in english {
            for budget in budgets {
                let mut applicant = strong_profile();
                applicant.gpa = Some(RawNumber::from(gpa));
                applicant.english_score = score_value.map(RawNumber::Number);
                applicant.budget = budget;

                let loose = decoupled(&applicant).percentage.expect("eligible");
                assert!((5..=95).contains(&loose));

                let strict = coupled(&applicant);
                let percentage = strict.percentage.expect("eligible");
                assert!((5..=85).contains(&percentage));
                let expected = if percentage >= 65 {
                    ChanceTier::High
                } else if percentage >= 35 {
                    ChanceTier::Medium
                } else {
                    ChanceTier::Low
                };
                assert_eq!(strict.tier, expected);
            }
        }
    }
}
