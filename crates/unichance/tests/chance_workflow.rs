use unichance::catalog::Catalog;
use unichance::chances::{
    sort_by_budget, sort_by_chance, Affordability, Algorithm, BudgetBracket, ChanceEngine,
    ChanceFactor, ChanceTier, EnglishTest, GmatScores, GradingScheme, GreScores, ProBudgetMode,
    ProgramLevel, RawNumber, ScoringConfig, StandardizedTest, TestPercentiles, UserProfile,
};

fn computer_science_applicant() -> UserProfile {
    UserProfile {
        nationality: Some("India".to_string()),
        study_country: None,
        level: ProgramLevel::Master,
        grading_scheme: GradingScheme::FourPoint,
        gpa: Some(RawNumber::from("3.5")),
        finance_source: None,
        budget: Some(BudgetBracket::UpTo50k),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(RawNumber::Number(7.0)),
        standardized_test: Some(StandardizedTest::Gre),
        gre: GreScores {
            verbal: Some(RawNumber::Number(155.0)),
            quant: Some(RawNumber::Number(162.0)),
            writing: Some(RawNumber::Number(4.0)),
        },
        gmat: GmatScores::default(),
        disciplines: vec!["computer science".to_string()],
    }
}

fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog loads")
}

#[test]
fn simple_scores_only_matching_programs_above_the_floor() {
    let engine = ChanceEngine::default();
    let catalog = bundled();

    let results = sort_by_chance(engine.score_all(
        &computer_science_applicant(),
        &catalog,
        Algorithm::Simple,
    ));

    assert_eq!(results.len(), catalog.len());
    let top: Vec<_> = results[..3]
        .iter()
        .map(|result| result.university_id.as_str())
        .collect();
    assert_eq!(
        top,
        vec![
            "ca-toronto-lakeside-msc-cs",
            "de-munich-isar-msc-eng",
            "us-austin-prairie-ms-ds"
        ]
    );
    assert!(results[..3]
        .iter()
        .all(|result| result.percentage == Some(95) && result.tier == ChanceTier::High));
    assert!(results[3..]
        .iter()
        .all(|result| result.percentage == Some(5) && result.tier == ChanceTier::Low));
}

#[test]
fn pro_dampens_strengths_and_leaves_mismatches_unscored() {
    let engine = ChanceEngine::new(ScoringConfig {
        pro_budget_mode: ProBudgetMode::Decoupled,
    });

    let results = sort_by_chance(engine.score_all(
        &computer_science_applicant(),
        &bundled(),
        Algorithm::Pro,
    ));

    let scored: Vec<_> = results
        .iter()
        .filter_map(|result| Some((result.university_id.as_str(), result.percentage?)))
        .collect();
    assert_eq!(
        scored,
        vec![
            ("us-austin-prairie-ms-ds", 66),
            ("ca-toronto-lakeside-msc-cs", 64),
            ("de-munich-isar-msc-eng", 63),
        ]
    );

    let lakeside = &results[1];
    assert_eq!(lakeside.financial_status, Some(Affordability::Affordable));
    assert_eq!(lakeside.diminishing_returns, Some(0.25));
    assert_eq!(
        lakeside.percentiles,
        Some(TestPercentiles::Gre {
            verbal: Some(70),
            quant: Some(78),
            writing: Some(54),
        })
    );

    assert!(results[3..]
        .iter()
        .all(|result| result.tier == ChanceTier::NotEligible && result.eligibility_issue.is_some()));
}

#[test]
fn dual_exam_programs_fail_the_untaken_exam() {
    let mut applicant = computer_science_applicant();
    applicant.disciplines = vec!["Finance".to_string()];
    applicant.standardized_test = Some(StandardizedTest::Gmat);
    applicant.gmat.total = Some(RawNumber::Number(720.0));

    let catalog = bundled();
    let edinburgh = catalog
        .get("uk-edinburgh-forth-msc-finance")
        .expect("dual exam program bundled");

    let result = ChanceEngine::default().score_one(&applicant, edinburgh, Algorithm::Simple);

    assert!(!result.match_details.standardized_test_match);
    assert!(result
        .components
        .iter()
        .any(|component| component.factor == ChanceFactor::StandardizedTest
            && component.points == -15));
}

#[test]
fn country_preference_and_budget_sort_compose() {
    let mut applicant = computer_science_applicant();
    applicant.level = ProgramLevel::Bachelor;
    applicant.study_country = Some("Germany".to_string());

    let results = sort_by_budget(ChanceEngine::default().score_all(
        &applicant,
        &bundled(),
        Algorithm::Simple,
    ));

    assert!(results.iter().all(|result| result.country == "Germany"));
    assert!(results
        .windows(2)
        .all(|pair| pair[0].tuition <= pair[1].tuition));
    assert_eq!(results.first().map(|result| result.tuition), Some(1_500));
}
