use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::chances::domain::{
    BudgetBracket, EnglishMinimum, EnglishRequirement, EnglishTest, FinanceSource, GradingScheme,
    ProgramLevel, RawNumber, Requirements, University, UserProfile,
};
use crate::chances::{chance_router, ChanceEngine, ProBudgetMode, ScoringConfig};

/// Master's applicant who exactly meets the baseline requirements.
pub(crate) fn profile() -> UserProfile {
    UserProfile {
        nationality: Some("Kenya".to_string()),
        study_country: None,
        level: ProgramLevel::Master,
        grading_scheme: GradingScheme::FourPoint,
        gpa: Some(RawNumber::Number(3.2)),
        finance_source: Some(FinanceSource::SelfFunded),
        budget: Some(BudgetBracket::UpTo30k),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(RawNumber::Number(6.5)),
        standardized_test: None,
        gre: Default::default(),
        gmat: Default::default(),
        disciplines: vec!["Computer Science".to_string()],
    }
}

/// Applicant far below every requirement with a budget that cannot cover tuition.
pub(crate) fn weak_profile() -> UserProfile {
    UserProfile {
        gpa: Some(RawNumber::from("2.7")),
        budget: Some(BudgetBracket::UpTo10k),
        english_test: None,
        english_score: None,
        ..profile()
    }
}

/// Applicant well above every requirement and looking for a scholarship.
pub(crate) fn strong_profile() -> UserProfile {
    UserProfile {
        gpa: Some(RawNumber::Number(4.0)),
        english_score: Some(RawNumber::Number(8.0)),
        finance_source: Some(FinanceSource::Scholarship),
        ..profile()
    }
}

pub(crate) fn requirements() -> Requirements {
    Requirements {
        min_gpa: Some(3.2),
        grading_schemes: vec![GradingScheme::FourPoint],
        english: EnglishRequirement {
            required: true,
            tests: vec![EnglishMinimum {
                test: EnglishTest::Ielts,
                min_score: Some(6.5),
            }],
        },
        gre: None,
        gmat: None,
        tuition: 20_000,
        scholarships: true,
    }
}

pub(crate) fn university() -> University {
    University {
        id: "ca-lakeside-msc-cs".to_string(),
        name: "Lakeside University".to_string(),
        country: "Canada".to_string(),
        city: "Toronto".to_string(),
        level: ProgramLevel::Master,
        disciplines: vec!["Computer Science".to_string(), "Data Science".to_string()],
        ranking: Some(45),
        requirements: requirements(),
    }
}

pub(crate) fn university_with(id: &str, country: &str, tuition: u32) -> University {
    let mut university = university();
    university.id = id.to_string();
    university.name = format!("{id} University");
    university.country = country.to_string();
    university.requirements.tuition = tuition;
    university
}

/// Four programs: two in Canada, one in Germany, one at bachelor level.
pub(crate) fn catalog() -> Catalog {
    let mut bachelor = university_with("ca-harbour-bsc-cs", "Canada", 9_000);
    bachelor.level = ProgramLevel::Bachelor;

    Catalog::new(vec![
        university_with("ca-lakeside-msc-cs", "Canada", 20_000),
        university_with("de-spree-msc-cs", "Germany", 3_000),
        bachelor,
        university_with("ca-maple-msc-cs", "Canada", 42_000),
    ])
    .expect("fixture ids are unique")
}

pub(crate) fn engine(mode: ProBudgetMode) -> ChanceEngine {
    ChanceEngine::new(ScoringConfig {
        pro_budget_mode: mode,
    })
}

pub(crate) fn router() -> axum::Router {
    chance_router(
        Arc::new(engine(ProBudgetMode::Decoupled)),
        Arc::new(catalog()),
    )
}

pub(crate) async fn json_body(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
