use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use unichance::catalog::{Catalog, CatalogError};
use unichance::chances::{
    BudgetBracket, EnglishTest, FinanceSource, GradingScheme, GreScores, ProgramLevel, RawNumber,
    StandardizedTest, UserProfile,
};
use unichance::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Configured catalog file, or the bundled dataset when none is set.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    }
}

pub(crate) fn read_profile(path: &Path) -> Result<UserProfile, AppError> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// Master's applicant used by `demo`: strong in computer science, GRE taken, mid-range budget.
pub(crate) fn sample_profile() -> UserProfile {
    UserProfile {
        nationality: Some("Nigeria".to_string()),
        study_country: None,
        level: ProgramLevel::Master,
        grading_scheme: GradingScheme::FivePoint,
        gpa: Some(RawNumber::from("4.3")),
        finance_source: Some(FinanceSource::Mixed),
        budget: Some(BudgetBracket::UpTo30k),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(RawNumber::Number(7.0)),
        standardized_test: Some(StandardizedTest::Gre),
        gre: GreScores {
            verbal: Some(RawNumber::Number(154.0)),
            quant: Some(RawNumber::Number(163.0)),
            writing: Some(RawNumber::Number(4.0)),
        },
        gmat: Default::default(),
        disciplines: vec!["Computer Science".to_string(), "Data Science".to_string()],
    }
}
