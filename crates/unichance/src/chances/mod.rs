//! Eligibility gate and admission-chance scoring.
//!
//! Two algorithms share the same requirement checkers: `simple` adds fixed points to a base of
//! 50, `pro` separates strengths from weaknesses and dampens strengths on already strong
//! profiles. Scoring is pure; malformed applicant numbers degrade to zero instead of failing.

mod aggregate;
mod config;
pub mod domain;
pub mod grading;
pub mod numeric;
mod outcome;
pub mod percentiles;
mod pro;
pub mod requirements;
pub mod router;
mod rules;
mod simple;

#[cfg(test)]
mod tests;

pub use aggregate::{sort_by_budget, sort_by_chance, SortOrder};
pub use config::{ProBudgetMode, ScoringConfig};
pub use domain::{
    BudgetBracket, EnglishMinimum, EnglishRequirement, EnglishTest, FinanceSource, GmatRequirement,
    GmatScores, GradingScheme, GreRequirement, GreScores, ProgramLevel, RawNumber, Requirements,
    StandardizedTest, University, UserProfile,
};
pub use outcome::{
    Affordability, Algorithm, ChanceFactor, ChanceTier, EligibilityIssue, MatchDetails,
    ScoreComponent, ScoringResult, TierThresholds,
};
pub use percentiles::TestPercentiles;
pub use requirements::{EnglishStatus, StandardizedStatus};
pub use router::{chance_router, CatalogSummary, ChanceRequest, ChanceResponse};

use crate::catalog::Catalog;

/// Stateless scorer carrying the configuration shared by every request.
#[derive(Debug, Clone, Default)]
pub struct ChanceEngine {
    config: ScoringConfig,
}

impl ChanceEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score_one(
        &self,
        profile: &UserProfile,
        university: &University,
        algorithm: Algorithm,
    ) -> ScoringResult {
        aggregate::score_one(profile, university, algorithm, &self.config)
    }

    /// Score the whole catalog for one applicant. Results keep catalog order; sort separately.
    pub fn score_all(
        &self,
        profile: &UserProfile,
        catalog: &Catalog,
        algorithm: Algorithm,
    ) -> Vec<ScoringResult> {
        aggregate::score_all(profile, catalog, algorithm, &self.config)
    }
}
