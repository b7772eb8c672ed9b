use serde::{Deserialize, Serialize};

use super::domain::University;
use super::percentiles::TestPercentiles;

/// Scoring algorithm offered to applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Simple,
    Pro,
}

impl Algorithm {
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Simple => "simple",
            Algorithm::Pro => "pro",
        }
    }
}

/// Coarse bucket shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceTier {
    High,
    Medium,
    Low,
    NotEligible,
}

impl ChanceTier {
    pub const fn label(self) -> &'static str {
        match self {
            ChanceTier::High => "High",
            ChanceTier::Medium => "Medium",
            ChanceTier::Low => "Low",
            ChanceTier::NotEligible => "Not eligible",
        }
    }
}

/// Percentage cut-offs for the High and Medium tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub high: u8,
    pub medium: u8,
}

impl TierThresholds {
    pub const fn tier_for(self, percentage: u8) -> ChanceTier {
        if percentage >= self.high {
            ChanceTier::High
        } else if percentage >= self.medium {
            ChanceTier::Medium
        } else {
            ChanceTier::Low
        }
    }
}

/// Hard eligibility failure reported instead of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityIssue {
    Level,
    Discipline,
}

/// Whether tuition fits the declared budget, reported apart from the academic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordability {
    Affordable,
    NotAffordable,
}

impl Affordability {
    pub const fn label(self) -> &'static str {
        match self {
            Affordability::Affordable => "Affordable",
            Affordability::NotAffordable => "Not Affordable",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub gpa_match: bool,
    pub english_match: bool,
    pub budget_match: bool,
    pub discipline_match: bool,
    pub standardized_test_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceFactor {
    Gpa,
    English,
    StandardizedTest,
    Budget,
    Discipline,
    Scholarship,
}

/// Discrete contribution to a chance score, kept for transparent explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ChanceFactor,
    pub points: i16,
    pub notes: String,
}

/// Scored view of one catalog entry for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub university_id: String,
    pub university_name: String,
    pub country: String,
    pub city: String,
    pub tuition: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<u32>,
    pub algorithm: Algorithm,
    /// `None` only when the pro algorithm finds the applicant ineligible.
    pub percentage: Option<u8>,
    pub tier: ChanceTier,
    pub explanation: String,
    pub match_details: MatchDetails,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<Affordability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_issue: Option<EligibilityIssue>,
    /// Multiplier applied to positive contributions when diminishing returns kicked in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diminishing_returns: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<TestPercentiles>,
}

impl ScoringResult {
    pub(crate) fn blank(university: &University, algorithm: Algorithm) -> Self {
        Self {
            university_id: university.id.clone(),
            university_name: university.name.clone(),
            country: university.country.clone(),
            city: university.city.clone(),
            tuition: university.requirements.tuition,
            ranking: university.ranking,
            algorithm,
            percentage: None,
            tier: ChanceTier::NotEligible,
            explanation: String::new(),
            match_details: MatchDetails::default(),
            components: Vec::new(),
            financial_status: None,
            eligibility_issue: None,
            diminishing_returns: None,
            percentiles: None,
        }
    }
}
