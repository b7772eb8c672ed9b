use serde::{Deserialize, Serialize};

use super::domain::{
    EnglishRequirement, EnglishTest, GmatRequirement, GreRequirement, RawNumber, Requirements,
    StandardizedTest, UserProfile,
};
use super::numeric::parse_or_zero;

const SCORE_TOLERANCE: f64 = 1e-9;

/// Outcome of matching the applicant's English certificate against a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishStatus {
    NotRequired,
    Missing,
    Above,
    Equal,
    Below,
}

impl EnglishStatus {
    pub const fn is_match(self) -> bool {
        matches!(
            self,
            EnglishStatus::NotRequired | EnglishStatus::Above | EnglishStatus::Equal
        )
    }

    pub const fn points(self) -> i16 {
        match self {
            EnglishStatus::NotRequired => 0,
            EnglishStatus::Above => 20,
            EnglishStatus::Equal => 10,
            EnglishStatus::Below => -15,
            EnglishStatus::Missing => -20,
        }
    }

    pub const fn clause(self) -> &'static str {
        match self {
            EnglishStatus::NotRequired => "no English test is required",
            EnglishStatus::Missing => "an accepted English test is required",
            EnglishStatus::Above => "your English score exceeds the minimum",
            EnglishStatus::Equal => "your English score meets the minimum",
            EnglishStatus::Below => "your English score is below the minimum",
        }
    }
}

pub fn check_english(
    requirement: &EnglishRequirement,
    test: Option<EnglishTest>,
    score: Option<&RawNumber>,
) -> EnglishStatus {
    if !requirement.required {
        return EnglishStatus::NotRequired;
    }

    let Some(test) = test else {
        return EnglishStatus::Missing;
    };
    let Some(minimum) = requirement.minimum_for(test) else {
        return EnglishStatus::Missing;
    };

    let score = parse_or_zero(score);
    if (score - minimum).abs() < SCORE_TOLERANCE {
        EnglishStatus::Equal
    } else if score > minimum {
        EnglishStatus::Above
    } else {
        EnglishStatus::Below
    }
}

/// Per-exam compliance. `None` means the university does not require that exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedStatus {
    pub gre: Option<bool>,
    pub gmat: Option<bool>,
}

impl StandardizedStatus {
    pub fn is_required(&self) -> bool {
        self.gre.is_some() || self.gmat.is_some()
    }

    /// Every required exam must be satisfied; nothing required is always compliant.
    pub fn is_compliant(&self) -> bool {
        self.gre.unwrap_or(true) && self.gmat.unwrap_or(true)
    }
}

/// Evaluate GRE and GMAT independently.
///
/// An applicant declares a single exam, so the exam not taken always reports `false` and a
/// program requiring both is never fully satisfied.
pub fn check_standardized(requirements: &Requirements, profile: &UserProfile) -> StandardizedStatus {
    let gre = requirements
        .gre
        .as_ref()
        .filter(|gre| gre.required)
        .map(|gre| meets_gre(gre, profile));
    let gmat = requirements
        .gmat
        .as_ref()
        .filter(|gmat| gmat.required)
        .map(|gmat| meets_gmat(gmat, profile));

    StandardizedStatus { gre, gmat }
}

fn meets_gre(requirement: &GreRequirement, profile: &UserProfile) -> bool {
    if profile.standardized_test != Some(StandardizedTest::Gre) {
        return false;
    }

    let sections = [
        (profile.gre.verbal.as_ref(), requirement.min_verbal),
        (profile.gre.quant.as_ref(), requirement.min_quant),
        (profile.gre.writing.as_ref(), requirement.min_writing),
    ];

    sections
        .iter()
        .all(|(score, minimum)| parse_or_zero(*score) >= minimum.unwrap_or(0.0))
}

fn meets_gmat(requirement: &GmatRequirement, profile: &UserProfile) -> bool {
    profile.standardized_test == Some(StandardizedTest::Gmat)
        && parse_or_zero(profile.gmat.total.as_ref()) >= requirement.min_total.unwrap_or(0.0)
}
