use super::domain::{University, UserProfile};
use super::grading::normalize;
use super::outcome::{Affordability, ChanceFactor, EligibilityIssue, ScoreComponent};
use super::requirements::{check_english, check_standardized, EnglishStatus, StandardizedStatus};

pub(crate) const BASE_SCORE: i16 = 50;

const STANDARDIZED_POINTS: i16 = 15;
const DISCIPLINE_POINTS: i16 = 10;
const SCHOLARSHIP_POINTS: i16 = 5;

/// Level is checked before discipline; the first failure wins.
pub(crate) fn eligibility_issue(
    profile: &UserProfile,
    university: &University,
) -> Option<EligibilityIssue> {
    if profile.level != university.level {
        return Some(EligibilityIssue::Level);
    }
    if !university.offers_any(&profile.disciplines) {
        return Some(EligibilityIssue::Discipline);
    }
    None
}

/// Graduated GPA standing relative to the published minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GpaStanding {
    NoMinimum,
    Compared { difference: f64 },
}

impl GpaStanding {
    fn assess(normalized: f64, minimum: Option<f64>) -> Self {
        match minimum {
            None => GpaStanding::NoMinimum,
            Some(minimum) => GpaStanding::Compared {
                difference: ((normalized - minimum) * 100.0).round() / 100.0,
            },
        }
    }

    pub(crate) fn points(self) -> i16 {
        match self {
            GpaStanding::NoMinimum => 0,
            GpaStanding::Compared { difference } if difference >= 0.3 => 20,
            GpaStanding::Compared { difference } if difference >= 0.1 => 10,
            GpaStanding::Compared { difference } if difference >= -0.09 => 0,
            GpaStanding::Compared { difference } if difference >= -0.3 => -10,
            GpaStanding::Compared { .. } => -20,
        }
    }

    pub(crate) fn is_match(self) -> bool {
        match self {
            GpaStanding::NoMinimum => true,
            GpaStanding::Compared { difference } => difference >= 0.0,
        }
    }

    fn clause(self) -> &'static str {
        if self == GpaStanding::NoMinimum {
            return "no minimum GPA is required";
        }
        match self.points() {
            20 => "your GPA is well above the requirement",
            10 => "your GPA is above the requirement",
            0 => "your GPA meets the requirement",
            -10 => "your GPA is slightly below the requirement",
            _ => "your GPA is well below the requirement",
        }
    }
}

/// Tuition against the declared bracket. A missing bracket reads as a zero ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetFit {
    pub tuition: u32,
    pub ceiling: Option<u32>,
}

impl BudgetFit {
    pub(crate) fn fits(self) -> bool {
        self.tuition <= self.ceiling.unwrap_or(0)
    }

    /// Tuition at or under three quarters of the ceiling.
    pub(crate) fn comfortable(self) -> bool {
        u64::from(self.tuition) * 4 <= u64::from(self.ceiling.unwrap_or(0)) * 3
    }

    pub(crate) fn affordability(self) -> Option<Affordability> {
        self.ceiling.map(|ceiling| {
            if self.tuition <= ceiling {
                Affordability::Affordable
            } else {
                Affordability::NotAffordable
            }
        })
    }

    pub(crate) fn clause(self) -> &'static str {
        if self.fits() {
            "tuition fits your budget"
        } else {
            "tuition exceeds your budget"
        }
    }
}

pub(crate) struct FactorSignals {
    pub gpa: GpaStanding,
    pub english: EnglishStatus,
    pub standardized: StandardizedStatus,
    pub discipline_match: bool,
    pub budget: BudgetFit,
}

impl FactorSignals {
    /// Explanation clauses for the academic factors, in display order.
    pub(crate) fn academic_clauses(&self) -> Vec<&'static str> {
        let mut clauses = vec![self.gpa.clause(), self.english.clause()];
        if self.standardized.is_required() {
            clauses.push(if self.standardized.is_compliant() {
                "GRE/GMAT requirements met"
            } else {
                "GRE/GMAT requirements not met"
            });
        }
        clauses
    }
}

/// Score every budget-independent factor. Budget weighting differs per algorithm and is left to
/// the caller through [`FactorSignals::budget`].
pub(crate) fn score_academic_factors(
    profile: &UserProfile,
    university: &University,
) -> (Vec<ScoreComponent>, FactorSignals) {
    let requirements = &university.requirements;
    let mut components = Vec::new();

    let normalized = normalize(profile.gpa.as_ref(), profile.grading_scheme);
    let gpa = GpaStanding::assess(normalized, requirements.min_gpa);
    components.push(ScoreComponent {
        factor: ChanceFactor::Gpa,
        points: gpa.points(),
        notes: match requirements.min_gpa {
            Some(minimum) => format!("normalized GPA {normalized:.2} against minimum {minimum:.2}"),
            None => "no minimum GPA published".to_string(),
        },
    });

    let english = check_english(
        &requirements.english,
        profile.english_test,
        profile.english_score.as_ref(),
    );
    components.push(ScoreComponent {
        factor: ChanceFactor::English,
        points: english.points(),
        notes: match profile.english_test {
            Some(test) => format!("{}: {}", test.label(), english.clause()),
            None => english.clause().to_string(),
        },
    });

    let standardized = check_standardized(requirements, profile);
    if standardized.is_required() {
        let compliant = standardized.is_compliant();
        components.push(ScoreComponent {
            factor: ChanceFactor::StandardizedTest,
            points: if compliant {
                STANDARDIZED_POINTS
            } else {
                -STANDARDIZED_POINTS
            },
            notes: match (standardized.gre, standardized.gmat) {
                (Some(gre), Some(gmat)) => format!("GRE met: {gre}, GMAT met: {gmat}"),
                (Some(gre), None) => format!("GRE met: {gre}"),
                (None, Some(gmat)) => format!("GMAT met: {gmat}"),
                (None, None) => String::new(),
            },
        });
    }

    let discipline_match = university.offers_any(&profile.disciplines);
    components.push(ScoreComponent {
        factor: ChanceFactor::Discipline,
        points: if discipline_match {
            DISCIPLINE_POINTS
        } else {
            -DISCIPLINE_POINTS
        },
        notes: if discipline_match {
            "discipline offered".to_string()
        } else {
            "discipline not offered".to_string()
        },
    });

    if requirements.scholarships && profile.seeks_scholarship() {
        components.push(ScoreComponent {
            factor: ChanceFactor::Scholarship,
            points: SCHOLARSHIP_POINTS,
            notes: "scholarships available for your funding plan".to_string(),
        });
    }

    let budget = BudgetFit {
        tuition: requirements.tuition,
        ceiling: profile.budget.map(|bracket| bracket.ceiling()),
    };

    let signals = FactorSignals {
        gpa,
        english,
        standardized,
        discipline_match,
        budget,
    };

    (components, signals)
}

/// Join clauses into one sentence: first letter capitalized, comma separated, full stop.
pub(crate) fn sentence(clauses: &[&str]) -> String {
    let joined = clauses.join(", ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
