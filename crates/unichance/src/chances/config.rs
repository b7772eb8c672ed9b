use serde::{Deserialize, Serialize};

/// How the pro algorithm treats the applicant's budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProBudgetMode {
    /// Budget is reported as a separate affordability flag and never moves the percentage.
    #[default]
    Decoupled,
    /// Budget folds into the percentage with asymmetric weights and a lower ceiling.
    Coupled,
}

impl ProBudgetMode {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "decoupled" | "separate" => Some(Self::Decoupled),
            "coupled" | "scored" => Some(Self::Coupled),
            _ => None,
        }
    }
}

/// Scoring dials shared by every request served by one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub pro_budget_mode: ProBudgetMode,
}
