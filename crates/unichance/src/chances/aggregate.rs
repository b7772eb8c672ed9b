use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::ScoringConfig;
use super::domain::{University, UserProfile};
use super::outcome::{Algorithm, ScoringResult};
use super::{pro, simple};
use crate::catalog::Catalog;

/// Display order requested by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Chance,
    Budget,
}

impl SortOrder {
    pub fn apply(self, results: Vec<ScoringResult>) -> Vec<ScoringResult> {
        match self {
            SortOrder::Chance => sort_by_chance(results),
            SortOrder::Budget => sort_by_budget(results),
        }
    }
}

pub(crate) fn score_one(
    profile: &UserProfile,
    university: &University,
    algorithm: Algorithm,
    config: &ScoringConfig,
) -> ScoringResult {
    match algorithm {
        Algorithm::Simple => simple::score(profile, university),
        Algorithm::Pro => pro::score(profile, university, config.pro_budget_mode),
    }
}

/// Score every catalog entry, then drop entries outside the applicant's preferred country.
pub(crate) fn score_all(
    profile: &UserProfile,
    catalog: &Catalog,
    algorithm: Algorithm,
    config: &ScoringConfig,
) -> Vec<ScoringResult> {
    let country = profile.country_preference();

    let results: Vec<ScoringResult> = catalog
        .universities()
        .iter()
        .map(|university| (university, score_one(profile, university, algorithm, config)))
        .filter(|(university, _)| country.map_or(true, |country| university.located_in(country)))
        .map(|(_, result)| result)
        .collect();

    debug!(
        algorithm = algorithm.label(),
        catalog = catalog.len(),
        kept = results.len(),
        country = country.unwrap_or("any"),
        "scored catalog"
    );

    results
}

/// Highest percentage first; unscored (ineligible) entries sink to the bottom. Stable.
pub fn sort_by_chance(mut results: Vec<ScoringResult>) -> Vec<ScoringResult> {
    results.sort_by(|left, right| match (left.percentage, right.percentage) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    results
}

/// Cheapest tuition first. Stable.
pub fn sort_by_budget(mut results: Vec<ScoringResult>) -> Vec<ScoringResult> {
    results.sort_by_key(|result| result.tuition);
    results
}
