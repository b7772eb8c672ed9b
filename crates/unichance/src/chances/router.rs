use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::aggregate::SortOrder;
use super::domain::UserProfile;
use super::outcome::{Algorithm, ScoringResult};
use super::ChanceEngine;
use crate::catalog::Catalog;

#[derive(Clone)]
pub(crate) struct ChanceState {
    pub(crate) engine: Arc<ChanceEngine>,
    pub(crate) catalog: Arc<Catalog>,
}

/// Router builder exposing chance scoring over a shared, read-only catalog.
pub fn chance_router(engine: Arc<ChanceEngine>, catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/v1/chances", post(chances_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(ChanceState { engine, catalog })
}

/// Questionnaire submission plus presentation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChanceRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ChanceRequest {
    pub fn evaluate(self, engine: &ChanceEngine, catalog: &Catalog) -> ChanceResponse {
        let results = engine.score_all(&self.profile, catalog, self.algorithm);
        let total = results.len();
        let scored = results
            .iter()
            .filter(|result| result.percentage.is_some())
            .count();

        let mut results = self.sort.apply(results);
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        ChanceResponse {
            algorithm: self.algorithm,
            sort: self.sort,
            total,
            scored,
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChanceResponse {
    pub algorithm: Algorithm,
    pub sort: SortOrder,
    /// Entries left after the country filter, before `limit`.
    pub total: usize,
    /// Entries with a percentage (pro leaves ineligible entries unscored).
    pub scored: usize,
    pub results: Vec<ScoringResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub universities: usize,
    pub countries: Vec<String>,
}

pub(crate) async fn chances_handler(
    State(state): State<ChanceState>,
    Json(request): Json<ChanceRequest>,
) -> Response {
    let algorithm = request.algorithm;
    let response = request.evaluate(&state.engine, &state.catalog);
    info!(
        algorithm = algorithm.label(),
        pro_budget_mode = ?state.engine.config().pro_budget_mode,
        total = response.total,
        scored = response.scored,
        "chances computed"
    );
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn catalog_handler(State(state): State<ChanceState>) -> Response {
    let summary = CatalogSummary {
        universities: state.catalog.len(),
        countries: state.catalog.countries(),
    };
    (StatusCode::OK, Json(summary)).into_response()
}
