use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::chances::router::{catalog_handler, chances_handler, ChanceState};
use crate::chances::{Algorithm, ChanceRequest, ProBudgetMode, SortOrder};

fn chance_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/chances")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn chances_route_scores_a_questionnaire_payload() {
    let response = router()
        .oneshot(chance_request(json!({
            "profile": {
                "level": "master",
                "grading_scheme": "four_point",
                "gpa": "3.2",
                "budget": "20000-30000",
                "english_test": "ielts",
                "english_score": 6.5,
                "disciplines": ["Computer Science"]
            }
        })))
        .await
        .expect("router responds");

    let body = json_body(response).await;
    assert_eq!(body["algorithm"], "simple");
    assert_eq!(body["sort"], "chance");
    assert_eq!(body["total"], 4);
    assert_eq!(body["results"][0]["university_id"], "ca-lakeside-msc-cs");
    assert_eq!(body["results"][0]["percentage"], 85);
    assert_eq!(body["results"][0]["tier"], "high");
}

#[tokio::test]
async fn chances_route_honours_algorithm_and_sort() {
    let response = router()
        .oneshot(chance_request(json!({
            "profile": {
                "level": "master",
                "grading_scheme": "percentage",
                "gpa": 80,
                "disciplines": ["Computer Science"],
                "study_country": "Canada"
            },
            "algorithm": "pro",
            "sort": "budget"
        })))
        .await
        .expect("router responds");

    let body = json_body(response).await;
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["university_id"], "ca-harbour-bsc-cs");
    assert_eq!(results[0]["percentage"], serde_json::Value::Null);
    assert_eq!(results[0]["tier"], "not_eligible");
    assert_eq!(results[0]["eligibility_issue"], "level");
    assert_eq!(body["scored"], 2);
}

#[tokio::test]
async fn chances_route_scores_non_numeric_answers_as_zero() {
    let response = router()
        .oneshot(chance_request(json!({
            "profile": {
                "level": "master",
                "grading_scheme": "four_point",
                "gpa": true,
                "budget": "20000-30000",
                "english_test": "ielts",
                "english_score": { "band": 7 },
                "disciplines": ["Computer Science"]
            }
        })))
        .await
        .expect("router responds");

    let body = json_body(response).await;
    assert_eq!(body["scored"], 4);
    let lakeside = body["results"]
        .as_array()
        .and_then(|results| {
            results
                .iter()
                .find(|result| result["university_id"] == "ca-lakeside-msc-cs")
        })
        .expect("lakeside is scored");
    assert!(lakeside["percentage"].is_u64());
    assert_eq!(lakeside["match_details"]["gpa_match"], false);
    assert_eq!(lakeside["match_details"]["english_match"], false);

    let gpa = lakeside["components"]
        .as_array()
        .and_then(|components| components.iter().find(|c| c["factor"] == "gpa"))
        .expect("gpa component");
    assert_eq!(gpa["points"], -20);
}

#[tokio::test]
async fn pro_results_use_snake_case_wire_values() {
    let response = router()
        .oneshot(chance_request(json!({
            "profile": {
                "level": "master",
                "grading_scheme": "four_point",
                "gpa": 3.2,
                "budget": "0-10000",
                "disciplines": ["Computer Science"]
            },
            "algorithm": "pro"
        })))
        .await
        .expect("router responds");

    let body = json_body(response).await;
    let results = body["results"].as_array().expect("results array");
    let by_id = |id: &str| {
        results
            .iter()
            .find(|result| result["university_id"] == id)
            .expect("catalog entry present")
    };
    assert_eq!(by_id("ca-lakeside-msc-cs")["financial_status"], "not_affordable");
    assert_eq!(by_id("de-spree-msc-cs")["financial_status"], "affordable");
    assert_eq!(by_id("ca-harbour-bsc-cs")["tier"], "not_eligible");
}

#[tokio::test]
async fn chances_route_rejects_profiles_without_a_level() {
    let response = router()
        .oneshot(chance_request(json!({
            "profile": { "grading_scheme": "four_point" }
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn catalog_route_summarizes_the_dataset() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let body = json_body(response).await;
    assert_eq!(body["universities"], 4);
    assert_eq!(body["countries"], json!(["Canada", "Germany"]));
}

#[tokio::test]
async fn chances_handler_applies_the_limit() {
    let state = ChanceState {
        engine: Arc::new(engine(ProBudgetMode::Coupled)),
        catalog: Arc::new(catalog()),
    };
    assert_eq!(
        state.engine.config().pro_budget_mode,
        ProBudgetMode::Coupled
    );
    let request = ChanceRequest {
        profile: profile(),
        algorithm: Algorithm::Pro,
        sort: SortOrder::Chance,
        limit: Some(1),
    };

    let response = chances_handler(State(state.clone()), axum::Json(request)).await;
    let body = json_body(response).await;
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["total"], 4);

    let summary = json_body(catalog_handler(State(state)).await).await;
    assert_eq!(summary["universities"], 4);
}
