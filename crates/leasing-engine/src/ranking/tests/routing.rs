use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::ranking::{ranking_router, RankingEngine};

fn dataset() -> Value {
    json!({
        "applications": [
            {
                "id": "app-1",
                "property_ref": "prop-a",
                "status": "pending",
                "rent_budget": 1200,
                "desired_move_in_date": "2026-10-19",
                "days_pending": 10,
                "created_at": "2026-10-04T09:00:00Z",
                "updated_at": "2026-10-05T09:00:00Z"
            },
            {
                "id": "app-2",
                "property_ref": "prop-a",
                "status": "processing",
                "created_at": "2026-10-12T09:00:00Z",
                "updated_at": "2026-10-12T09:00:00Z"
            },
            {
                "id": "app-3",
                "property_ref": "prop-b",
                "status": "approved",
                "days_pending": 4,
                "created_at": "2026-09-20T09:00:00Z",
                "updated_at": "2026-10-10T09:00:00Z"
            }
        ],
        "rooms": [
            {
                "id": "room-1",
                "property_ref": "prop-a",
                "monthly_rent": "950.00",
                "is_vacant": true,
                "current_occupancy": 0,
                "max_capacity": 2,
                "can_add_tenant": true
            }
        ],
        "properties": [
            { "id": "prop-a", "name": "Maple Court", "rooms": [] },
            { "id": "prop-b", "name": "Birch Row" }
        ],
        "average_rent": 1000
    })
}

async fn post_json(path: &str, payload: Value) -> (StatusCode, Value) {
    let router = ranking_router(Arc::new(RankingEngine::default()));
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn rank_endpoint_returns_enriched_queue() {
    let mut payload = dataset();
    payload["today"] = json!("2026-10-14");

    let (status, body) = post_json("/api/v1/applications/rank", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_rent"], json!(1000.0));
    assert_eq!(body["conflicting"], json!(2));
    let first = &body["applications"][0];
    assert_eq!(first["id"], json!("app-1"));
    assert_eq!(first["priority_score"], json!(30));
    assert_eq!(first["urgency_level"], json!("low"));
    assert_eq!(first["recommended_rooms"], json!(["room-1"]));
    assert_eq!(first["conflicting_applications"], json!(["app-2"]));
}

#[tokio::test]
async fn dashboard_endpoint_folds_snapshot() {
    let mut payload = dataset();
    payload["now"] = json!("2026-10-14T12:00:00Z");
    payload["enrich"] = json!(true);

    let (status, body) = post_json("/api/v1/dashboard", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pipeline"]["total"], json!(3));
    assert_eq!(body["processing_time"]["total_processed"], json!(1));
    assert_eq!(body["efficiency"]["backlog_count"], json!(1));
    assert_eq!(body["property_performance"][1]["property_name"], json!("Birch Row"));
    assert_eq!(body["priority_distribution"]["minimal"], json!(3));
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let (status, _) = post_json("/api/v1/dashboard", json!({ "applications": "nope" })).await;
    assert!(status.is_client_error());
}
