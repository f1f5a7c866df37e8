use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::dashboard::DashboardSnapshot;
use super::domain::Application;
use super::enrichment::RankingEngine;
use crate::ingest::Dataset;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(flatten)]
    pub dataset: Dataset,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub today: NaiveDate,
    pub average_rent: f64,
    pub conflicting: usize,
    pub applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    #[serde(flatten)]
    pub dataset: Dataset,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    /// Score the applications before folding, so the priority histogram is populated.
    #[serde(default)]
    pub enrich: bool,
}

/// Router builder exposing ranking and dashboard endpoints.
pub fn ranking_router(engine: Arc<RankingEngine>) -> Router {
    Router::new()
        .route("/api/v1/applications/rank", post(rank_handler))
        .route("/api/v1/dashboard", post(dashboard_handler))
        .with_state(engine)
}

pub(crate) async fn rank_handler(
    State(engine): State<Arc<RankingEngine>>,
    Json(request): Json<RankRequest>,
) -> Json<RankResponse> {
    let RankRequest { dataset, today } = request;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let average_rent = dataset.average_rent();

    let applications = engine.rank(&dataset.applications, &dataset.rooms, average_rent, today);
    let conflicting = applications
        .iter()
        .filter(|application| application.has_conflicts == Some(true))
        .count();

    info!(
        applications = applications.len(),
        rooms = dataset.rooms.len(),
        conflicting,
        "ranked application queue"
    );

    Json(RankResponse {
        today,
        average_rent,
        conflicting,
        applications,
    })
}

pub(crate) async fn dashboard_handler(
    State(engine): State<Arc<RankingEngine>>,
    Json(request): Json<DashboardRequest>,
) -> Json<DashboardSnapshot> {
    let DashboardRequest {
        dataset,
        now,
        enrich,
    } = request;
    let now = now.unwrap_or_else(Utc::now);

    let applications = if enrich {
        engine.rank(
            &dataset.applications,
            &dataset.rooms,
            dataset.average_rent(),
            now.date_naive(),
        )
    } else {
        dataset.applications
    };

    info!(
        applications = applications.len(),
        properties = dataset.properties.len(),
        enrich,
        "built dashboard snapshot"
    );

    Json(DashboardSnapshot::build(
        &applications,
        &dataset.properties,
        now,
    ))
}
