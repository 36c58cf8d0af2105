use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assessments::{
    AssessmentSession, Instrument, InstrumentCatalog, InstrumentCategory, InstrumentId, TestResult,
};
use super::environment::{EnvironmentData, EnvironmentRating};
use super::lifestyle::{LifestyleData, RiskFinding};
use super::personality::{PersonalityOutcome, PersonalityQuiz};
use super::ports::{SnapshotPublisher, SnapshotStore};
use super::profile::UserSnapshot;
use super::service::CompanionService;

/// Shared handler state: the fixed catalog plus the snapshot service.
pub struct WellnessState<S, P> {
    pub catalog: Arc<InstrumentCatalog>,
    pub service: Arc<CompanionService<S, P>>,
}

impl<S, P> Clone for WellnessState<S, P> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            service: Arc::clone(&self.service),
        }
    }
}

pub fn wellness_router<S, P>(service: Arc<CompanionService<S, P>>) -> Router
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    let state = WellnessState {
        catalog: Arc::new(InstrumentCatalog::standard()),
        service,
    };

    Router::new()
        .route("/api/v1/assessments", get(catalog_handler::<S, P>))
        .route(
            "/api/v1/assessments/:instrument/score",
            post(score_handler::<S, P>),
        )
        .route(
            "/api/v1/personality/resolve",
            post(personality_handler::<S, P>),
        )
        .route(
            "/api/v1/lifestyle/blueprint",
            post(lifestyle_handler::<S, P>),
        )
        .route(
            "/api/v1/environment/impact",
            post(environment_handler::<S, P>),
        )
        .route("/api/v1/snapshot", get(snapshot_handler::<S, P>))
        .route("/api/v1/sync", post(sync_handler::<S, P>))
        .with_state(state)
}

/// Catalog entry as listed by the browsing endpoint.
#[derive(Debug, Serialize)]
pub struct InstrumentSummary {
    pub id: InstrumentId,
    pub name: &'static str,
    pub category: InstrumentCategory,
    pub description: &'static str,
    pub question_count: usize,
    pub max_score: u32,
}

impl InstrumentSummary {
    fn from_instrument(instrument: &Instrument) -> Self {
        Self {
            id: instrument.id,
            name: instrument.name,
            category: instrument.category,
            description: instrument.description,
            question_count: instrument.question_count(),
            max_score: instrument.max_score(),
        }
    }
}

async fn catalog_handler<S, P>(State(state): State<WellnessState<S, P>>) -> Json<Vec<InstrumentSummary>>
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    Json(
        state
            .catalog
            .instruments()
            .iter()
            .map(InstrumentSummary::from_instrument)
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    answers: Vec<u32>,
}

async fn score_handler<S, P>(
    State(state): State<WellnessState<S, P>>,
    Path(instrument): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    let Some(instrument) = InstrumentId::from_slug(&instrument)
        .and_then(|id| state.catalog.get(id))
    else {
        let payload = json!({ "error": format!("unknown instrument '{instrument}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    let result: TestResult = match AssessmentSession::score_vector(instrument, &request.answers) {
        Ok(result) => result,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    match state.service.record_test_result(result.clone()) {
        Ok(_) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(err) => internal_error(err),
    }
}

#[derive(Debug, Deserialize)]
struct ResolveRequest {
    selections: Vec<i8>,
}

async fn personality_handler<S, P>(
    State(state): State<WellnessState<S, P>>,
    Json(request): Json<ResolveRequest>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    let outcome: PersonalityOutcome = match PersonalityQuiz::resolve_vector(&request.selections) {
        Ok(outcome) => outcome,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    match state.service.record_personality(&outcome) {
        Ok(_) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => internal_error(err),
    }
}

#[derive(Debug, Serialize)]
struct LifestyleResponse {
    findings: Vec<RiskFinding>,
}

async fn lifestyle_handler<S, P>(
    State(state): State<WellnessState<S, P>>,
    Json(data): Json<LifestyleData>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    match state.service.finalize_lifestyle(data) {
        Ok((_, findings)) => (StatusCode::OK, Json(LifestyleResponse { findings })).into_response(),
        Err(err) => internal_error(err),
    }
}

#[derive(Debug, Serialize)]
struct EnvironmentResponse {
    impact_score: f32,
    rating: EnvironmentRating,
    rating_label: &'static str,
}

async fn environment_handler<S, P>(
    State(state): State<WellnessState<S, P>>,
    Json(data): Json<EnvironmentData>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    match state.service.record_environment(data) {
        Ok((_, impact_score, rating)) => (
            StatusCode::OK,
            Json(EnvironmentResponse {
                impact_score,
                rating,
                rating_label: rating.label(),
            }),
        )
            .into_response(),
        Err(err) => internal_error(err),
    }
}

async fn snapshot_handler<S, P>(State(state): State<WellnessState<S, P>>) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    match state.service.load() {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn sync_handler<S, P>(
    State(state): State<WellnessState<S, P>>,
    Json(snapshot): Json<UserSnapshot>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    match state.service.import(snapshot) {
        Ok(stored) => (StatusCode::ACCEPTED, Json(stored)).into_response(),
        Err(err) => internal_error(err),
    }
}

fn internal_error(err: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
