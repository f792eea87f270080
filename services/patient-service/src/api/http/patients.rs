//! 患者路由
//!
//! 处理器的错误统一交给 `ErrorTranslator::respond`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::application::{PatientRequest, PatientResponse};

pub fn patient_routes(state: AppState) -> Router {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .with_state(state)
}

async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, Response> {
    state
        .patients
        .list()
        .await
        .map(|patients| Json(patients.into_iter().map(PatientResponse::from).collect()))
        .map_err(|e| state.translator.respond(e))
}

async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, Response> {
    state
        .patients
        .get(&id)
        .await
        .map(|p| Json(p.into()))
        .map_err(|e| state.translator.respond(e))
}

async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<PatientRequest>,
) -> Result<Json<PatientResponse>, Response> {
    state
        .patients
        .create(request)
        .await
        .map(|p| Json(p.into()))
        .map_err(|e| state.translator.respond(e))
}

async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PatientRequest>,
) -> Result<Json<PatientResponse>, Response> {
    state
        .patients
        .update(&id, request)
        .await
        .map(|p| Json(p.into()))
        .map_err(|e| state.translator.respond(e))
}

async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, Response> {
    state
        .patients
        .delete(&id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|e| state.translator.respond(e))
}
