//! 患者 HTTP 接口测试

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use patient_service::api::http::ErrorTranslator;
use patient_service::api::{build_app, AppState};
use patient_service::application::{PatientResponse, PatientService};
use patient_service::infrastructure::InMemoryPatientRepository;
use pm_telemetry::MemorySink;
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing::Level;

fn app_with_metrics(metrics: Option<PrometheusHandle>) -> (Router, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let patients = Arc::new(PatientService::new(Arc::new(InMemoryPatientRepository::new())));
    let state = AppState::new(patients, ErrorTranslator::new(sink.clone()));
    (build_app(state, metrics), sink)
}

fn app() -> (Router, Arc<MemorySink>) {
    app_with_metrics(None)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, axum::body::Bytes) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, req).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "address": "1 Main Street",
        "dateOfBirth": "1990-04-12"
    })
}

#[tokio::test]
async fn test_create_and_fetch_patient() {
    let (app, _) = app();

    let (status, body) = send(&app, json_request(Method::POST, "/patients", jane())).await;
    assert_eq!(status, StatusCode::OK);
    let created: PatientResponse = serde_json::from_value(body).unwrap();
    assert_eq!(created.email, "jane@example.com");

    let (status, body) = send(
        &app,
        empty_request(Method::GET, &format!("/patients/{}", created.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dateOfBirth"], "1990-04-12");

    let (status, body) = send(&app, empty_request(Method::GET, "/patients")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_body_returns_field_messages() {
    let (app, sink) = app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/patients",
            json!({ "name": "", "email": "not-an-email", "address": "1 Main Street" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "name": "Name is required",
            "email": "Email should be valid",
            "dateOfBirth": "Date of birth is required"
        })
    );
    // 校验失败不记录告警
    assert_eq!(sink.count(Level::WARN), 0);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (app, sink) = app();

    let (status, _) = send(&app, json_request(Method::POST, "/patients", jane())).await;
    assert_eq!(status, StatusCode::OK);

    let mut again = jane();
    again["email"] = json!("JANE@example.com");
    let (status, body) = send(&app, json_request(Method::POST, "/patients", again)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "A patient with this email already exist" })
    );
    assert!(sink.contains(Level::WARN, "jane@example.com"));
}

#[tokio::test]
async fn test_unknown_patient_not_found() {
    let (app, sink) = app();

    for uri in [
        "/patients/00000000-0000-0000-0000-000000000000",
        "/patients/not-a-uuid",
    ] {
        let (status, body) = send(&app, empty_request(Method::GET, uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Patient not Found" }));
    }

    assert_eq!(sink.count(Level::WARN), 2);
}

#[tokio::test]
async fn test_update_and_delete() {
    let (app, _) = app();

    let (_, body) = send(&app, json_request(Method::POST, "/patients", jane())).await;
    let id = body["id"].as_str().unwrap().to_string();
    let uri = format!("/patients/{}", id);

    let mut changed = jane();
    changed["address"] = json!("2 High Street");
    let (status, body) = send(&app, json_request(Method::PUT, &uri, changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "2 High Street");
    assert_eq!(body["id"], id);

    let (status, _) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Patient not Found" }));
}

#[tokio::test]
async fn test_update_with_email_of_other_patient() {
    let (app, _) = app();

    send(&app, json_request(Method::POST, "/patients", jane())).await;

    let mut john = jane();
    john["name"] = json!("John Roe");
    john["email"] = json!("john@example.com");
    let (_, body) = send(&app, json_request(Method::POST, "/patients", john.clone())).await;
    let john_id = body["id"].as_str().unwrap().to_string();

    john["email"] = json!("jane@example.com");
    let (status, body) = send(
        &app,
        json_request(Method::PUT, &format!("/patients/{}", john_id), john),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "A patient with this email already exist" })
    );
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();

    let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_route_absent_without_recorder() {
    let (app, _) = app();

    let (status, _) = send_raw(&app, empty_request(Method::GET, "/metrics")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_counts_translated_errors() {
    // 本地 recorder，不安装到全局
    let recorder = PrometheusBuilder::new().build_recorder();
    let _guard = metrics::set_default_local_recorder(&recorder);
    let (app, _) = app_with_metrics(Some(recorder.handle()));

    send(&app, json_request(Method::POST, "/patients", jane())).await;
    send(&app, json_request(Method::POST, "/patients", jane())).await;
    send(&app, empty_request(Method::GET, "/patients/not-a-uuid")).await;
    send(&app, empty_request(Method::GET, "/patients/not-a-uuid")).await;

    let (status, bytes) = send_raw(&app, empty_request(Method::GET, "/metrics")).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#"patient_errors_total{kind="duplicate_email"} 1"#));
    assert!(text.contains(r#"patient_errors_total{kind="not_found"} 2"#));
    assert!(!text.contains("validation_failed"));
}
