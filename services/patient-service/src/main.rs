//! Patient Service - 患者服务入口

use std::sync::Arc;

use patient_service::api::http::ErrorTranslator;
use patient_service::api::{build_app, AppState};
use patient_service::application::PatientService;
use patient_service::infrastructure::InMemoryPatientRepository;
use pm_bootstrap::run_http;
use pm_errors::AppError;
use pm_telemetry::{init_metrics, TracingSink};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http("config", |config| {
        info!(app_env = %config.app_env, "Initializing Patient Service...");

        let metrics = init_metrics()
            .map_err(|e| AppError::internal(format!("Failed to init metrics: {}", e)))?;

        let repository = Arc::new(InMemoryPatientRepository::new());
        let patients = Arc::new(PatientService::new(repository));
        let translator = ErrorTranslator::new(Arc::new(TracingSink::new("patient-service")));

        info!("HTTP routes created");

        Ok(build_app(AppState::new(patients, translator), Some(metrics)))
    })
    .await
}
