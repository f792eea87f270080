//! HTTP 接口

pub mod error_translator;
mod patients;
mod routing;

use std::sync::Arc;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::application::PatientService;

pub use error_translator::{ErrorTranslator, TranslatedError};
pub use patients::patient_routes;
pub use routing::{api_routes, metrics_routes};

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub patients: Arc<PatientService>,
    pub translator: ErrorTranslator,
}

impl AppState {
    pub fn new(patients: Arc<PatientService>, translator: ErrorTranslator) -> Self {
        Self {
            patients,
            translator,
        }
    }
}

/// 组装完整的 HTTP 应用
pub fn build_app(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut app = patient_routes(state).merge(api_routes());

    if let Some(handle) = metrics {
        app = app.merge(metrics_routes(handle));
    }

    app.layer(TraceLayer::new_for_http())
}
