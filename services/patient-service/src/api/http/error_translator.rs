//! 错误翻译器
//!
//! 把处理请求时产生的 [`PatientError`] 转成 400 响应和 `字段 -> 消息` 的 JSON 体。
//! 其他错误不在翻译范围内，走 [`ErrorTranslator::respond`] 的默认故障响应。

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pm_errors::AppError;
use pm_telemetry::LogSink;

use crate::error::{PatientError, ServiceError};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A patient with this email already exist";
pub const NOT_FOUND_MESSAGE: &str = "Patient not Found";

/// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedError {
    pub status: StatusCode,
    pub body: HashMap<String, String>,
}

impl IntoResponse for TranslatedError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn message_body(message: &str) -> HashMap<String, String> {
    HashMap::from([("message".to_string(), message.to_string())])
}

#[derive(Clone)]
pub struct ErrorTranslator {
    log: Arc<dyn LogSink>,
}

impl ErrorTranslator {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self { log }
    }

    /// 翻译可识别的错误；`None` 表示交给默认边界行为
    pub fn translate(&self, error: &ServiceError) -> Option<TranslatedError> {
        match error {
            ServiceError::Patient(e) => Some(self.translate_patient(e)),
            ServiceError::Other(_) => None,
        }
    }

    fn translate_patient(&self, error: &PatientError) -> TranslatedError {
        let body = match error {
            // 同名字段后写覆盖先写
            PatientError::ValidationFailed(violations) => violations
                .iter()
                .map(|v| (v.name.clone(), v.message.clone()))
                .collect(),
            PatientError::DuplicateEmail(detail) => {
                self.log
                    .warn(&format!("A patient with this email already exists {}", detail));
                message_body(DUPLICATE_EMAIL_MESSAGE)
            }
            PatientError::NotFound(detail) => {
                self.log.warn(&format!("Patient not Found {}", detail));
                message_body(NOT_FOUND_MESSAGE)
            }
        };

        metrics::counter!("patient_errors_total", "kind" => error.kind()).increment(1);

        TranslatedError {
            status: StatusCode::BAD_REQUEST,
            body,
        }
    }

    /// 把处理器错误转成最终响应
    pub fn respond(&self, error: ServiceError) -> Response {
        match error {
            ServiceError::Patient(e) => self.translate_patient(&e).into_response(),
            ServiceError::Other(e) => self.default_fault_response(&e),
        }
    }

    /// 默认故障响应：使用 AppError 自身的状态码和 Problem Details，5xx 不暴露内部信息
    fn default_fault_response(&self, error: &AppError) -> Response {
        if error.is_server_error() {
            self.log.error(&format!("Unhandled service error: {}", error));
        }

        let status =
            StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(error.to_problem_details())).into_response()
    }
}
