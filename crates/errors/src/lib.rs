//! pm-errors - 统一错误处理
//!
//! 服务边界共享的错误分类，基于 RFC 7807 Problem Details 规范

use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROBLEM_BASE: &str = "https://patient-management.dev/problems";

/// 应用错误类型
///
/// 各服务的领域错误最终都会归约到这里，由它决定 HTTP / gRPC 状态码
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::ExternalService(_) => 502,
        }
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::Conflict(_) => tonic::Code::AlreadyExists,
            Self::Internal(_) => tonic::Code::Internal,
            Self::ExternalService(_) => tonic::Code::Unavailable,
        }
    }

    /// 是否为服务端错误（5xx）
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 可以暴露给客户端的错误描述
    ///
    /// 服务端错误只返回标题，内部细节只进日志
    pub fn public_detail(&self) -> String {
        if self.is_server_error() {
            self.problem_title().to_string()
        } else {
            self.to_string()
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: format!("{}/{}", PROBLEM_BASE, self.problem_slug()),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail: self.public_detail(),
        }
    }

    fn problem_slug(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not-found",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal",
            Self::ExternalService(_) => "external-service",
        }
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource Not Found",
            Self::Validation(_) => "Validation Error",
            Self::Conflict(_) => "Conflict",
            Self::Internal(_) => "Internal Server Error",
            Self::ExternalService(_) => "External Service Error",
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        let message = err.public_detail();
        tonic::Status::new(err.grpc_code(), message)
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
