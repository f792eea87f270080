use pm_errors::AppError;
use thiserror::Error;

/// 单个字段的校验失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub name: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// 患者服务可识别的客户端错误
///
/// 每个变体在 `ErrorTranslator` 中都有且只有一条翻译规则
#[derive(Debug, Error)]
pub enum PatientError {
    #[error("Validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),
    #[error("{0}")]
    DuplicateEmail(String),
    #[error("{0}")]
    NotFound(String),
}

impl PatientError {
    /// 指标标签
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "validation_failed",
            Self::DuplicateEmail(_) => "duplicate_email",
            Self::NotFound(_) => "not_found",
        }
    }
}

/// 处理器返回的错误
///
/// `Other` 不属于翻译器负责的范围，交给默认故障响应处理
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Patient(#[from] PatientError),
    #[error(transparent)]
    Other(#[from] AppError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
