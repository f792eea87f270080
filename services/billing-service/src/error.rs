use pm_errors::AppError;
use thiserror::Error;
use tonic::Status;

/// 账户开通过程中的失败
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Invalid billing request: {0}")]
    InvalidRequest(String),
    #[error("Billing account already exists for patient {0}")]
    AccountExists(String),
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<BillingError> for AppError {
    fn from(error: BillingError) -> Self {
        match error {
            BillingError::InvalidRequest(msg) => AppError::validation(msg),
            BillingError::AccountExists(patient_id) => AppError::conflict(format!(
                "Billing account already exists for patient {}",
                patient_id
            )),
            BillingError::LedgerUnavailable(msg) => AppError::external_service(msg),
            BillingError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl From<BillingError> for Status {
    fn from(error: BillingError) -> Self {
        AppError::from(error).into()
    }
}
