//! 请求 / 响应 DTO 与声明式校验

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Email, Patient};
use crate::error::{FieldViolation, PatientError};

pub const NAME_MAX_LEN: usize = 100;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 创建 / 更新患者请求
///
/// 字段都是可选的，缺失字段作为校验错误返回而不是反序列化错误
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
}

/// 校验通过的患者数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDraft {
    pub name: String,
    pub email: Email,
    pub address: String,
    pub date_of_birth: NaiveDate,
}

fn required<'a>(
    value: &'a Option<String>,
    field: &str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}

impl PatientRequest {
    /// 校验所有字段，收集全部违规项
    pub fn validate(&self) -> Result<PatientDraft, PatientError> {
        let mut violations = Vec::new();

        let name = required(&self.name, "name", "Name is required", &mut violations);
        if let Some(name) = name {
            if name.chars().count() > NAME_MAX_LEN {
                violations.push(FieldViolation::new(
                    "name",
                    format!("Name cannot exceed {} characters", NAME_MAX_LEN),
                ));
            }
        }

        let email = required(&self.email, "email", "Email is required", &mut violations)
            .and_then(|raw| match Email::new(raw) {
                Ok(email) => Some(email),
                Err(_) => {
                    violations.push(FieldViolation::new("email", "Email should be valid"));
                    None
                }
            });

        let address = required(&self.address, "address", "Address is required", &mut violations);

        let date_of_birth = required(
            &self.date_of_birth,
            "dateOfBirth",
            "Date of birth is required",
            &mut violations,
        )
        .and_then(|raw| match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::new(
                    "dateOfBirth",
                    "Date of birth must be a valid date (YYYY-MM-DD)",
                ));
                None
            }
        });

        match (name, email, address, date_of_birth) {
            (Some(name), Some(email), Some(address), Some(date_of_birth))
                if violations.is_empty() =>
            {
                Ok(PatientDraft {
                    name: name.to_string(),
                    email,
                    address: address.to_string(),
                    date_of_birth,
                })
            }
            _ => Err(PatientError::ValidationFailed(violations)),
        }
    }
}

/// 患者响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.to_string(),
            name: patient.name,
            email: patient.email.to_string(),
            address: patient.address,
            date_of_birth: patient.date_of_birth.format(DATE_FORMAT).to_string(),
        }
    }
}
