//! 患者应用服务

use std::sync::Arc;

use chrono::Utc;

use super::dto::PatientRequest;
use crate::domain::{Patient, PatientId, PatientRepository};
use crate::error::{PatientError, ServiceResult};

pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

fn not_found(id: &str) -> PatientError {
    PatientError::NotFound(format!("Patient not found with ID: {}", id))
}

impl PatientService {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Patient>> {
        Ok(self.repository.list().await?)
    }

    pub async fn get(&self, id: &str) -> ServiceResult<Patient> {
        let patient_id = PatientId::parse(id).ok_or_else(|| not_found(id))?;

        self.repository
            .find_by_id(patient_id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn create(&self, request: PatientRequest) -> ServiceResult<Patient> {
        let draft = request.validate()?;

        let patient = Patient {
            id: PatientId::new(),
            name: draft.name,
            email: draft.email,
            address: draft.address,
            date_of_birth: draft.date_of_birth,
            registered_date: Utc::now().date_naive(),
        };

        if !self.repository.save_if_email_free(&patient).await? {
            return Err(PatientError::DuplicateEmail(format!(
                "email {} is already registered",
                patient.email
            ))
            .into());
        }

        Ok(patient)
    }

    pub async fn update(&self, id: &str, request: PatientRequest) -> ServiceResult<Patient> {
        let draft = request.validate()?;

        let mut patient = self.get(id).await?;
        patient.name = draft.name;
        patient.email = draft.email;
        patient.address = draft.address;
        patient.date_of_birth = draft.date_of_birth;

        if !self.repository.save_if_email_free(&patient).await? {
            return Err(PatientError::DuplicateEmail(format!(
                "email {} is already registered to another patient",
                patient.email
            ))
            .into());
        }

        Ok(patient)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let patient_id = PatientId::parse(id).ok_or_else(|| not_found(id))?;

        if self.repository.delete(patient_id).await? {
            Ok(())
        } else {
            Err(not_found(id).into())
        }
    }
}
