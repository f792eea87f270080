//! 内存版患者存储
//!
//! 真实存储接入前用于本地运行和测试

use std::collections::HashMap;

use async_trait::async_trait;
use pm_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::{Patient, PatientId, PatientRepository};

#[derive(Debug, Default)]
pub struct InMemoryPatientRepository {
    patients: RwLock<HashMap<PatientId, Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn list(&self) -> AppResult<Vec<Patient>> {
        let guard = self.patients.read().await;
        let mut patients: Vec<Patient> = guard.values().cloned().collect();
        patients.sort_by(|a, b| a.registered_date.cmp(&b.registered_date).then(a.name.cmp(&b.name)));
        Ok(patients)
    }

    async fn find_by_id(&self, id: PatientId) -> AppResult<Option<Patient>> {
        Ok(self.patients.read().await.get(&id).cloned())
    }

    async fn save_if_email_free(&self, patient: &Patient) -> AppResult<bool> {
        // 检查和写入在同一把写锁内完成
        let mut guard = self.patients.write().await;
        if guard
            .values()
            .any(|p| p.email == patient.email && p.id != patient.id)
        {
            return Ok(false);
        }
        guard.insert(patient.id, patient.clone());
        Ok(true)
    }

    async fn delete(&self, id: PatientId) -> AppResult<bool> {
        Ok(self.patients.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use chrono::NaiveDate;

    use crate::domain::Email;

    fn patient(email: &str) -> Patient {
        Patient {
            id: PatientId::new(),
            name: "Jane Doe".into(),
            email: Email::new(email).unwrap(),
            address: "1 Main Street".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            registered_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryPatientRepository::new();
        let p = patient("jane@example.com");
        assert!(repo.save_if_email_free(&p).await.unwrap());

        assert_eq!(repo.find_by_id(p.id).await.unwrap(), Some(p.clone()));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_taken_by_other_patient_is_rejected() {
        let repo = InMemoryPatientRepository::new();
        let jane = patient("jane@example.com");
        assert!(repo.save_if_email_free(&jane).await.unwrap());

        let other = patient("JANE@example.com");
        assert!(!repo.save_if_email_free(&other).await.unwrap());
        assert_eq!(repo.find_by_id(other.id).await.unwrap(), None);

        // 同一患者覆盖自己的记录不算冲突
        let mut moved = jane.clone();
        moved.address = "2 High Street".into();
        assert!(repo.save_if_email_free(&moved).await.unwrap());
        assert_eq!(repo.list().await.unwrap(), vec![moved]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_keep_email_unique() {
        let repo = Arc::new(InMemoryPatientRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save_if_email_free(&patient("jane@example.com"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPatientRepository::new();
        let p = patient("jane@example.com");
        repo.save_if_email_free(&p).await.unwrap();

        assert!(repo.delete(p.id).await.unwrap());
        assert!(!repo.delete(p.id).await.unwrap());
        assert_eq!(repo.find_by_id(p.id).await.unwrap(), None);
    }
}
