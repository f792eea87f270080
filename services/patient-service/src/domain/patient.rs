//! 患者实体

use chrono::NaiveDate;

use super::value_objects::{Email, PatientId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub email: Email,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub registered_date: NaiveDate,
}
