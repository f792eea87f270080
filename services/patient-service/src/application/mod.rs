//! 应用层

pub mod dto;
mod patient_service;

pub use dto::{PatientDraft, PatientRequest, PatientResponse};
pub use patient_service::PatientService;
