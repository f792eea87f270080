//! 领域层

pub mod patient;
pub mod repository;
pub mod value_objects;

pub use patient::Patient;
pub use repository::PatientRepository;
pub use value_objects::{Email, EmailError, PatientId};
