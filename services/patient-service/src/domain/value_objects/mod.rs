mod email;
mod patient_id;

pub use email::{Email, EmailError};
pub use patient_id::PatientId;
