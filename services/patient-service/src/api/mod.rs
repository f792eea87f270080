//! API 层

pub mod http;

pub use http::{build_app, AppState};
