//! gRPC 服务模块

mod billing_service;

pub use billing_service::BillingServiceImpl;
