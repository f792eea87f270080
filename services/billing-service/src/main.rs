//! Billing Service - 账单服务入口
//!
//! 提供 CreateBillingAccount gRPC 接口

use std::sync::Arc;

use billing_service::api::billing::billing_service_server::BillingServiceServer;
use billing_service::api::BillingServiceImpl;
use billing_service::application::StubAccountProvisioner;
use billing_service::FILE_DESCRIPTOR_SET;
use pm_bootstrap::{run_grpc, tracing_interceptor};
use pm_errors::AppError;
use pm_telemetry::TracingSink;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_grpc("config", |config, mut server| {
        info!(app_env = %config.app_env, "Initializing Billing Service...");

        let billing_service = BillingServiceImpl::new(
            Arc::new(StubAccountProvisioner),
            Arc::new(TracingSink::new("billing-service")),
        );

        // 构建反射服务
        let reflection_service = ReflectionBuilder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .map_err(|e| AppError::internal(format!("Failed to build reflection service: {}", e)))?;

        info!("gRPC services created");

        Ok(server
            .add_service(BillingServiceServer::with_interceptor(
                billing_service,
                tracing_interceptor,
            ))
            .add_service(reflection_service))
    })
    .await
}
