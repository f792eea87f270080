//! 服务启动器
//!
//! 提供统一的服务启动模式：gRPC（tonic）和 HTTP（axum）

use std::error::Error;

use pm_config::AppConfig;
use pm_errors::AppResult;
use tonic::transport::server::Router as GrpcRouter;
use tonic::transport::Server;
use tracing::info;

use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 gRPC 服务
///
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 调用闭包在 `Server` 上注册服务
/// 4. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use pm_bootstrap::run_grpc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_grpc("config", |_config, mut server| {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::default())))
///     })
///     .await
/// }
/// ```
pub async fn run_grpc<F>(config_dir: &str, server_builder: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&AppConfig, Server) -> AppResult<GrpcRouter>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config)?;

    info!("Starting {} service", config.app_name);

    let addr = config.server.socket_addr()?;
    let router = server_builder(&config, Server::builder())?;

    info!(%addr, "gRPC server starting");

    router.serve_with_shutdown(addr, shutdown_signal()).await?;

    info!("Service stopped");

    Ok(())
}

/// 运行 HTTP 服务
pub async fn run_http<F>(config_dir: &str, app_builder: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&AppConfig) -> AppResult<axum::Router>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config)?;

    info!("Starting {} service", config.app_name);

    let addr = config.server.socket_addr()?;
    let app = app_builder(&config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
