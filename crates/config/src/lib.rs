//! pm-config - 配置加载库
//!
//! 加载顺序：`default.toml` -> `{APP_ENV}.toml` -> `PM_` 前缀的环境变量

use std::net::SocketAddr;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，嵌套字段用 `__` 分隔，例如 `PM_SERVER__PORT`
pub const ENV_PREFIX: &str = "PM_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid server address {0}: {1}")]
    InvalidAddress(String, std::net::AddrParseError),
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    /// 解析监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|e| ConfigError::InvalidAddress(raw, e))
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_app_env() -> String {
    current_env()
}

/// 当前运行环境，未设置 `APP_ENV` 时视为 development
fn current_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        Self::load_for_env(config_dir, &current_env())
    }

    /// 按指定环境加载配置
    pub fn load_for_env(config_dir: &str, env: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
