//! pm-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑

mod interceptor;
mod runtime;
mod starter;

pub use interceptor::*;
pub use runtime::*;
pub use starter::*;
