//! 可注入的日志能力
//!
//! 组件持有 `Arc<dyn LogSink>` 而不是直接调用全局 logger，
//! 生产环境使用 [`TracingSink`]，测试中用 [`MemorySink`] 捕获日志做断言。

use std::sync::{Mutex, MutexGuard};

use tracing::Level;

/// 日志输出端
pub trait LogSink: Send + Sync {
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::ERROR, message);
    }
}

/// 转发到进程级 tracing subscriber
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    component: &'static str,
}

impl TracingSink {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl LogSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        let component = self.component;
        // tracing 的级别必须是常量
        match level {
            Level::ERROR => tracing::error!(component = %component, "{}", message),
            Level::WARN => tracing::warn!(component = %component, "{}", message),
            Level::INFO => tracing::info!(component = %component, "{}", message),
            Level::DEBUG => tracing::debug!(component = %component, "{}", message),
            _ => tracing::trace!(component = %component, "{}", message),
        }
    }
}

/// 一条被捕获的日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// 内存日志，供测试断言
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 所有已记录的日志（按写入顺序）
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// 指定级别的日志条数
    pub fn count(&self, level: Level) -> usize {
        self.lock().iter().filter(|r| r.level == level).count()
    }

    /// 是否存在指定级别且包含 `needle` 的日志
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn record(&self, level: Level, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}
