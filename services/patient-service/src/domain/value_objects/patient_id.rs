use std::fmt;
use uuid::Uuid;

/// 患者 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientId(Uuid);

impl PatientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析路径参数，格式错误返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
