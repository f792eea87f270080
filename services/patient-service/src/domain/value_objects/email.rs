//! Email 值对象

use std::fmt;

/// Email 值对象，唯一性比较基于小写形式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// 创建新的 Email
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();
        let trimmed = email.trim();

        // RFC 5322 校验
        if !email_address::EmailAddress::is_valid(trimmed) {
            return Err(EmailError::InvalidFormat(email));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// 获取字符串引用
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email 错误
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}
