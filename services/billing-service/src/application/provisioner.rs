//! 账单账户开通
//!
//! `AccountProvisioner` 是账户创建业务逻辑的接入点。
//! 目前只有 [`StubAccountProvisioner`]，对任何请求都返回同一个已激活账户。

use std::fmt;

use async_trait::async_trait;

use crate::error::BillingError;

/// 桩账户 ID
pub const STUB_ACCOUNT_ID: &str = "12345";

/// 账户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 开通请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBillingAccount {
    pub patient_id: String,
    pub name: String,
    pub email: String,
}

/// 已开通的账户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAccount {
    pub account_id: String,
    pub status: AccountStatus,
}

/// 账户开通端口
///
/// 实现必须对重复请求保持幂等：RPC 传输可能至少投递一次。
#[async_trait]
pub trait AccountProvisioner: Send + Sync {
    async fn provision(&self, request: &NewBillingAccount) -> Result<BillingAccount, BillingError>;
}

/// 固定返回 `12345` / `ACTIVE`，不读取请求内容
#[derive(Debug, Default, Clone, Copy)]
pub struct StubAccountProvisioner;

#[async_trait]
impl AccountProvisioner for StubAccountProvisioner {
    async fn provision(&self, _request: &NewBillingAccount) -> Result<BillingAccount, BillingError> {
        Ok(BillingAccount {
            account_id: STUB_ACCOUNT_ID.to_string(),
            status: AccountStatus::Active,
        })
    }
}
