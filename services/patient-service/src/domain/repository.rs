//! 患者存储端口
//!
//! 持久化不属于本服务，由外部实现提供

use async_trait::async_trait;
use pm_errors::AppResult;

use super::{Patient, PatientId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Patient>>;

    async fn find_by_id(&self, id: PatientId) -> AppResult<Option<Patient>>;

    /// 新增或覆盖，邮箱唯一性检查与写入必须是同一个原子操作
    ///
    /// 邮箱已被其他患者占用时不写入，返回 `false`
    async fn save_if_email_free(&self, patient: &Patient) -> AppResult<bool>;

    /// 返回是否删除了记录
    async fn delete(&self, id: PatientId) -> AppResult<bool>;
}
