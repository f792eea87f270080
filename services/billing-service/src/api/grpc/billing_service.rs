//! Billing gRPC 服务实现

use std::sync::Arc;

use pm_bootstrap::request_span;
use pm_telemetry::LogSink;
use tonic::{Request, Response, Status};
use tracing::Instrument;

use crate::api::proto::billing::{
    billing_service_server::BillingService, BillingRequest, BillingResponse,
};
use crate::application::{AccountProvisioner, BillingAccount, NewBillingAccount};

/// Billing gRPC 服务
///
/// 每次调用恰好返回一个响应，不保存跨调用状态。
pub struct BillingServiceImpl {
    provisioner: Arc<dyn AccountProvisioner>,
    log: Arc<dyn LogSink>,
}

impl BillingServiceImpl {
    pub fn new(provisioner: Arc<dyn AccountProvisioner>, log: Arc<dyn LogSink>) -> Self {
        Self { provisioner, log }
    }
}

// ============ 转换函数 ============

impl From<&BillingRequest> for NewBillingAccount {
    fn from(req: &BillingRequest) -> Self {
        Self {
            patient_id: req.patient_id.clone(),
            name: req.name.clone(),
            email: req.email.clone(),
        }
    }
}

fn account_to_proto(account: BillingAccount) -> BillingResponse {
    BillingResponse {
        account_id: account.account_id,
        status: account.status.to_string(),
    }
}

#[tonic::async_trait]
impl BillingService for BillingServiceImpl {
    async fn create_billing_account(
        &self,
        request: Request<BillingRequest>,
    ) -> Result<Response<BillingResponse>, Status> {
        let span = request_span(&request, "CreateBillingAccount");
        let req = request.into_inner();

        async move {
            self.log
                .info(&format!("createBillingAccount request received {:?}", req));

            let account = self
                .provisioner
                .provision(&NewBillingAccount::from(&req))
                .await
                .map_err(|e| {
                    self.log.warn(&format!("createBillingAccount failed: {}", e));
                    Status::from(e)
                })?;

            metrics::counter!("billing_accounts_created_total").increment(1);

            Ok::<_, Status>(Response::new(account_to_proto(account)))
        }
        .instrument(span)
        .await
    }
}
