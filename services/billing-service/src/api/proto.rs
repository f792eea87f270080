//! gRPC 生成代码引入

pub mod billing {
    tonic::include_proto!("billing.v1");
}
