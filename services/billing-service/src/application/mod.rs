//! 应用层

mod provisioner;

pub use provisioner::{
    AccountProvisioner, AccountStatus, BillingAccount, NewBillingAccount, StubAccountProvisioner,
    STUB_ACCOUNT_ID,
};
