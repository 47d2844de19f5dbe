//! Account ids, account transactions, allowances and account state.

mod account_allowance_approve;
mod account_allowance_delete;
mod account_create;
mod account_delete;
mod account_id;
mod account_info;
mod account_update;

pub use account_allowance_approve::{
    AccountAllowanceApproveTransaction, AccountAllowanceApproveTransactionData, HbarAllowance, NftAllowance,
    TokenAllowance,
};
pub use account_allowance_delete::{
    AccountAllowanceDeleteTransaction, AccountAllowanceDeleteTransactionData, NftRemoveAllowance,
};
pub(crate) use account_create::DEFAULT_AUTO_RENEW_PERIOD;
pub use account_create::{AccountCreateTransaction, AccountCreateTransactionData};
pub use account_delete::{AccountDeleteTransaction, AccountDeleteTransactionData};
pub use account_id::{AccountId, AccountIdentity};
pub use account_info::{AccountBalance, AccountInfo};
pub use account_update::{AccountUpdateTransaction, AccountUpdateTransactionData};
