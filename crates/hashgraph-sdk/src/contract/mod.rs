//! Smart contracts: deployment, calls, results and contract state.

mod contract_create;
mod contract_delete;
mod contract_execute;
mod contract_function_result;
mod contract_id;
mod contract_info;
mod contract_update;
mod ethereum;

pub use contract_create::{ContractCreateTransaction, ContractCreateTransactionData, ContractInitcode};
pub use contract_delete::{ContractDeleteTransaction, ContractDeleteTransactionData, TransferTarget};
pub use contract_execute::{ContractExecuteTransaction, ContractExecuteTransactionData};
pub use contract_function_result::{ContractFunctionResult, ContractLogInfo};
pub use contract_id::ContractId;
pub use contract_info::ContractInfo;
pub use contract_update::{ContractUpdateTransaction, ContractUpdateTransactionData};
pub use ethereum::{EthereumTransaction, EthereumTransactionData};
