//! Privileged network operations and utility transactions.

mod freeze;
mod prng;
mod system_delete;

pub use freeze::{FreezeTransaction, FreezeTransactionData, FreezeType};
pub use prng::{PrngTransaction, PrngTransactionData};
pub use system_delete::{
    SystemDeleteTransaction, SystemDeleteTransactionData, SystemTarget, SystemUndeleteTransaction,
    SystemUndeleteTransactionData,
};
