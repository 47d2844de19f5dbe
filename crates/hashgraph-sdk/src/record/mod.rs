//! Consensus results: receipts, records and exchange rates.

mod exchange_rate;
mod transaction_receipt;
mod transaction_record;

pub use exchange_rate::{ExchangeRate, ExchangeRates};
pub use transaction_receipt::TransactionReceipt;
pub use transaction_record::{ContractResult, PrngOutput, TransactionRecord};
