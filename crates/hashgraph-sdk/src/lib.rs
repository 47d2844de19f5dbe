//! # Hashgraph SDK Core
//!
//! Client-side codec for the hashgraph ledger: entity identifiers with
//! ledger checksums, every transaction and query kind, and the
//! freeze/sign/chunk pipeline that turns a builder into signed bytes.
//!
//! ## Layers
//!
//! ```text
//! [Client] ──ledger id, nodes, operator──→ [Transaction<D>] ──freeze──→ signed entries
//!                                                 │
//!                                                 ↓ to_bytes / from_bytes
//!                                          [hashgraph-proto]
//! ```
//!
//! ## Not here
//!
//! No gRPC transport, retries or mirror-node access. Queries encode
//! requests and decode answers; sending them is left to the caller.

#![warn(clippy::all)]

mod account;
mod client;
mod contract;
pub mod entity_id;
mod error;
mod evm_address;
mod file;
mod hbar;
pub mod hooks;
mod key;
mod ledger_id;
mod network_version_info;
mod node;
pub mod protobuf;
pub mod query;
mod record;
mod schedule;
mod staking;
mod status;
mod system;
pub mod telemetry;
mod token;
mod topic;
pub mod transaction;
mod transfer;

pub use account::{
    AccountAllowanceApproveTransaction, AccountAllowanceApproveTransactionData,
    AccountAllowanceDeleteTransaction, AccountAllowanceDeleteTransactionData, AccountBalance,
    AccountCreateTransaction, AccountCreateTransactionData, AccountDeleteTransaction,
    AccountDeleteTransactionData, AccountId, AccountIdentity, AccountInfo, AccountUpdateTransaction,
    AccountUpdateTransactionData, HbarAllowance, NftAllowance, NftRemoveAllowance, TokenAllowance,
};
pub use client::{
    Client, ClientConfig, NetworkConfig, OperatorConfig, DEFAULT_GRPC_DEADLINE, DEFAULT_REQUEST_TIMEOUT,
};
pub use contract::{
    ContractCreateTransaction, ContractCreateTransactionData, ContractDeleteTransaction,
    ContractDeleteTransactionData, ContractExecuteTransaction, ContractExecuteTransactionData,
    ContractFunctionResult, ContractId, ContractInfo, ContractInitcode, ContractLogInfo,
    ContractUpdateTransaction, ContractUpdateTransactionData, EthereumTransaction, EthereumTransactionData,
    TransferTarget,
};
pub use entity_id::{Checksum, EntityId, ValidateChecksums};
pub use error::{Error, Result};
pub use evm_address::EvmAddress;
pub use file::{
    FileAppendTransaction, FileAppendTransactionData, FileContentsResponse, FileCreateTransaction,
    FileCreateTransactionData, FileDeleteTransaction, FileDeleteTransactionData, FileId, FileInfo,
    FileUpdateTransaction, FileUpdateTransactionData,
};
pub use hashgraph_crypto::{PrivateKey, PublicKey};
pub use hbar::{Hbar, HbarUnit};
pub use hooks::{LambdaSStoreTransaction, LambdaSStoreTransactionData};
pub use key::{Key, KeyList};
pub use ledger_id::LedgerId;
pub use network_version_info::{NetworkVersionInfo, SemanticVersion};
pub use node::{
    NodeCreateTransaction, NodeCreateTransactionData, NodeDeleteTransaction, NodeDeleteTransactionData,
    NodeUpdateTransaction, NodeUpdateTransactionData, ServiceEndpoint,
};
pub use protobuf::{FromProtobuf, ToProtobuf};
pub use query::{
    AccountBalanceQuery, AccountBalanceQueryData, AccountInfoQuery, AccountInfoQueryData, AccountRecordsQuery,
    AccountRecordsQueryData, AnyQuery, AnyQueryData, AnyQueryResponse, ContractBytecodeQuery,
    ContractBytecodeQueryData, ContractCallQuery, ContractCallQueryData, ContractInfoQuery,
    ContractInfoQueryData, FileContentsQuery, FileContentsQueryData, FileInfoQuery, FileInfoQueryData, FromAnyQueryData,
    NetworkVersionInfoQuery, NetworkVersionInfoQueryData, Query, QueryData, ScheduleInfoQuery,
    ScheduleInfoQueryData, TokenInfoQuery, TokenInfoQueryData, TokenNftInfoQuery, TokenNftInfoQueryData,
    TopicInfoQuery, TopicInfoQueryData, TransactionReceiptQuery, TransactionReceiptQueryData,
    TransactionReceiptResponse, TransactionRecordQuery, TransactionRecordQueryData, TransactionRecordResponse,
};
pub use record::{ContractResult, ExchangeRate, ExchangeRates, PrngOutput, TransactionReceipt, TransactionRecord};
pub use schedule::{
    SchedulableTransaction, ScheduleCreateTransaction, ScheduleCreateTransactionData, ScheduleDeleteTransaction,
    ScheduleDeleteTransactionData, ScheduleId, ScheduleInfo, ScheduleSignTransaction, ScheduleSignTransactionData,
};
pub use staking::{StakedId, StakingInfo};
pub use status::Status;
pub use system::{
    FreezeTransaction, FreezeTransactionData, FreezeType, PrngTransaction, PrngTransactionData,
    SystemDeleteTransaction, SystemDeleteTransactionData, SystemTarget, SystemUndeleteTransaction,
    SystemUndeleteTransactionData,
};
pub use telemetry::{init_tracing, TelemetryConfig};
pub use token::{
    AssessedCustomFee, CustomFee, CustomFeeLimit, Fee, FeeAssessmentMethod, FixedCustomFee, FixedFee,
    FractionalFee, NftId, PendingAirdropId, PendingAirdropRecord, PendingAirdropToken, RoyaltyFee,
    TokenAirdropTransaction, TokenAirdropTransactionData, TokenAssociateTransaction, TokenAssociateTransactionData,
    TokenAssociation, TokenBurnTransaction, TokenBurnTransactionData, TokenCancelAirdropTransaction,
    TokenCancelAirdropTransactionData, TokenClaimAirdropTransaction, TokenClaimAirdropTransactionData,
    TokenCreateTransaction, TokenCreateTransactionData, TokenDeleteTransaction, TokenDeleteTransactionData,
    TokenDissociateTransaction, TokenDissociateTransactionData, TokenFeeScheduleUpdateTransaction,
    TokenFeeScheduleUpdateTransactionData, TokenFreezeTransaction, TokenFreezeTransactionData,
    TokenGrantKycTransaction, TokenGrantKycTransactionData, TokenId, TokenInfo, TokenKeyValidation,
    TokenMintTransaction, TokenMintTransactionData, TokenNftInfo, TokenPauseTransaction, TokenPauseTransactionData,
    TokenReference, TokenRejectTransaction, TokenRejectTransactionData, TokenRelationship,
    TokenRevokeKycTransaction, TokenRevokeKycTransactionData, TokenSupplyType, TokenType,
    TokenUnfreezeTransaction, TokenUnfreezeTransactionData, TokenUnpauseTransaction, TokenUnpauseTransactionData,
    TokenUpdateNftsTransaction, TokenUpdateNftsTransactionData, TokenUpdateTransaction,
    TokenUpdateTransactionData, TokenWipeTransaction, TokenWipeTransactionData,
};
pub use topic::{
    TopicCreateTransaction, TopicCreateTransactionData, TopicDeleteTransaction, TopicDeleteTransactionData,
    TopicId, TopicInfo, TopicMessageSubmitTransaction, TopicMessageSubmitTransactionData, TopicUpdateTransaction,
    TopicUpdateTransactionData,
};
pub use transaction::{
    AnySchedulableTransactionData, AnyTransaction, AnyTransactionData, BatchTransaction, BatchTransactionData,
    ChunkData, ChunkInfo, FromAnyTransactionData, SignatureList, Transaction, TransactionData,
    TransactionHash, TransactionId, DEFAULT_CHUNK_INTERVAL_NANOS, DEFAULT_TRANSACTION_VALID_DURATION,
};
pub use transfer::{TokenNftTransfer, TokenTransfer, Transfer, TransferTransaction, TransferTransactionData};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
