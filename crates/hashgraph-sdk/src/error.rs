//! # Error Types
//!
//! Every failure the SDK core can report. Parse, checksum and lifecycle
//! failures are returned synchronously; nothing is downgraded to a log line.

use std::error::Error as StdError;
use std::time::Duration;

use hashgraph_crypto::CryptoError;
use thiserror::Error;

use crate::entity_id::Checksum;
use crate::Status;

type BoxStdError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors produced by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A string or byte sequence could not be parsed.
    #[error("failed to parse: {0}")]
    BasicParse(#[source] BoxStdError),

    /// Key material could not be parsed.
    #[error("failed to parse a key: {0}")]
    KeyParse(#[source] CryptoError),

    /// A key could not be used for the requested derivation.
    #[error("failed to derive from key: {0}")]
    KeyDerive(#[source] CryptoError),

    /// A checksum was present and does not match the ledger.
    #[error(
        "entity ID {shard}.{realm}.{num}-{present_checksum} was incorrect (expected {expected_checksum})"
    )]
    BadEntityId {
        /// Shard of the rejected id.
        shard: u64,
        /// Realm of the rejected id.
        realm: u64,
        /// Num of the rejected id.
        num: u64,
        /// Checksum carried by the id.
        present_checksum: Checksum,
        /// Checksum computed for the ledger.
        expected_checksum: Checksum,
    },

    /// Checksum validation needs a ledger id and none is configured.
    #[error("cannot perform checksum validation without a ledger id")]
    CannotPerformChecksumValidation,

    /// Wire data could not be mapped into an SDK type.
    #[error("failed to decode protobuf: {0}")]
    FromProtobuf(#[source] BoxStdError),

    /// A setter was called after `freeze`.
    #[error("transaction is immutable; it has been frozen")]
    TransactionFrozen,

    /// The operation needs a frozen transaction.
    #[error("transaction must be frozen first")]
    TransactionNotFrozen,

    /// `freeze` could not resolve any node account ids.
    #[error("transaction node account IDs must be set explicitly or a client must be provided to freeze")]
    FreezeUnsetNodeAccountIds,

    /// `freeze` could not resolve a transaction id.
    #[error("transaction ID or operator account must be set to freeze")]
    NoPayerAccountOrTransactionId,

    /// A chunked payload needs more chunks than allowed.
    #[error("message requires {requested} chunks but only {max} are allowed")]
    MaxChunksExceeded {
        /// Configured chunk limit.
        max: usize,
        /// Chunks the payload needs.
        requested: usize,
    },

    /// Per-node signatures are ambiguous for chunked transactions.
    #[error("cannot list or add signatures on a transaction with multiple chunks")]
    SignatureForMultiChunk,

    /// A detached signature only fits a transaction with exactly one node.
    #[error("cannot add a signature to a transaction sent to {0} nodes")]
    SignatureForMultiNode(usize),

    /// Request timeout is shorter than the gRPC deadline.
    #[error("request timeout ({request_timeout:?}) must be at least the gRPC deadline ({grpc_deadline:?})")]
    InvalidTimeouts {
        /// Overall request timeout.
        request_timeout: Duration,
        /// Per-call gRPC deadline.
        grpc_deadline: Duration,
    },

    /// Batch inner transactions must be frozen before they are added.
    #[error("inner transactions of a batch must be frozen")]
    BatchInnerNotFrozen,

    /// The transaction kind cannot be placed in a batch.
    #[error("{0} transactions are not allowed in a batch")]
    BatchInnerForbidden(&'static str),

    /// A batch carries exactly one signed entry per inner transaction.
    #[error("inner transactions of a batch must have one node and one chunk, got {nodes} nodes and {chunks} chunks")]
    BatchInnerNotSingleEntry { nodes: usize, chunks: usize },

    /// `schedule` was called on a transaction with explicit node ids.
    #[error("scheduled transactions cannot have node account IDs set")]
    ScheduleNodeIdsSet,

    /// A threshold key requires more signatures than it has keys.
    #[error("threshold {threshold} exceeds the {keys} keys in the list")]
    ThresholdExceedsKeys {
        /// Requested threshold.
        threshold: u32,
        /// Keys in the list.
        keys: usize,
    },

    /// A query response carried a non-OK precheck code.
    #[error("query failed precheck with status {status:?}")]
    QueryPreCheckStatus {
        /// Precheck code returned by the node.
        status: Status,
    },

    /// A signature did not verify against its public key.
    #[error("signature verification failed: {0}")]
    SignatureVerify(#[source] CryptoError),

    /// Client configuration was unreadable or inconsistent.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn basic_parse<E>(error: E) -> Self
    where
        E: Into<BoxStdError>,
    {
        Self::BasicParse(error.into())
    }

    pub(crate) fn from_protobuf<E>(error: E) -> Self
    where
        E: Into<BoxStdError>,
    {
        Self::FromProtobuf(error.into())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(error: prost::DecodeError) -> Self {
        Self::from_protobuf(error)
    }
}

impl From<CryptoError> for Error {
    fn from(error: CryptoError) -> Self {
        match error {
            CryptoError::SignatureVerificationFailed | CryptoError::InvalidSignature => {
                Self::SignatureVerify(error)
            }
            CryptoError::WrongKeyType(_) => Self::KeyDerive(error),
            other => Self::KeyParse(other),
        }
    }
}

/// Result alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_errors_are_classified() {
        assert!(matches!(
            Error::from(CryptoError::SignatureVerificationFailed),
            Error::SignatureVerify(_)
        ));
        assert!(matches!(
            Error::from(CryptoError::WrongKeyType("ed25519")),
            Error::KeyDerive(_)
        ));
        assert!(matches!(
            Error::from(CryptoError::KeyParse("bad".into())),
            Error::KeyParse(_)
        ));
    }

    #[test]
    fn test_display_mentions_limits() {
        let err = Error::MaxChunksExceeded { max: 20, requested: 21 };
        assert_eq!(err.to_string(), "message requires 21 chunks but only 20 are allowed");
    }
}
