//! Response codes reported in receipts and query headers.

use std::fmt;

use hashgraph_proto::services;

use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::Result;

macro_rules! status {
    ($($variant:ident = $code:literal => $name:literal,)*) => {
        /// Outcome of a transaction or query, mirroring `ResponseCodeEnum`.
        ///
        /// Codes this SDK does not know are kept as [`Status::Unrecognized`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Status {
            $($variant,)*
            /// A code newer than this SDK.
            Unrecognized(i32),
        }

        impl Status {
            pub const fn from_code(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Unrecognized(other),
                }
            }

            pub const fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Unrecognized(code) => code,
                }
            }

            /// Wire name, e.g. `INVALID_SIGNATURE`.
            pub const fn as_str_name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($name),)*
                    Self::Unrecognized(_) => None,
                }
            }

            pub fn from_str_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

status! {
    Ok = 0 => "OK",
    InvalidTransaction = 1 => "INVALID_TRANSACTION",
    PayerAccountNotFound = 2 => "PAYER_ACCOUNT_NOT_FOUND",
    InvalidNodeAccount = 3 => "INVALID_NODE_ACCOUNT",
    TransactionExpired = 4 => "TRANSACTION_EXPIRED",
    InvalidTransactionStart = 5 => "INVALID_TRANSACTION_START",
    InvalidTransactionDuration = 6 => "INVALID_TRANSACTION_DURATION",
    InvalidSignature = 7 => "INVALID_SIGNATURE",
    MemoTooLong = 8 => "MEMO_TOO_LONG",
    InsufficientTxFee = 9 => "INSUFFICIENT_TX_FEE",
    InsufficientPayerBalance = 10 => "INSUFFICIENT_PAYER_BALANCE",
    DuplicateTransaction = 11 => "DUPLICATE_TRANSACTION",
    Busy = 12 => "BUSY",
    NotSupported = 13 => "NOT_SUPPORTED",
    InvalidFileId = 14 => "INVALID_FILE_ID",
    InvalidAccountId = 15 => "INVALID_ACCOUNT_ID",
    InvalidContractId = 16 => "INVALID_CONTRACT_ID",
    InvalidTransactionId = 17 => "INVALID_TRANSACTION_ID",
    ReceiptNotFound = 18 => "RECEIPT_NOT_FOUND",
    RecordNotFound = 19 => "RECORD_NOT_FOUND",
    InvalidSolidityId = 20 => "INVALID_SOLIDITY_ID",
    Unknown = 21 => "UNKNOWN",
    Success = 22 => "SUCCESS",
    FailInvalid = 23 => "FAIL_INVALID",
    FailFee = 24 => "FAIL_FEE",
    FailBalance = 25 => "FAIL_BALANCE",
    KeyRequired = 26 => "KEY_REQUIRED",
    BadEncoding = 27 => "BAD_ENCODING",
    InsufficientAccountBalance = 28 => "INSUFFICIENT_ACCOUNT_BALANCE",
    InvalidSolidityAddress = 29 => "INVALID_SOLIDITY_ADDRESS",
    InsufficientGas = 30 => "INSUFFICIENT_GAS",
    ContractSizeLimitExceeded = 31 => "CONTRACT_SIZE_LIMIT_EXCEEDED",
    LocalCallModificationException = 32 => "LOCAL_CALL_MODIFICATION_EXCEPTION",
    ContractRevertExecuted = 33 => "CONTRACT_REVERT_EXECUTED",
    ContractExecutionException = 34 => "CONTRACT_EXECUTION_EXCEPTION",
    InvalidReceivingNodeAccount = 35 => "INVALID_RECEIVING_NODE_ACCOUNT",
    MissingQueryHeader = 36 => "MISSING_QUERY_HEADER",
    AccountUpdateFailed = 37 => "ACCOUNT_UPDATE_FAILED",
    InvalidKeyEncoding = 38 => "INVALID_KEY_ENCODING",
    NullSolidityAddress = 39 => "NULL_SOLIDITY_ADDRESS",
    ContractUpdateFailed = 40 => "CONTRACT_UPDATE_FAILED",
    InvalidQueryHeader = 41 => "INVALID_QUERY_HEADER",
    InvalidFeeSubmitted = 42 => "INVALID_FEE_SUBMITTED",
    InvalidPayerSignature = 43 => "INVALID_PAYER_SIGNATURE",
    KeyNotProvided = 44 => "KEY_NOT_PROVIDED",
    InvalidExpirationTime = 45 => "INVALID_EXPIRATION_TIME",
    NoWaclKey = 46 => "NO_WACL_KEY",
    FileContentEmpty = 47 => "FILE_CONTENT_EMPTY",
    InvalidAccountAmounts = 48 => "INVALID_ACCOUNT_AMOUNTS",
    EmptyTransactionBody = 49 => "EMPTY_TRANSACTION_BODY",
    InvalidTransactionBody = 50 => "INVALID_TRANSACTION_BODY",
    InvalidSignatureTypeMismatchingKey = 51 => "INVALID_SIGNATURE_TYPE_MISMATCHING_KEY",
    InvalidSignatureCountMismatchingKey = 52 => "INVALID_SIGNATURE_COUNT_MISMATCHING_KEY",
    EmptyLiveHashBody = 53 => "EMPTY_LIVE_HASH_BODY",
    EmptyLiveHash = 54 => "EMPTY_LIVE_HASH",
    EmptyLiveHashKeys = 55 => "EMPTY_LIVE_HASH_KEYS",
    InvalidLiveHashSize = 56 => "INVALID_LIVE_HASH_SIZE",
    EmptyQueryBody = 57 => "EMPTY_QUERY_BODY",
    EmptyLiveHashQuery = 58 => "EMPTY_LIVE_HASH_QUERY",
    LiveHashNotFound = 59 => "LIVE_HASH_NOT_FOUND",
    AccountIdDoesNotExist = 60 => "ACCOUNT_ID_DOES_NOT_EXIST",
    LiveHashAlreadyExists = 61 => "LIVE_HASH_ALREADY_EXISTS",
    InvalidFileWacl = 62 => "INVALID_FILE_WACL",
    SerializationFailed = 63 => "SERIALIZATION_FAILED",
    TransactionOversize = 64 => "TRANSACTION_OVERSIZE",
    TransactionTooManyLayers = 65 => "TRANSACTION_TOO_MANY_LAYERS",
    ContractDeleted = 66 => "CONTRACT_DELETED",
    PlatformNotActive = 67 => "PLATFORM_NOT_ACTIVE",
    KeyPrefixMismatch = 68 => "KEY_PREFIX_MISMATCH",
    PlatformTransactionNotCreated = 69 => "PLATFORM_TRANSACTION_NOT_CREATED",
    InvalidRenewalPeriod = 70 => "INVALID_RENEWAL_PERIOD",
    InvalidPayerAccountId = 71 => "INVALID_PAYER_ACCOUNT_ID",
    AccountDeleted = 72 => "ACCOUNT_DELETED",
    FileDeleted = 73 => "FILE_DELETED",
    AccountRepeatedInAccountAmounts = 74 => "ACCOUNT_REPEATED_IN_ACCOUNT_AMOUNTS",
    SettingNegativeAccountBalance = 75 => "SETTING_NEGATIVE_ACCOUNT_BALANCE",
    ObtainerRequired = 76 => "OBTAINER_REQUIRED",
    ObtainerSameContractId = 77 => "OBTAINER_SAME_CONTRACT_ID",
    ObtainerDoesNotExist = 78 => "OBTAINER_DOES_NOT_EXIST",
    ModifyingImmutableContract = 79 => "MODIFYING_IMMUTABLE_CONTRACT",
    FileSystemException = 80 => "FILE_SYSTEM_EXCEPTION",
    AutorenewDurationNotInRange = 81 => "AUTORENEW_DURATION_NOT_IN_RANGE",
    ErrorDecodingBytestring = 82 => "ERROR_DECODING_BYTESTRING",
    ContractFileEmpty = 83 => "CONTRACT_FILE_EMPTY",
    ContractBytecodeEmpty = 84 => "CONTRACT_BYTECODE_EMPTY",
    InvalidInitialBalance = 85 => "INVALID_INITIAL_BALANCE",
    AccountIsNotGenesisAccount = 88 => "ACCOUNT_IS_NOT_GENESIS_ACCOUNT",
    PayerAccountUnauthorized = 89 => "PAYER_ACCOUNT_UNAUTHORIZED",
    InvalidFreezeTransactionBody = 90 => "INVALID_FREEZE_TRANSACTION_BODY",
    FreezeTransactionBodyNotFound = 91 => "FREEZE_TRANSACTION_BODY_NOT_FOUND",
    TransferListSizeLimitExceeded = 92 => "TRANSFER_LIST_SIZE_LIMIT_EXCEEDED",
    ResultSizeLimitExceeded = 93 => "RESULT_SIZE_LIMIT_EXCEEDED",
    NotSpecialAccount = 94 => "NOT_SPECIAL_ACCOUNT",
    ContractNegativeGas = 95 => "CONTRACT_NEGATIVE_GAS",
    ContractNegativeValue = 96 => "CONTRACT_NEGATIVE_VALUE",
    InvalidFeeFile = 97 => "INVALID_FEE_FILE",
    InvalidExchangeRateFile = 98 => "INVALID_EXCHANGE_RATE_FILE",
    InsufficientLocalCallGas = 99 => "INSUFFICIENT_LOCAL_CALL_GAS",
    EntityNotAllowedToDelete = 100 => "ENTITY_NOT_ALLOWED_TO_DELETE",
    InvalidTopicId = 150 => "INVALID_TOPIC_ID",
    InvalidTokenId = 167 => "INVALID_TOKEN_ID",
    InvalidScheduleId = 201 => "INVALID_SCHEDULE_ID",
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Success)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNRECOGNIZED({})", self.code()),
        }
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<services::ResponseCodeEnum> for Status {
    fn from(code: services::ResponseCodeEnum) -> Self {
        Self::from_code(code as i32)
    }
}

impl FromProtobuf<i32> for Status {
    fn from_protobuf(pb: i32) -> Result<Self> {
        Ok(Self::from_code(pb))
    }
}

impl ToProtobuf for Status {
    type Protobuf = i32;

    fn to_protobuf(&self) -> Self::Protobuf {
        self.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_enum() {
        for code in [0, 7, 22, 150, 167, 201] {
            let wire = services::ResponseCodeEnum::try_from(code).unwrap();
            let status = Status::from(wire);
            assert_eq!(status.code(), code);
            assert_eq!(status.as_str_name(), Some(wire.as_str_name()));
        }
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let status = Status::from_code(9_999);
        assert_eq!(status, Status::Unrecognized(9_999));
        assert_eq!(status.code(), 9_999);
        assert_eq!(status.to_string(), "UNRECOGNIZED(9999)");
    }

    #[test]
    fn test_names() {
        assert_eq!(Status::InvalidSignature.to_string(), "INVALID_SIGNATURE");
        assert_eq!(Status::from_str_name("SUCCESS"), Some(Status::Success));
        assert!(Status::Success.is_success());
        assert!(!Status::Busy.is_success());
    }
}
