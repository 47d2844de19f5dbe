// ---------------------------------------------------------------------------
// timestamp.proto / duration.proto
// ---------------------------------------------------------------------------

/// An exact date and time, with nanosecond resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

/// An exact date and time, with one second resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TimestampSeconds {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
}

/// A length of time in seconds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
}

// ---------------------------------------------------------------------------
// basic_types.proto
// ---------------------------------------------------------------------------

/// Each shard has a nonnegative shard number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ShardId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
}

/// The ID for a realm.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RealmId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
}

/// The ID for an account, either numeric or an alias.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AccountId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(oneof = "account_id::Account", tags = "3, 4")]
    pub account: ::core::option::Option<account_id::Account>,
}
/// Nested message and enum types in `AccountID`.
pub mod account_id {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Account {
        /// A nonnegative account number unique within its realm.
        #[prost(int64, tag = "3")]
        AccountNum(i64),
        /// A serialized `Key` or a 20-byte EVM address.
        #[prost(bytes, tag = "4")]
        Alias(::prost::alloc::vec::Vec<u8>),
    }
}

/// The ID for a file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FileId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(int64, tag = "3")]
    pub file_num: i64,
}

/// The ID for a smart contract instance.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ContractId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(oneof = "contract_id::Contract", tags = "3, 4")]
    pub contract: ::core::option::Option<contract_id::Contract>,
}
/// Nested message and enum types in `ContractID`.
pub mod contract_id {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Contract {
        #[prost(int64, tag = "3")]
        ContractNum(i64),
        /// The 20-byte EVM address of the contract.
        #[prost(bytes, tag = "4")]
        EvmAddress(::prost::alloc::vec::Vec<u8>),
    }
}

/// The ID for a consensus topic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TopicId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(int64, tag = "3")]
    pub topic_num: i64,
}

/// Unique identifier for a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TokenId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(int64, tag = "3")]
    pub token_num: i64,
}

/// Unique identifier for a schedule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ScheduleId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(int64, tag = "3")]
    pub schedule_num: i64,
}

/// A single non-fungible token instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct NftId {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(int64, tag = "2")]
    pub serial_number: i64,
}

/// The ID for a transaction: the payer plus the valid-start time.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TransactionId {
    #[prost(message, optional, tag = "1")]
    pub transaction_valid_start: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(bool, tag = "3")]
    pub scheduled: bool,
    #[prost(int32, tag = "4")]
    pub nonce: i32,
}

/// An account and the amount it sends (negative) or receives (positive).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountAmount {
    #[prost(message, optional, tag = "1")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(sint64, tag = "2")]
    pub amount: i64,
    #[prost(bool, tag = "3")]
    pub is_approval: bool,
    #[prost(oneof = "account_amount::HookCall", tags = "4, 5")]
    pub hook_call: ::core::option::Option<account_amount::HookCall>,
}
/// Nested message and enum types in `AccountAmount`.
pub mod account_amount {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HookCall {
        #[prost(message, tag = "4")]
        PreTxAllowanceHook(super::HookCall),
        #[prost(message, tag = "5")]
        PrePostTxAllowanceHook(super::HookCall),
    }
}

/// A list of accounts and amounts to transfer out of each account.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferList {
    #[prost(message, repeated, tag = "1")]
    pub account_amounts: ::prost::alloc::vec::Vec<AccountAmount>,
}

/// A sender account, a receiver account, and the serial number of an NFT.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NftTransfer {
    #[prost(message, optional, tag = "1")]
    pub sender_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "2")]
    pub receiver_account_id: ::core::option::Option<AccountId>,
    #[prost(int64, tag = "3")]
    pub serial_number: i64,
    #[prost(bool, tag = "4")]
    pub is_approval: bool,
}

/// Transfers of a single token type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenTransferList {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, repeated, tag = "2")]
    pub transfers: ::prost::alloc::vec::Vec<AccountAmount>,
    #[prost(message, repeated, tag = "3")]
    pub nft_transfers: ::prost::alloc::vec::Vec<NftTransfer>,
    #[prost(message, optional, tag = "4")]
    pub expected_decimals: ::core::option::Option<u32>,
}

/// A rational number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Fraction {
    #[prost(int64, tag = "1")]
    pub numerator: i64,
    #[prost(int64, tag = "2")]
    pub denominator: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenType {
    FungibleCommon = 0,
    NonFungibleUnique = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenSupplyType {
    Infinite = 0,
    Finite = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenKeyValidation {
    FullValidation = 0,
    NoValidation = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenFreezeStatus {
    FreezeNotApplicable = 0,
    Frozen = 1,
    Unfrozen = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenKycStatus {
    KycNotApplicable = 0,
    Granted = 1,
    Revoked = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TokenPauseStatus {
    PauseNotApplicable = 0,
    Paused = 1,
    Unpaused = 2,
}

/// A key can be a public key from either the Ed25519 or ECDSA(secp256k1)
/// signature schemes, a contract id, or a (threshold) list of keys.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Key {
    #[prost(oneof = "key::Key", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub key: ::core::option::Option<key::Key>,
}
/// Nested message and enum types in `Key`.
pub mod key {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Key {
        #[prost(message, tag = "1")]
        ContractId(super::ContractId),
        #[prost(bytes, tag = "2")]
        Ed25519(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "3")]
        Rsa3072(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "4")]
        Ecdsa384(::prost::alloc::vec::Vec<u8>),
        #[prost(message, tag = "5")]
        ThresholdKey(super::ThresholdKey),
        #[prost(message, tag = "6")]
        KeyList(super::KeyList),
        #[prost(bytes, tag = "7")]
        EcdsaSecp256k1(::prost::alloc::vec::Vec<u8>),
        #[prost(message, tag = "8")]
        DelegatableContractId(super::ContractId),
    }
}

/// A set of public keys that are used together to form a threshold signature.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ThresholdKey {
    #[prost(uint32, tag = "1")]
    pub threshold: u32,
    #[prost(message, optional, tag = "2")]
    pub keys: ::core::option::Option<KeyList>,
}

/// A list of keys that requires all keys (M-of-M) to sign.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct KeyList {
    #[prost(message, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<Key>,
}

/// The client may use any number of bytes from zero to the whole length of
/// the public key for `pub_key_prefix`.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SignaturePair {
    #[prost(bytes = "vec", tag = "1")]
    pub pub_key_prefix: ::prost::alloc::vec::Vec<u8>,
    #[prost(oneof = "signature_pair::Signature", tags = "2, 3, 4, 5, 6")]
    pub signature: ::core::option::Option<signature_pair::Signature>,
}
/// Nested message and enum types in `SignaturePair`.
pub mod signature_pair {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Signature {
        #[prost(bytes, tag = "2")]
        Contract(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "3")]
        Ed25519(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "4")]
        Rsa3072(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "5")]
        Ecdsa384(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "6")]
        EcdsaSecp256k1(::prost::alloc::vec::Vec<u8>),
    }
}

/// A set of signatures corresponding to every unique public key used to sign
/// a given transaction.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SignatureMap {
    #[prost(message, repeated, tag = "1")]
    pub sig_pair: ::prost::alloc::vec::Vec<SignaturePair>,
}

/// A semantic version, as defined at semver.org.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SemanticVersion {
    #[prost(int32, tag = "1")]
    pub major: i32,
    #[prost(int32, tag = "2")]
    pub minor: i32,
    #[prost(int32, tag = "3")]
    pub patch: i32,
    #[prost(string, tag = "4")]
    pub pre: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub build: ::prost::alloc::string::String,
}

/// A number of tokens of a given token type held by an account.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TokenBalance {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "2")]
    pub balance: u64,
    #[prost(uint32, tag = "3")]
    pub decimals: u32,
}

/// The relationship between an account and a token.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TokenRelationship {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(string, tag = "2")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(uint64, tag = "3")]
    pub balance: u64,
    #[prost(enumeration = "TokenKycStatus", tag = "4")]
    pub kyc_status: i32,
    #[prost(enumeration = "TokenFreezeStatus", tag = "5")]
    pub freeze_status: i32,
    #[prost(uint32, tag = "6")]
    pub decimals: u32,
    #[prost(bool, tag = "7")]
    pub automatic_association: bool,
}

/// A token - account association.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TokenAssociation {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
}

/// Staking information for an account or contract.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct StakingInfo {
    #[prost(bool, tag = "1")]
    pub decline_reward: bool,
    #[prost(message, optional, tag = "2")]
    pub stake_period_start: ::core::option::Option<Timestamp>,
    #[prost(int64, tag = "3")]
    pub pending_reward: i64,
    #[prost(int64, tag = "4")]
    pub staked_to_me: i64,
    #[prost(oneof = "staking_info::StakedId", tags = "5, 6")]
    pub staked_id: ::core::option::Option<staking_info::StakedId>,
}
/// Nested message and enum types in `StakingInfo`.
pub mod staking_info {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "5")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "6")]
        StakedNodeId(i64),
    }
}

/// A unique, composite, identifier for a pending airdrop.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PendingAirdropId {
    #[prost(message, optional, tag = "1")]
    pub sender_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "2")]
    pub receiver_id: ::core::option::Option<AccountId>,
    #[prost(oneof = "pending_airdrop_id::TokenReference", tags = "3, 4")]
    pub token_reference: ::core::option::Option<pending_airdrop_id::TokenReference>,
}
/// Nested message and enum types in `PendingAirdropId`.
pub mod pending_airdrop_id {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum TokenReference {
        #[prost(message, tag = "3")]
        FungibleTokenType(super::TokenId),
        #[prost(message, tag = "4")]
        NonFungibleToken(super::NftId),
    }
}

/// A single pending airdrop value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PendingAirdropValue {
    #[prost(uint64, tag = "1")]
    pub amount: u64,
}

/// A network node endpoint.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ServiceEndpoint {
    #[prost(bytes = "vec", tag = "1")]
    pub ip_address_v4: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "2")]
    pub port: i32,
    #[prost(string, tag = "3")]
    pub domain_name: ::prost::alloc::string::String,
}

// ---------------------------------------------------------------------------
// custom_fees.proto
// ---------------------------------------------------------------------------

/// A fraction of the transferred units of a token to assess as a fee.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FractionalFee {
    #[prost(message, optional, tag = "1")]
    pub fractional_amount: ::core::option::Option<Fraction>,
    #[prost(int64, tag = "2")]
    pub minimum_amount: i64,
    #[prost(int64, tag = "3")]
    pub maximum_amount: i64,
    #[prost(bool, tag = "4")]
    pub net_of_transfers: bool,
}

/// A fixed number of units (hbar or token) to assess as a fee.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FixedFee {
    #[prost(int64, tag = "1")]
    pub amount: i64,
    #[prost(message, optional, tag = "2")]
    pub denominating_token_id: ::core::option::Option<TokenId>,
}

/// A fee to assess during a transfer that changes ownership of an NFT.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoyaltyFee {
    #[prost(message, optional, tag = "1")]
    pub exchange_value_fraction: ::core::option::Option<Fraction>,
    #[prost(message, optional, tag = "2")]
    pub fallback_fee: ::core::option::Option<FixedFee>,
}

/// A transfer fee to assess during a transfer of units of a token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomFee {
    #[prost(message, optional, tag = "3")]
    pub fee_collector_account_id: ::core::option::Option<AccountId>,
    #[prost(bool, tag = "5")]
    pub all_collectors_are_exempt: bool,
    #[prost(oneof = "custom_fee::Fee", tags = "1, 2, 4")]
    pub fee: ::core::option::Option<custom_fee::Fee>,
}
/// Nested message and enum types in `CustomFee`.
pub mod custom_fee {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Fee {
        #[prost(message, tag = "1")]
        FixedFee(super::FixedFee),
        #[prost(message, tag = "2")]
        FractionalFee(super::FractionalFee),
        #[prost(message, tag = "4")]
        RoyaltyFee(super::RoyaltyFee),
    }
}

/// A custom transfer fee that was assessed during handling of a transfer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AssessedCustomFee {
    #[prost(int64, tag = "1")]
    pub amount: i64,
    #[prost(message, optional, tag = "2")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "3")]
    pub fee_collector_account_id: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "4")]
    pub effective_payer_account_id: ::prost::alloc::vec::Vec<AccountId>,
}

/// A fixed fee and the account that collects it; used by topics.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FixedCustomFee {
    #[prost(message, optional, tag = "1")]
    pub fixed_fee: ::core::option::Option<FixedFee>,
    #[prost(message, optional, tag = "2")]
    pub fee_collector_account_id: ::core::option::Option<AccountId>,
}

/// A wrapper around a list of fixed custom fees, so that an empty list can be
/// told apart from an unset one.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FixedCustomFeeList {
    #[prost(message, repeated, tag = "1")]
    pub fees: ::prost::alloc::vec::Vec<FixedCustomFee>,
}

/// Keys exempt from paying topic custom fees.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FeeExemptKeyList {
    #[prost(message, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<Key>,
}

/// The maximum custom fees a payer is willing to pay.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomFeeLimit {
    #[prost(message, optional, tag = "1")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub fees: ::prost::alloc::vec::Vec<FixedFee>,
}

// ---------------------------------------------------------------------------
// hook_types.proto / lambda_sstore.proto
// ---------------------------------------------------------------------------

/// The owner of a hook.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HookEntityId {
    #[prost(oneof = "hook_entity_id::EntityId", tags = "1, 2")]
    pub entity_id: ::core::option::Option<hook_entity_id::EntityId>,
}
/// Nested message and enum types in `HookEntityId`.
pub mod hook_entity_id {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EntityId {
        #[prost(message, tag = "1")]
        AccountId(super::AccountId),
        #[prost(message, tag = "2")]
        ContractId(super::ContractId),
    }
}

/// A hook id qualified by the entity that owns it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HookId {
    #[prost(message, optional, tag = "1")]
    pub entity_id: ::core::option::Option<HookEntityId>,
    #[prost(int64, tag = "2")]
    pub hook_id: i64,
}

/// A call to a hook, naming either the full hook id or only the owner-relative id.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HookCall {
    #[prost(oneof = "hook_call::Id", tags = "1, 2")]
    pub id: ::core::option::Option<hook_call::Id>,
    #[prost(oneof = "hook_call::CallSpec", tags = "3")]
    pub call_spec: ::core::option::Option<hook_call::CallSpec>,
}
/// Nested message and enum types in `HookCall`.
pub mod hook_call {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Id {
        #[prost(message, tag = "1")]
        FullHookId(super::HookId),
        #[prost(int64, tag = "2")]
        HookId(i64),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CallSpec {
        #[prost(message, tag = "3")]
        EvmHookCall(super::EvmHookCall),
    }
}

/// Call data and gas for an EVM hook.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvmHookCall {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HookExtensionPoint {
    AccountAllowanceHook = 0,
}

/// The details of a hook to create alongside an account or contract.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HookCreationDetails {
    #[prost(enumeration = "HookExtensionPoint", tag = "1")]
    pub extension_point: i32,
    #[prost(int64, tag = "2")]
    pub hook_id: i64,
    #[prost(message, optional, tag = "4")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(oneof = "hook_creation_details::Hook", tags = "3")]
    pub hook: ::core::option::Option<hook_creation_details::Hook>,
}
/// Nested message and enum types in `HookCreationDetails`.
pub mod hook_creation_details {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Hook {
        #[prost(message, tag = "3")]
        LambdaEvmHook(super::LambdaEvmHook),
    }
}

/// Where the bytecode of an EVM hook lives.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvmHookSpec {
    #[prost(oneof = "evm_hook_spec::BytecodeSource", tags = "1")]
    pub bytecode_source: ::core::option::Option<evm_hook_spec::BytecodeSource>,
}
/// Nested message and enum types in `EvmHookSpec`.
pub mod evm_hook_spec {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum BytecodeSource {
        #[prost(message, tag = "1")]
        ContractId(super::ContractId),
    }
}

/// An EVM hook with its own storage.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaEvmHook {
    #[prost(message, optional, tag = "1")]
    pub spec: ::core::option::Option<EvmHookSpec>,
    #[prost(message, repeated, tag = "2")]
    pub storage_updates: ::prost::alloc::vec::Vec<LambdaStorageUpdate>,
}

/// A single change to the storage of a lambda.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaStorageUpdate {
    #[prost(oneof = "lambda_storage_update::Update", tags = "1, 2")]
    pub update: ::core::option::Option<lambda_storage_update::Update>,
}
/// Nested message and enum types in `LambdaStorageUpdate`.
pub mod lambda_storage_update {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Update {
        #[prost(message, tag = "1")]
        StorageSlot(super::LambdaStorageSlot),
        #[prost(message, tag = "2")]
        MappingEntries(super::LambdaMappingEntries),
    }
}

/// A raw storage slot and its new value; an empty value clears the slot.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaStorageSlot {
    #[prost(bytes = "vec", tag = "1")]
    pub key: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}

/// Entries of a Solidity mapping rooted at `mapping_slot`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaMappingEntries {
    #[prost(bytes = "vec", tag = "1")]
    pub mapping_slot: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub entries: ::prost::alloc::vec::Vec<LambdaMappingEntry>,
}

/// One mapping entry, keyed either by the hashed key or by its preimage.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaMappingEntry {
    #[prost(bytes = "vec", tag = "3")]
    pub value: ::prost::alloc::vec::Vec<u8>,
    #[prost(oneof = "lambda_mapping_entry::EntryKey", tags = "1, 2")]
    pub entry_key: ::core::option::Option<lambda_mapping_entry::EntryKey>,
}
/// Nested message and enum types in `LambdaMappingEntry`.
pub mod lambda_mapping_entry {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EntryKey {
        #[prost(bytes, tag = "1")]
        Key(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "2")]
        Preimage(::prost::alloc::vec::Vec<u8>),
    }
}

/// Updates the storage of a lambda hook.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaSStoreTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub hook_id: ::core::option::Option<HookId>,
    #[prost(message, repeated, tag = "2")]
    pub storage_updates: ::prost::alloc::vec::Vec<LambdaStorageUpdate>,
}

// ---------------------------------------------------------------------------
// crypto_*.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoCreateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub key: ::core::option::Option<Key>,
    #[prost(uint64, tag = "2")]
    pub initial_balance: u64,
    #[prost(bool, tag = "8")]
    pub receiver_sig_required: bool,
    #[prost(message, optional, tag = "9")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "10")]
    pub shard_id: ::core::option::Option<ShardId>,
    #[prost(message, optional, tag = "11")]
    pub realm_id: ::core::option::Option<RealmId>,
    #[prost(string, tag = "13")]
    pub memo: ::prost::alloc::string::String,
    #[prost(int32, tag = "14")]
    pub max_automatic_token_associations: i32,
    #[prost(bool, tag = "17")]
    pub decline_reward: bool,
    #[prost(bytes = "vec", tag = "18")]
    pub alias: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "19")]
    pub hook_creation_details: ::prost::alloc::vec::Vec<HookCreationDetails>,
    #[prost(oneof = "crypto_create_transaction_body::StakedId", tags = "15, 16")]
    pub staked_id: ::core::option::Option<crypto_create_transaction_body::StakedId>,
}
/// Nested message and enum types in `CryptoCreateTransactionBody`.
pub mod crypto_create_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "15")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "16")]
        StakedNodeId(i64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoUpdateTransactionBody {
    #[prost(message, optional, tag = "2")]
    pub account_id_to_update: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "9")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "13")]
    pub receiver_sig_required_wrapper: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "14")]
    pub memo: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "15")]
    pub max_automatic_token_associations: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "18")]
    pub decline_reward: ::core::option::Option<bool>,
    #[prost(int64, repeated, tag = "19")]
    pub hook_ids_to_delete: ::prost::alloc::vec::Vec<i64>,
    #[prost(message, repeated, tag = "20")]
    pub hook_creation_details: ::prost::alloc::vec::Vec<HookCreationDetails>,
    #[prost(oneof = "crypto_update_transaction_body::StakedId", tags = "16, 17")]
    pub staked_id: ::core::option::Option<crypto_update_transaction_body::StakedId>,
}
/// Nested message and enum types in `CryptoUpdateTransactionBody`.
pub mod crypto_update_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "16")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "17")]
        StakedNodeId(i64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoDeleteTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub transfer_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "2")]
    pub delete_account_id: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoTransferTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub transfers: ::core::option::Option<TransferList>,
    #[prost(message, repeated, tag = "2")]
    pub token_transfers: ::prost::alloc::vec::Vec<TokenTransferList>,
}

/// An approved allowance of hbar transfers for a spender.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoAllowance {
    #[prost(message, optional, tag = "1")]
    pub owner: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "2")]
    pub spender: ::core::option::Option<AccountId>,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

/// An approved allowance of non-fungible token transfers for a spender.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NftAllowance {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub owner: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub spender: ::core::option::Option<AccountId>,
    #[prost(int64, repeated, tag = "4")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
    #[prost(message, optional, tag = "5")]
    pub approved_for_all: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "6")]
    pub delegating_spender: ::core::option::Option<AccountId>,
}

/// An approved allowance of fungible token transfers for a spender.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenAllowance {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub owner: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub spender: ::core::option::Option<AccountId>,
    #[prost(int64, tag = "4")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoApproveAllowanceTransactionBody {
    #[prost(message, repeated, tag = "1")]
    pub crypto_allowances: ::prost::alloc::vec::Vec<CryptoAllowance>,
    #[prost(message, repeated, tag = "2")]
    pub nft_allowances: ::prost::alloc::vec::Vec<NftAllowance>,
    #[prost(message, repeated, tag = "3")]
    pub token_allowances: ::prost::alloc::vec::Vec<TokenAllowance>,
}

/// Serial numbers of an owner's NFTs whose allowances should be removed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NftRemoveAllowance {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub owner: ::core::option::Option<AccountId>,
    #[prost(int64, repeated, tag = "3")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoDeleteAllowanceTransactionBody {
    #[prost(message, repeated, tag = "2")]
    pub nft_allowances: ::prost::alloc::vec::Vec<NftRemoveAllowance>,
}

// ---------------------------------------------------------------------------
// token_*.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenCreateTransactionBody {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub decimals: u32,
    #[prost(uint64, tag = "4")]
    pub initial_supply: u64,
    #[prost(message, optional, tag = "5")]
    pub treasury: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "6")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "7")]
    pub kyc_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub freeze_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "9")]
    pub wipe_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "10")]
    pub supply_key: ::core::option::Option<Key>,
    #[prost(bool, tag = "11")]
    pub freeze_default: bool,
    #[prost(message, optional, tag = "13")]
    pub expiry: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "14")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "15")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(string, tag = "16")]
    pub memo: ::prost::alloc::string::String,
    #[prost(enumeration = "TokenType", tag = "17")]
    pub token_type: i32,
    #[prost(enumeration = "TokenSupplyType", tag = "18")]
    pub supply_type: i32,
    #[prost(int64, tag = "19")]
    pub max_supply: i64,
    #[prost(message, optional, tag = "20")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, repeated, tag = "21")]
    pub custom_fees: ::prost::alloc::vec::Vec<CustomFee>,
    #[prost(message, optional, tag = "22")]
    pub pause_key: ::core::option::Option<Key>,
    #[prost(bytes = "vec", tag = "23")]
    pub metadata: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "24")]
    pub metadata_key: ::core::option::Option<Key>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenUpdateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(string, tag = "2")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub treasury: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "5")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "6")]
    pub kyc_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "7")]
    pub freeze_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub wipe_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "9")]
    pub supply_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "10")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "11")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "12")]
    pub expiry: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "13")]
    pub memo: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "14")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "15")]
    pub pause_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "16")]
    pub metadata: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, optional, tag = "17")]
    pub metadata_key: ::core::option::Option<Key>,
    #[prost(enumeration = "TokenKeyValidation", tag = "18")]
    pub key_verification_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenDeleteTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenAssociateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: ::prost::alloc::vec::Vec<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenDissociateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: ::prost::alloc::vec::Vec<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenMintTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub metadata: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenBurnTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
    #[prost(int64, repeated, tag = "3")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenWipeAccountTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account: ::core::option::Option<AccountId>,
    #[prost(uint64, tag = "3")]
    pub amount: u64,
    #[prost(int64, repeated, tag = "4")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenFreezeAccountTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenUnfreezeAccountTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenGrantKycTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenRevokeKycTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, optional, tag = "2")]
    pub account: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenPauseTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenUnpauseTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenFeeScheduleUpdateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(message, repeated, tag = "2")]
    pub custom_fees: ::prost::alloc::vec::Vec<CustomFee>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenUpdateNftsTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(int64, repeated, tag = "2")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenAirdropTransactionBody {
    #[prost(message, repeated, tag = "1")]
    pub token_transfers: ::prost::alloc::vec::Vec<TokenTransferList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenClaimAirdropTransactionBody {
    #[prost(message, repeated, tag = "1")]
    pub pending_airdrops: ::prost::alloc::vec::Vec<PendingAirdropId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenCancelAirdropTransactionBody {
    #[prost(message, repeated, tag = "1")]
    pub pending_airdrops: ::prost::alloc::vec::Vec<PendingAirdropId>,
}

/// A fungible token type or a single NFT to reject.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenReference {
    #[prost(oneof = "token_reference::TokenIdentifier", tags = "1, 2")]
    pub token_identifier: ::core::option::Option<token_reference::TokenIdentifier>,
}
/// Nested message and enum types in `TokenReference`.
pub mod token_reference {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TokenIdentifier {
        #[prost(message, tag = "1")]
        FungibleToken(super::TokenId),
        #[prost(message, tag = "2")]
        Nft(super::NftId),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenRejectTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub owner: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub rejections: ::prost::alloc::vec::Vec<TokenReference>,
}

// ---------------------------------------------------------------------------
// consensus_*.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusCreateTopicTransactionBody {
    #[prost(string, tag = "1")]
    pub memo: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "3")]
    pub submit_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "6")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "7")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "8")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, repeated, tag = "9")]
    pub fee_exempt_key_list: ::prost::alloc::vec::Vec<Key>,
    #[prost(message, repeated, tag = "10")]
    pub custom_fees: ::prost::alloc::vec::Vec<FixedCustomFee>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusUpdateTopicTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub topic_id: ::core::option::Option<TopicId>,
    #[prost(message, optional, tag = "2")]
    pub memo: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "4")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "7")]
    pub submit_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "9")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "10")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "11")]
    pub fee_exempt_key_list: ::core::option::Option<FeeExemptKeyList>,
    #[prost(message, optional, tag = "12")]
    pub custom_fees: ::core::option::Option<FixedCustomFeeList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusDeleteTopicTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub topic_id: ::core::option::Option<TopicId>,
}

/// Position of one message chunk within a fragmented topic message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusMessageChunkInfo {
    #[prost(message, optional, tag = "1")]
    pub initial_transaction_id: ::core::option::Option<TransactionId>,
    #[prost(int32, tag = "2")]
    pub total: i32,
    #[prost(int32, tag = "3")]
    pub number: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusSubmitMessageTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub topic_id: ::core::option::Option<TopicId>,
    #[prost(bytes = "vec", tag = "2")]
    pub message: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub chunk_info: ::core::option::Option<ConsensusMessageChunkInfo>,
}

// ---------------------------------------------------------------------------
// file_*.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileCreateTransactionBody {
    #[prost(message, optional, tag = "2")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub keys: ::core::option::Option<KeyList>,
    #[prost(bytes = "vec", tag = "4")]
    pub contents: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub shard_id: ::core::option::Option<ShardId>,
    #[prost(message, optional, tag = "6")]
    pub realm_id: ::core::option::Option<RealmId>,
    #[prost(string, tag = "8")]
    pub memo: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileUpdateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub file_id: ::core::option::Option<FileId>,
    #[prost(message, optional, tag = "2")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub keys: ::core::option::Option<KeyList>,
    #[prost(bytes = "vec", tag = "4")]
    pub contents: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub memo: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileAppendTransactionBody {
    #[prost(message, optional, tag = "2")]
    pub file_id: ::core::option::Option<FileId>,
    #[prost(bytes = "vec", tag = "4")]
    pub contents: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDeleteTransactionBody {
    #[prost(message, optional, tag = "2")]
    pub file_id: ::core::option::Option<FileId>,
}

// ---------------------------------------------------------------------------
// contract_*.proto / ethereum_transaction.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCreateTransactionBody {
    #[prost(message, optional, tag = "3")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(int64, tag = "4")]
    pub gas: i64,
    #[prost(int64, tag = "5")]
    pub initial_balance: i64,
    #[prost(message, optional, tag = "8")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(bytes = "vec", tag = "9")]
    pub constructor_parameters: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "10")]
    pub shard_id: ::core::option::Option<ShardId>,
    #[prost(message, optional, tag = "11")]
    pub realm_id: ::core::option::Option<RealmId>,
    #[prost(string, tag = "13")]
    pub memo: ::prost::alloc::string::String,
    #[prost(int32, tag = "14")]
    pub max_automatic_token_associations: i32,
    #[prost(message, optional, tag = "15")]
    pub auto_renew_account_id: ::core::option::Option<AccountId>,
    #[prost(bool, tag = "19")]
    pub decline_reward: bool,
    #[prost(message, repeated, tag = "20")]
    pub hook_creation_details: ::prost::alloc::vec::Vec<HookCreationDetails>,
    #[prost(oneof = "contract_create_transaction_body::InitcodeSource", tags = "1, 16")]
    pub initcode_source: ::core::option::Option<contract_create_transaction_body::InitcodeSource>,
    #[prost(oneof = "contract_create_transaction_body::StakedId", tags = "17, 18")]
    pub staked_id: ::core::option::Option<contract_create_transaction_body::StakedId>,
}
/// Nested message and enum types in `ContractCreateTransactionBody`.
pub mod contract_create_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum InitcodeSource {
        #[prost(message, tag = "1")]
        FileId(super::FileId),
        #[prost(bytes, tag = "16")]
        Initcode(::prost::alloc::vec::Vec<u8>),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "17")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "18")]
        StakedNodeId(i64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractUpdateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(message, optional, tag = "2")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "7")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "10")]
    pub memo_wrapper: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "11")]
    pub max_automatic_token_associations: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "12")]
    pub auto_renew_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "15")]
    pub decline_reward: ::core::option::Option<bool>,
    #[prost(int64, repeated, tag = "16")]
    pub hook_ids_to_delete: ::prost::alloc::vec::Vec<i64>,
    #[prost(message, repeated, tag = "17")]
    pub hook_creation_details: ::prost::alloc::vec::Vec<HookCreationDetails>,
    #[prost(oneof = "contract_update_transaction_body::StakedId", tags = "13, 14")]
    pub staked_id: ::core::option::Option<contract_update_transaction_body::StakedId>,
}
/// Nested message and enum types in `ContractUpdateTransactionBody`.
pub mod contract_update_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "13")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "14")]
        StakedNodeId(i64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractDeleteTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(bool, tag = "4")]
    pub permanent_removal: bool,
    #[prost(oneof = "contract_delete_transaction_body::Obtainers", tags = "2, 3")]
    pub obtainers: ::core::option::Option<contract_delete_transaction_body::Obtainers>,
}
/// Nested message and enum types in `ContractDeleteTransactionBody`.
pub mod contract_delete_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Obtainers {
        #[prost(message, tag = "2")]
        TransferAccountId(super::AccountId),
        #[prost(message, tag = "3")]
        TransferContractId(super::ContractId),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCallTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(int64, tag = "2")]
    pub gas: i64,
    #[prost(int64, tag = "3")]
    pub amount: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub function_parameters: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EthereumTransactionBody {
    #[prost(bytes = "vec", tag = "1")]
    pub ethereum_data: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub call_data: ::core::option::Option<FileId>,
    #[prost(int64, tag = "3")]
    pub max_gas_allowance: i64,
}

// ---------------------------------------------------------------------------
// schedule_*.proto
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleCreateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub scheduled_transaction_body: ::core::option::Option<SchedulableTransactionBody>,
    #[prost(string, tag = "2")]
    pub memo: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "4")]
    pub payer_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "5")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(bool, tag = "13")]
    pub wait_for_expiry: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleSignTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub schedule_id: ::core::option::Option<ScheduleId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleDeleteTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub schedule_id: ::core::option::Option<ScheduleId>,
}

// ---------------------------------------------------------------------------
// freeze.proto / system_*.proto / util_prng.proto
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FreezeType {
    UnknownFreezeType = 0,
    FreezeOnly = 1,
    PrepareUpgrade = 2,
    FreezeUpgrade = 3,
    FreezeAbort = 4,
    TelemetryUpgrade = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FreezeTransactionBody {
    #[prost(message, optional, tag = "5")]
    pub update_file: ::core::option::Option<FileId>,
    #[prost(bytes = "vec", tag = "6")]
    pub file_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub start_time: ::core::option::Option<Timestamp>,
    #[prost(enumeration = "FreezeType", tag = "8")]
    pub freeze_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SystemDeleteTransactionBody {
    #[prost(message, optional, tag = "3")]
    pub expiration_time: ::core::option::Option<TimestampSeconds>,
    #[prost(oneof = "system_delete_transaction_body::Id", tags = "1, 2")]
    pub id: ::core::option::Option<system_delete_transaction_body::Id>,
}
/// Nested message and enum types in `SystemDeleteTransactionBody`.
pub mod system_delete_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Id {
        #[prost(message, tag = "1")]
        FileId(super::FileId),
        #[prost(message, tag = "2")]
        ContractId(super::ContractId),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SystemUndeleteTransactionBody {
    #[prost(oneof = "system_undelete_transaction_body::Id", tags = "1, 2")]
    pub id: ::core::option::Option<system_undelete_transaction_body::Id>,
}
/// Nested message and enum types in `SystemUndeleteTransactionBody`.
pub mod system_undelete_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Id {
        #[prost(message, tag = "1")]
        FileId(super::FileId),
        #[prost(message, tag = "2")]
        ContractId(super::ContractId),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UtilPrngTransactionBody {
    #[prost(int32, tag = "1")]
    pub range: i32,
}

// ---------------------------------------------------------------------------
// node_*.proto (address book)
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeCreateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub gossip_endpoint: ::prost::alloc::vec::Vec<ServiceEndpoint>,
    #[prost(message, repeated, tag = "4")]
    pub service_endpoint: ::prost::alloc::vec::Vec<ServiceEndpoint>,
    #[prost(bytes = "vec", tag = "5")]
    pub gossip_ca_certificate: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub grpc_certificate_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(bool, tag = "8")]
    pub decline_reward: bool,
    #[prost(message, optional, tag = "9")]
    pub grpc_proxy_endpoint: ::core::option::Option<ServiceEndpoint>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeUpdateTransactionBody {
    #[prost(uint64, tag = "1")]
    pub node_id: u64,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "4")]
    pub gossip_endpoint: ::prost::alloc::vec::Vec<ServiceEndpoint>,
    #[prost(message, repeated, tag = "5")]
    pub service_endpoint: ::prost::alloc::vec::Vec<ServiceEndpoint>,
    #[prost(message, optional, tag = "6")]
    pub gossip_ca_certificate: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, optional, tag = "7")]
    pub grpc_certificate_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, optional, tag = "8")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "9")]
    pub decline_reward: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "10")]
    pub grpc_proxy_endpoint: ::core::option::Option<ServiceEndpoint>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeDeleteTransactionBody {
    #[prost(uint64, tag = "1")]
    pub node_id: u64,
}

/// A list of signed inner transactions to execute atomically.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AtomicBatchTransactionBody {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub transactions: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

// ---------------------------------------------------------------------------
// transaction_body.proto / schedulable_transaction_body.proto
// ---------------------------------------------------------------------------

/// A single transaction. All transaction types are possible here.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionBody {
    #[prost(message, optional, tag = "1")]
    pub transaction_id: ::core::option::Option<TransactionId>,
    #[prost(message, optional, tag = "2")]
    pub node_account_id: ::core::option::Option<AccountId>,
    #[prost(uint64, tag = "3")]
    pub transaction_fee: u64,
    #[prost(message, optional, tag = "4")]
    pub transaction_valid_duration: ::core::option::Option<Duration>,
    #[prost(string, tag = "6")]
    pub memo: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "73")]
    pub batch_key: ::core::option::Option<Key>,
    #[prost(message, repeated, tag = "1001")]
    pub max_custom_fees: ::prost::alloc::vec::Vec<CustomFeeLimit>,
    #[prost(oneof = "transaction_body::Data", tags = "7, 8, 9, 11, 12, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 29, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 52, 53, 54, 55, 56, 57, 58, 59, 60, 74, 75")]
    pub data: ::core::option::Option<transaction_body::Data>,
}
/// Nested message and enum types in `TransactionBody`.
pub mod transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(message, tag = "7")]
        ContractCall(super::ContractCallTransactionBody),
        #[prost(message, tag = "8")]
        ContractCreateInstance(super::ContractCreateTransactionBody),
        #[prost(message, tag = "9")]
        ContractUpdateInstance(super::ContractUpdateTransactionBody),
        #[prost(message, tag = "11")]
        CryptoCreateAccount(super::CryptoCreateTransactionBody),
        #[prost(message, tag = "12")]
        CryptoDelete(super::CryptoDeleteTransactionBody),
        #[prost(message, tag = "14")]
        CryptoTransfer(super::CryptoTransferTransactionBody),
        #[prost(message, tag = "15")]
        CryptoUpdateAccount(super::CryptoUpdateTransactionBody),
        #[prost(message, tag = "16")]
        FileAppend(super::FileAppendTransactionBody),
        #[prost(message, tag = "17")]
        FileCreate(super::FileCreateTransactionBody),
        #[prost(message, tag = "18")]
        FileDelete(super::FileDeleteTransactionBody),
        #[prost(message, tag = "19")]
        FileUpdate(super::FileUpdateTransactionBody),
        #[prost(message, tag = "20")]
        SystemDelete(super::SystemDeleteTransactionBody),
        #[prost(message, tag = "21")]
        SystemUndelete(super::SystemUndeleteTransactionBody),
        #[prost(message, tag = "22")]
        ContractDeleteInstance(super::ContractDeleteTransactionBody),
        #[prost(message, tag = "23")]
        Freeze(super::FreezeTransactionBody),
        #[prost(message, tag = "24")]
        ConsensusCreateTopic(super::ConsensusCreateTopicTransactionBody),
        #[prost(message, tag = "25")]
        ConsensusUpdateTopic(super::ConsensusUpdateTopicTransactionBody),
        #[prost(message, tag = "26")]
        ConsensusDeleteTopic(super::ConsensusDeleteTopicTransactionBody),
        #[prost(message, tag = "27")]
        ConsensusSubmitMessage(super::ConsensusSubmitMessageTransactionBody),
        #[prost(message, tag = "29")]
        TokenCreation(super::TokenCreateTransactionBody),
        #[prost(message, tag = "31")]
        TokenFreeze(super::TokenFreezeAccountTransactionBody),
        #[prost(message, tag = "32")]
        TokenUnfreeze(super::TokenUnfreezeAccountTransactionBody),
        #[prost(message, tag = "33")]
        TokenGrantKyc(super::TokenGrantKycTransactionBody),
        #[prost(message, tag = "34")]
        TokenRevokeKyc(super::TokenRevokeKycTransactionBody),
        #[prost(message, tag = "35")]
        TokenDeletion(super::TokenDeleteTransactionBody),
        #[prost(message, tag = "36")]
        TokenUpdate(super::TokenUpdateTransactionBody),
        #[prost(message, tag = "37")]
        TokenMint(super::TokenMintTransactionBody),
        #[prost(message, tag = "38")]
        TokenBurn(super::TokenBurnTransactionBody),
        #[prost(message, tag = "39")]
        TokenWipe(super::TokenWipeAccountTransactionBody),
        #[prost(message, tag = "40")]
        TokenAssociate(super::TokenAssociateTransactionBody),
        #[prost(message, tag = "41")]
        TokenDissociate(super::TokenDissociateTransactionBody),
        #[prost(message, tag = "42")]
        ScheduleCreate(super::ScheduleCreateTransactionBody),
        #[prost(message, tag = "43")]
        ScheduleDelete(super::ScheduleDeleteTransactionBody),
        #[prost(message, tag = "44")]
        ScheduleSign(super::ScheduleSignTransactionBody),
        #[prost(message, tag = "45")]
        TokenFeeScheduleUpdate(super::TokenFeeScheduleUpdateTransactionBody),
        #[prost(message, tag = "46")]
        TokenPause(super::TokenPauseTransactionBody),
        #[prost(message, tag = "47")]
        TokenUnpause(super::TokenUnpauseTransactionBody),
        #[prost(message, tag = "48")]
        CryptoApproveAllowance(super::CryptoApproveAllowanceTransactionBody),
        #[prost(message, tag = "49")]
        CryptoDeleteAllowance(super::CryptoDeleteAllowanceTransactionBody),
        #[prost(message, tag = "50")]
        EthereumTransaction(super::EthereumTransactionBody),
        #[prost(message, tag = "52")]
        UtilPrng(super::UtilPrngTransactionBody),
        #[prost(message, tag = "53")]
        TokenUpdateNfts(super::TokenUpdateNftsTransactionBody),
        #[prost(message, tag = "54")]
        NodeCreate(super::NodeCreateTransactionBody),
        #[prost(message, tag = "55")]
        NodeUpdate(super::NodeUpdateTransactionBody),
        #[prost(message, tag = "56")]
        NodeDelete(super::NodeDeleteTransactionBody),
        #[prost(message, tag = "57")]
        TokenReject(super::TokenRejectTransactionBody),
        #[prost(message, tag = "58")]
        TokenAirdrop(super::TokenAirdropTransactionBody),
        #[prost(message, tag = "59")]
        TokenCancelAirdrop(super::TokenCancelAirdropTransactionBody),
        #[prost(message, tag = "60")]
        TokenClaimAirdrop(super::TokenClaimAirdropTransactionBody),
        #[prost(message, tag = "74")]
        AtomicBatch(super::AtomicBatchTransactionBody),
        #[prost(message, tag = "75")]
        LambdaSstore(super::LambdaSStoreTransactionBody),
    }
}

/// A transaction body for any transaction that may be scheduled.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SchedulableTransactionBody {
    #[prost(uint64, tag = "1")]
    pub transaction_fee: u64,
    #[prost(string, tag = "2")]
    pub memo: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "1001")]
    pub max_custom_fees: ::prost::alloc::vec::Vec<CustomFeeLimit>,
    #[prost(oneof = "schedulable_transaction_body::Data", tags = "3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48")]
    pub data: ::core::option::Option<schedulable_transaction_body::Data>,
}
/// Nested message and enum types in `SchedulableTransactionBody`.
pub mod schedulable_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(message, tag = "3")]
        ContractCall(super::ContractCallTransactionBody),
        #[prost(message, tag = "4")]
        ContractCreateInstance(super::ContractCreateTransactionBody),
        #[prost(message, tag = "5")]
        ContractUpdateInstance(super::ContractUpdateTransactionBody),
        #[prost(message, tag = "6")]
        ContractDeleteInstance(super::ContractDeleteTransactionBody),
        #[prost(message, tag = "7")]
        CryptoApproveAllowance(super::CryptoApproveAllowanceTransactionBody),
        #[prost(message, tag = "8")]
        CryptoDeleteAllowance(super::CryptoDeleteAllowanceTransactionBody),
        #[prost(message, tag = "9")]
        CryptoCreateAccount(super::CryptoCreateTransactionBody),
        #[prost(message, tag = "10")]
        CryptoDelete(super::CryptoDeleteTransactionBody),
        #[prost(message, tag = "11")]
        CryptoTransfer(super::CryptoTransferTransactionBody),
        #[prost(message, tag = "12")]
        CryptoUpdateAccount(super::CryptoUpdateTransactionBody),
        #[prost(message, tag = "13")]
        FileAppend(super::FileAppendTransactionBody),
        #[prost(message, tag = "14")]
        FileCreate(super::FileCreateTransactionBody),
        #[prost(message, tag = "15")]
        FileDelete(super::FileDeleteTransactionBody),
        #[prost(message, tag = "16")]
        FileUpdate(super::FileUpdateTransactionBody),
        #[prost(message, tag = "17")]
        SystemDelete(super::SystemDeleteTransactionBody),
        #[prost(message, tag = "18")]
        SystemUndelete(super::SystemUndeleteTransactionBody),
        #[prost(message, tag = "19")]
        Freeze(super::FreezeTransactionBody),
        #[prost(message, tag = "20")]
        ConsensusCreateTopic(super::ConsensusCreateTopicTransactionBody),
        #[prost(message, tag = "21")]
        ConsensusUpdateTopic(super::ConsensusUpdateTopicTransactionBody),
        #[prost(message, tag = "22")]
        ConsensusDeleteTopic(super::ConsensusDeleteTopicTransactionBody),
        #[prost(message, tag = "23")]
        ConsensusSubmitMessage(super::ConsensusSubmitMessageTransactionBody),
        #[prost(message, tag = "24")]
        TokenCreation(super::TokenCreateTransactionBody),
        #[prost(message, tag = "25")]
        TokenFreeze(super::TokenFreezeAccountTransactionBody),
        #[prost(message, tag = "26")]
        TokenUnfreeze(super::TokenUnfreezeAccountTransactionBody),
        #[prost(message, tag = "27")]
        TokenGrantKyc(super::TokenGrantKycTransactionBody),
        #[prost(message, tag = "28")]
        TokenRevokeKyc(super::TokenRevokeKycTransactionBody),
        #[prost(message, tag = "29")]
        TokenDeletion(super::TokenDeleteTransactionBody),
        #[prost(message, tag = "30")]
        TokenUpdate(super::TokenUpdateTransactionBody),
        #[prost(message, tag = "31")]
        TokenMint(super::TokenMintTransactionBody),
        #[prost(message, tag = "32")]
        TokenBurn(super::TokenBurnTransactionBody),
        #[prost(message, tag = "33")]
        TokenWipe(super::TokenWipeAccountTransactionBody),
        #[prost(message, tag = "34")]
        TokenAssociate(super::TokenAssociateTransactionBody),
        #[prost(message, tag = "35")]
        TokenDissociate(super::TokenDissociateTransactionBody),
        #[prost(message, tag = "36")]
        ScheduleDelete(super::ScheduleDeleteTransactionBody),
        #[prost(message, tag = "37")]
        TokenPause(super::TokenPauseTransactionBody),
        #[prost(message, tag = "38")]
        TokenUnpause(super::TokenUnpauseTransactionBody),
        #[prost(message, tag = "39")]
        TokenFeeScheduleUpdate(super::TokenFeeScheduleUpdateTransactionBody),
        #[prost(message, tag = "40")]
        UtilPrng(super::UtilPrngTransactionBody),
        #[prost(message, tag = "41")]
        TokenUpdateNfts(super::TokenUpdateNftsTransactionBody),
        #[prost(message, tag = "42")]
        NodeCreate(super::NodeCreateTransactionBody),
        #[prost(message, tag = "43")]
        NodeUpdate(super::NodeUpdateTransactionBody),
        #[prost(message, tag = "44")]
        NodeDelete(super::NodeDeleteTransactionBody),
        #[prost(message, tag = "45")]
        TokenReject(super::TokenRejectTransactionBody),
        #[prost(message, tag = "46")]
        TokenCancelAirdrop(super::TokenCancelAirdropTransactionBody),
        #[prost(message, tag = "47")]
        TokenClaimAirdrop(super::TokenClaimAirdropTransactionBody),
        #[prost(message, tag = "48")]
        TokenAirdrop(super::TokenAirdropTransactionBody),
    }
}

// ---------------------------------------------------------------------------
// transaction.proto / transaction_contents.proto
// ---------------------------------------------------------------------------

/// A wrapper around signed transaction bytes.
///
/// `body_bytes` and `sig_map` are the legacy form; current clients only
/// populate `signed_transaction_bytes`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(message, optional, tag = "3")]
    pub sig_map: ::core::option::Option<SignatureMap>,
    #[prost(bytes = "vec", tag = "4")]
    pub body_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub signed_transaction_bytes: ::prost::alloc::vec::Vec<u8>,
}

/// A serialized `TransactionBody` together with the signatures over it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedTransaction {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub sig_map: ::core::option::Option<SignatureMap>,
    #[prost(bool, tag = "3")]
    pub use_serialized_tx_message_hash_algorithm: bool,
}

// ---------------------------------------------------------------------------
// exchange_rate.proto / contract_call_local.proto / receipts and records
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExchangeRate {
    #[prost(int32, tag = "1")]
    pub hbar_equiv: i32,
    #[prost(int32, tag = "2")]
    pub cent_equiv: i32,
    #[prost(message, optional, tag = "3")]
    pub expiration_time: ::core::option::Option<TimestampSeconds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExchangeRateSet {
    #[prost(message, optional, tag = "1")]
    pub current_rate: ::core::option::Option<ExchangeRate>,
    #[prost(message, optional, tag = "2")]
    pub next_rate: ::core::option::Option<ExchangeRate>,
}

/// A log emitted by a contract call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractLoginfo {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(bytes = "vec", tag = "2")]
    pub bloom: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub topic: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", tag = "4")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}

/// The result of invoking a contract function.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractFunctionResult {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(bytes = "vec", tag = "2")]
    pub contract_call_result: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub error_message: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    pub bloom: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "5")]
    pub gas_used: u64,
    #[prost(message, repeated, tag = "6")]
    pub log_info: ::prost::alloc::vec::Vec<ContractLoginfo>,
    #[prost(message, optional, tag = "9")]
    pub evm_address: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(int64, tag = "10")]
    pub gas: i64,
    #[prost(int64, tag = "11")]
    pub amount: i64,
    #[prost(bytes = "vec", tag = "12")]
    pub function_parameters: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "13")]
    pub sender_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "15")]
    pub signer_nonce: ::core::option::Option<i64>,
}

/// The consensus result for a transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionReceipt {
    #[prost(enumeration = "ResponseCodeEnum", tag = "1")]
    pub status: i32,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub file_id: ::core::option::Option<FileId>,
    #[prost(message, optional, tag = "4")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(message, optional, tag = "5")]
    pub exchange_rate: ::core::option::Option<ExchangeRateSet>,
    #[prost(message, optional, tag = "6")]
    pub topic_id: ::core::option::Option<TopicId>,
    #[prost(uint64, tag = "7")]
    pub topic_sequence_number: u64,
    #[prost(bytes = "vec", tag = "8")]
    pub topic_running_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "9")]
    pub topic_running_hash_version: u64,
    #[prost(message, optional, tag = "10")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "11")]
    pub new_total_supply: u64,
    #[prost(message, optional, tag = "12")]
    pub schedule_id: ::core::option::Option<ScheduleId>,
    #[prost(message, optional, tag = "13")]
    pub scheduled_transaction_id: ::core::option::Option<TransactionId>,
    #[prost(int64, repeated, tag = "14")]
    pub serial_numbers: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, tag = "15")]
    pub node_id: u64,
}

/// A pending airdrop created by a transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PendingAirdropRecord {
    #[prost(message, optional, tag = "1")]
    pub pending_airdrop_id: ::core::option::Option<PendingAirdropId>,
    #[prost(message, optional, tag = "2")]
    pub pending_airdrop_value: ::core::option::Option<PendingAirdropValue>,
}

/// The full record of a transaction, including its receipt.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionRecord {
    #[prost(message, optional, tag = "1")]
    pub receipt: ::core::option::Option<TransactionReceipt>,
    #[prost(bytes = "vec", tag = "2")]
    pub transaction_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub consensus_timestamp: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub transaction_id: ::core::option::Option<TransactionId>,
    #[prost(string, tag = "5")]
    pub memo: ::prost::alloc::string::String,
    #[prost(uint64, tag = "6")]
    pub transaction_fee: u64,
    #[prost(message, optional, tag = "10")]
    pub transfer_list: ::core::option::Option<TransferList>,
    #[prost(message, repeated, tag = "11")]
    pub token_transfer_lists: ::prost::alloc::vec::Vec<TokenTransferList>,
    #[prost(message, optional, tag = "12")]
    pub schedule_ref: ::core::option::Option<ScheduleId>,
    #[prost(message, repeated, tag = "13")]
    pub assessed_custom_fees: ::prost::alloc::vec::Vec<AssessedCustomFee>,
    #[prost(message, repeated, tag = "14")]
    pub automatic_token_associations: ::prost::alloc::vec::Vec<TokenAssociation>,
    #[prost(message, optional, tag = "15")]
    pub parent_consensus_timestamp: ::core::option::Option<Timestamp>,
    #[prost(bytes = "vec", tag = "16")]
    pub alias: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "17")]
    pub ethereum_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "18")]
    pub paid_staking_rewards: ::prost::alloc::vec::Vec<AccountAmount>,
    #[prost(bytes = "vec", tag = "21")]
    pub evm_address: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "22")]
    pub new_pending_airdrops: ::prost::alloc::vec::Vec<PendingAirdropRecord>,
    #[prost(oneof = "transaction_record::Body", tags = "7, 8")]
    pub body: ::core::option::Option<transaction_record::Body>,
    #[prost(oneof = "transaction_record::Entropy", tags = "19, 20")]
    pub entropy: ::core::option::Option<transaction_record::Entropy>,
}
/// Nested message and enum types in `TransactionRecord`.
pub mod transaction_record {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Body {
        #[prost(message, tag = "7")]
        ContractCallResult(super::ContractFunctionResult),
        #[prost(message, tag = "8")]
        ContractCreateResult(super::ContractFunctionResult),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Entropy {
        #[prost(bytes, tag = "19")]
        PrngBytes(::prost::alloc::vec::Vec<u8>),
        #[prost(int32, tag = "20")]
        PrngNumber(i32),
    }
}

// ---------------------------------------------------------------------------
// query_header.proto / response_header.proto
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResponseType {
    AnswerOnly = 0,
    AnswerStateProof = 1,
    CostAnswer = 2,
    CostAnswerStateProof = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryHeader {
    #[prost(message, optional, tag = "1")]
    pub payment: ::core::option::Option<Transaction>,
    #[prost(enumeration = "ResponseType", tag = "2")]
    pub response_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseHeader {
    #[prost(enumeration = "ResponseCodeEnum", tag = "1")]
    pub node_transaction_precheck_code: i32,
    #[prost(enumeration = "ResponseType", tag = "2")]
    pub response_type: i32,
    #[prost(uint64, tag = "3")]
    pub cost: u64,
    #[prost(bytes = "vec", tag = "4")]
    pub state_proof: ::prost::alloc::vec::Vec<u8>,
}

// ---------------------------------------------------------------------------
// query bodies and their responses
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetAccountBalanceQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(oneof = "crypto_get_account_balance_query::BalanceSource", tags = "2, 3")]
    pub balance_source: ::core::option::Option<crypto_get_account_balance_query::BalanceSource>,
}
/// Nested message and enum types in `CryptoGetAccountBalanceQuery`.
pub mod crypto_get_account_balance_query {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum BalanceSource {
        #[prost(message, tag = "2")]
        AccountId(super::AccountId),
        #[prost(message, tag = "3")]
        ContractId(super::ContractId),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetAccountBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(uint64, tag = "3")]
    pub balance: u64,
    #[prost(message, repeated, tag = "4")]
    pub token_balances: ::prost::alloc::vec::Vec<TokenBalance>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub account_info: ::core::option::Option<crypto_get_info_response::AccountInfo>,
}
/// Nested message and enum types in `CryptoGetInfoResponse`.
pub mod crypto_get_info_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AccountInfo {
        #[prost(message, optional, tag = "1")]
        pub account_id: ::core::option::Option<super::AccountId>,
        #[prost(string, tag = "2")]
        pub contract_account_id: ::prost::alloc::string::String,
        #[prost(bool, tag = "3")]
        pub deleted: bool,
        #[prost(int64, tag = "6")]
        pub proxy_received: i64,
        #[prost(message, optional, tag = "7")]
        pub key: ::core::option::Option<super::Key>,
        #[prost(uint64, tag = "8")]
        pub balance: u64,
        #[prost(bool, tag = "11")]
        pub receiver_sig_required: bool,
        #[prost(message, optional, tag = "12")]
        pub expiration_time: ::core::option::Option<super::Timestamp>,
        #[prost(message, optional, tag = "13")]
        pub auto_renew_period: ::core::option::Option<super::Duration>,
        #[prost(message, repeated, tag = "15")]
        pub token_relationships: ::prost::alloc::vec::Vec<super::TokenRelationship>,
        #[prost(string, tag = "16")]
        pub memo: ::prost::alloc::string::String,
        #[prost(int64, tag = "17")]
        pub owned_nfts: i64,
        #[prost(int32, tag = "18")]
        pub max_automatic_token_associations: i32,
        #[prost(bytes = "vec", tag = "19")]
        pub alias: ::prost::alloc::vec::Vec<u8>,
        #[prost(bytes = "vec", tag = "20")]
        pub ledger_id: ::prost::alloc::vec::Vec<u8>,
        #[prost(int64, tag = "21")]
        pub ethereum_nonce: i64,
        #[prost(message, optional, tag = "22")]
        pub staking_info: ::core::option::Option<super::StakingInfo>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetAccountRecordsQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoGetAccountRecordsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "3")]
    pub records: ::prost::alloc::vec::Vec<TransactionRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionGetReceiptQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction_id: ::core::option::Option<TransactionId>,
    #[prost(bool, tag = "3")]
    pub include_duplicates: bool,
    #[prost(bool, tag = "4")]
    pub include_child_receipts: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionGetReceiptResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub receipt: ::core::option::Option<TransactionReceipt>,
    #[prost(message, repeated, tag = "4")]
    pub duplicate_transaction_receipts: ::prost::alloc::vec::Vec<TransactionReceipt>,
    #[prost(message, repeated, tag = "5")]
    pub child_transaction_receipts: ::prost::alloc::vec::Vec<TransactionReceipt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionGetRecordQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction_id: ::core::option::Option<TransactionId>,
    #[prost(bool, tag = "3")]
    pub include_duplicates: bool,
    #[prost(bool, tag = "4")]
    pub include_child_records: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionGetRecordResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "3")]
    pub transaction_record: ::core::option::Option<TransactionRecord>,
    #[prost(message, repeated, tag = "4")]
    pub duplicate_transaction_records: ::prost::alloc::vec::Vec<TransactionRecord>,
    #[prost(message, repeated, tag = "5")]
    pub child_transaction_records: ::prost::alloc::vec::Vec<TransactionRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenGetInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub token: ::core::option::Option<TokenId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenInfo {
    #[prost(message, optional, tag = "1")]
    pub token_id: ::core::option::Option<TokenId>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(uint32, tag = "4")]
    pub decimals: u32,
    #[prost(uint64, tag = "5")]
    pub total_supply: u64,
    #[prost(message, optional, tag = "6")]
    pub treasury: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "7")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub kyc_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "9")]
    pub freeze_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "10")]
    pub wipe_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "11")]
    pub supply_key: ::core::option::Option<Key>,
    #[prost(enumeration = "TokenFreezeStatus", tag = "12")]
    pub default_freeze_status: i32,
    #[prost(enumeration = "TokenKycStatus", tag = "13")]
    pub default_kyc_status: i32,
    #[prost(bool, tag = "14")]
    pub deleted: bool,
    #[prost(message, optional, tag = "15")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "16")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "17")]
    pub expiry: ::core::option::Option<Timestamp>,
    #[prost(string, tag = "18")]
    pub memo: ::prost::alloc::string::String,
    #[prost(enumeration = "TokenType", tag = "19")]
    pub token_type: i32,
    #[prost(enumeration = "TokenSupplyType", tag = "20")]
    pub supply_type: i32,
    #[prost(int64, tag = "21")]
    pub max_supply: i64,
    #[prost(message, optional, tag = "22")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, repeated, tag = "23")]
    pub custom_fees: ::prost::alloc::vec::Vec<CustomFee>,
    #[prost(message, optional, tag = "24")]
    pub pause_key: ::core::option::Option<Key>,
    #[prost(enumeration = "TokenPauseStatus", tag = "25")]
    pub pause_status: i32,
    #[prost(bytes = "vec", tag = "26")]
    pub ledger_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "27")]
    pub metadata: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "28")]
    pub metadata_key: ::core::option::Option<Key>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenGetInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub token_info: ::core::option::Option<TokenInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenGetNftInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub nft_id: ::core::option::Option<NftId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenNftInfo {
    #[prost(message, optional, tag = "1")]
    pub nft_id: ::core::option::Option<NftId>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub creation_time: ::core::option::Option<Timestamp>,
    #[prost(bytes = "vec", tag = "4")]
    pub metadata: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub ledger_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub spender_id: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenGetNftInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub nft: ::core::option::Option<TokenNftInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusGetTopicInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub topic_id: ::core::option::Option<TopicId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusTopicInfo {
    #[prost(string, tag = "1")]
    pub memo: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub running_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub sequence_number: u64,
    #[prost(message, optional, tag = "4")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "6")]
    pub submit_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "7")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "8")]
    pub auto_renew_account: ::core::option::Option<AccountId>,
    #[prost(bytes = "vec", tag = "9")]
    pub ledger_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "10")]
    pub fee_schedule_key: ::core::option::Option<Key>,
    #[prost(message, repeated, tag = "11")]
    pub fee_exempt_key_list: ::prost::alloc::vec::Vec<Key>,
    #[prost(message, repeated, tag = "12")]
    pub custom_fees: ::prost::alloc::vec::Vec<FixedCustomFee>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusGetTopicInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub topic_id: ::core::option::Option<TopicId>,
    #[prost(message, optional, tag = "5")]
    pub topic_info: ::core::option::Option<ConsensusTopicInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileGetContentsQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub file_id: ::core::option::Option<FileId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileGetContentsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub file_contents: ::core::option::Option<file_get_contents_response::FileContents>,
}
/// Nested message and enum types in `FileGetContentsResponse`.
pub mod file_get_contents_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FileContents {
        #[prost(message, optional, tag = "1")]
        pub file_id: ::core::option::Option<super::FileId>,
        #[prost(bytes = "vec", tag = "2")]
        pub contents: ::prost::alloc::vec::Vec<u8>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileGetInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub file_id: ::core::option::Option<FileId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileGetInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub file_info: ::core::option::Option<file_get_info_response::FileInfo>,
}
/// Nested message and enum types in `FileGetInfoResponse`.
pub mod file_get_info_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FileInfo {
        #[prost(message, optional, tag = "1")]
        pub file_id: ::core::option::Option<super::FileId>,
        #[prost(int64, tag = "2")]
        pub size: i64,
        #[prost(message, optional, tag = "3")]
        pub expiration_time: ::core::option::Option<super::Timestamp>,
        #[prost(bool, tag = "4")]
        pub deleted: bool,
        #[prost(message, optional, tag = "5")]
        pub keys: ::core::option::Option<super::KeyList>,
        #[prost(string, tag = "6")]
        pub memo: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "7")]
        pub ledger_id: ::prost::alloc::vec::Vec<u8>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractGetInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub contract_id: ::core::option::Option<ContractId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractGetInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub contract_info: ::core::option::Option<contract_get_info_response::ContractInfo>,
}
/// Nested message and enum types in `ContractGetInfoResponse`.
pub mod contract_get_info_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ContractInfo {
        #[prost(message, optional, tag = "1")]
        pub contract_id: ::core::option::Option<super::ContractId>,
        #[prost(message, optional, tag = "2")]
        pub account_id: ::core::option::Option<super::AccountId>,
        #[prost(string, tag = "3")]
        pub contract_account_id: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "4")]
        pub admin_key: ::core::option::Option<super::Key>,
        #[prost(message, optional, tag = "5")]
        pub expiration_time: ::core::option::Option<super::Timestamp>,
        #[prost(message, optional, tag = "6")]
        pub auto_renew_period: ::core::option::Option<super::Duration>,
        #[prost(int64, tag = "7")]
        pub storage: i64,
        #[prost(string, tag = "8")]
        pub memo: ::prost::alloc::string::String,
        #[prost(uint64, tag = "9")]
        pub balance: u64,
        #[prost(bool, tag = "10")]
        pub deleted: bool,
        #[prost(message, repeated, tag = "11")]
        pub token_relationships: ::prost::alloc::vec::Vec<super::TokenRelationship>,
        #[prost(bytes = "vec", tag = "12")]
        pub ledger_id: ::prost::alloc::vec::Vec<u8>,
        #[prost(message, optional, tag = "13")]
        pub auto_renew_account_id: ::core::option::Option<super::AccountId>,
        #[prost(int32, tag = "14")]
        pub max_automatic_token_associations: i32,
        #[prost(message, optional, tag = "15")]
        pub staking_info: ::core::option::Option<super::StakingInfo>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCallLocalQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(int64, tag = "3")]
    pub gas: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub function_parameters: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub sender_id: ::core::option::Option<AccountId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCallLocalResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub function_result: ::core::option::Option<ContractFunctionResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractGetBytecodeQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub contract_id: ::core::option::Option<ContractId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractGetBytecodeResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(bytes = "vec", tag = "6")]
    pub bytecode: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleGetInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
    #[prost(message, optional, tag = "2")]
    pub schedule_id: ::core::option::Option<ScheduleId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleInfo {
    #[prost(message, optional, tag = "1")]
    pub schedule_id: ::core::option::Option<ScheduleId>,
    #[prost(message, optional, tag = "4")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub scheduled_transaction_body: ::core::option::Option<SchedulableTransactionBody>,
    #[prost(string, tag = "6")]
    pub memo: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "7")]
    pub admin_key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub signers: ::core::option::Option<KeyList>,
    #[prost(message, optional, tag = "9")]
    pub creator_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "10")]
    pub payer_account_id: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "11")]
    pub scheduled_transaction_id: ::core::option::Option<TransactionId>,
    #[prost(bytes = "vec", tag = "12")]
    pub ledger_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "13")]
    pub wait_for_expiry: bool,
    #[prost(oneof = "schedule_info::Data", tags = "2, 3")]
    pub data: ::core::option::Option<schedule_info::Data>,
}
/// Nested message and enum types in `ScheduleInfo`.
pub mod schedule_info {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(message, tag = "2")]
        DeletionTime(super::Timestamp),
        #[prost(message, tag = "3")]
        ExecutionTime(super::Timestamp),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleGetInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub schedule_info: ::core::option::Option<ScheduleInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetworkGetVersionInfoQuery {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<QueryHeader>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetworkGetVersionInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub hapi_proto_version: ::core::option::Option<SemanticVersion>,
    #[prost(message, optional, tag = "3")]
    pub hedera_services_version: ::core::option::Option<SemanticVersion>,
}

// ---------------------------------------------------------------------------
// query.proto / response.proto
// ---------------------------------------------------------------------------

/// A single query, which is sent from the client to a node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Query {
    #[prost(oneof = "query::Query", tags = "3, 4, 5, 7, 8, 9, 12, 13, 14, 15, 50, 51, 52, 53, 55")]
    pub query: ::core::option::Option<query::Query>,
}
/// Nested message and enum types in `Query`.
pub mod query {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Query {
        #[prost(message, tag = "3")]
        ContractCallLocal(super::ContractCallLocalQuery),
        #[prost(message, tag = "4")]
        ContractGetInfo(super::ContractGetInfoQuery),
        #[prost(message, tag = "5")]
        ContractGetBytecode(super::ContractGetBytecodeQuery),
        #[prost(message, tag = "7")]
        CryptogetAccountBalance(super::CryptoGetAccountBalanceQuery),
        #[prost(message, tag = "8")]
        CryptoGetAccountRecords(super::CryptoGetAccountRecordsQuery),
        #[prost(message, tag = "9")]
        CryptoGetInfo(super::CryptoGetInfoQuery),
        #[prost(message, tag = "12")]
        FileGetContents(super::FileGetContentsQuery),
        #[prost(message, tag = "13")]
        FileGetInfo(super::FileGetInfoQuery),
        #[prost(message, tag = "14")]
        TransactionGetReceipt(super::TransactionGetReceiptQuery),
        #[prost(message, tag = "15")]
        TransactionGetRecord(super::TransactionGetRecordQuery),
        #[prost(message, tag = "50")]
        ConsensusGetTopicInfo(super::ConsensusGetTopicInfoQuery),
        #[prost(message, tag = "51")]
        NetworkGetVersionInfo(super::NetworkGetVersionInfoQuery),
        #[prost(message, tag = "52")]
        TokenGetInfo(super::TokenGetInfoQuery),
        #[prost(message, tag = "53")]
        ScheduleGetInfo(super::ScheduleGetInfoQuery),
        #[prost(message, tag = "55")]
        TokenGetNftInfo(super::TokenGetNftInfoQuery),
    }
}

/// A single response, which is returned from the node to the client.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(
        oneof = "response::Response",
        tags = "3, 4, 6, 7, 8, 9, 12, 13, 14, 15, 150, 151, 152, 153, 155"
    )]
    pub response: ::core::option::Option<response::Response>,
}
/// Nested message and enum types in `Response`.
pub mod response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Response {
        #[prost(message, tag = "3")]
        ContractCallLocal(super::ContractCallLocalResponse),
        #[prost(message, tag = "4")]
        ContractGetInfo(super::ContractGetInfoResponse),
        #[prost(message, tag = "6")]
        ContractGetBytecodeResponse(super::ContractGetBytecodeResponse),
        #[prost(message, tag = "7")]
        CryptogetAccountBalance(super::CryptoGetAccountBalanceResponse),
        #[prost(message, tag = "8")]
        CryptoGetAccountRecords(super::CryptoGetAccountRecordsResponse),
        #[prost(message, tag = "9")]
        CryptoGetInfo(super::CryptoGetInfoResponse),
        #[prost(message, tag = "12")]
        FileGetContents(super::FileGetContentsResponse),
        #[prost(message, tag = "13")]
        FileGetInfo(super::FileGetInfoResponse),
        #[prost(message, tag = "14")]
        TransactionGetReceipt(super::TransactionGetReceiptResponse),
        #[prost(message, tag = "15")]
        TransactionGetRecord(super::TransactionGetRecordResponse),
        #[prost(message, tag = "150")]
        ConsensusGetTopicInfo(super::ConsensusGetTopicInfoResponse),
        #[prost(message, tag = "151")]
        NetworkGetVersionInfo(super::NetworkGetVersionInfoResponse),
        #[prost(message, tag = "152")]
        TokenGetInfo(super::TokenGetInfoResponse),
        #[prost(message, tag = "153")]
        ScheduleGetInfo(super::ScheduleGetInfoResponse),
        #[prost(message, tag = "155")]
        TokenGetNftInfo(super::TokenGetNftInfoResponse),
    }
}

// ---------------------------------------------------------------------------
// response_code.proto
// ---------------------------------------------------------------------------

/// The status of a transaction or query, as reported by a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResponseCodeEnum {
    Ok = 0,
    InvalidTransaction = 1,
    PayerAccountNotFound = 2,
    InvalidNodeAccount = 3,
    TransactionExpired = 4,
    InvalidTransactionStart = 5,
    InvalidTransactionDuration = 6,
    InvalidSignature = 7,
    MemoTooLong = 8,
    InsufficientTxFee = 9,
    InsufficientPayerBalance = 10,
    DuplicateTransaction = 11,
    Busy = 12,
    NotSupported = 13,
    InvalidFileId = 14,
    InvalidAccountId = 15,
    InvalidContractId = 16,
    InvalidTransactionId = 17,
    ReceiptNotFound = 18,
    RecordNotFound = 19,
    InvalidSolidityId = 20,
    Unknown = 21,
    Success = 22,
    FailInvalid = 23,
    FailFee = 24,
    FailBalance = 25,
    KeyRequired = 26,
    BadEncoding = 27,
    InsufficientAccountBalance = 28,
    InvalidSolidityAddress = 29,
    InsufficientGas = 30,
    ContractSizeLimitExceeded = 31,
    LocalCallModificationException = 32,
    ContractRevertExecuted = 33,
    ContractExecutionException = 34,
    InvalidReceivingNodeAccount = 35,
    MissingQueryHeader = 36,
    AccountUpdateFailed = 37,
    InvalidKeyEncoding = 38,
    NullSolidityAddress = 39,
    ContractUpdateFailed = 40,
    InvalidQueryHeader = 41,
    InvalidFeeSubmitted = 42,
    InvalidPayerSignature = 43,
    KeyNotProvided = 44,
    InvalidExpirationTime = 45,
    NoWaclKey = 46,
    FileContentEmpty = 47,
    InvalidAccountAmounts = 48,
    EmptyTransactionBody = 49,
    InvalidTransactionBody = 50,
    InvalidSignatureTypeMismatchingKey = 51,
    InvalidSignatureCountMismatchingKey = 52,
    EmptyLiveHashBody = 53,
    EmptyLiveHash = 54,
    EmptyLiveHashKeys = 55,
    InvalidLiveHashSize = 56,
    EmptyQueryBody = 57,
    EmptyLiveHashQuery = 58,
    LiveHashNotFound = 59,
    AccountIdDoesNotExist = 60,
    LiveHashAlreadyExists = 61,
    InvalidFileWacl = 62,
    SerializationFailed = 63,
    TransactionOversize = 64,
    TransactionTooManyLayers = 65,
    ContractDeleted = 66,
    PlatformNotActive = 67,
    KeyPrefixMismatch = 68,
    PlatformTransactionNotCreated = 69,
    InvalidRenewalPeriod = 70,
    InvalidPayerAccountId = 71,
    AccountDeleted = 72,
    FileDeleted = 73,
    AccountRepeatedInAccountAmounts = 74,
    SettingNegativeAccountBalance = 75,
    ObtainerRequired = 76,
    ObtainerSameContractId = 77,
    ObtainerDoesNotExist = 78,
    ModifyingImmutableContract = 79,
    FileSystemException = 80,
    AutorenewDurationNotInRange = 81,
    ErrorDecodingBytestring = 82,
    ContractFileEmpty = 83,
    ContractBytecodeEmpty = 84,
    InvalidInitialBalance = 85,
    AccountIsNotGenesisAccount = 88,
    PayerAccountUnauthorized = 89,
    InvalidFreezeTransactionBody = 90,
    FreezeTransactionBodyNotFound = 91,
    TransferListSizeLimitExceeded = 92,
    ResultSizeLimitExceeded = 93,
    NotSpecialAccount = 94,
    ContractNegativeGas = 95,
    ContractNegativeValue = 96,
    InvalidFeeFile = 97,
    InvalidExchangeRateFile = 98,
    InsufficientLocalCallGas = 99,
    EntityNotAllowedToDelete = 100,
    InvalidTopicId = 150,
    InvalidTokenId = 167,
    InvalidScheduleId = 201,
}
impl ResponseCodeEnum {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidTransaction => "INVALID_TRANSACTION",
            Self::PayerAccountNotFound => "PAYER_ACCOUNT_NOT_FOUND",
            Self::InvalidNodeAccount => "INVALID_NODE_ACCOUNT",
            Self::TransactionExpired => "TRANSACTION_EXPIRED",
            Self::InvalidTransactionStart => "INVALID_TRANSACTION_START",
            Self::InvalidTransactionDuration => "INVALID_TRANSACTION_DURATION",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::MemoTooLong => "MEMO_TOO_LONG",
            Self::InsufficientTxFee => "INSUFFICIENT_TX_FEE",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Self::DuplicateTransaction => "DUPLICATE_TRANSACTION",
            Self::Busy => "BUSY",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::InvalidFileId => "INVALID_FILE_ID",
            Self::InvalidAccountId => "INVALID_ACCOUNT_ID",
            Self::InvalidContractId => "INVALID_CONTRACT_ID",
            Self::InvalidTransactionId => "INVALID_TRANSACTION_ID",
            Self::ReceiptNotFound => "RECEIPT_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::InvalidSolidityId => "INVALID_SOLIDITY_ID",
            Self::Unknown => "UNKNOWN",
            Self::Success => "SUCCESS",
            Self::FailInvalid => "FAIL_INVALID",
            Self::FailFee => "FAIL_FEE",
            Self::FailBalance => "FAIL_BALANCE",
            Self::KeyRequired => "KEY_REQUIRED",
            Self::BadEncoding => "BAD_ENCODING",
            Self::InsufficientAccountBalance => "INSUFFICIENT_ACCOUNT_BALANCE",
            Self::InvalidSolidityAddress => "INVALID_SOLIDITY_ADDRESS",
            Self::InsufficientGas => "INSUFFICIENT_GAS",
            Self::ContractSizeLimitExceeded => "CONTRACT_SIZE_LIMIT_EXCEEDED",
            Self::LocalCallModificationException => "LOCAL_CALL_MODIFICATION_EXCEPTION",
            Self::ContractRevertExecuted => "CONTRACT_REVERT_EXECUTED",
            Self::ContractExecutionException => "CONTRACT_EXECUTION_EXCEPTION",
            Self::InvalidReceivingNodeAccount => "INVALID_RECEIVING_NODE_ACCOUNT",
            Self::MissingQueryHeader => "MISSING_QUERY_HEADER",
            Self::AccountUpdateFailed => "ACCOUNT_UPDATE_FAILED",
            Self::InvalidKeyEncoding => "INVALID_KEY_ENCODING",
            Self::NullSolidityAddress => "NULL_SOLIDITY_ADDRESS",
            Self::ContractUpdateFailed => "CONTRACT_UPDATE_FAILED",
            Self::InvalidQueryHeader => "INVALID_QUERY_HEADER",
            Self::InvalidFeeSubmitted => "INVALID_FEE_SUBMITTED",
            Self::InvalidPayerSignature => "INVALID_PAYER_SIGNATURE",
            Self::KeyNotProvided => "KEY_NOT_PROVIDED",
            Self::InvalidExpirationTime => "INVALID_EXPIRATION_TIME",
            Self::NoWaclKey => "NO_WACL_KEY",
            Self::FileContentEmpty => "FILE_CONTENT_EMPTY",
            Self::InvalidAccountAmounts => "INVALID_ACCOUNT_AMOUNTS",
            Self::EmptyTransactionBody => "EMPTY_TRANSACTION_BODY",
            Self::InvalidTransactionBody => "INVALID_TRANSACTION_BODY",
            Self::InvalidSignatureTypeMismatchingKey => "INVALID_SIGNATURE_TYPE_MISMATCHING_KEY",
            Self::InvalidSignatureCountMismatchingKey => "INVALID_SIGNATURE_COUNT_MISMATCHING_KEY",
            Self::EmptyLiveHashBody => "EMPTY_LIVE_HASH_BODY",
            Self::EmptyLiveHash => "EMPTY_LIVE_HASH",
            Self::EmptyLiveHashKeys => "EMPTY_LIVE_HASH_KEYS",
            Self::InvalidLiveHashSize => "INVALID_LIVE_HASH_SIZE",
            Self::EmptyQueryBody => "EMPTY_QUERY_BODY",
            Self::EmptyLiveHashQuery => "EMPTY_LIVE_HASH_QUERY",
            Self::LiveHashNotFound => "LIVE_HASH_NOT_FOUND",
            Self::AccountIdDoesNotExist => "ACCOUNT_ID_DOES_NOT_EXIST",
            Self::LiveHashAlreadyExists => "LIVE_HASH_ALREADY_EXISTS",
            Self::InvalidFileWacl => "INVALID_FILE_WACL",
            Self::SerializationFailed => "SERIALIZATION_FAILED",
            Self::TransactionOversize => "TRANSACTION_OVERSIZE",
            Self::TransactionTooManyLayers => "TRANSACTION_TOO_MANY_LAYERS",
            Self::ContractDeleted => "CONTRACT_DELETED",
            Self::PlatformNotActive => "PLATFORM_NOT_ACTIVE",
            Self::KeyPrefixMismatch => "KEY_PREFIX_MISMATCH",
            Self::PlatformTransactionNotCreated => "PLATFORM_TRANSACTION_NOT_CREATED",
            Self::InvalidRenewalPeriod => "INVALID_RENEWAL_PERIOD",
            Self::InvalidPayerAccountId => "INVALID_PAYER_ACCOUNT_ID",
            Self::AccountDeleted => "ACCOUNT_DELETED",
            Self::FileDeleted => "FILE_DELETED",
            Self::AccountRepeatedInAccountAmounts => "ACCOUNT_REPEATED_IN_ACCOUNT_AMOUNTS",
            Self::SettingNegativeAccountBalance => "SETTING_NEGATIVE_ACCOUNT_BALANCE",
            Self::ObtainerRequired => "OBTAINER_REQUIRED",
            Self::ObtainerSameContractId => "OBTAINER_SAME_CONTRACT_ID",
            Self::ObtainerDoesNotExist => "OBTAINER_DOES_NOT_EXIST",
            Self::ModifyingImmutableContract => "MODIFYING_IMMUTABLE_CONTRACT",
            Self::FileSystemException => "FILE_SYSTEM_EXCEPTION",
            Self::AutorenewDurationNotInRange => "AUTORENEW_DURATION_NOT_IN_RANGE",
            Self::ErrorDecodingBytestring => "ERROR_DECODING_BYTESTRING",
            Self::ContractFileEmpty => "CONTRACT_FILE_EMPTY",
            Self::ContractBytecodeEmpty => "CONTRACT_BYTECODE_EMPTY",
            Self::InvalidInitialBalance => "INVALID_INITIAL_BALANCE",
            Self::AccountIsNotGenesisAccount => "ACCOUNT_IS_NOT_GENESIS_ACCOUNT",
            Self::PayerAccountUnauthorized => "PAYER_ACCOUNT_UNAUTHORIZED",
            Self::InvalidFreezeTransactionBody => "INVALID_FREEZE_TRANSACTION_BODY",
            Self::FreezeTransactionBodyNotFound => "FREEZE_TRANSACTION_BODY_NOT_FOUND",
            Self::TransferListSizeLimitExceeded => "TRANSFER_LIST_SIZE_LIMIT_EXCEEDED",
            Self::ResultSizeLimitExceeded => "RESULT_SIZE_LIMIT_EXCEEDED",
            Self::NotSpecialAccount => "NOT_SPECIAL_ACCOUNT",
            Self::ContractNegativeGas => "CONTRACT_NEGATIVE_GAS",
            Self::ContractNegativeValue => "CONTRACT_NEGATIVE_VALUE",
            Self::InvalidFeeFile => "INVALID_FEE_FILE",
            Self::InvalidExchangeRateFile => "INVALID_EXCHANGE_RATE_FILE",
            Self::InsufficientLocalCallGas => "INSUFFICIENT_LOCAL_CALL_GAS",
            Self::EntityNotAllowedToDelete => "ENTITY_NOT_ALLOWED_TO_DELETE",
            Self::InvalidTopicId => "INVALID_TOPIC_ID",
            Self::InvalidTokenId => "INVALID_TOKEN_ID",
            Self::InvalidScheduleId => "INVALID_SCHEDULE_ID",
        }
    }
}
