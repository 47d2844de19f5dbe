//! # Any Transaction
//!
//! Sum types over every transaction kind, used to decode bytes whose kind is
//! not known up front and to carry scheduled bodies.

use std::time::Duration;

use hashgraph_proto::{sdk, services};
use prost::Message;
use tracing::debug;

use super::chunked::ChunkInfo;
use super::sources::TransactionSources;
use super::{
    ChunkData, ToSchedulableTransactionDataProtobuf, ToTransactionDataProtobuf, Transaction,
    TransactionBody, TransactionData,
};
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{Error, Hbar, Key, LedgerId, Result};

/// A transaction whose kind is only known at run time.
pub type AnyTransaction = Transaction<AnyTransactionData>;

macro_rules! any_transaction_data {
    (
        schedulable: [$($s_name:ident($s_ty:ty) = $s_pb:ident,)*]
        chunked: [$($c_name:ident($c_ty:ty) = $c_pb:ident,)*]
        unschedulable: [$($u_name:ident($u_ty:ty) = $u_pb:ident,)*]
    ) => {
        /// Data of any transaction kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnyTransactionData {
            $($s_name($s_ty),)*
            $($c_name($c_ty),)*
            $($u_name($u_ty),)*
        }

        /// Data of any kind that may be wrapped in a schedule.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnySchedulableTransactionData {
            $($s_name($s_ty),)*
            $($c_name($c_ty),)*
        }

        impl AnyTransactionData {
            /// Name of the kind, e.g. `"Transfer"`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$s_name(_) => stringify!($s_name),)*
                    $(Self::$c_name(_) => stringify!($c_name),)*
                    $(Self::$u_name(_) => stringify!($u_name),)*
                }
            }
        }

        impl TransactionData for AnyTransactionData {
            fn default_max_transaction_fee(&self) -> Hbar {
                match self {
                    $(Self::$s_name(data) => data.default_max_transaction_fee(),)*
                    $(Self::$c_name(data) => data.default_max_transaction_fee(),)*
                    $(Self::$u_name(data) => data.default_max_transaction_fee(),)*
                }
            }

            fn chunk_data(&self) -> Option<&ChunkData> {
                match self {
                    $(Self::$c_name(data) => data.chunk_data(),)*
                    _ => None,
                }
            }
        }

        impl ValidateChecksums for AnyTransactionData {
            fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
                match self {
                    $(Self::$s_name(data) => data.validate_checksums(ledger_id),)*
                    $(Self::$c_name(data) => data.validate_checksums(ledger_id),)*
                    $(Self::$u_name(data) => data.validate_checksums(ledger_id),)*
                }
            }
        }

        impl ToTransactionDataProtobuf for AnyTransactionData {
            fn to_transaction_data_protobuf(
                &self,
                chunk_info: &ChunkInfo,
            ) -> services::transaction_body::Data {
                match self {
                    $(Self::$s_name(data) => data.to_transaction_data_protobuf(chunk_info),)*
                    $(Self::$c_name(data) => data.to_transaction_data_protobuf(chunk_info),)*
                    $(Self::$u_name(data) => data.to_transaction_data_protobuf(chunk_info),)*
                }
            }
        }

        impl FromProtobuf<services::transaction_body::Data> for AnyTransactionData {
            fn from_protobuf(pb: services::transaction_body::Data) -> Result<Self> {
                Self::from_protobuf_chunks(vec![pb])
            }

            fn from_protobuf_chunks(chunks: Vec<services::transaction_body::Data>) -> Result<Self> {
                use services::transaction_body::Data;

                let first = chunks
                    .first()
                    .ok_or_else(|| Error::from_protobuf("transaction has no body"))?;

                match first {
                    $(Data::$s_pb(_) => {
                        let bodies = chunks.into_iter().map(|data| match data {
                            Data::$s_pb(body) => Ok(body),
                            _ => Err(mismatched_chunks()),
                        }).collect::<Result<Vec<_>>>()?;
                        Ok(Self::$s_name(<$s_ty>::from_protobuf_chunks(bodies)?))
                    })*
                    $(Data::$c_pb(_) => {
                        let bodies = chunks.into_iter().map(|data| match data {
                            Data::$c_pb(body) => Ok(body),
                            _ => Err(mismatched_chunks()),
                        }).collect::<Result<Vec<_>>>()?;
                        Ok(Self::$c_name(<$c_ty>::from_protobuf_chunks(bodies)?))
                    })*
                    $(Data::$u_pb(_) => {
                        let bodies = chunks.into_iter().map(|data| match data {
                            Data::$u_pb(body) => Ok(body),
                            _ => Err(mismatched_chunks()),
                        }).collect::<Result<Vec<_>>>()?;
                        Ok(Self::$u_name(<$u_ty>::from_protobuf_chunks(bodies)?))
                    })*
                }
            }
        }

        impl ToSchedulableTransactionDataProtobuf for AnySchedulableTransactionData {
            fn to_schedulable_transaction_data_protobuf(
                &self,
            ) -> services::schedulable_transaction_body::Data {
                match self {
                    $(Self::$s_name(data) => data.to_schedulable_transaction_data_protobuf(),)*
                    $(Self::$c_name(data) => data.to_schedulable_transaction_data_protobuf(),)*
                }
            }
        }

        impl ValidateChecksums for AnySchedulableTransactionData {
            fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
                match self {
                    $(Self::$s_name(data) => data.validate_checksums(ledger_id),)*
                    $(Self::$c_name(data) => data.validate_checksums(ledger_id),)*
                }
            }
        }

        impl FromProtobuf<services::schedulable_transaction_body::Data> for AnySchedulableTransactionData {
            fn from_protobuf(pb: services::schedulable_transaction_body::Data) -> Result<Self> {
                use services::schedulable_transaction_body::Data;

                match pb {
                    $(Data::$s_pb(body) => Ok(Self::$s_name(<$s_ty>::from_protobuf(body)?)),)*
                    $(Data::$c_pb(body) => Ok(Self::$c_name(<$c_ty>::from_protobuf(body)?)),)*
                }
            }
        }

        impl From<AnySchedulableTransactionData> for AnyTransactionData {
            fn from(data: AnySchedulableTransactionData) -> Self {
                match data {
                    $(AnySchedulableTransactionData::$s_name(data) => Self::$s_name(data),)*
                    $(AnySchedulableTransactionData::$c_name(data) => Self::$c_name(data),)*
                }
            }
        }

        $(
            impl ToTransactionDataProtobuf for $s_ty {
                fn to_transaction_data_protobuf(
                    &self,
                    _chunk_info: &ChunkInfo,
                ) -> services::transaction_body::Data {
                    services::transaction_body::Data::$s_pb(self.to_protobuf())
                }
            }

            impl ToSchedulableTransactionDataProtobuf for $s_ty {
                fn to_schedulable_transaction_data_protobuf(
                    &self,
                ) -> services::schedulable_transaction_body::Data {
                    services::schedulable_transaction_body::Data::$s_pb(self.to_protobuf())
                }
            }

            impl From<$s_ty> for AnyTransactionData {
                fn from(data: $s_ty) -> Self {
                    Self::$s_name(data)
                }
            }

            impl From<$s_ty> for AnySchedulableTransactionData {
                fn from(data: $s_ty) -> Self {
                    Self::$s_name(data)
                }
            }

            impl TryFrom<AnyTransactionData> for $s_ty {
                type Error = AnyTransactionData;

                fn try_from(data: AnyTransactionData) -> std::result::Result<Self, Self::Error> {
                    match data {
                        AnyTransactionData::$s_name(data) => Ok(data),
                        other => Err(other),
                    }
                }
            }

            impl FromAnyTransactionData for $s_ty {
                fn from_any_transaction_data(
                    data: AnyTransactionData,
                ) -> std::result::Result<Self, AnyTransactionData> {
                    Self::try_from(data)
                }
            }
        )*

        $(
            impl ToSchedulableTransactionDataProtobuf for $c_ty {
                fn to_schedulable_transaction_data_protobuf(
                    &self,
                ) -> services::schedulable_transaction_body::Data {
                    services::schedulable_transaction_body::Data::$c_pb(self.to_protobuf())
                }
            }

            impl From<$c_ty> for AnyTransactionData {
                fn from(data: $c_ty) -> Self {
                    Self::$c_name(data)
                }
            }

            impl From<$c_ty> for AnySchedulableTransactionData {
                fn from(data: $c_ty) -> Self {
                    Self::$c_name(data)
                }
            }

            impl TryFrom<AnyTransactionData> for $c_ty {
                type Error = AnyTransactionData;

                fn try_from(data: AnyTransactionData) -> std::result::Result<Self, Self::Error> {
                    match data {
                        AnyTransactionData::$c_name(data) => Ok(data),
                        other => Err(other),
                    }
                }
            }

            impl FromAnyTransactionData for $c_ty {
                fn from_any_transaction_data(
                    data: AnyTransactionData,
                ) -> std::result::Result<Self, AnyTransactionData> {
                    Self::try_from(data)
                }
            }
        )*

        $(
            impl ToTransactionDataProtobuf for $u_ty {
                fn to_transaction_data_protobuf(
                    &self,
                    _chunk_info: &ChunkInfo,
                ) -> services::transaction_body::Data {
                    services::transaction_body::Data::$u_pb(self.to_protobuf())
                }
            }

            impl From<$u_ty> for AnyTransactionData {
                fn from(data: $u_ty) -> Self {
                    Self::$u_name(data)
                }
            }

            impl TryFrom<AnyTransactionData> for $u_ty {
                type Error = AnyTransactionData;

                fn try_from(data: AnyTransactionData) -> std::result::Result<Self, Self::Error> {
                    match data {
                        AnyTransactionData::$u_name(data) => Ok(data),
                        other => Err(other),
                    }
                }
            }

            impl FromAnyTransactionData for $u_ty {
                fn from_any_transaction_data(
                    data: AnyTransactionData,
                ) -> std::result::Result<Self, AnyTransactionData> {
                    Self::try_from(data)
                }
            }
        )*
    };
}

any_transaction_data! {
    schedulable: [
        AccountCreate(crate::AccountCreateTransactionData) = CryptoCreateAccount,
        AccountUpdate(crate::AccountUpdateTransactionData) = CryptoUpdateAccount,
        AccountDelete(crate::AccountDeleteTransactionData) = CryptoDelete,
        AccountAllowanceApprove(crate::AccountAllowanceApproveTransactionData) = CryptoApproveAllowance,
        AccountAllowanceDelete(crate::AccountAllowanceDeleteTransactionData) = CryptoDeleteAllowance,
        Transfer(crate::TransferTransactionData) = CryptoTransfer,
        TokenCreate(crate::TokenCreateTransactionData) = TokenCreation,
        TokenUpdate(crate::TokenUpdateTransactionData) = TokenUpdate,
        TokenDelete(crate::TokenDeleteTransactionData) = TokenDeletion,
        TokenAssociate(crate::TokenAssociateTransactionData) = TokenAssociate,
        TokenDissociate(crate::TokenDissociateTransactionData) = TokenDissociate,
        TokenMint(crate::TokenMintTransactionData) = TokenMint,
        TokenBurn(crate::TokenBurnTransactionData) = TokenBurn,
        TokenWipe(crate::TokenWipeTransactionData) = TokenWipe,
        TokenFreeze(crate::TokenFreezeTransactionData) = TokenFreeze,
        TokenUnfreeze(crate::TokenUnfreezeTransactionData) = TokenUnfreeze,
        TokenGrantKyc(crate::TokenGrantKycTransactionData) = TokenGrantKyc,
        TokenRevokeKyc(crate::TokenRevokeKycTransactionData) = TokenRevokeKyc,
        TokenPause(crate::TokenPauseTransactionData) = TokenPause,
        TokenUnpause(crate::TokenUnpauseTransactionData) = TokenUnpause,
        TokenFeeScheduleUpdate(crate::TokenFeeScheduleUpdateTransactionData) = TokenFeeScheduleUpdate,
        TokenUpdateNfts(crate::TokenUpdateNftsTransactionData) = TokenUpdateNfts,
        TokenAirdrop(crate::TokenAirdropTransactionData) = TokenAirdrop,
        TokenClaimAirdrop(crate::TokenClaimAirdropTransactionData) = TokenClaimAirdrop,
        TokenCancelAirdrop(crate::TokenCancelAirdropTransactionData) = TokenCancelAirdrop,
        TokenReject(crate::TokenRejectTransactionData) = TokenReject,
        TopicCreate(crate::TopicCreateTransactionData) = ConsensusCreateTopic,
        TopicUpdate(crate::TopicUpdateTransactionData) = ConsensusUpdateTopic,
        TopicDelete(crate::TopicDeleteTransactionData) = ConsensusDeleteTopic,
        FileCreate(crate::FileCreateTransactionData) = FileCreate,
        FileUpdate(crate::FileUpdateTransactionData) = FileUpdate,
        FileDelete(crate::FileDeleteTransactionData) = FileDelete,
        ContractCreate(crate::ContractCreateTransactionData) = ContractCreateInstance,
        ContractUpdate(crate::ContractUpdateTransactionData) = ContractUpdateInstance,
        ContractDelete(crate::ContractDeleteTransactionData) = ContractDeleteInstance,
        ContractExecute(crate::ContractExecuteTransactionData) = ContractCall,
        ScheduleDelete(crate::ScheduleDeleteTransactionData) = ScheduleDelete,
        Freeze(crate::FreezeTransactionData) = Freeze,
        SystemDelete(crate::SystemDeleteTransactionData) = SystemDelete,
        SystemUndelete(crate::SystemUndeleteTransactionData) = SystemUndelete,
        Prng(crate::PrngTransactionData) = UtilPrng,
        NodeCreate(crate::NodeCreateTransactionData) = NodeCreate,
        NodeUpdate(crate::NodeUpdateTransactionData) = NodeUpdate,
        NodeDelete(crate::NodeDeleteTransactionData) = NodeDelete,
    ]
    chunked: [
        TopicMessageSubmit(crate::TopicMessageSubmitTransactionData) = ConsensusSubmitMessage,
        FileAppend(crate::FileAppendTransactionData) = FileAppend,
    ]
    unschedulable: [
        Ethereum(crate::EthereumTransactionData) = EthereumTransaction,
        ScheduleCreate(crate::ScheduleCreateTransactionData) = ScheduleCreate,
        ScheduleSign(crate::ScheduleSignTransactionData) = ScheduleSign,
        Batch(crate::BatchTransactionData) = AtomicBatch,
        LambdaSStore(crate::LambdaSStoreTransactionData) = LambdaSstore,
    ]
}

fn mismatched_chunks() -> Error {
    Error::from_protobuf("transaction chunks carry different transaction kinds")
}

impl<D: TransactionData> Transaction<D> {
    /// Erase the kind, keeping every field and signature.
    pub fn into_any(self) -> AnyTransaction {
        let (body, sources) = self.into_parts();
        let (body, data) = body.replace_data(());
        Transaction::from_parts(body.replace_data(data.into()).0, sources)
    }
}

/// Kinds recoverable from [`AnyTransactionData`]; every kind and the sum type itself.
pub trait FromAnyTransactionData: Sized {
    /// Returns the data unchanged when it is of another kind.
    fn from_any_transaction_data(data: AnyTransactionData) -> std::result::Result<Self, AnyTransactionData>;
}

impl FromAnyTransactionData for AnyTransactionData {
    fn from_any_transaction_data(data: AnyTransactionData) -> std::result::Result<Self, AnyTransactionData> {
        Ok(data)
    }
}

impl AnyTransaction {
    /// Decode a `TransactionList`, or a single `Transaction`.
    fn decode_any(bytes: &[u8]) -> Result<Self> {
        let list = sdk::TransactionList::decode(bytes)?;

        let transactions = if list.transaction_list.is_empty() {
            vec![services::Transaction::decode(bytes)?]
        } else {
            list.transaction_list
        };

        Self::from_transactions(transactions)
    }

    pub(crate) fn from_transactions(transactions: Vec<services::Transaction>) -> Result<Self> {
        let (sources, bodies) = TransactionSources::from_transactions(transactions)?;

        let nodes = sources.node_account_ids().len().max(1);
        let chunk_data = bodies
            .iter()
            .step_by(nodes)
            .map(|body| required(body.data.clone(), "data"))
            .collect::<Result<Vec<_>>>()?;

        let data = AnyTransactionData::from_protobuf_chunks(chunk_data)?;

        let first = bodies
            .into_iter()
            .next()
            .ok_or_else(|| Error::from_protobuf("transaction list is empty"))?;

        let body = TransactionBody {
            data,
            node_account_ids: Some(sources.node_account_ids().to_vec()),
            transaction_id: sources.transaction_ids().first().cloned(),
            max_transaction_fee: Some(Hbar::from_tinybars(first.transaction_fee as i64)),
            transaction_valid_duration: Option::<Duration>::from_protobuf(
                first.transaction_valid_duration,
            )?,
            transaction_memo: first.memo,
            custom_fee_limits: Vec::from_protobuf(first.max_custom_fees)?,
            batch_key: Option::<Key>::from_protobuf(first.batch_key)?,
        };

        debug!(
            kind = body.data.kind(),
            nodes = sources.node_account_ids().len(),
            chunks = sources.chunks_len(),
            "transaction decoded from bytes"
        );

        Ok(Self::from_parts(body, Some(sources)))
    }

    /// Recover the concrete kind; returns `self` unchanged on a mismatch.
    pub fn downcast<D>(self) -> std::result::Result<Transaction<D>, Self>
    where
        D: TryFrom<AnyTransactionData, Error = AnyTransactionData>,
    {
        let (body, sources) = self.into_parts();
        let (body, data) = body.replace_data(());

        match D::try_from(data) {
            Ok(data) => Ok(Transaction::from_parts(body.replace_data(data).0, sources)),
            Err(data) => Err(Transaction::from_parts(body.replace_data(data).0, sources)),
        }
    }
}

impl<D> Transaction<D>
where
    D: TransactionData + FromAnyTransactionData,
{
    /// Decode bytes produced by [`Transaction::to_bytes`] as kind `D`.
    ///
    /// Accepts a `TransactionList` or a single `Transaction`; signatures are kept.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (body, sources) = AnyTransaction::decode_any(bytes)?.into_parts();
        let (body, data) = body.replace_data(());
        let kind = data.kind();

        let data = D::from_any_transaction_data(data).map_err(|_| {
            Error::from_protobuf(format!(
                "expected {} transaction bytes, got {kind}",
                std::any::type_name::<D>()
            ))
        })?;

        Ok(Transaction::from_parts(body.replace_data(data).0, sources))
    }
}

impl ToProtobuf for AnySchedulableTransactionData {
    type Protobuf = services::schedulable_transaction_body::Data;

    fn to_protobuf(&self) -> Self::Protobuf {
        self.to_schedulable_transaction_data_protobuf()
    }
}
