use chrono::{DateTime, Utc};
use hashgraph_proto::services;
use services::schedule_info::Data as ScheduleState;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, AnyTransaction, Key, KeyList, LedgerId, Result, SchedulableTransaction, ScheduleId, TransactionId};

/// Current state of a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleInfo {
    pub schedule_id: ScheduleId,
    pub creator_account_id: AccountId,
    pub payer_account_id: Option<AccountId>,
    pub scheduled_transaction: SchedulableTransaction,
    /// Keys that have signed so far.
    pub signatories: KeyList,
    pub admin_key: Option<Key>,
    pub scheduled_transaction_id: TransactionId,
    pub schedule_memo: String,
    pub expiration_time: Option<DateTime<Utc>>,
    /// At most one of `executed_at` and `deleted_at` is set.
    pub executed_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub ledger_id: LedgerId,
    pub wait_for_expiry: bool,
}

impl ScheduleInfo {
    /// The scheduled body as a transaction that can be inspected or re-scheduled.
    pub fn scheduled_transaction(&self) -> Result<AnyTransaction> {
        self.scheduled_transaction.to_transaction()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::ScheduleInfo>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::ScheduleInfo> for ScheduleInfo {
    fn from_protobuf(pb: services::ScheduleInfo) -> Result<Self> {
        let (executed_at, deleted_at) = match pb.data {
            Some(ScheduleState::ExecutionTime(at)) => (Some(DateTime::from_protobuf(at)?), None),
            Some(ScheduleState::DeletionTime(at)) => (None, Some(DateTime::from_protobuf(at)?)),
            None => (None, None),
        };

        Ok(Self {
            schedule_id: ScheduleId::from_protobuf(required(pb.schedule_id, "schedule_id")?)?,
            creator_account_id: AccountId::from_protobuf(required(pb.creator_account_id, "creator_account_id")?)?,
            payer_account_id: Option::from_protobuf(pb.payer_account_id)?,
            scheduled_transaction: SchedulableTransaction::from_protobuf(required(
                pb.scheduled_transaction_body,
                "scheduled_transaction_body",
            )?)?,
            signatories: Option::from_protobuf(pb.signers)?.unwrap_or_default(),
            admin_key: Option::from_protobuf(pb.admin_key)?,
            scheduled_transaction_id: TransactionId::from_protobuf(required(
                pb.scheduled_transaction_id,
                "scheduled_transaction_id",
            )?)?,
            schedule_memo: pb.memo,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            executed_at,
            deleted_at,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
            wait_for_expiry: pb.wait_for_expiry,
        })
    }
}

impl ToProtobuf for ScheduleInfo {
    type Protobuf = services::ScheduleInfo;

    fn to_protobuf(&self) -> Self::Protobuf {
        let data = match (self.executed_at, self.deleted_at) {
            (Some(at), _) => Some(ScheduleState::ExecutionTime(at.to_protobuf())),
            (None, Some(at)) => Some(ScheduleState::DeletionTime(at.to_protobuf())),
            (None, None) => None,
        };

        services::ScheduleInfo {
            schedule_id: Some(self.schedule_id.to_protobuf()),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            scheduled_transaction_body: Some(self.scheduled_transaction.to_protobuf()),
            memo: self.schedule_memo.clone(),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            signers: Some(self.signatories.to_protobuf()),
            creator_account_id: Some(self.creator_account_id.to_protobuf()),
            payer_account_id: self.payer_account_id.as_ref().map(AccountId::to_protobuf),
            scheduled_transaction_id: Some(self.scheduled_transaction_id.to_protobuf()),
            ledger_id: self.ledger_id.to_bytes(),
            wait_for_expiry: self.wait_for_expiry,
            data,
        }
    }
}
