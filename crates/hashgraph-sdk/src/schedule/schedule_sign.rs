use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, ScheduleId};

/// Add the signatures on this transaction to a schedule.
pub type ScheduleSignTransaction = Transaction<ScheduleSignTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleSignTransactionData {
    schedule_id: Option<ScheduleId>,
}

impl ScheduleSignTransaction {
    pub fn get_schedule_id(&self) -> Option<ScheduleId> {
        self.data().schedule_id
    }

    pub fn schedule_id(&mut self, id: impl Into<ScheduleId>) -> Result<&mut Self> {
        self.data_mut()?.schedule_id = Some(id.into());
        Ok(self)
    }
}

impl TransactionData for ScheduleSignTransactionData {}

impl ValidateChecksums for ScheduleSignTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.schedule_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ScheduleSignTransactionBody> for ScheduleSignTransactionData {
    fn from_protobuf(pb: services::ScheduleSignTransactionBody) -> Result<Self> {
        Ok(Self { schedule_id: Option::from_protobuf(pb.schedule_id)? })
    }
}

impl ToProtobuf for ScheduleSignTransactionData {
    type Protobuf = services::ScheduleSignTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ScheduleSignTransactionBody { schedule_id: self.schedule_id.map(|id| id.to_protobuf()) }
    }
}
