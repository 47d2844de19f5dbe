use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, ScheduleId};

/// Delete a schedule before it executes. Signed by its admin key.
pub type ScheduleDeleteTransaction = Transaction<ScheduleDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDeleteTransactionData {
    schedule_id: Option<ScheduleId>,
}

impl ScheduleDeleteTransaction {
    pub fn get_schedule_id(&self) -> Option<ScheduleId> {
        self.data().schedule_id
    }

    pub fn schedule_id(&mut self, id: impl Into<ScheduleId>) -> Result<&mut Self> {
        self.data_mut()?.schedule_id = Some(id.into());
        Ok(self)
    }
}

impl TransactionData for ScheduleDeleteTransactionData {}

impl ValidateChecksums for ScheduleDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.schedule_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ScheduleDeleteTransactionBody> for ScheduleDeleteTransactionData {
    fn from_protobuf(pb: services::ScheduleDeleteTransactionBody) -> Result<Self> {
        Ok(Self { schedule_id: Option::from_protobuf(pb.schedule_id)? })
    }
}

impl ToProtobuf for ScheduleDeleteTransactionData {
    type Protobuf = services::ScheduleDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ScheduleDeleteTransactionBody { schedule_id: self.schedule_id.map(|id| id.to_protobuf()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::AnySchedulableTransactionData;

    #[test]
    fn test_delete_is_schedulable() {
        let mut tx = ScheduleDeleteTransaction::new();
        tx.schedule_id(ScheduleId::new(0, 0, 44)).unwrap();
        let expected = tx.data().clone();

        let scheduled = tx.schedule().unwrap();
        assert!(matches!(
            &scheduled.get_scheduled_transaction().unwrap().data,
            AnySchedulableTransactionData::ScheduleDelete(data) if *data == expected
        ));
    }
}
