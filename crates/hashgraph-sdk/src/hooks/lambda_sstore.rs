use hashgraph_proto::services;

use super::{HookId, LambdaStorageUpdate};
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result};

/// Write to the storage of a lambda hook without calling it.
pub type LambdaSStoreTransaction = Transaction<LambdaSStoreTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LambdaSStoreTransactionData {
    hook_id: Option<HookId>,
    storage_updates: Vec<LambdaStorageUpdate>,
}

impl LambdaSStoreTransaction {
    pub fn get_hook_id(&self) -> Option<&HookId> {
        self.data().hook_id.as_ref()
    }

    pub fn hook_id(&mut self, id: HookId) -> Result<&mut Self> {
        self.data_mut()?.hook_id = Some(id);
        Ok(self)
    }

    pub fn get_storage_updates(&self) -> &[LambdaStorageUpdate] {
        &self.data().storage_updates
    }

    pub fn storage_updates(
        &mut self,
        updates: impl IntoIterator<Item = LambdaStorageUpdate>,
    ) -> Result<&mut Self> {
        self.data_mut()?.storage_updates = updates.into_iter().collect();
        Ok(self)
    }

    pub fn add_storage_update(&mut self, update: LambdaStorageUpdate) -> Result<&mut Self> {
        self.data_mut()?.storage_updates.push(update);
        Ok(self)
    }
}

impl TransactionData for LambdaSStoreTransactionData {}

impl ValidateChecksums for LambdaSStoreTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.hook_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::LambdaSStoreTransactionBody> for LambdaSStoreTransactionData {
    fn from_protobuf(pb: services::LambdaSStoreTransactionBody) -> Result<Self> {
        Ok(Self {
            hook_id: Option::from_protobuf(pb.hook_id)?,
            storage_updates: Vec::from_protobuf(pb.storage_updates)?,
        })
    }
}

impl ToProtobuf for LambdaSStoreTransactionData {
    type Protobuf = services::LambdaSStoreTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::LambdaSStoreTransactionBody {
            hook_id: self.hook_id.as_ref().map(HookId::to_protobuf),
            storage_updates: self.storage_updates.to_protobuf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::hooks::{HookEntityId, LambdaStorageSlot};
    use crate::{AccountId, AnyTransaction, Error, TransactionId};

    #[test]
    fn test_survives_bytes() {
        let mut tx = LambdaSStoreTransaction::new();
        tx.hook_id(HookId::new(HookEntityId::AccountId(AccountId::new(0, 0, 1001)), 1))
            .unwrap()
            .add_storage_update(LambdaStorageUpdate::StorageSlot(LambdaStorageSlot {
                key: vec![1],
                value: vec![2],
            }))
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(TransactionId::new(
                AccountId::new(0, 0, 1001),
                DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            ))
            .unwrap()
            .freeze()
            .unwrap();

        let decoded = AnyTransaction::from_bytes(&tx.to_bytes().unwrap()).unwrap();
        let decoded = decoded.downcast::<LambdaSStoreTransactionData>().unwrap();
        assert_eq!(decoded.get_hook_id(), tx.get_hook_id());
        assert_eq!(decoded.get_storage_updates(), tx.get_storage_updates());
    }

    #[test]
    fn test_freeze_needs_nodes() {
        let mut tx = LambdaSStoreTransaction::new();
        assert!(matches!(tx.freeze(), Err(Error::FreezeUnsetNodeAccountIds)));
    }
}
