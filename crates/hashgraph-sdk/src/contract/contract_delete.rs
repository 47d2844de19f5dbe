use hashgraph_proto::services;
use services::contract_delete_transaction_body::Obtainers;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, ContractId, LedgerId, Result};

/// Delete a contract, sending its remaining hbar to an account or another contract.
pub type ContractDeleteTransaction = Transaction<ContractDeleteTransactionData>;

/// Receiver of a deleted contract's balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferTarget {
    Account(AccountId),
    Contract(ContractId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractDeleteTransactionData {
    contract_id: Option<ContractId>,
    transfer_target: Option<TransferTarget>,
    permanent_removal: bool,
}

impl ContractDeleteTransaction {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> Result<&mut Self> {
        self.data_mut()?.contract_id = Some(id);
        Ok(self)
    }

    pub fn get_transfer_account_id(&self) -> Option<&AccountId> {
        match &self.data().transfer_target {
            Some(TransferTarget::Account(id)) => Some(id),
            _ => None,
        }
    }

    /// Replaces any transfer contract.
    pub fn transfer_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.transfer_target = Some(TransferTarget::Account(id));
        Ok(self)
    }

    pub fn get_transfer_contract_id(&self) -> Option<ContractId> {
        match &self.data().transfer_target {
            Some(TransferTarget::Contract(id)) => Some(*id),
            _ => None,
        }
    }

    /// Replaces any transfer account.
    pub fn transfer_contract_id(&mut self, id: ContractId) -> Result<&mut Self> {
        self.data_mut()?.transfer_target = Some(TransferTarget::Contract(id));
        Ok(self)
    }

    pub fn get_permanent_removal(&self) -> bool {
        self.data().permanent_removal
    }

    /// Only the network itself may set this.
    pub fn permanent_removal(&mut self, remove: bool) -> Result<&mut Self> {
        self.data_mut()?.permanent_removal = remove;
        Ok(self)
    }
}

impl TransactionData for ContractDeleteTransactionData {}

impl ValidateChecksums for ContractDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)?;
        match &self.transfer_target {
            Some(TransferTarget::Account(id)) => id.validate_checksums(ledger_id),
            Some(TransferTarget::Contract(id)) => id.validate_checksums(ledger_id),
            None => Ok(()),
        }
    }
}

impl FromProtobuf<services::ContractDeleteTransactionBody> for ContractDeleteTransactionData {
    fn from_protobuf(pb: services::ContractDeleteTransactionBody) -> Result<Self> {
        let transfer_target = match pb.obtainers {
            Some(Obtainers::TransferAccountId(id)) => Some(TransferTarget::Account(AccountId::from_protobuf(id)?)),
            Some(Obtainers::TransferContractId(id)) => Some(TransferTarget::Contract(ContractId::from_protobuf(id)?)),
            None => None,
        };

        Ok(Self {
            contract_id: Option::from_protobuf(pb.contract_id)?,
            transfer_target,
            permanent_removal: pb.permanent_removal,
        })
    }
}

impl ToProtobuf for ContractDeleteTransactionData {
    type Protobuf = services::ContractDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        let obtainers = self.transfer_target.as_ref().map(|target| match target {
            TransferTarget::Account(id) => Obtainers::TransferAccountId(id.to_protobuf()),
            TransferTarget::Contract(id) => Obtainers::TransferContractId(id.to_protobuf()),
        });

        services::ContractDeleteTransactionBody {
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
            permanent_removal: self.permanent_removal,
            obtainers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_target_is_exclusive() {
        let mut tx = ContractDeleteTransaction::new();
        tx.contract_id(ContractId::new(0, 0, 9))
            .unwrap()
            .transfer_account_id(AccountId::new(0, 0, 10))
            .unwrap()
            .transfer_contract_id(ContractId::new(0, 0, 11))
            .unwrap();

        assert_eq!(tx.get_transfer_account_id(), None);
        assert_eq!(tx.get_transfer_contract_id(), Some(ContractId::new(0, 0, 11)));

        let pb = tx.data().to_protobuf();
        assert!(matches!(pb.obtainers, Some(Obtainers::TransferContractId(_))));
        assert_eq!(&ContractDeleteTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
