use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{FileId, Hbar, LedgerId, Result};

/// Submit a raw, RLP-encoded Ethereum transaction.
pub type EthereumTransaction = Transaction<EthereumTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthereumTransactionData {
    ethereum_data: Vec<u8>,
    call_data_file_id: Option<FileId>,
    max_gas_allowance: Hbar,
}

impl EthereumTransaction {
    pub fn get_ethereum_data(&self) -> &[u8] {
        &self.data().ethereum_data
    }

    pub fn ethereum_data(&mut self, data: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.ethereum_data = data.into();
        Ok(self)
    }

    pub fn get_call_data_file_id(&self) -> Option<FileId> {
        self.data().call_data_file_id
    }

    /// Call data too large for the transaction, stored in a file.
    pub fn call_data_file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.call_data_file_id = Some(id.into());
        Ok(self)
    }

    pub fn get_max_gas_allowance_hbar(&self) -> Hbar {
        self.data().max_gas_allowance
    }

    /// Gas the payer covers when the signer's offered price falls short.
    pub fn max_gas_allowance_hbar(&mut self, allowance: Hbar) -> Result<&mut Self> {
        self.data_mut()?.max_gas_allowance = allowance;
        Ok(self)
    }
}

impl TransactionData for EthereumTransactionData {}

impl ValidateChecksums for EthereumTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.call_data_file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::EthereumTransactionBody> for EthereumTransactionData {
    fn from_protobuf(pb: services::EthereumTransactionBody) -> Result<Self> {
        Ok(Self {
            ethereum_data: pb.ethereum_data,
            call_data_file_id: Option::from_protobuf(pb.call_data)?,
            max_gas_allowance: Hbar::from_tinybars(pb.max_gas_allowance),
        })
    }
}

impl ToProtobuf for EthereumTransactionData {
    type Protobuf = services::EthereumTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::EthereumTransactionBody {
            ethereum_data: self.ethereum_data.clone(),
            call_data: self.call_data_file_id.map(|id| id.to_protobuf()),
            max_gas_allowance: self.max_gas_allowance.to_tinybars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, AnyTransaction, Error, TransactionId};

    #[test]
    fn test_decodes_as_any_and_locks_after_freeze() {
        let mut tx = EthereumTransaction::new();
        tx.ethereum_data(vec![0xf8, 0x6c])
            .unwrap()
            .max_gas_allowance_hbar(Hbar::new(1))
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(TransactionId::generate(AccountId::new(0, 0, 2)))
            .unwrap()
            .freeze()
            .unwrap();

        let any = AnyTransaction::from_bytes(&tx.to_bytes().unwrap()).unwrap();
        assert_eq!(any.data().kind(), "Ethereum");
        assert!(matches!(tx.ethereum_data(vec![]), Err(Error::TransactionFrozen)));
    }
}
