use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{ContractId, Hbar, LedgerId, Result};

/// Call a contract function, optionally sending hbar with the call.
pub type ContractExecuteTransaction = Transaction<ContractExecuteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractExecuteTransactionData {
    contract_id: Option<ContractId>,
    gas: u64,
    payable_amount: Hbar,
    function_parameters: Vec<u8>,
}

impl ContractExecuteTransaction {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> Result<&mut Self> {
        self.data_mut()?.contract_id = Some(id);
        Ok(self)
    }

    pub fn get_gas(&self) -> u64 {
        self.data().gas
    }

    pub fn gas(&mut self, gas: u64) -> Result<&mut Self> {
        self.data_mut()?.gas = gas;
        Ok(self)
    }

    pub fn get_payable_amount(&self) -> Hbar {
        self.data().payable_amount
    }

    pub fn payable_amount(&mut self, amount: Hbar) -> Result<&mut Self> {
        self.data_mut()?.payable_amount = amount;
        Ok(self)
    }

    pub fn get_function_parameters(&self) -> &[u8] {
        &self.data().function_parameters
    }

    /// ABI-encoded selector and arguments.
    pub fn function_parameters(&mut self, parameters: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.function_parameters = parameters.into();
        Ok(self)
    }
}

impl TransactionData for ContractExecuteTransactionData {}

impl ValidateChecksums for ContractExecuteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractCallTransactionBody> for ContractExecuteTransactionData {
    fn from_protobuf(pb: services::ContractCallTransactionBody) -> Result<Self> {
        Ok(Self {
            contract_id: Option::from_protobuf(pb.contract_id)?,
            gas: pb.gas as u64,
            payable_amount: Hbar::from_tinybars(pb.amount),
            function_parameters: pb.function_parameters,
        })
    }
}

impl ToProtobuf for ContractExecuteTransactionData {
    type Protobuf = services::ContractCallTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractCallTransactionBody {
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
            gas: self.gas as i64,
            amount: self.payable_amount.to_tinybars(),
            function_parameters: self.function_parameters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_from_long_zero_address() {
        let id: ContractId = "0x000000000000000000000000000000000000abcd".parse().unwrap();
        let mut tx = ContractExecuteTransaction::new();
        tx.contract_id(id)
            .unwrap()
            .gas(30_000)
            .unwrap()
            .payable_amount(Hbar::from_tinybars(500))
            .unwrap()
            .function_parameters(hex::decode("a9059cbb").unwrap())
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.amount, 500);
        assert_eq!(&ContractExecuteTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
