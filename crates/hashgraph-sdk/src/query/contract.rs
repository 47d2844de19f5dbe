use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, ContractFunctionResult, ContractId, ContractInfo, LedgerId, Result};

/// Get the current state of a smart contract.
pub type ContractInfoQuery = Query<ContractInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractInfoQueryData {
    contract_id: Option<ContractId>,
}

impl ContractInfoQuery {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> &mut Self {
        self.data_mut().contract_id = Some(id);
        self
    }
}

impl ValidateChecksums for ContractInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractGetInfoQuery> for ContractInfoQueryData {
    fn from_protobuf(pb: services::ContractGetInfoQuery) -> Result<Self> {
        Ok(Self { contract_id: Option::from_protobuf(pb.contract_id)? })
    }
}

impl ToProtobuf for ContractInfoQueryData {
    type Protobuf = services::ContractGetInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractGetInfoQuery {
            header: None,
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::ContractGetInfoResponse> for ContractInfo {
    fn from_protobuf(pb: services::ContractGetInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.contract_info, "contract_info")?)
    }
}

/// Call a contract function locally on one node, without changing state.
pub type ContractCallQuery = Query<ContractCallQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractCallQueryData {
    contract_id: Option<ContractId>,
    gas: u64,
    function_parameters: Vec<u8>,
    sender_account_id: Option<AccountId>,
}

impl ContractCallQuery {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> &mut Self {
        self.data_mut().contract_id = Some(id);
        self
    }

    pub fn get_gas(&self) -> u64 {
        self.data().gas
    }

    pub fn gas(&mut self, gas: u64) -> &mut Self {
        self.data_mut().gas = gas;
        self
    }

    pub fn get_function_parameters(&self) -> &[u8] {
        &self.data().function_parameters
    }

    /// ABI-encoded selector and arguments.
    pub fn function_parameters(&mut self, parameters: impl Into<Vec<u8>>) -> &mut Self {
        self.data_mut().function_parameters = parameters.into();
        self
    }

    pub fn get_sender_account_id(&self) -> Option<&AccountId> {
        self.data().sender_account_id.as_ref()
    }

    /// Account the call appears to come from; defaults to the payer.
    pub fn sender_account_id(&mut self, id: AccountId) -> &mut Self {
        self.data_mut().sender_account_id = Some(id);
        self
    }
}

impl ValidateChecksums for ContractCallQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)?;
        self.sender_account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractCallLocalQuery> for ContractCallQueryData {
    fn from_protobuf(pb: services::ContractCallLocalQuery) -> Result<Self> {
        Ok(Self {
            contract_id: Option::from_protobuf(pb.contract_id)?,
            gas: pb.gas as u64,
            function_parameters: pb.function_parameters,
            sender_account_id: Option::from_protobuf(pb.sender_id)?,
        })
    }
}

impl ToProtobuf for ContractCallQueryData {
    type Protobuf = services::ContractCallLocalQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractCallLocalQuery {
            header: None,
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
            gas: self.gas as i64,
            function_parameters: self.function_parameters.clone(),
            sender_id: self.sender_account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::ContractCallLocalResponse> for ContractFunctionResult {
    fn from_protobuf(pb: services::ContractCallLocalResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.function_result, "function_result")?)
    }
}

/// Get the runtime bytecode of a contract.
pub type ContractBytecodeQuery = Query<ContractBytecodeQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractBytecodeQueryData {
    contract_id: Option<ContractId>,
}

impl ContractBytecodeQuery {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> &mut Self {
        self.data_mut().contract_id = Some(id);
        self
    }
}

impl ValidateChecksums for ContractBytecodeQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractGetBytecodeQuery> for ContractBytecodeQueryData {
    fn from_protobuf(pb: services::ContractGetBytecodeQuery) -> Result<Self> {
        Ok(Self { contract_id: Option::from_protobuf(pb.contract_id)? })
    }
}

impl ToProtobuf for ContractBytecodeQueryData {
    type Protobuf = services::ContractGetBytecodeQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractGetBytecodeQuery {
            header: None,
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::ContractGetBytecodeResponse> for Vec<u8> {
    fn from_protobuf(pb: services::ContractGetBytecodeResponse) -> Result<Self> {
        Ok(pb.bytecode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ok_response_header, QueryData};

    #[test]
    fn test_call_fields_round_trip() {
        let mut query = ContractCallQuery::new();
        query
            .contract_id(ContractId::new(0, 0, 5005))
            .gas(30_000)
            .function_parameters(vec![0x06, 0xfd, 0xde, 0x03])
            .sender_account_id(AccountId::new(0, 0, 1001));

        let pb = query.data().to_protobuf();
        assert_eq!(pb.gas, 30_000);
        assert_eq!(ContractCallQueryData::from_protobuf(pb).unwrap(), *query.data());
    }

    #[test]
    fn test_call_answer_decodes_result() {
        let mut word = [0u8; 32];
        word[31] = 7;

        let response = services::response::Response::ContractCallLocal(services::ContractCallLocalResponse {
            header: ok_response_header(),
            function_result: Some(services::ContractFunctionResult {
                contract_id: Some(ContractId::new(0, 0, 5005).to_protobuf()),
                contract_call_result: word.to_vec(),
                gas_used: 21_000,
                ..Default::default()
            }),
        });

        let result = ContractCallQueryData::default().response_from_protobuf(response).unwrap();
        assert_eq!(result.get_u64(0), Some(7));
        assert_eq!(result.gas_used, 21_000);
    }

    #[test]
    fn test_bytecode_answer_uses_its_own_response_variant() {
        let response =
            services::response::Response::ContractGetBytecodeResponse(services::ContractGetBytecodeResponse {
                header: ok_response_header(),
                bytecode: vec![0x60, 0x80],
            });

        let bytecode = ContractBytecodeQueryData::default().response_from_protobuf(response).unwrap();
        assert_eq!(bytecode, [0x60, 0x80]);
    }
}
