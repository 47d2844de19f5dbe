use hashgraph_proto::services;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, ContractId, EvmAddress, Hbar, Result};

const SLOT: usize = 32;

/// A log emitted during a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractLogInfo {
    pub contract_id: ContractId,
    pub bloom: Vec<u8>,
    pub topics: Vec<Vec<u8>>,
    pub data: Vec<u8>,
}

/// Output of a contract call or deployment.
///
/// `bytes` holds the ABI-encoded return data; the typed getters read one
/// 32-byte slot of it and return `None` when the slot is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFunctionResult {
    pub contract_id: ContractId,
    pub evm_address: Option<EvmAddress>,
    pub bytes: Vec<u8>,
    pub error_message: Option<String>,
    pub bloom: Vec<u8>,
    pub gas_used: u64,
    pub logs: Vec<ContractLogInfo>,
    pub gas: u64,
    pub hbar_amount: Hbar,
    pub contract_function_parameters_bytes: Vec<u8>,
    pub sender_account_id: Option<AccountId>,
    pub signer_nonce: Option<i64>,
}

impl ContractFunctionResult {
    fn slot(&self, index: usize) -> Option<&[u8; SLOT]> {
        let start = index.checked_mul(SLOT)?;
        self.bytes.get(start..start + SLOT)?.try_into().ok()
    }

    fn tail<const N: usize>(&self, index: usize) -> Option<[u8; N]> {
        self.slot(index)?[SLOT - N..].try_into().ok()
    }

    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.slot(index).map(|slot| slot[SLOT - 1] != 0)
    }

    pub fn get_u32(&self, index: usize) -> Option<u32> {
        self.tail(index).map(u32::from_be_bytes)
    }

    pub fn get_i32(&self, index: usize) -> Option<i32> {
        self.tail(index).map(i32::from_be_bytes)
    }

    pub fn get_u64(&self, index: usize) -> Option<u64> {
        self.tail(index).map(u64::from_be_bytes)
    }

    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.tail(index).map(i64::from_be_bytes)
    }

    pub fn get_bytes32(&self, index: usize) -> Option<&[u8; SLOT]> {
        self.slot(index)
    }

    /// The address in slot `index`, as 40 hex characters without a prefix.
    pub fn get_address(&self, index: usize) -> Option<String> {
        self.tail::<20>(index).map(hex::encode)
    }

    /// Dynamic `bytes` whose offset is stored in slot `index`.
    pub fn get_bytes(&self, index: usize) -> Option<&[u8]> {
        let offset = usize::try_from(self.get_u64(index)?).ok()?;
        let len_slot: [u8; 8] = self.bytes.get(offset + SLOT - 8..offset + SLOT)?.try_into().ok()?;
        let len = usize::try_from(u64::from_be_bytes(len_slot)).ok()?;
        let start = offset + SLOT;
        self.bytes.get(start..start.checked_add(len)?)
    }

    /// Dynamic `string` whose offset is stored in slot `index`.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        std::str::from_utf8(self.get_bytes(index)?).ok()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::ContractFunctionResult>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::ContractLoginfo> for ContractLogInfo {
    fn from_protobuf(pb: services::ContractLoginfo) -> Result<Self> {
        Ok(Self {
            contract_id: ContractId::from_protobuf(required(pb.contract_id, "contract_id")?)?,
            bloom: pb.bloom,
            topics: pb.topic,
            data: pb.data,
        })
    }
}

impl ToProtobuf for ContractLogInfo {
    type Protobuf = services::ContractLoginfo;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractLoginfo {
            contract_id: Some(self.contract_id.to_protobuf()),
            bloom: self.bloom.clone(),
            topic: self.topics.clone(),
            data: self.data.clone(),
        }
    }
}

impl FromProtobuf<services::ContractFunctionResult> for ContractFunctionResult {
    fn from_protobuf(pb: services::ContractFunctionResult) -> Result<Self> {
        let evm_address = pb
            .evm_address
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| EvmAddress::from_bytes(&bytes))
            .transpose()?;

        Ok(Self {
            contract_id: ContractId::from_protobuf(required(pb.contract_id, "contract_id")?)?,
            evm_address,
            bytes: pb.contract_call_result,
            error_message: Some(pb.error_message).filter(|message| !message.is_empty()),
            bloom: pb.bloom,
            gas_used: pb.gas_used,
            logs: Vec::from_protobuf(pb.log_info)?,
            gas: pb.gas as u64,
            hbar_amount: Hbar::from_tinybars(pb.amount),
            contract_function_parameters_bytes: pb.function_parameters,
            sender_account_id: Option::from_protobuf(pb.sender_id)?,
            signer_nonce: pb.signer_nonce,
        })
    }
}

impl ToProtobuf for ContractFunctionResult {
    type Protobuf = services::ContractFunctionResult;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractFunctionResult {
            contract_id: Some(self.contract_id.to_protobuf()),
            contract_call_result: self.bytes.clone(),
            error_message: self.error_message.clone().unwrap_or_default(),
            bloom: self.bloom.clone(),
            gas_used: self.gas_used,
            log_info: self.logs.to_protobuf(),
            evm_address: self.evm_address.map(|address| address.to_bytes().to_vec()),
            gas: self.gas as i64,
            amount: self.hbar_amount.to_tinybars(),
            function_parameters: self.contract_function_parameters_bytes.clone(),
            sender_id: self.sender_account_id.as_ref().map(AccountId::to_protobuf),
            signer_nonce: self.signer_nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(bytes: Vec<u8>) -> ContractFunctionResult {
        ContractFunctionResult {
            contract_id: ContractId::new(0, 0, 1500),
            evm_address: None,
            bytes,
            error_message: None,
            bloom: Vec::new(),
            gas_used: 21_000,
            logs: Vec::new(),
            gas: 0,
            hbar_amount: Hbar::ZERO,
            contract_function_parameters_bytes: Vec::new(),
            sender_account_id: None,
            signer_nonce: None,
        }
    }

    fn word(tail: &[u8]) -> Vec<u8> {
        let mut word = vec![0; SLOT - tail.len()];
        word.extend_from_slice(tail);
        word
    }

    #[test]
    fn test_static_slots() {
        let mut bytes = word(&[1]);
        bytes.extend(word(&0xdead_beef_u32.to_be_bytes()));
        bytes.extend(word(&[0xff; 8]));
        let result = result(bytes);

        assert_eq!(result.get_bool(0), Some(true));
        assert_eq!(result.get_u32(1), Some(0xdead_beef));
        assert_eq!(result.get_i64(2), Some(-1));
        assert_eq!(result.get_u64(3), None);
    }

    #[test]
    fn test_dynamic_string() {
        // offset 0x20, then length 5, then the padded text
        let mut bytes = word(&[0x20]);
        bytes.extend(word(&[5]));
        let mut text = b"hello".to_vec();
        text.resize(SLOT, 0);
        bytes.extend(text);

        assert_eq!(result(bytes).get_str(0), Some("hello"));
    }

    #[test]
    fn test_empty_error_message_is_none() {
        let mut original = result(vec![1, 2, 3]);
        original.logs.push(ContractLogInfo {
            contract_id: ContractId::new(0, 0, 1500),
            bloom: vec![0; 4],
            topics: vec![vec![9; 32]],
            data: vec![7],
        });

        let pb = original.to_protobuf();
        assert_eq!(pb.error_message, "");
        assert_eq!(ContractFunctionResult::from_protobuf(pb).unwrap(), original);
    }
}
