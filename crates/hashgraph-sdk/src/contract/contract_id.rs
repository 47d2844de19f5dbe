use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use hashgraph_proto::services;

use crate::entity_id::{self, Checksum, PartialEntityId, ValidateChecksums};
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{Client, Error, EvmAddress, LedgerId, Result};

/// The id of a smart contract, numeric or by EVM address.
#[derive(Clone, Copy, Default)]
pub struct ContractId {
    pub shard: u64,
    pub realm: u64,
    /// Zero when `evm_address` is set.
    pub num: u64,
    pub evm_address: Option<EvmAddress>,
    pub checksum: Option<Checksum>,
}

impl ContractId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num, evm_address: None, checksum: None }
    }

    /// Long-zero addresses resolve to their number; any other address is kept.
    pub fn from_evm_address(address: &EvmAddress, shard: u64, realm: u64) -> Self {
        match entity_id::long_zero_num(address) {
            Some(num) => Self::new(shard, realm, num),
            None => Self { shard, realm, num: 0, evm_address: Some(*address), checksum: None },
        }
    }

    pub fn from_solidity_address(address: &str) -> Result<Self> {
        let (shard, realm, num) = entity_id::from_solidity_address(address)?;
        Ok(Self::new(shard, realm, num))
    }

    pub fn to_solidity_address(&self) -> Result<String> {
        match self.evm_address {
            Some(address) => Ok(hex::encode(address.to_bytes())),
            None => entity_id::to_solidity_address(self.shard, self.realm, self.num)
                .map(|address| hex::encode(address.to_bytes())),
        }
    }

    pub fn to_evm_address(&self) -> EvmAddress {
        self.evm_address.unwrap_or_else(|| entity_id::long_zero_address(self.num))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::ContractId>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }

    pub fn to_string_with_checksum(&self, client: &Client) -> Result<String> {
        if self.evm_address.is_some() {
            return Err(Error::basic_parse(
                "cannot compute a checksum for a contract id with an EVM address",
            ));
        }

        let ledger_id = entity_id::client_ledger_id(client)?;
        Ok(entity_id::format_with_checksum(self.shard, self.realm, self.num, &ledger_id))
    }

    pub fn validate_checksum(&self, client: &Client) -> Result<()> {
        self.validate_checksums(&entity_id::client_ledger_id(client)?)
    }

    fn key(&self) -> (u64, u64, u64, Option<EvmAddress>) {
        (self.shard, self.realm, self.num, self.evm_address)
    }
}

impl ValidateChecksums for ContractId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        if self.evm_address.is_some() {
            return Ok(());
        }

        entity_id::validate_checksum(self.shard, self.realm, self.num, self.checksum, ledger_id)
    }
}

impl PartialEq for ContractId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ContractId {}

impl Hash for ContractId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ContractId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ContractId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evm_address {
            Some(address) => {
                write!(f, "{}.{}.{}", self.shard, self.realm, hex::encode(address.to_bytes()))
            }
            None => write!(f, "{}.{}.{}", self.shard, self.realm, self.num),
        }
    }
}

impl FromStr for ContractId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match PartialEntityId::parse(s)? {
            PartialEntityId::Num { shard, realm, num, checksum } => {
                Ok(Self { checksum, ..Self::new(shard, realm, num) })
            }
            PartialEntityId::Other { shard, realm, last } => {
                Ok(Self::from_evm_address(&last.parse()?, shard, realm))
            }
            PartialEntityId::Evm(hex) => Ok(Self::from_evm_address(&hex.parse()?, 0, 0)),
        }
    }
}

impl From<u64> for ContractId {
    fn from(num: u64) -> Self {
        Self::new(0, 0, num)
    }
}

impl FromProtobuf<services::ContractId> for ContractId {
    fn from_protobuf(pb: services::ContractId) -> Result<Self> {
        use services::contract_id::Contract;

        let shard = pb.shard_num as u64;
        let realm = pb.realm_num as u64;

        match pb.contract {
            Some(Contract::ContractNum(num)) => Ok(Self::new(shard, realm, num as u64)),
            Some(Contract::EvmAddress(bytes)) => Ok(Self {
                evm_address: Some(EvmAddress::from_bytes(&bytes).map_err(Error::from_protobuf)?),
                ..Self::new(shard, realm, 0)
            }),
            None => Ok(Self::new(shard, realm, 0)),
        }
    }
}

impl ToProtobuf for ContractId {
    type Protobuf = services::ContractId;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::contract_id::Contract;

        let contract = match self.evm_address {
            Some(address) => Contract::EvmAddress(address.to_bytes().to_vec()),
            None => Contract::ContractNum(self.num as i64),
        };

        services::ContractId {
            shard_num: self.shard as i64,
            realm_num: self.realm as i64,
            contract: Some(contract),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("0.0.5005".parse::<ContractId>().unwrap(), ContractId::new(0, 0, 5005));

        let evm: ContractId = "1.2.98329e006610472e6b372c080833f6d79ed833cf".parse().unwrap();
        assert_eq!(evm.shard, 1);
        assert_eq!(evm.to_string(), "1.2.98329e006610472e6b372c080833f6d79ed833cf");

        let bare: ContractId = "0x98329e006610472e6b372c080833f6d79ed833cf".parse().unwrap();
        assert_eq!(bare.shard, 0);
        assert!(bare.evm_address.is_some());
    }

    #[test]
    fn test_long_zero_collapses_to_num() {
        let id: ContractId = "0x00000000000000000000000000000000000004d2".parse().unwrap();
        assert_eq!(id, ContractId::new(0, 0, 1234));
    }

    #[test]
    fn test_bytes_round_trip() {
        for id in [
            ContractId::new(0, 0, 5005),
            "1.2.98329e006610472e6b372c080833f6d79ed833cf".parse().unwrap(),
        ] {
            assert_eq!(ContractId::from_bytes(&id.to_bytes()).unwrap(), id);
        }
    }

    #[test]
    fn test_solidity_address() {
        let id = ContractId::new(0, 0, 5005);
        assert_eq!(id.to_solidity_address().unwrap(), "000000000000000000000000000000000000138d");
        assert_eq!(ContractId::from_solidity_address("000000000000000000000000000000000000138d").unwrap(), id);
    }

    #[test]
    fn test_evm_contract_skips_checksum() {
        let id: ContractId = "0x98329e006610472e6b372c080833f6d79ed833cf".parse().unwrap();
        assert!(id.validate_checksums(&LedgerId::mainnet()).is_ok());
    }
}
