use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use hashgraph_crypto::PublicKey;
use hashgraph_proto::services;

use crate::entity_id::{self, Checksum, PartialEntityId, ValidateChecksums};
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{Client, Error, EvmAddress, Key, LedgerId, Result};

/// How an account is addressed within its shard and realm.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountIdentity {
    /// Account number.
    Num(u64),
    /// Alias derived from a public key.
    Alias(PublicKey),
    /// Alias derived from a non long-zero EVM address.
    EvmAddress(EvmAddress),
}

/// The id of an account.
///
/// Exactly one identity is active; equality ignores the checksum.
#[derive(Clone)]
pub struct AccountId {
    pub shard: u64,
    pub realm: u64,
    pub identity: AccountIdentity,
    /// Checksum parsed from text, only ever set for numeric ids.
    pub checksum: Option<Checksum>,
}

impl AccountId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, identity: AccountIdentity::Num(num), checksum: None }
    }

    pub fn from_alias(shard: u64, realm: u64, alias: PublicKey) -> Self {
        Self { shard, realm, identity: AccountIdentity::Alias(alias), checksum: None }
    }

    /// Long-zero addresses resolve to their number; any other address becomes an alias.
    pub fn from_evm_address(address: &EvmAddress, shard: u64, realm: u64) -> Self {
        let identity = match entity_id::long_zero_num(address) {
            Some(num) => AccountIdentity::Num(num),
            None => AccountIdentity::EvmAddress(*address),
        };

        Self { shard, realm, identity, checksum: None }
    }

    pub fn from_solidity_address(address: &str) -> Result<Self> {
        let (shard, realm, num) = entity_id::from_solidity_address(address)?;
        Ok(Self::new(shard, realm, num))
    }

    /// Long-zero packing of shard, realm and num.
    pub fn to_solidity_address(&self) -> Result<String> {
        let num = self.num().ok_or_else(|| {
            Error::basic_parse("only numeric account ids have a solidity address")
        })?;

        entity_id::to_solidity_address(self.shard, self.realm, num)
            .map(|address| hex::encode(address.to_bytes()))
    }

    /// The EVM address this id resolves to without a network lookup.
    pub fn to_evm_address(&self) -> Result<EvmAddress> {
        match &self.identity {
            AccountIdentity::Num(num) => Ok(entity_id::long_zero_address(*num)),
            AccountIdentity::EvmAddress(address) => Ok(*address),
            AccountIdentity::Alias(key) => {
                key.to_evm_address().map(EvmAddress::from).map_err(Error::KeyDerive)
            }
        }
    }

    pub fn num(&self) -> Option<u64> {
        match self.identity {
            AccountIdentity::Num(num) => Some(num),
            _ => None,
        }
    }

    pub fn alias(&self) -> Option<&PublicKey> {
        match &self.identity {
            AccountIdentity::Alias(key) => Some(key),
            _ => None,
        }
    }

    pub fn evm_address(&self) -> Option<EvmAddress> {
        match self.identity {
            AccountIdentity::EvmAddress(address) => Some(address),
            _ => None,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::AccountId>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }

    pub fn to_string_with_checksum(&self, client: &Client) -> Result<String> {
        let num = self.num().ok_or_else(|| {
            Error::basic_parse("cannot compute a checksum for an account id with an alias")
        })?;

        let ledger_id = entity_id::client_ledger_id(client)?;
        Ok(entity_id::format_with_checksum(self.shard, self.realm, num, &ledger_id))
    }

    pub fn validate_checksum(&self, client: &Client) -> Result<()> {
        self.validate_checksums(&entity_id::client_ledger_id(client)?)
    }
}

fn parse_alias(shard: u64, realm: u64, text: &str) -> Result<AccountId> {
    let hex = text.strip_prefix("0x").unwrap_or(text);

    if hex.len() == EvmAddress::LEN * 2 {
        return Ok(AccountId::from_evm_address(&hex.parse()?, shard, realm));
    }

    let bytes = hex::decode(hex).map_err(Error::basic_parse)?;

    // serialized `Key` first, then DER or raw public key bytes
    let from_key = crate::protobuf::decode::<services::Key>(&bytes)
        .and_then(Key::from_protobuf)
        .ok()
        .and_then(|key| match key {
            Key::Single(key) => Some(key),
            _ => None,
        });

    let key = match from_key {
        Some(key) => key,
        None => PublicKey::from_bytes(&bytes).map_err(Error::basic_parse)?,
    };

    Ok(AccountId::from_alias(shard, realm, key))
}

impl ValidateChecksums for AccountId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match self.identity {
            AccountIdentity::Num(num) => {
                entity_id::validate_checksum(self.shard, self.realm, num, self.checksum, ledger_id)
            }
            _ => Ok(()),
        }
    }
}

impl PartialEq for AccountId {
    fn eq(&self, other: &Self) -> bool {
        self.shard == other.shard && self.realm == other.realm && self.identity == other.identity
    }
}

impl Eq for AccountId {}

impl Hash for AccountId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shard.hash(state);
        self.realm.hash(state);
        self.identity.hash(state);
    }
}

impl PartialOrd for AccountId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccountId {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.shard, self.realm, &self.identity).cmp(&(other.shard, other.realm, &other.identity))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { shard, realm, .. } = self;

        match &self.identity {
            AccountIdentity::Num(num) => write!(f, "{shard}.{realm}.{num}"),
            AccountIdentity::Alias(key) => write!(f, "{shard}.{realm}.{key}"),
            AccountIdentity::EvmAddress(address) if *shard == 0 && *realm == 0 => {
                write!(f, "{address}")
            }
            AccountIdentity::EvmAddress(address) => {
                write!(f, "{shard}.{realm}.{}", hex::encode(address.to_bytes()))
            }
        }
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match PartialEntityId::parse(s)? {
            PartialEntityId::Num { shard, realm, num, checksum } => {
                Ok(Self { checksum, ..Self::new(shard, realm, num) })
            }
            PartialEntityId::Other { shard, realm, last } => parse_alias(shard, realm, last),
            PartialEntityId::Evm(hex) => Ok(Self::from_evm_address(&hex.parse()?, 0, 0)),
        }
    }
}

impl From<u64> for AccountId {
    fn from(num: u64) -> Self {
        Self::new(0, 0, num)
    }
}

impl From<PublicKey> for AccountId {
    fn from(alias: PublicKey) -> Self {
        Self::from_alias(0, 0, alias)
    }
}

impl FromProtobuf<services::AccountId> for AccountId {
    fn from_protobuf(pb: services::AccountId) -> Result<Self> {
        use services::account_id::Account;

        let shard = pb.shard_num as u64;
        let realm = pb.realm_num as u64;

        let identity = match pb.account {
            Some(Account::AccountNum(num)) => AccountIdentity::Num(num as u64),
            Some(Account::Alias(bytes)) if bytes.len() == EvmAddress::LEN => {
                Self::from_evm_address(&EvmAddress::from_bytes(&bytes)?, shard, realm).identity
            }
            Some(Account::Alias(bytes)) => match Key::from_bytes(&bytes)? {
                Key::Single(key) => AccountIdentity::Alias(key),
                other => {
                    return Err(Error::from_protobuf(format!(
                        "account alias must be a single public key, got {other}"
                    )))
                }
            },
            None => AccountIdentity::Num(0),
        };

        Ok(Self { shard, realm, identity, checksum: None })
    }
}

impl ToProtobuf for AccountId {
    type Protobuf = services::AccountId;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::account_id::Account;

        let account = match &self.identity {
            AccountIdentity::Num(num) => Account::AccountNum(*num as i64),
            AccountIdentity::Alias(key) => {
                Account::Alias(prost::Message::encode_to_vec(&key.to_protobuf()))
            }
            AccountIdentity::EvmAddress(address) => Account::Alias(address.to_bytes().to_vec()),
        };

        services::AccountId {
            shard_num: self.shard as i64,
            realm_num: self.realm as i64,
            account: Some(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use proptest::prelude::*;

    use super::*;

    const EVM: &str = "0x302a300506032b6570032100114e6abc371b82da";

    #[test]
    fn test_parse_plain() {
        assert_eq!("0.0.1001".parse::<AccountId>().unwrap(), AccountId::new(0, 0, 1001));
        assert_eq!("0.0.1001".parse::<AccountId>().unwrap(), AccountId::from(1001));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("0.0.".parse::<AccountId>().is_err());
        assert!("0.0.123-ntjl".parse::<AccountId>().is_err());
        assert!("0.0.123-ntjl1".parse::<AccountId>().is_err());
        assert!("0.0.zz".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_evm_constructor_matches_parse() {
        let address: EvmAddress = EVM.parse().unwrap();
        let id = AccountId::from_evm_address(&address, 0, 0);
        assert_eq!(id, EVM.parse::<AccountId>().unwrap());
        assert_eq!(id.to_string(), EVM);
        assert_eq!(id.to_evm_address().unwrap(), address);
    }

    #[test]
    fn test_evm_round_trip_long_zero() {
        let address: EvmAddress = "0x00000000000000000000000000000000000004d2".parse().unwrap();
        let id = AccountId::from_evm_address(&address, 1, 2);
        assert_eq!(id, AccountId::new(1, 2, 1234));
        assert_eq!(id.to_evm_address().unwrap(), address);
    }

    #[test]
    fn test_long_zero_wire_alias_decodes_to_num() {
        let address: EvmAddress = "0x00000000000000000000000000000000000004d2".parse().unwrap();
        let pb = services::AccountId {
            shard_num: 0,
            realm_num: 0,
            account: Some(services::account_id::Account::Alias(address.to_bytes().to_vec())),
        };

        let id = AccountId::from_protobuf(pb).unwrap();
        assert_eq!(id, AccountId::new(0, 0, 1234));
        assert_eq!(id.to_string().parse::<AccountId>().unwrap(), id);
    }

    #[test]
    fn test_alias_round_trip() {
        let key = PrivateKey::generate_ed25519().public_key();
        let id = AccountId::from_alias(0, 0, key.clone());

        assert_eq!(id.to_string().parse::<AccountId>().unwrap(), id);
        assert_eq!(AccountId::from_bytes(&id.to_bytes()).unwrap(), id);

        let key_hex = hex::encode(Key::Single(key).to_bytes());
        assert_eq!(format!("0.0.{key_hex}").parse::<AccountId>().unwrap(), id);
    }

    #[test]
    fn test_bytes_round_trip_all_forms() {
        let ids = [
            AccountId::new(0, 0, 1001),
            AccountId::from_evm_address(&EVM.parse().unwrap(), 0, 0),
            AccountId::from_alias(1, 2, PrivateKey::generate_ecdsa().public_key()),
        ];
        for id in ids {
            assert_eq!(AccountId::from_bytes(&id.to_bytes()).unwrap(), id);
        }
    }

    #[test]
    fn test_checksum() {
        let id: AccountId = "0.0.123-vfmkw".parse().unwrap();
        assert_eq!(id, AccountId::new(0, 0, 123));
        assert!(id.validate_checksums(&LedgerId::mainnet()).is_ok());
        assert!(matches!(
            id.validate_checksums(&LedgerId::testnet()),
            Err(Error::BadEntityId { num: 123, .. })
        ));
    }

    #[test]
    fn test_solidity_address() {
        let id = AccountId::new(0, 0, 5005);
        assert_eq!(id.to_solidity_address().unwrap(), "000000000000000000000000000000000000138d");
        assert_eq!(AccountId::from_solidity_address("000000000000000000000000000000000000138d").unwrap(), id);

        let alias = AccountId::from(PrivateKey::generate_ed25519().public_key());
        assert!(alias.to_solidity_address().is_err());
    }

    proptest! {
        #[test]
        fn prop_evm_address_text_round_trip(bytes in any::<[u8; 20]>(), shard in 0u64..8, realm in 0u64..8) {
            let id = AccountId::from_evm_address(&EvmAddress::from(bytes), shard, realm);
            prop_assert_eq!(id.to_string().parse::<AccountId>().unwrap(), id.clone());
            prop_assert_eq!(AccountId::from_bytes(&id.to_bytes()).unwrap(), id);
        }
    }
}
