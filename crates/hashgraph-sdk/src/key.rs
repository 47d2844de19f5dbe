//! # Keys
//!
//! The key shapes an entity can be guarded by: a single public key, a
//! contract, or a (threshold) list of nested keys.

use std::fmt;

use hashgraph_crypto::{KeyAlgorithm, PublicKey};
use hashgraph_proto::services;

use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{ContractId, Error, Result};

/// Any key an entity can be guarded by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single Ed25519 or ECDSA(secp256k1) public key.
    Single(PublicKey),
    /// The contract must be the caller.
    ContractId(ContractId),
    /// The contract may be anywhere in the call chain.
    DelegatableContractId(ContractId),
    /// All keys, or `threshold` of them.
    KeyList(KeyList),
}

impl Key {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::Key>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }

    /// The public key, if this is a single key.
    pub fn as_public_key(&self) -> Option<&PublicKey> {
        match self {
            Self::Single(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(key) => write!(f, "{key}"),
            Self::ContractId(id) => write!(f, "contract {id}"),
            Self::DelegatableContractId(id) => write!(f, "delegatable contract {id}"),
            Self::KeyList(list) => write!(f, "{list}"),
        }
    }
}

impl From<PublicKey> for Key {
    fn from(key: PublicKey) -> Self {
        Self::Single(key)
    }
}

impl From<KeyList> for Key {
    fn from(list: KeyList) -> Self {
        Self::KeyList(list)
    }
}

impl From<ContractId> for Key {
    fn from(id: ContractId) -> Self {
        Self::ContractId(id)
    }
}

/// An ordered list of keys with an optional signing threshold.
///
/// The threshold never exceeds the number of keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyList {
    keys: Vec<Key>,
    threshold: Option<u32>,
}

impl KeyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list requiring `threshold` of `keys` to sign.
    pub fn with_threshold(keys: Vec<Key>, threshold: u32) -> Result<Self> {
        check_threshold(threshold, keys.len())?;
        Ok(Self { keys, threshold: Some(threshold) })
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn threshold(&self) -> Option<u32> {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u32) -> Result<&mut Self> {
        check_threshold(threshold, self.keys.len())?;
        self.threshold = Some(threshold);
        Ok(self)
    }

    pub fn clear_threshold(&mut self) -> &mut Self {
        self.threshold = None;
        self
    }

    pub fn push(&mut self, key: impl Into<Key>) -> &mut Self {
        self.keys.push(key.into());
        self
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn check_threshold(threshold: u32, keys: usize) -> Result<()> {
    if threshold as usize > keys {
        return Err(Error::ThresholdExceedsKeys { threshold, keys });
    }

    Ok(())
}

impl fmt::Display for KeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(threshold) = self.threshold {
            write!(f, "{threshold} of ")?;
        }
        f.write_str("[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

impl FromIterator<Key> for KeyList {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self { keys: iter.into_iter().collect(), threshold: None }
    }
}

impl From<Vec<PublicKey>> for KeyList {
    fn from(keys: Vec<PublicKey>) -> Self {
        keys.into_iter().map(Key::Single).collect()
    }
}

// ============================================================================
// PROTOBUF
// ============================================================================

impl ToProtobuf for PublicKey {
    type Protobuf = services::Key;

    fn to_protobuf(&self) -> Self::Protobuf {
        let raw = self.to_bytes_raw();
        let key = match self.algorithm() {
            KeyAlgorithm::Ed25519 => services::key::Key::Ed25519(raw),
            KeyAlgorithm::Ecdsa => services::key::Key::EcdsaSecp256k1(raw),
        };

        services::Key { key: Some(key) }
    }
}

impl ToProtobuf for Key {
    type Protobuf = services::Key;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::key::Key as Pb;

        let key = match self {
            Self::Single(key) => return key.to_protobuf(),
            Self::ContractId(id) => Pb::ContractId(id.to_protobuf()),
            Self::DelegatableContractId(id) => Pb::DelegatableContractId(id.to_protobuf()),
            Self::KeyList(list) => match list.threshold {
                Some(threshold) => Pb::ThresholdKey(services::ThresholdKey {
                    threshold,
                    keys: Some(list.to_protobuf()),
                }),
                None => Pb::KeyList(list.to_protobuf()),
            },
        };

        services::Key { key: Some(key) }
    }
}

impl FromProtobuf<services::Key> for Key {
    fn from_protobuf(pb: services::Key) -> Result<Self> {
        use services::key::Key as Pb;

        match pb.key {
            Some(Pb::Ed25519(bytes)) => Ok(Self::Single(PublicKey::from_bytes_ed25519(&bytes)?)),
            Some(Pb::EcdsaSecp256k1(bytes)) => {
                Ok(Self::Single(PublicKey::from_bytes_ecdsa(&bytes)?))
            }
            Some(Pb::ContractId(id)) => Ok(Self::ContractId(ContractId::from_protobuf(id)?)),
            Some(Pb::DelegatableContractId(id)) => {
                Ok(Self::DelegatableContractId(ContractId::from_protobuf(id)?))
            }
            Some(Pb::KeyList(list)) => Ok(Self::KeyList(KeyList::from_protobuf(list)?)),
            Some(Pb::ThresholdKey(key)) => {
                let mut list = KeyList::from_protobuf(key.keys.unwrap_or_default())?;
                check_threshold(key.threshold, list.len()).map_err(Error::from_protobuf)?;
                list.threshold = Some(key.threshold);
                Ok(Self::KeyList(list))
            }
            Some(Pb::Rsa3072(_)) => Err(Error::from_protobuf("unsupported key type RSA-3072")),
            Some(Pb::Ecdsa384(_)) => Err(Error::from_protobuf("unsupported key type ECDSA P-384")),
            None => Err(Error::from_protobuf("unexpected empty key")),
        }
    }
}

impl ToProtobuf for KeyList {
    type Protobuf = services::KeyList;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::KeyList { keys: self.keys.to_protobuf() }
    }
}

impl FromProtobuf<services::KeyList> for KeyList {
    fn from_protobuf(pb: services::KeyList) -> Result<Self> {
        Ok(Self { keys: Vec::from_protobuf(pb.keys)?, threshold: None })
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;

    fn public_key() -> PublicKey {
        PrivateKey::generate_ed25519().public_key()
    }

    #[test]
    fn test_single_key_round_trip() {
        let key = Key::Single(public_key());
        assert_eq!(Key::from_bytes(&key.to_bytes()).unwrap(), key);

        let ecdsa = Key::Single(PrivateKey::generate_ecdsa().public_key());
        let pb = ecdsa.to_protobuf();
        assert!(matches!(pb.key, Some(services::key::Key::EcdsaSecp256k1(ref raw)) if raw.len() == 33));
        assert_eq!(Key::from_protobuf(pb).unwrap(), ecdsa);
    }

    #[test]
    fn test_threshold_list_round_trip() {
        let list = KeyList::with_threshold(vec![public_key().into(), public_key().into()], 1).unwrap();
        let key = Key::KeyList(list);
        assert!(matches!(key.to_protobuf().key, Some(services::key::Key::ThresholdKey(_))));
        assert_eq!(Key::from_protobuf(key.to_protobuf()).unwrap(), key);
    }

    #[test]
    fn test_nested_list_round_trip() {
        let inner: KeyList = vec![public_key(), public_key()].into();
        let mut outer = KeyList::new();
        outer.push(inner).push(public_key()).push(ContractId::new(0, 0, 5));
        let key = Key::KeyList(outer);
        assert_eq!(Key::from_bytes(&key.to_bytes()).unwrap(), key);
    }

    #[test]
    fn test_threshold_cannot_exceed_keys() {
        assert!(matches!(
            KeyList::with_threshold(vec![public_key().into()], 2),
            Err(Error::ThresholdExceedsKeys { threshold: 2, keys: 1 })
        ));

        let wire = services::Key {
            key: Some(services::key::Key::ThresholdKey(services::ThresholdKey {
                threshold: 3,
                keys: Some(services::KeyList::default()),
            })),
        };
        assert!(matches!(Key::from_protobuf(wire), Err(Error::FromProtobuf(_))));
    }

    #[test]
    fn test_unsupported_and_empty_keys_rejected() {
        let rsa = services::Key { key: Some(services::key::Key::Rsa3072(vec![1, 2, 3])) };
        assert!(Key::from_protobuf(rsa).is_err());
        assert!(Key::from_protobuf(services::Key::default()).is_err());
    }
}
