//! # Private and Public Keys
//!
//! Algorithm-agnostic wrappers over the Ed25519 and secp256k1 keys.
//!
//! | Form | Private | Public |
//! |------|---------|--------|
//! | raw | 32-byte seed/scalar | 32-byte point (Ed25519), 33-byte compressed point (ECDSA) |
//! | DER | PKCS#8 (SEC1 accepted) | SPKI |
//! | PEM | `PRIVATE KEY` armour around PKCS#8 | n/a |
//! | text | hex of DER or raw, optional `0x` | hex of DER or raw, optional `0x` |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::ecdsa::{EcdsaPrivateKey, EcdsaPublicKey};
use crate::ed25519::{Ed25519PrivateKey, Ed25519PublicKey};
use crate::errors::{CryptoError, CryptoResult};
use crate::{der, pem};

/// Signature scheme of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAlgorithm {
    /// Ed25519 over Curve25519.
    Ed25519,
    /// ECDSA over secp256k1, Keccak-256 message digest.
    Ecdsa,
}

impl KeyAlgorithm {
    /// Lower-case name, used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Ecdsa => "ecdsa",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
enum PrivateKeyData {
    Ed25519(Ed25519PrivateKey),
    Ecdsa(EcdsaPrivateKey),
}

/// A private key for either supported algorithm.
///
/// Secret material is zeroized when the key is dropped; intermediate
/// encodings are returned in [`Zeroizing`] buffers.
#[derive(Clone)]
pub struct PrivateKey(PrivateKeyData);

impl PrivateKey {
    /// Generate a random Ed25519 key.
    pub fn generate_ed25519() -> Self {
        Self(PrivateKeyData::Ed25519(Ed25519PrivateKey::generate()))
    }

    /// Generate a random secp256k1 key.
    pub fn generate_ecdsa() -> Self {
        Self(PrivateKeyData::Ecdsa(EcdsaPrivateKey::generate()))
    }

    /// Parse DER, or fall back to a raw Ed25519 seed/keypair.
    ///
    /// Raw secp256k1 scalars are indistinguishable from Ed25519 seeds; use
    /// [`from_bytes_ecdsa`](Self::from_bytes_ecdsa) for those.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if der::is_sequence(bytes) {
            return Self::from_bytes_der(bytes);
        }

        Self::from_bytes_ed25519(bytes)
    }

    /// Raw 32-byte seed or 64-byte `seed || public key`.
    pub fn from_bytes_ed25519(bytes: &[u8]) -> CryptoResult<Self> {
        Ed25519PrivateKey::from_bytes(bytes).map(|key| Self(PrivateKeyData::Ed25519(key)))
    }

    /// Raw 32-byte secp256k1 scalar.
    pub fn from_bytes_ecdsa(bytes: &[u8]) -> CryptoResult<Self> {
        EcdsaPrivateKey::from_bytes(bytes).map(|key| Self(PrivateKeyData::Ecdsa(key)))
    }

    /// PKCS#8 or SEC1 DER.
    pub fn from_bytes_der(bytes: &[u8]) -> CryptoResult<Self> {
        match der::decode_private_key(bytes)? {
            (KeyAlgorithm::Ed25519, raw) => Self::from_bytes_ed25519(raw),
            (KeyAlgorithm::Ecdsa, raw) => Self::from_bytes_ecdsa(raw),
        }
    }

    /// A `PRIVATE KEY` PEM document.
    pub fn from_pem(pem: &str) -> CryptoResult<Self> {
        let der = pem::decode_private_key(pem)?;
        Self::from_bytes_der(&der)
    }

    /// Hex of a DER key.
    pub fn from_str_der(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_der(&decode_hex(s)?)
    }

    /// Hex of a raw Ed25519 seed.
    pub fn from_str_ed25519(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_ed25519(&decode_hex(s)?)
    }

    /// Hex of a raw secp256k1 scalar.
    pub fn from_str_ecdsa(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_ecdsa(&decode_hex(s)?)
    }

    /// Algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match &self.0 {
            PrivateKeyData::Ed25519(_) => KeyAlgorithm::Ed25519,
            PrivateKeyData::Ecdsa(_) => KeyAlgorithm::Ecdsa,
        }
    }

    /// `true` for Ed25519 keys.
    pub fn is_ed25519(&self) -> bool {
        self.algorithm() == KeyAlgorithm::Ed25519
    }

    /// `true` for secp256k1 keys.
    pub fn is_ecdsa(&self) -> bool {
        self.algorithm() == KeyAlgorithm::Ecdsa
    }

    /// Matching public key.
    pub fn public_key(&self) -> PublicKey {
        match &self.0 {
            PrivateKeyData::Ed25519(key) => PublicKey(PublicKeyData::Ed25519(key.public_key())),
            PrivateKeyData::Ecdsa(key) => PublicKey(PublicKeyData::Ecdsa(key.public_key())),
        }
    }

    /// Sign `message`.
    ///
    /// Ed25519 signs the message directly; ECDSA signs its Keccak-256 digest.
    pub fn sign(&self, message: &[u8]) -> CryptoResult<Vec<u8>> {
        match &self.0 {
            PrivateKeyData::Ed25519(key) => Ok(key.sign(message).to_vec()),
            PrivateKeyData::Ecdsa(key) => key.sign(message).map(|signature| signature.to_vec()),
        }
    }

    /// Raw seed or scalar.
    pub fn to_bytes_raw(&self) -> Zeroizing<Vec<u8>> {
        match &self.0 {
            PrivateKeyData::Ed25519(key) => Zeroizing::new(key.to_bytes().to_vec()),
            PrivateKeyData::Ecdsa(key) => Zeroizing::new(key.to_bytes().to_vec()),
        }
    }

    /// PKCS#8 DER.
    pub fn to_bytes_der(&self) -> Zeroizing<Vec<u8>> {
        der::encode_private_key(self.algorithm(), &self.to_bytes_raw())
    }

    /// PKCS#8 PEM.
    pub fn to_pem(&self) -> Zeroizing<String> {
        pem::encode_private_key(&self.to_bytes_der())
    }

    /// Hex of the DER encoding.
    pub fn to_string_der(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.to_bytes_der()))
    }

    /// Hex of the raw encoding.
    pub fn to_string_raw(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.to_bytes_raw()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print secret material
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .field("public_key", &self.public_key().to_string_der())
            .finish()
    }
}

impl FromStr for PrivateKey {
    type Err = CryptoError;

    /// Accepts a PEM document or hex of DER/raw Ed25519 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with("-----BEGIN") {
            return Self::from_pem(s);
        }

        Self::from_bytes(&decode_hex(s)?)
    }
}

#[derive(Clone, PartialEq, Eq)]
enum PublicKeyData {
    Ed25519(Ed25519PublicKey),
    Ecdsa(EcdsaPublicKey),
}

/// A public key for either supported algorithm.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(PublicKeyData);

impl PublicKey {
    /// Parse DER, or a raw point whose length identifies the algorithm
    /// (32 bytes Ed25519, 33 or 65 bytes secp256k1).
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        match bytes.len() {
            crate::ed25519::PUBLIC_KEY_LEN => Self::from_bytes_ed25519(bytes),
            crate::ecdsa::PUBLIC_KEY_LEN | crate::ecdsa::UNCOMPRESSED_PUBLIC_KEY_LEN
                if !der::is_sequence(bytes) =>
            {
                Self::from_bytes_ecdsa(bytes)
            }
            _ => Self::from_bytes_der(bytes),
        }
    }

    /// Raw 32-byte Ed25519 point.
    pub fn from_bytes_ed25519(bytes: &[u8]) -> CryptoResult<Self> {
        Ed25519PublicKey::from_bytes(bytes).map(|key| Self(PublicKeyData::Ed25519(key)))
    }

    /// SEC1 secp256k1 point, compressed or uncompressed.
    pub fn from_bytes_ecdsa(bytes: &[u8]) -> CryptoResult<Self> {
        EcdsaPublicKey::from_bytes(bytes).map(|key| Self(PublicKeyData::Ecdsa(key)))
    }

    /// SPKI DER.
    pub fn from_bytes_der(bytes: &[u8]) -> CryptoResult<Self> {
        match der::decode_public_key(bytes)? {
            (KeyAlgorithm::Ed25519, raw) => Self::from_bytes_ed25519(raw),
            (KeyAlgorithm::Ecdsa, raw) => Self::from_bytes_ecdsa(raw),
        }
    }

    /// Hex of a DER key.
    pub fn from_str_der(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_der(&decode_hex(s)?)
    }

    /// Hex of a raw Ed25519 point.
    pub fn from_str_ed25519(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_ed25519(&decode_hex(s)?)
    }

    /// Hex of a raw secp256k1 point.
    pub fn from_str_ecdsa(s: &str) -> CryptoResult<Self> {
        Self::from_bytes_ecdsa(&decode_hex(s)?)
    }

    /// Algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match &self.0 {
            PublicKeyData::Ed25519(_) => KeyAlgorithm::Ed25519,
            PublicKeyData::Ecdsa(_) => KeyAlgorithm::Ecdsa,
        }
    }

    /// `true` for Ed25519 keys.
    pub fn is_ed25519(&self) -> bool {
        self.algorithm() == KeyAlgorithm::Ed25519
    }

    /// `true` for secp256k1 keys.
    pub fn is_ecdsa(&self) -> bool {
        self.algorithm() == KeyAlgorithm::Ecdsa
    }

    /// Raw point: 32 bytes (Ed25519) or 33 compressed bytes (ECDSA).
    ///
    /// This is the form carried in signature pairs and `Key` messages.
    pub fn to_bytes_raw(&self) -> Vec<u8> {
        match &self.0 {
            PublicKeyData::Ed25519(key) => key.to_bytes().to_vec(),
            PublicKeyData::Ecdsa(key) => key.to_bytes(),
        }
    }

    /// SPKI DER.
    pub fn to_bytes_der(&self) -> Vec<u8> {
        der::encode_public_key(self.algorithm(), &self.to_bytes_raw())
    }

    /// Hex of the DER encoding.
    pub fn to_string_der(&self) -> String {
        hex::encode(self.to_bytes_der())
    }

    /// Hex of the raw encoding.
    pub fn to_string_raw(&self) -> String {
        hex::encode(self.to_bytes_raw())
    }

    /// Verify `signature` over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        match &self.0 {
            PublicKeyData::Ed25519(key) => key.verify(message, signature),
            PublicKeyData::Ecdsa(key) => key.verify(message, signature),
        }
    }

    /// EVM address of a secp256k1 key.
    pub fn to_evm_address(&self) -> CryptoResult<[u8; 20]> {
        match &self.0 {
            PublicKeyData::Ecdsa(key) => Ok(key.to_evm_address()),
            PublicKeyData::Ed25519(_) => Err(CryptoError::WrongKeyType("ed25519")),
        }
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.algorithm().hash(state);
        self.to_bytes_raw().hash(state);
    }
}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.algorithm(), self.to_bytes_raw()).cmp(&(other.algorithm(), other.to_bytes_raw()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(\"{}\")", self.to_string_der())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_der())
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

fn decode_hex(s: &str) -> CryptoResult<Zeroizing<Vec<u8>>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);

    hex::decode(s).map(Zeroizing::new).map_err(|err| CryptoError::KeyParse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_DER: &str = "302e020100300506032b657004220420\
                               db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";
    const ED25519_PUBLIC_DER: &str =
        "302a300506032b6570032100e0c8ec2758a5879ffac226a13c0c516b799e72e35141a0dd828f94d37988a4b7";

    #[test]
    fn test_ed25519_der_round_trip() {
        let key: PrivateKey = ED25519_DER.parse().unwrap();

        assert!(key.is_ed25519());
        assert_eq!(&*key.to_string_der(), ED25519_DER);
        assert_eq!(key.public_key().to_string(), ED25519_PUBLIC_DER);
    }

    #[test]
    fn test_ecdsa_der_round_trip() {
        let key = PrivateKey::generate_ecdsa();
        let restored = PrivateKey::from_bytes_der(&key.to_bytes_der()).unwrap();

        assert!(restored.is_ecdsa());
        assert_eq!(restored.public_key(), key.public_key());
        assert!(key.to_string_der().starts_with("3030020100300706052b8104000a04220420"));
        assert!(key.public_key().to_string().starts_with("302d300706052b8104000a032200"));
    }

    #[test]
    fn test_pem_round_trip() {
        for key in [PrivateKey::generate_ed25519(), PrivateKey::generate_ecdsa()] {
            let pem = key.to_pem();
            let restored: PrivateKey = pem.parse().unwrap();

            assert_eq!(restored.public_key(), key.public_key());
        }
    }

    #[test]
    fn test_public_key_parse_forms() {
        let key = PrivateKey::generate_ecdsa().public_key();

        assert_eq!(PublicKey::from_bytes(&key.to_bytes_raw()).unwrap(), key);
        assert_eq!(PublicKey::from_bytes(&key.to_bytes_der()).unwrap(), key);
        assert_eq!(format!("0x{}", key.to_string_raw()).parse::<PublicKey>().unwrap(), key);

        let key = PrivateKey::generate_ed25519().public_key();
        assert_eq!(PublicKey::from_bytes(&key.to_bytes_raw()).unwrap(), key);
        assert_eq!(key.to_string().parse::<PublicKey>().unwrap(), key);
    }

    #[test]
    fn test_sign_and_verify_both_algorithms() {
        for key in [PrivateKey::generate_ed25519(), PrivateKey::generate_ecdsa()] {
            let signature = key.sign(b"transaction body").unwrap();

            assert_eq!(signature.len(), 64);
            assert!(key.public_key().verify(b"transaction body", &signature).is_ok());
            assert!(key.public_key().verify(b"another body", &signature).is_err());
        }
    }

    #[test]
    fn test_evm_address_requires_ecdsa() {
        assert!(PrivateKey::generate_ecdsa().public_key().to_evm_address().is_ok());
        assert!(matches!(
            PrivateKey::generate_ed25519().public_key().to_evm_address(),
            Err(CryptoError::WrongKeyType("ed25519"))
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let key: PrivateKey = ED25519_DER.parse().unwrap();
        let debug = format!("{key:?}");

        assert!(!debug.contains("db484b82"));
        assert!(debug.contains("ed25519") || debug.contains("Ed25519"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!("zz".parse::<PrivateKey>().is_err());
        assert!("0102".parse::<PublicKey>().is_err());
    }
}
