//! # ECDSA Keys (secp256k1)
//!
//! Messages are hashed with Keccak-256 before signing so that signatures are
//! interchangeable with EVM tooling.
//!
//! ## Encoding
//!
//! - Private keys: 32-byte big-endian scalar
//! - Public keys: 33-byte SEC1 compressed point (65-byte uncompressed accepted)
//! - Signatures: 64 bytes, `r || s`, low-S normalized

use k256::ecdsa::{
    signature::hazmat::{PrehashSigner, PrehashVerifier},
    Signature, SigningKey, VerifyingKey,
};
use zeroize::Zeroizing;

use crate::errors::{CryptoError, CryptoResult};
use crate::hashing::keccak256;

/// Raw private key length.
pub const SECRET_KEY_LEN: usize = 32;
/// Compressed public key length.
pub const PUBLIC_KEY_LEN: usize = 33;
/// Uncompressed public key length.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;
/// Signature length.
pub const SIGNATURE_LEN: usize = 64;

/// secp256k1 signing key.
#[derive(Clone)]
pub struct EcdsaPrivateKey(SigningKey);

impl EcdsaPrivateKey {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Create from a 32-byte scalar.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: SECRET_KEY_LEN,
                actual: bytes.len(),
            });
        }

        SigningKey::from_slice(bytes)
            .map(Self)
            .map_err(|err| CryptoError::KeyParse(err.to_string()))
    }

    /// Raw 32-byte scalar.
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LEN]> {
        Zeroizing::new(self.0.to_bytes().into())
    }

    /// Matching public key.
    pub fn public_key(&self) -> EcdsaPublicKey {
        EcdsaPublicKey(self.0.verifying_key().clone())
    }

    /// Sign `keccak256(message)` (RFC 6979, deterministic).
    pub fn sign(&self, message: &[u8]) -> CryptoResult<[u8; SIGNATURE_LEN]> {
        let digest = keccak256(message);
        let signature: Signature =
            self.0.sign_prehash(&digest).map_err(|_| CryptoError::InvalidSignature)?;

        Ok(signature.to_bytes().into())
    }
}

/// secp256k1 verifying key.
#[derive(Clone, PartialEq, Eq)]
pub struct EcdsaPublicKey(VerifyingKey);

impl EcdsaPublicKey {
    /// Create from a SEC1 point, compressed or uncompressed.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        match bytes.len() {
            PUBLIC_KEY_LEN | UNCOMPRESSED_PUBLIC_KEY_LEN => VerifyingKey::from_sec1_bytes(bytes)
                .map(Self)
                .map_err(|err| CryptoError::KeyParse(err.to_string())),
            actual => Err(CryptoError::InvalidKeyLength { expected: PUBLIC_KEY_LEN, actual }),
        }
    }

    /// Compressed 33-byte SEC1 point.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }

    /// Uncompressed 65-byte SEC1 point.
    pub fn to_uncompressed_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Verify a signature produced by [`EcdsaPrivateKey::sign`].
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        let signature =
            Signature::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;

        self.0
            .verify_prehash(&keccak256(message), &signature)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }

    /// The 20-byte EVM address: the low 20 bytes of the Keccak-256 digest of
    /// the uncompressed point without its `0x04` tag.
    pub fn to_evm_address(&self) -> [u8; 20] {
        let uncompressed = self.to_uncompressed_bytes();
        let digest = keccak256(&uncompressed[1..]);

        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[12..]);
        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify() {
        let key = EcdsaPrivateKey::generate();
        let message = b"hello, secp256k1";

        let signature = key.sign(message).unwrap();

        assert!(key.public_key().verify(message, &signature).is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let key = EcdsaPrivateKey::generate();
        let signature = key.sign(b"message1").unwrap();

        assert!(key.public_key().verify(b"message2", &signature).is_err());
    }

    #[test]
    fn test_deterministic_signatures() {
        let key = EcdsaPrivateKey::from_bytes(&[0xAB; 32]).unwrap();

        assert_eq!(key.sign(b"same").unwrap(), key.sign(b"same").unwrap());
    }

    #[test]
    fn test_public_key_forms() {
        let key = EcdsaPrivateKey::generate().public_key();

        let compressed = key.to_bytes();
        let uncompressed = key.to_uncompressed_bytes();
        assert_eq!(compressed.len(), PUBLIC_KEY_LEN);
        assert_eq!(uncompressed.len(), UNCOMPRESSED_PUBLIC_KEY_LEN);

        assert!(EcdsaPublicKey::from_bytes(&compressed).unwrap() == key);
        assert!(EcdsaPublicKey::from_bytes(&uncompressed).unwrap() == key);
    }

    #[test]
    fn test_evm_address_of_scalar_one() {
        // the generator point G has a well-known address
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        let key = EcdsaPrivateKey::from_bytes(&scalar).unwrap();

        assert_eq!(
            hex::encode(key.public_key().to_evm_address()),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_zero_scalar_rejected() {
        assert!(EcdsaPrivateKey::from_bytes(&[0; 32]).is_err());
        assert!(EcdsaPrivateKey::from_bytes(&[1; 31]).is_err());
    }
}
