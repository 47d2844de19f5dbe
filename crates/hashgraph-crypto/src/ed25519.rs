//! # Ed25519 Keys
//!
//! Twisted Edwards curve signatures with deterministic nonces. Signatures are
//! computed over the message itself, not a digest of it.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use crate::errors::{CryptoError, CryptoResult};

/// Raw private key (seed) length.
pub const SECRET_KEY_LEN: usize = 32;
/// Raw public key length.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Signature length.
pub const SIGNATURE_LEN: usize = 64;

/// Ed25519 signing key.
#[derive(Clone)]
pub struct Ed25519PrivateKey(SigningKey);

impl Ed25519PrivateKey {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self(SigningKey::generate(&mut rand::thread_rng()))
    }

    /// Create from a 32-byte seed, or a 64-byte `seed || public key` pair.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let seed: Zeroizing<[u8; SECRET_KEY_LEN]> = match bytes.len() {
            SECRET_KEY_LEN | 64 => {
                let mut seed = Zeroizing::new([0u8; SECRET_KEY_LEN]);
                seed.copy_from_slice(&bytes[..SECRET_KEY_LEN]);
                seed
            }
            actual => {
                return Err(CryptoError::InvalidKeyLength { expected: SECRET_KEY_LEN, actual })
            }
        };

        let key = SigningKey::from_bytes(&seed);

        // the trailing half of a keypair must agree with the seed
        if bytes.len() == 64 && key.verifying_key().as_bytes() != &bytes[SECRET_KEY_LEN..] {
            return Err(CryptoError::KeyParse(
                "ed25519 keypair bytes do not match their public half".to_owned(),
            ));
        }

        Ok(Self(key))
    }

    /// Raw 32-byte seed.
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LEN]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Matching public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verifying_key())
    }

    /// Sign a message (deterministic).
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.0.sign(message).to_bytes()
    }
}

/// Ed25519 verifying key.
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey(VerifyingKey);

impl Ed25519PublicKey {
    /// Create from the 32-byte compressed point.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: &[u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKeyLength { expected: PUBLIC_KEY_LEN, actual: bytes.len() }
        })?;

        VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|err| CryptoError::KeyParse(err.to_string()))
    }

    /// Raw 32-byte compressed point.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0.to_bytes()
    }

    /// Verify a signature produced by [`Ed25519PrivateKey::sign`].
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        let signature = ed25519_dalek::Signature::from_slice(signature)
            .map_err(|_| CryptoError::InvalidSignature)?;

        self.0.verify(message, &signature).map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}
