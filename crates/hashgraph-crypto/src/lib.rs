//! # Hashgraph Crypto - Key Material and Signatures
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ed25519` | Ed25519 | Default account keys |
//! | `ecdsa` | secp256k1 + Keccak-256 | EVM-compatible account keys |
//! | `keys` | both | `PrivateKey` / `PublicKey` with raw, DER, PEM and hex codecs |
//! | `hashing` | SHA-384, Keccak-256 | Transaction hashes, EVM addresses |
//!
//! ## Security Properties
//!
//! - **Ed25519**: deterministic nonces, no RNG dependency when signing
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S signatures
//! - Secret material is zeroized on drop and in intermediate buffers

#![warn(missing_docs)]
#![warn(clippy::all)]

mod der;
pub mod ecdsa;
pub mod ed25519;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod pem;

// Re-exports
pub use errors::{CryptoError, CryptoResult};
pub use hashing::{keccak256, sha384};
pub use keys::{KeyAlgorithm, PrivateKey, PublicKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    proptest! {
        #[test]
        fn ed25519_seeds_survive_der(seed in prop::array::uniform32(any::<u8>())) {
            let key = PrivateKey::from_bytes_ed25519(&seed).unwrap();
            let restored = PrivateKey::from_bytes(&key.to_bytes_der()).unwrap();

            prop_assert_eq!(&*restored.to_bytes_raw(), &seed.to_vec());
        }

        #[test]
        fn signatures_verify_for_any_message(message in prop::collection::vec(any::<u8>(), 0..256)) {
            let key = PrivateKey::from_bytes_ecdsa(&[0x11; 32]).unwrap();
            let signature = key.sign(&message).unwrap();

            prop_assert!(key.public_key().verify(&message, &signature).is_ok());
        }
    }
}
