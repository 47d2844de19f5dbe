//! Crypto error types.

use thiserror::Error;

/// Key and signature errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key bytes or text could not be parsed
    #[error("failed to parse key: {0}")]
    KeyParse(String),

    /// Invalid key length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// DER-encoded key uses an algorithm other than Ed25519 or secp256k1
    #[error("unsupported key algorithm in DER prefix: {0}")]
    UnsupportedAlgorithm(String),

    /// PEM armour or body is malformed
    #[error("malformed PEM: {0}")]
    Pem(String),

    /// Signature bytes are not a valid signature for the key type
    #[error("invalid signature")]
    InvalidSignature,

    /// Signature verification failed
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// Operation requires a different key algorithm
    #[error("operation not supported for {0} keys")]
    WrongKeyType(&'static str),
}

/// Crate-local result alias.
pub type CryptoResult<T> = Result<T, CryptoError>;
