//! # Digests
//!
//! SHA-384 identifies transactions on the network; Keccak-256 is the EVM
//! digest used both for ECDSA message signing and address derivation.

use sha2::{Digest, Sha384};
use sha3::Keccak256;

/// SHA-384 output length in bytes.
pub const SHA384_LEN: usize = 48;

/// SHA-384 of `data`.
pub fn sha384(data: &[u8]) -> Vec<u8> {
    Sha384::digest(data).to_vec()
}

/// Keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha384_empty() {
        assert_eq!(
            hex::encode(sha384(b"")),
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
             274edebfe76f65fbd51ad2f14898b95b"
        );
        assert_eq!(sha384(b"abc").len(), SHA384_LEN);
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
