//! DER framing for keys.
//!
//! Only the fixed layouts the network uses are recognised: PKCS#8 and SEC1
//! private keys, SPKI public keys. Everything after the prefix is the raw key.

use zeroize::Zeroizing;

use crate::errors::{CryptoError, CryptoResult};
use crate::keys::KeyAlgorithm;
use crate::{ecdsa, ed25519};

/// PKCS#8 `PrivateKeyInfo` for Ed25519 (OID 1.3.101.112).
pub(crate) const ED25519_PRIVATE_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04, 0x20,
];

/// SPKI for Ed25519.
pub(crate) const ED25519_PUBLIC_PREFIX: [u8; 12] =
    [0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00];

/// PKCS#8 `PrivateKeyInfo` for secp256k1 (OID 1.3.132.0.10).
pub(crate) const ECDSA_PRIVATE_PREFIX: [u8; 18] = [
    0x30, 0x30, 0x02, 0x01, 0x00, 0x30, 0x07, 0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a, 0x04, 0x22,
    0x04, 0x20,
];

/// SEC1 `ECPrivateKey` header up to the 32-byte scalar; the length byte is skipped.
const ECDSA_SEC1_PRIVATE_HEADER: [u8; 5] = [0x02, 0x01, 0x01, 0x04, 0x20];

/// `[0] { secp256k1 }` parameters that follow the scalar in SEC1 form.
const ECDSA_SEC1_PARAMETERS: [u8; 9] = [0xa0, 0x07, 0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a];

/// SPKI for a compressed secp256k1 point, curve OID only.
pub(crate) const ECDSA_PUBLIC_PREFIX: [u8; 14] =
    [0x30, 0x2d, 0x30, 0x07, 0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a, 0x03, 0x22, 0x00];

/// SPKI for a compressed secp256k1 point with the id-ecPublicKey algorithm.
const ECDSA_PUBLIC_EC_PREFIX: [u8; 23] = [
    0x30, 0x36, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05, 0x2b,
    0x81, 0x04, 0x00, 0x0a, 0x03, 0x22, 0x00,
];

/// SPKI for an uncompressed secp256k1 point.
const ECDSA_PUBLIC_UNCOMPRESSED_PREFIX: [u8; 23] = [
    0x30, 0x56, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05, 0x2b,
    0x81, 0x04, 0x00, 0x0a, 0x03, 0x42, 0x00,
];

/// Does `bytes` start a DER `SEQUENCE` whose short-form length covers the rest?
pub(crate) fn is_sequence(bytes: &[u8]) -> bool {
    matches!(bytes, [0x30, len, rest @ ..] if usize::from(*len) == rest.len() && *len < 0x80)
}

/// Split a DER private key into its algorithm and raw scalar/seed.
pub(crate) fn decode_private_key(der: &[u8]) -> CryptoResult<(KeyAlgorithm, &[u8])> {
    if let Some(raw) = strip(der, &ED25519_PRIVATE_PREFIX, ed25519::SECRET_KEY_LEN) {
        return Ok((KeyAlgorithm::Ed25519, raw));
    }

    if let Some(raw) = strip(der, &ECDSA_PRIVATE_PREFIX, ecdsa::SECRET_KEY_LEN) {
        return Ok((KeyAlgorithm::Ecdsa, raw));
    }

    if let Some(raw) = decode_sec1(der) {
        return Ok((KeyAlgorithm::Ecdsa, raw));
    }

    Err(unsupported(der))
}

/// Split a DER public key into its algorithm and raw point.
pub(crate) fn decode_public_key(der: &[u8]) -> CryptoResult<(KeyAlgorithm, &[u8])> {
    if let Some(raw) = strip(der, &ED25519_PUBLIC_PREFIX, ed25519::PUBLIC_KEY_LEN) {
        return Ok((KeyAlgorithm::Ed25519, raw));
    }

    let ecdsa_forms: [(&[u8], usize); 3] = [
        (&ECDSA_PUBLIC_PREFIX, ecdsa::PUBLIC_KEY_LEN),
        (&ECDSA_PUBLIC_EC_PREFIX, ecdsa::PUBLIC_KEY_LEN),
        (&ECDSA_PUBLIC_UNCOMPRESSED_PREFIX, ecdsa::UNCOMPRESSED_PUBLIC_KEY_LEN),
    ];

    for (prefix, len) in ecdsa_forms {
        if let Some(raw) = strip(der, prefix, len) {
            return Ok((KeyAlgorithm::Ecdsa, raw));
        }
    }

    Err(unsupported(der))
}

/// PKCS#8 encoding of a raw private key.
pub(crate) fn encode_private_key(algorithm: KeyAlgorithm, raw: &[u8]) -> Zeroizing<Vec<u8>> {
    let prefix: &[u8] = match algorithm {
        KeyAlgorithm::Ed25519 => &ED25519_PRIVATE_PREFIX,
        KeyAlgorithm::Ecdsa => &ECDSA_PRIVATE_PREFIX,
    };

    let mut der = Zeroizing::new(Vec::with_capacity(prefix.len() + raw.len()));
    der.extend_from_slice(prefix);
    der.extend_from_slice(raw);
    der
}

/// SPKI encoding of a raw (compressed) public key.
pub(crate) fn encode_public_key(algorithm: KeyAlgorithm, raw: &[u8]) -> Vec<u8> {
    let prefix: &[u8] = match algorithm {
        KeyAlgorithm::Ed25519 => &ED25519_PUBLIC_PREFIX,
        KeyAlgorithm::Ecdsa => &ECDSA_PUBLIC_PREFIX,
    };

    [prefix, raw].concat()
}

fn strip<'a>(der: &'a [u8], prefix: &[u8], len: usize) -> Option<&'a [u8]> {
    der.strip_prefix(prefix).filter(|raw| raw.len() == len)
}

fn decode_sec1(der: &[u8]) -> Option<&[u8]> {
    if !is_sequence(der) {
        return None;
    }

    let body = der.get(2..)?.strip_prefix(&ECDSA_SEC1_PRIVATE_HEADER)?;
    let (scalar, rest) = body.split_at_checked(ecdsa::SECRET_KEY_LEN)?;

    // the optional public key may follow the parameters; it is re-derived anyway
    rest.starts_with(&ECDSA_SEC1_PARAMETERS).then_some(scalar)
}

fn unsupported(der: &[u8]) -> CryptoError {
    let shown = &der[..der.len().min(16)];
    CryptoError::UnsupportedAlgorithm(hex::encode(shown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lengths_match_declared_sequence_lengths() {
        let private = encode_private_key(KeyAlgorithm::Ed25519, &[7; 32]);
        assert!(is_sequence(&private));

        let private = encode_private_key(KeyAlgorithm::Ecdsa, &[7; 32]);
        assert!(is_sequence(&private));

        assert!(is_sequence(&encode_public_key(KeyAlgorithm::Ed25519, &[7; 32])));
        assert!(is_sequence(&encode_public_key(KeyAlgorithm::Ecdsa, &[7; 33])));

        let mut ec = ECDSA_PUBLIC_EC_PREFIX.to_vec();
        ec.extend_from_slice(&[2; 33]);
        assert!(is_sequence(&ec));

        let mut uncompressed = ECDSA_PUBLIC_UNCOMPRESSED_PREFIX.to_vec();
        uncompressed.extend_from_slice(&[4; 65]);
        assert!(is_sequence(&uncompressed));
    }

    #[test]
    fn test_decode_private_key_forms() {
        let der = encode_private_key(KeyAlgorithm::Ed25519, &[1; 32]);
        let (algorithm, raw) = decode_private_key(&der).unwrap();
        assert_eq!(algorithm, KeyAlgorithm::Ed25519);
        assert_eq!(raw, &[1; 32]);

        let der = encode_private_key(KeyAlgorithm::Ecdsa, &[2; 32]);
        assert_eq!(decode_private_key(&der).unwrap(), (KeyAlgorithm::Ecdsa, &[2u8; 32][..]));
    }

    #[test]
    fn test_decode_sec1_private_key() {
        let sec1 = hex::decode(format!(
            "302e0201010420{}a00706052b8104000a",
            hex::encode([3u8; 32])
        ))
        .unwrap();

        assert_eq!(decode_private_key(&sec1).unwrap(), (KeyAlgorithm::Ecdsa, &[3u8; 32][..]));
    }

    #[test]
    fn test_truncated_der_rejected() {
        let der = encode_private_key(KeyAlgorithm::Ed25519, &[1; 32]);
        assert!(decode_private_key(&der[..der.len() - 1]).is_err());

        let der = encode_public_key(KeyAlgorithm::Ecdsa, &[2; 33]);
        assert!(decode_public_key(&der[..der.len() - 1]).is_err());
    }

    #[test]
    fn test_rsa_prefix_is_unsupported() {
        let rsa = hex::decode("30820122300d06092a864886f70d01010105000382010f00").unwrap();

        assert!(matches!(decode_public_key(&rsa), Err(CryptoError::UnsupportedAlgorithm(_))));
    }
}
