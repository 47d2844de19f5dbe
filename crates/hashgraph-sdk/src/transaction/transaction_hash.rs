use std::fmt;

use hashgraph_crypto::hashing::{sha384, SHA384_LEN};

use crate::{Error, Result};

/// SHA-384 of one node's signed-transaction bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransactionHash(Vec<u8>);

impl TransactionHash {
    pub(crate) fn new(signed_transaction_bytes: &[u8]) -> Self {
        Self(sha384(signed_transaction_bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SHA384_LEN {
            return Err(Error::basic_parse(format!(
                "transaction hash must be {SHA384_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_length() {
        let hash = TransactionHash::new(b"abc");
        assert_eq!(hash.as_bytes().len(), SHA384_LEN);
        assert_eq!(TransactionHash::from_bytes(hash.as_bytes()).unwrap(), hash);
        assert!(TransactionHash::from_bytes(&[0; 32]).is_err());
    }
}
