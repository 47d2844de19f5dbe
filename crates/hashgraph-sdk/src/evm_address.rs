//! 20-byte EVM address.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// An Ethereum-style address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    pub const LEN: usize = 20;

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        <[u8; 20]>::try_from(bytes).map(Self).map_err(|_| {
            Error::basic_parse(format!("expected 20 byte EVM address, got {} bytes", bytes.len()))
        })
    }

    pub const fn to_bytes(self) -> [u8; 20] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl From<[u8; 20]> for EvmAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<EvmAddress> for [u8; 20] {
    fn from(address: EvmAddress) -> Self {
        address.0
    }
}

impl FromStr for EvmAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        if hex.len() != Self::LEN * 2 {
            return Err(Error::basic_parse(format!(
                "expected 40 hex characters for an EVM address, got {}",
                hex.len()
            )));
        }

        let mut bytes = [0; 20];
        hex::decode_to_slice(hex, &mut bytes).map_err(Error::basic_parse)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x302a300506032b6570032100114e6abc371b82da";

    #[test]
    fn test_parse_with_and_without_prefix() {
        let with: EvmAddress = ADDRESS.parse().unwrap();
        let without: EvmAddress = ADDRESS[2..].parse().unwrap();
        assert_eq!(with, without);
        assert_eq!(with.to_string(), ADDRESS);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!("0x1234".parse::<EvmAddress>().is_err());
        assert!("zz2a300506032b6570032100114e6abc371b82da".parse::<EvmAddress>().is_err());
        assert!(EvmAddress::from_bytes(&[0; 19]).is_err());
    }
}
