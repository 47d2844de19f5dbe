//! Network identity used to salt entity-id checksums.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

const MAINNET: &[u8] = &[0];
const TESTNET: &[u8] = &[1];
const PREVIEWNET: &[u8] = &[2];

/// Byte string identifying a ledger.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LedgerId(Cow<'static, [u8]>);

impl LedgerId {
    /// The production network.
    pub const fn mainnet() -> Self {
        Self(Cow::Borrowed(MAINNET))
    }

    /// The public test network.
    pub const fn testnet() -> Self {
        Self(Cow::Borrowed(TESTNET))
    }

    /// The preview network.
    pub const fn previewnet() -> Self {
        Self(Cow::Borrowed(PREVIEWNET))
    }

    /// Arbitrary ledger id bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Cow::Owned(bytes))
    }

    pub fn is_mainnet(&self) -> bool {
        *self.0 == *MAINNET
    }

    pub fn is_testnet(&self) -> bool {
        *self.0 == *TESTNET
    }

    pub fn is_previewnet(&self) -> bool {
        *self.0 == *PREVIEWNET
    }

    /// Returns the well-known network name, if this is one.
    pub fn name(&self) -> Option<&'static str> {
        if self.is_mainnet() {
            Some("mainnet")
        } else if self.is_testnet() {
            Some("testnet")
        } else if self.is_previewnet() {
            Some("previewnet")
        } else {
            None
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Debug for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&hex::encode(self.as_bytes())),
        }
    }
}

impl FromStr for LedgerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::mainnet()),
            "testnet" => Ok(Self::testnet()),
            "previewnet" => Ok(Self::previewnet()),
            _ => hex::decode(s).map(Self::from_bytes).map_err(Error::basic_parse),
        }
    }
}

impl TryFrom<String> for LedgerId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LedgerId> for String {
    fn from(value: LedgerId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_networks() {
        assert_eq!(LedgerId::mainnet().as_bytes(), &[0]);
        assert_eq!(LedgerId::testnet().to_string(), "testnet");
        assert_eq!("previewnet".parse::<LedgerId>().unwrap(), LedgerId::previewnet());
    }

    #[test]
    fn test_custom_ledger_uses_hex() {
        let id: LedgerId = "03ff".parse().unwrap();
        assert_eq!(id.as_bytes(), &[3, 0xff]);
        assert_eq!(id.to_string(), "03ff");
        assert_eq!(id.name(), None);
        // "00" is mainnet regardless of spelling
        assert!("00".parse::<LedgerId>().unwrap().is_mainnet());
    }

    #[test]
    fn test_bad_ledger_rejected() {
        assert!(matches!("devnet".parse::<LedgerId>(), Err(Error::BasicParse(_))));
    }
}
