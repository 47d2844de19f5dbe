use std::fmt;
use std::str::FromStr;

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{Error, LedgerId, Result, TokenId};

/// A single NFT: its token type and serial number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NftId {
    pub token_id: TokenId,
    pub serial: u64,
}

impl NftId {
    pub const fn new(token_id: TokenId, serial: u64) -> Self {
        Self { token_id, serial }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::NftId>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl fmt::Debug for NftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for NftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_id, self.serial)
    }
}

impl FromStr for NftId {
    type Err = Error;

    /// `<token id>/<serial>` or `<token id>@<serial>`.
    fn from_str(s: &str) -> Result<Self> {
        let (token_id, serial) = s
            .split_once('/')
            .or_else(|| s.split_once('@'))
            .ok_or_else(|| Error::basic_parse(format!("expected `<token>/<serial>`, got `{s}`")))?;

        Ok(Self::new(token_id.parse()?, serial.parse().map_err(Error::basic_parse)?))
    }
}

impl From<(TokenId, u64)> for NftId {
    fn from((token_id, serial): (TokenId, u64)) -> Self {
        Self::new(token_id, serial)
    }
}

impl ValidateChecksums for NftId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::NftId> for NftId {
    fn from_protobuf(pb: services::NftId) -> Result<Self> {
        Ok(Self::new(
            TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            pb.serial_number as u64,
        ))
    }
}

impl ToProtobuf for NftId {
    type Protobuf = services::NftId;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NftId {
            token_id: Some(self.token_id.to_protobuf()),
            serial_number: self.serial as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_separators() {
        let expected = TokenId::new(0, 0, 5005).nft(42);
        assert_eq!("0.0.5005/42".parse::<NftId>().unwrap(), expected);
        assert_eq!("0.0.5005@42".parse::<NftId>().unwrap(), expected);
        assert_eq!(expected.to_string(), "0.0.5005/42");
    }

    #[test]
    fn test_checksummed_token() {
        let nft: NftId = "0.0.123-vfmkw/7".parse().unwrap();
        assert!(nft.validate_checksums(&LedgerId::mainnet()).is_ok());
        assert!(nft.validate_checksums(&LedgerId::testnet()).is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!("0.0.5005".parse::<NftId>().is_err());
        assert!("0.0.5005/x".parse::<NftId>().is_err());
        assert!("0.0/1".parse::<NftId>().is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let nft = TokenId::new(1, 2, 3).nft(4);
        assert_eq!(NftId::from_bytes(&nft.to_bytes()).unwrap(), nft);
    }
}
