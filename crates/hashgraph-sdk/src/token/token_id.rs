use crate::entity_id::entity_id;
use crate::NftId;

entity_id! {
    /// The id of a fungible or non-fungible token type.
    TokenId, TokenId, token_num
}

impl TokenId {
    /// The NFT with `serial` under this token.
    pub fn nft(self, serial: u64) -> NftId {
        NftId::new(self, serial)
    }
}

#[cfg(test)]
mod tests {
    use crate::entity_id::ValidateChecksums;
    use crate::{Error, LedgerId};

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: TokenId = "1.2.3".parse().unwrap();
        assert_eq!(id, TokenId::new(1, 2, 3));
        assert_eq!(id.to_string(), "1.2.3");
        assert!("1.2.0x12".parse::<TokenId>().is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let id = TokenId::new(0, 0, 5005);
        assert_eq!(hex::encode(id.to_bytes()), "188d27");
        assert_eq!(TokenId::from_bytes(&id.to_bytes()).unwrap(), id);
    }

    #[test]
    fn test_checksum_ignored_by_equality() {
        let with: TokenId = "0.0.123-esxsf".parse().unwrap();
        assert_eq!(with, TokenId::new(0, 0, 123));
        assert!(with.validate_checksums(&LedgerId::testnet()).is_ok());
        assert!(matches!(
            with.validate_checksums(&LedgerId::previewnet()),
            Err(Error::BadEntityId { .. })
        ));
    }

    #[test]
    fn test_evm_address_round_trip() {
        let address = "0x00000000000000000000000000000000000004d2".parse().unwrap();
        let id = TokenId::from_evm_address(&address, 1, 2).unwrap();
        assert_eq!(id, TokenId::new(1, 2, 1234));
        assert_eq!(id.to_evm_address(), address);
        assert_eq!(id.to_solidity_address().unwrap(), "00000001000000000000000200000000000004d2");
    }
}
