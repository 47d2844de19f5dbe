//! # Entity ID Codec
//!
//! Shared parsing, checksum validation and long-zero EVM packing for every
//! `shard.realm.num` identifier.
//!
//! ## Textual forms
//!
//! | Form | Example |
//! |------|---------|
//! | numeric | `0.0.1001` |
//! | numeric + checksum | `0.0.123-vfmkw` |
//! | alias / EVM suffix | `0.0.<hex>` |
//! | bare EVM address | `0x<40 hex>` (shard and realm 0) |
//!
//! ## Long-zero layout (20 bytes, big endian)
//!
//! | Bytes | Field |
//! |-------|-------|
//! | 0..4 | shard (`u32`) |
//! | 4..12 | realm (`u64`) |
//! | 12..20 | num (`u64`) |

pub mod checksum;

use std::fmt;

pub use checksum::Checksum;

use crate::{Client, Error, EvmAddress, LedgerId, Result};

// ============================================================================
// CHECKSUM VALIDATION
// ============================================================================

/// Types whose embedded entity ids can be validated against a ledger.
pub trait ValidateChecksums {
    /// Fails with [`Error::BadEntityId`] on the first mismatching checksum.
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()>;
}

impl<T: ValidateChecksums> ValidateChecksums for Option<T> {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match self {
            Some(value) => value.validate_checksums(ledger_id),
            None => Ok(()),
        }
    }
}

impl<T: ValidateChecksums> ValidateChecksums for [T] {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.iter().try_for_each(|value| value.validate_checksums(ledger_id))
    }
}

impl<T: ValidateChecksums> ValidateChecksums for Vec<T> {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.as_slice().validate_checksums(ledger_id)
    }
}

/// Checksum-validate a bare triple.
pub(crate) fn validate_checksum(
    shard: u64,
    realm: u64,
    num: u64,
    checksum: Option<Checksum>,
    ledger_id: &LedgerId,
) -> Result<()> {
    let Some(present_checksum) = checksum else {
        return Ok(());
    };

    let expected_checksum = checksum::compute(ledger_id, shard, realm, num);
    if present_checksum == expected_checksum {
        Ok(())
    } else {
        Err(Error::BadEntityId { shard, realm, num, present_checksum, expected_checksum })
    }
}

pub(crate) fn client_ledger_id(client: &Client) -> Result<LedgerId> {
    client.ledger_id().ok_or(Error::CannotPerformChecksumValidation)
}

pub(crate) fn format_with_checksum(
    shard: u64,
    realm: u64,
    num: u64,
    ledger_id: &LedgerId,
) -> String {
    format!("{shard}.{realm}.{num}-{}", checksum::compute(ledger_id, shard, realm, num))
}

// ============================================================================
// PARSING
// ============================================================================

/// First parsing pass: split the text without deciding what the last segment is.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PartialEntityId<'a> {
    /// `shard.realm.num[-checksum]`
    Num { shard: u64, realm: u64, num: u64, checksum: Option<Checksum> },
    /// `shard.realm.<text>` where `<text>` is not a number.
    Other { shard: u64, realm: u64, last: &'a str },
    /// `0x<hex>` with no dots.
    Evm(&'a str),
}

impl<'a> PartialEntityId<'a> {
    pub(crate) fn parse(s: &'a str) -> Result<Self> {
        if !s.contains('.') {
            return match s.strip_prefix("0x") {
                Some(hex) => Ok(Self::Evm(hex)),
                None => Err(Error::basic_parse(format!(
                    "expected `<shard>.<realm>.<num>`, got `{s}`"
                ))),
            };
        }

        let mut parts = s.split('.');
        let (Some(shard), Some(realm), Some(last), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::basic_parse(format!(
                "expected `<shard>.<realm>.<num>`, got `{s}`"
            )));
        };

        let shard = parse_segment(shard, "shard")?;
        let realm = parse_segment(realm, "realm")?;

        if last.is_empty() {
            return Err(Error::basic_parse(format!("missing entity number in `{s}`")));
        }

        match last.split_once('-') {
            Some((num, checksum)) => Ok(Self::Num {
                shard,
                realm,
                num: parse_segment(num, "num")?,
                checksum: Some(checksum.parse()?),
            }),
            None if last.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self::Num { shard, realm, num: parse_segment(last, "num")?, checksum: None })
            }
            None => Ok(Self::Other { shard, realm, last }),
        }
    }

    /// Accept only the numeric form.
    pub(crate) fn into_num(self, original: &str) -> Result<(u64, u64, u64, Option<Checksum>)> {
        match self {
            Self::Num { shard, realm, num, checksum } => Ok((shard, realm, num, checksum)),
            _ => Err(Error::basic_parse(format!(
                "expected `<shard>.<realm>.<num>[-<checksum>]`, got `{original}`"
            ))),
        }
    }
}

fn parse_segment(segment: &str, name: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::basic_parse(format!("{name} `{segment}` is not a number")));
    }

    segment.parse().map_err(Error::basic_parse)
}

// ============================================================================
// LONG-ZERO EVM PACKING
// ============================================================================

/// Pack `shard.realm.num` into the long-zero layout.
pub(crate) fn to_solidity_address(shard: u64, realm: u64, num: u64) -> Result<EvmAddress> {
    let shard = u32::try_from(shard).map_err(|_| {
        Error::basic_parse(format!("shard {shard} does not fit in a solidity address"))
    })?;

    let mut bytes = [0; 20];
    bytes[..4].copy_from_slice(&shard.to_be_bytes());
    bytes[4..12].copy_from_slice(&realm.to_be_bytes());
    bytes[12..].copy_from_slice(&num.to_be_bytes());

    Ok(EvmAddress::from(bytes))
}

/// Unpack a long-zero solidity address into `(shard, realm, num)`.
pub(crate) fn from_solidity_address(address: &str) -> Result<(u64, u64, u64)> {
    let address: EvmAddress = address.parse()?;
    let bytes = address.to_bytes();

    let mut shard = [0; 4];
    let mut realm = [0; 8];
    let mut num = [0; 8];
    shard.copy_from_slice(&bytes[..4]);
    realm.copy_from_slice(&bytes[4..12]);
    num.copy_from_slice(&bytes[12..]);

    Ok((
        u64::from(u32::from_be_bytes(shard)),
        u64::from_be_bytes(realm),
        u64::from_be_bytes(num),
    ))
}

/// `num` packed alone, with shard and realm zeroed.
pub(crate) fn long_zero_address(num: u64) -> EvmAddress {
    let mut bytes = [0; 20];
    bytes[12..].copy_from_slice(&num.to_be_bytes());
    EvmAddress::from(bytes)
}

/// The entity number of a long-zero address, if it is one.
pub(crate) fn long_zero_num(address: &EvmAddress) -> Option<u64> {
    let bytes = address.to_bytes();
    let (prefix, num) = bytes.split_at(12);

    if prefix.iter().any(|&b| b != 0) {
        return None;
    }

    let mut buf = [0; 8];
    buf.copy_from_slice(num);
    Some(u64::from_be_bytes(buf))
}

// ============================================================================
// PLAIN ENTITY IDS
// ============================================================================

/// Shared body of ids that are always `shard.realm.num`.
macro_rules! entity_id {
    (
        $(#[$meta:meta])*
        $name:ident, $proto:ident, $num_field:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Eq)]
        pub struct $name {
            /// Shard number.
            pub shard: u64,
            /// Realm number.
            pub realm: u64,
            /// Entity number.
            pub num: u64,
            /// Checksum parsed from text, if any.
            pub checksum: Option<$crate::entity_id::Checksum>,
        }

        impl $name {
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num, checksum: None }
            }

            pub fn from_bytes(bytes: &[u8]) -> $crate::Result<Self> {
                <Self as $crate::protobuf::FromProtobuf<_>>::from_protobuf(
                    $crate::protobuf::decode::<::hashgraph_proto::services::$proto>(bytes)?,
                )
            }

            pub fn to_bytes(&self) -> Vec<u8> {
                ::prost::Message::encode_to_vec(&$crate::protobuf::ToProtobuf::to_protobuf(self))
            }

            /// Parse a 40-hex long-zero address, with or without `0x`.
            pub fn from_solidity_address(address: &str) -> $crate::Result<Self> {
                let (shard, realm, num) = $crate::entity_id::from_solidity_address(address)?;
                Ok(Self::new(shard, realm, num))
            }

            /// Pack shard, realm and num into a long-zero address (no `0x`).
            pub fn to_solidity_address(&self) -> $crate::Result<String> {
                $crate::entity_id::to_solidity_address(self.shard, self.realm, self.num)
                    .map(|address| ::hex::encode(address.to_bytes()))
            }

            /// Build from a long-zero EVM address.
            pub fn from_evm_address(
                address: &$crate::EvmAddress,
                shard: u64,
                realm: u64,
            ) -> $crate::Result<Self> {
                $crate::entity_id::long_zero_num(address)
                    .map(|num| Self::new(shard, realm, num))
                    .ok_or_else(|| {
                        $crate::Error::basic_parse(format!(
                            "{address} is not a long-zero address for {}",
                            stringify!($name)
                        ))
                    })
            }

            /// The long-zero EVM address of `num`.
            pub fn to_evm_address(&self) -> $crate::EvmAddress {
                $crate::entity_id::long_zero_address(self.num)
            }

            pub fn to_string_with_checksum(&self, client: &$crate::Client) -> $crate::Result<String> {
                let ledger_id = $crate::entity_id::client_ledger_id(client)?;
                Ok($crate::entity_id::format_with_checksum(
                    self.shard, self.realm, self.num, &ledger_id,
                ))
            }

            pub fn validate_checksum(&self, client: &$crate::Client) -> $crate::Result<()> {
                let ledger_id = $crate::entity_id::client_ledger_id(client)?;
                $crate::entity_id::ValidateChecksums::validate_checksums(self, &ledger_id)
            }
        }

        impl $crate::entity_id::ValidateChecksums for $name {
            fn validate_checksums(&self, ledger_id: &$crate::LedgerId) -> $crate::Result<()> {
                $crate::entity_id::validate_checksum(
                    self.shard, self.realm, self.num, self.checksum, ledger_id,
                )
            }
        }

        // checksum is presentation metadata
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                (self.shard, self.realm, self.num) == (other.shard, other.realm, other.num)
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                (self.shard, self.realm, self.num).hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                (self.shard, self.realm, self.num).cmp(&(other.shard, other.realm, other.num))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "\"{self}\"")
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                let (shard, realm, num, checksum) =
                    $crate::entity_id::PartialEntityId::parse(s)?.into_num(s)?;
                Ok(Self { shard, realm, num, checksum })
            }
        }

        impl From<u64> for $name {
            fn from(num: u64) -> Self {
                Self::new(0, 0, num)
            }
        }

        impl $crate::protobuf::FromProtobuf<::hashgraph_proto::services::$proto> for $name {
            fn from_protobuf(pb: ::hashgraph_proto::services::$proto) -> $crate::Result<Self> {
                Ok(Self::new(pb.shard_num as u64, pb.realm_num as u64, pb.$num_field as u64))
            }
        }

        impl $crate::protobuf::ToProtobuf for $name {
            type Protobuf = ::hashgraph_proto::services::$proto;

            fn to_protobuf(&self) -> Self::Protobuf {
                ::hashgraph_proto::services::$proto {
                    shard_num: self.shard as i64,
                    realm_num: self.realm as i64,
                    $num_field: self.num as i64,
                }
            }
        }
    };
}

pub(crate) use entity_id;

/// A plain `shard.realm.num` triple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    pub fn checksum(&self, ledger_id: &LedgerId) -> Checksum {
        checksum::compute(ledger_id, self.shard, self.realm, self.num)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(
            PartialEntityId::parse("0.0.1001").unwrap(),
            PartialEntityId::Num { shard: 0, realm: 0, num: 1001, checksum: None }
        );
    }

    #[test]
    fn test_parse_with_checksum() {
        let PartialEntityId::Num { checksum, .. } = PartialEntityId::parse("0.0.123-vfmkw").unwrap()
        else {
            panic!("expected numeric form");
        };
        assert_eq!(checksum.unwrap().as_str(), "vfmkw");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["0.0.", "0.0.123-ntjl", "0.0.123-ntjl1", "1001", "a.0.1", "0.0.0.1", ".0.1", "0..1"]
        {
            assert!(PartialEntityId::parse(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_parse_other_and_evm() {
        assert_eq!(
            PartialEntityId::parse("1.2.abcdef").unwrap(),
            PartialEntityId::Other { shard: 1, realm: 2, last: "abcdef" }
        );
        assert_eq!(PartialEntityId::parse("0xabc").unwrap(), PartialEntityId::Evm("abc"));
    }

    #[test]
    fn test_validate_checksum() {
        let ledger = LedgerId::mainnet();
        assert!(validate_checksum(0, 0, 123, "vfmkw".parse().ok(), &ledger).is_ok());
        assert!(validate_checksum(0, 0, 123, None, &ledger).is_ok());

        let err = validate_checksum(0, 0, 123, "esxsf".parse().ok(), &ledger).unwrap_err();
        let Error::BadEntityId { expected_checksum, .. } = err else {
            panic!("expected BadEntityId, got {err:?}");
        };
        assert_eq!(expected_checksum.as_str(), "vfmkw");
    }

    #[test]
    fn test_solidity_address_layout() {
        let address = to_solidity_address(1, 2, 1234).unwrap();
        assert_eq!(hex::encode(address.to_bytes()), "00000001000000000000000200000000000004d2");
        assert_eq!(from_solidity_address("0x00000001000000000000000200000000000004d2").unwrap(), (1, 2, 1234));
        assert!(to_solidity_address(u64::from(u32::MAX) + 1, 0, 0).is_err());
    }

    #[test]
    fn test_long_zero_detection() {
        assert_eq!(long_zero_num(&long_zero_address(1234)), Some(1234));
        let address: EvmAddress = "0x302a300506032b6570032100114e6abc371b82da".parse().unwrap();
        assert_eq!(long_zero_num(&address), None);
    }
}
