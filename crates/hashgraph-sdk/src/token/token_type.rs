use hashgraph_proto::services;

use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{Error, Result};

/// Fungible tokens share one balance per account; non-fungible ones are individual serials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenType {
    #[default]
    FungibleCommon,
    NonFungibleUnique,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenSupplyType {
    #[default]
    Infinite,
    /// Capped at `max_supply`.
    Finite,
}

/// Whether a token update checks the signatures of the keys it replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenKeyValidation {
    #[default]
    FullValidation,
    NoValidation,
}

macro_rules! proto_enum {
    ($name:ident <=> $proto:ident { $($variant:ident),* $(,)? }) => {
        impl FromProtobuf<services::$proto> for $name {
            fn from_protobuf(pb: services::$proto) -> Result<Self> {
                Ok(match pb {
                    $(services::$proto::$variant => Self::$variant,)*
                })
            }
        }

        impl ToProtobuf for $name {
            type Protobuf = services::$proto;

            fn to_protobuf(&self) -> Self::Protobuf {
                match self {
                    $(Self::$variant => services::$proto::$variant,)*
                }
            }
        }

        impl $name {
            pub(crate) fn from_i32(value: i32) -> Result<Self> {
                services::$proto::try_from(value)
                    .map_err(|_| Error::from_protobuf(format!(concat!("unknown ", stringify!($name), " {}"), value)))
                    .and_then(Self::from_protobuf)
            }
        }
    };
}

proto_enum!(TokenType <=> TokenType { FungibleCommon, NonFungibleUnique });
proto_enum!(TokenSupplyType <=> TokenSupplyType { Infinite, Finite });
proto_enum!(TokenKeyValidation <=> TokenKeyValidation { FullValidation, NoValidation });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(TokenType::NonFungibleUnique.to_protobuf() as i32, 1);
        assert_eq!(TokenSupplyType::from_i32(1).unwrap(), TokenSupplyType::Finite);
        assert_eq!(TokenKeyValidation::from_i32(0).unwrap(), TokenKeyValidation::FullValidation);
        assert!(matches!(TokenType::from_i32(7), Err(Error::FromProtobuf(_))));
    }
}
