//! # Hashgraph Proto
//!
//! Protobuf message types for the `proto` services package and the SDK-only
//! `TransactionList` envelope.
//!
//! The code under `generated/` follows prost-build output conventions
//! (`UpperCamel` message names, `snake_case` fields, one module per oneof) so
//! it can be swapped for build-time generated code without touching callers.
//!
//! ## Packages
//!
//! | Module | Package | Contents |
//! |--------|---------|----------|
//! | [`services`] | `proto` | ids, keys, signatures, transaction bodies, queries, receipts |
//! | [`sdk`] | `sdk` | `TransactionList` serialization envelope |

#![deny(unsafe_code)]

/// Services schema (`proto` package).
pub mod services {
    #![allow(clippy::all)]
    #![allow(missing_docs)]

    include!("generated/proto.rs");
}

/// SDK-local schema (`sdk` package).
pub mod sdk {
    #![allow(clippy::all)]
    #![allow(missing_docs)]

    include!("generated/sdk.rs");
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::services;

    #[test]
    fn account_id_wire_encoding() {
        let id = services::AccountId {
            shard_num: 0,
            realm_num: 0,
            account: Some(services::account_id::Account::AccountNum(1001)),
        };

        // field 3 (varint) = 1001
        assert_eq!(hex::encode(id.encode_to_vec()), "18e907");
    }

    #[test]
    fn zero_values_are_omitted() {
        let id = services::TokenId::default();
        assert!(id.encode_to_vec().is_empty());
    }

    #[test]
    fn transaction_list_decodes_what_it_encodes() {
        let list = super::sdk::TransactionList {
            transaction_list: vec![services::Transaction {
                signed_transaction_bytes: vec![1, 2, 3],
                ..Default::default()
            }],
        };

        let bytes = list.encode_to_vec();
        let decoded = super::sdk::TransactionList::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn unknown_response_codes_survive_decoding() {
        let receipt = services::TransactionReceipt { status: 9999, ..Default::default() };
        let decoded =
            services::TransactionReceipt::decode(receipt.encode_to_vec().as_slice()).unwrap();

        assert_eq!(decoded.status, 9999);
        assert!(services::ResponseCodeEnum::try_from(decoded.status).is_err());
    }
}
