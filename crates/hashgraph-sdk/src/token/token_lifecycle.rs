//! Kinds that act on a whole token: delete, pause and unpause.

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, TokenId};

macro_rules! token_only_transaction {
    ($(#[$doc:meta])* $tx:ident, $data:ident, $proto:ident) => {
        $(#[$doc])*
        pub type $tx = Transaction<$data>;

        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $data {
            token_id: Option<TokenId>,
        }

        impl $tx {
            pub fn get_token_id(&self) -> Option<TokenId> {
                self.data().token_id
            }

            pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
                self.data_mut()?.token_id = Some(id);
                Ok(self)
            }
        }

        impl TransactionData for $data {}

        impl ValidateChecksums for $data {
            fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
                self.token_id.validate_checksums(ledger_id)
            }
        }

        impl FromProtobuf<services::$proto> for $data {
            fn from_protobuf(pb: services::$proto) -> Result<Self> {
                Ok(Self { token_id: Option::from_protobuf(pb.token)? })
            }
        }

        impl ToProtobuf for $data {
            type Protobuf = services::$proto;

            fn to_protobuf(&self) -> Self::Protobuf {
                services::$proto { token: self.token_id.map(|id| id.to_protobuf()) }
            }
        }
    };
}

token_only_transaction!(
    /// Mark a token deleted. Signed by its admin key.
    TokenDeleteTransaction,
    TokenDeleteTransactionData,
    TokenDeleteTransactionBody
);

token_only_transaction!(
    /// Stop every operation on a token until it is unpaused.
    TokenPauseTransaction,
    TokenPauseTransactionData,
    TokenPauseTransactionBody
);

token_only_transaction!(
    TokenUnpauseTransaction,
    TokenUnpauseTransactionData,
    TokenUnpauseTransactionBody
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_token_encodes_as_none() {
        let tx = TokenPauseTransaction::new();
        assert_eq!(tx.data().to_protobuf().token, None);

        let mut tx = TokenDeleteTransaction::new();
        tx.token_id(TokenId::new(1, 2, 3)).unwrap();
        let decoded = TokenDeleteTransactionData::from_protobuf(tx.data().to_protobuf()).unwrap();
        assert_eq!(decoded, *tx.data());
    }
}
