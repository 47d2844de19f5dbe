//! Per-account token flags: freeze and KYC.
//!
//! All four kinds carry the same `(token, account)` pair and are signed by
//! the token's freeze or KYC key.

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, Result, TokenId};

macro_rules! token_account_transaction {
    ($(#[$doc:meta])* $tx:ident, $data:ident, $proto:ident) => {
        $(#[$doc])*
        pub type $tx = Transaction<$data>;

        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $data {
            token_id: Option<TokenId>,
            account_id: Option<AccountId>,
        }

        impl $tx {
            pub fn get_token_id(&self) -> Option<TokenId> {
                self.data().token_id
            }

            pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
                self.data_mut()?.token_id = Some(id);
                Ok(self)
            }

            pub fn get_account_id(&self) -> Option<&AccountId> {
                self.data().account_id.as_ref()
            }

            pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
                self.data_mut()?.account_id = Some(id);
                Ok(self)
            }
        }

        impl TransactionData for $data {}

        impl ValidateChecksums for $data {
            fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
                self.token_id.validate_checksums(ledger_id)?;
                self.account_id.validate_checksums(ledger_id)
            }
        }

        impl FromProtobuf<services::$proto> for $data {
            fn from_protobuf(pb: services::$proto) -> Result<Self> {
                Ok(Self {
                    token_id: Option::from_protobuf(pb.token)?,
                    account_id: Option::from_protobuf(pb.account)?,
                })
            }
        }

        impl ToProtobuf for $data {
            type Protobuf = services::$proto;

            fn to_protobuf(&self) -> Self::Protobuf {
                services::$proto {
                    token: self.token_id.map(|id| id.to_protobuf()),
                    account: self.account_id.as_ref().map(AccountId::to_protobuf),
                }
            }
        }
    };
}

token_account_transaction!(
    /// Freeze an account's balance of a token.
    TokenFreezeTransaction,
    TokenFreezeTransactionData,
    TokenFreezeAccountTransactionBody
);

token_account_transaction!(
    /// Unfreeze an account's balance of a token.
    TokenUnfreezeTransaction,
    TokenUnfreezeTransactionData,
    TokenUnfreezeAccountTransactionBody
);

token_account_transaction!(
    /// Grant KYC for an account on a token.
    TokenGrantKycTransaction,
    TokenGrantKycTransactionData,
    TokenGrantKycTransactionBody
);

token_account_transaction!(
    /// Revoke KYC for an account on a token.
    TokenRevokeKycTransaction,
    TokenRevokeKycTransactionData,
    TokenRevokeKycTransactionBody
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnyTransaction;

    #[test]
    fn test_kinds_stay_distinct_on_the_wire() {
        let mut freeze = TokenFreezeTransaction::new();
        freeze
            .token_id(TokenId::new(0, 0, 7))
            .unwrap()
            .account_id(AccountId::new(0, 0, 8))
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(crate::TransactionId::generate(AccountId::new(0, 0, 2)))
            .unwrap()
            .freeze()
            .unwrap();

        let any = AnyTransaction::from_bytes(&freeze.to_bytes().unwrap()).unwrap();
        let any = any.downcast::<TokenUnfreezeTransactionData>().unwrap_err();
        let decoded = any.downcast::<TokenFreezeTransactionData>().unwrap();
        assert_eq!(decoded.get_account_id(), Some(&AccountId::new(0, 0, 8)));
    }

    #[test]
    fn test_checksums() {
        let mut tx = TokenGrantKycTransaction::new();
        tx.account_id("0.0.123-esxsf".parse().unwrap()).unwrap();
        assert!(tx.data().validate_checksums(&LedgerId::testnet()).is_ok());
        assert!(tx.data().validate_checksums(&LedgerId::mainnet()).is_err());
    }
}
