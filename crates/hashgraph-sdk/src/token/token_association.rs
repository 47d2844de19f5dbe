use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, Result, TokenId};

/// Associate an account with tokens so it can hold them.
pub type TokenAssociateTransaction = Transaction<TokenAssociateTransactionData>;

/// Remove token associations from an account. Balances must be zero.
pub type TokenDissociateTransaction = Transaction<TokenDissociateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenAssociateTransactionData {
    account_id: Option<AccountId>,
    token_ids: Vec<TokenId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDissociateTransactionData {
    account_id: Option<AccountId>,
    token_ids: Vec<TokenId>,
}

/// An automatic association created as a side effect of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAssociation {
    pub token_id: TokenId,
    pub account_id: AccountId,
}

impl TokenAssociateTransaction {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_token_ids(&self) -> &[TokenId] {
        &self.data().token_ids
    }

    pub fn token_ids(&mut self, ids: impl IntoIterator<Item = TokenId>) -> Result<&mut Self> {
        self.data_mut()?.token_ids = ids.into_iter().collect();
        Ok(self)
    }
}

impl TokenDissociateTransaction {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_token_ids(&self) -> &[TokenId] {
        &self.data().token_ids
    }

    pub fn token_ids(&mut self, ids: impl IntoIterator<Item = TokenId>) -> Result<&mut Self> {
        self.data_mut()?.token_ids = ids.into_iter().collect();
        Ok(self)
    }
}

impl TransactionData for TokenAssociateTransactionData {}

impl TransactionData for TokenDissociateTransactionData {}

impl ValidateChecksums for TokenAssociateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.token_ids.validate_checksums(ledger_id)
    }
}

impl ValidateChecksums for TokenDissociateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.token_ids.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenAssociateTransactionBody> for TokenAssociateTransactionData {
    fn from_protobuf(pb: services::TokenAssociateTransactionBody) -> Result<Self> {
        Ok(Self { account_id: Option::from_protobuf(pb.account)?, token_ids: Vec::from_protobuf(pb.tokens)? })
    }
}

impl ToProtobuf for TokenAssociateTransactionData {
    type Protobuf = services::TokenAssociateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenAssociateTransactionBody {
            account: self.account_id.as_ref().map(AccountId::to_protobuf),
            tokens: self.token_ids.to_protobuf(),
        }
    }
}

impl FromProtobuf<services::TokenDissociateTransactionBody> for TokenDissociateTransactionData {
    fn from_protobuf(pb: services::TokenDissociateTransactionBody) -> Result<Self> {
        Ok(Self { account_id: Option::from_protobuf(pb.account)?, token_ids: Vec::from_protobuf(pb.tokens)? })
    }
}

impl ToProtobuf for TokenDissociateTransactionData {
    type Protobuf = services::TokenDissociateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenDissociateTransactionBody {
            account: self.account_id.as_ref().map(AccountId::to_protobuf),
            tokens: self.token_ids.to_protobuf(),
        }
    }
}

impl TokenAssociation {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TokenAssociation>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::TokenAssociation> for TokenAssociation {
    fn from_protobuf(pb: services::TokenAssociation) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
        })
    }
}

impl ToProtobuf for TokenAssociation {
    type Protobuf = services::TokenAssociation;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenAssociation {
            token_id: Some(self.token_id.to_protobuf()),
            account_id: Some(self.account_id.to_protobuf()),
        }
    }
}
