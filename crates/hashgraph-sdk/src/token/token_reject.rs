use hashgraph_proto::services;
use services::token_reference::TokenIdentifier;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, NftId, Result, TokenId};

/// Return tokens or NFTs to their treasury, bypassing custom fees.
pub type TokenRejectTransaction = Transaction<TokenRejectTransactionData>;

/// A whole fungible balance or a single NFT to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenReference {
    Fungible(TokenId),
    Nft(NftId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenRejectTransactionData {
    owner: Option<AccountId>,
    rejections: Vec<TokenReference>,
}

impl TokenRejectTransaction {
    pub fn get_owner(&self) -> Option<&AccountId> {
        self.data().owner.as_ref()
    }

    /// Defaults to the payer when unset.
    pub fn owner(&mut self, owner: AccountId) -> Result<&mut Self> {
        self.data_mut()?.owner = Some(owner);
        Ok(self)
    }

    pub fn get_token_ids(&self) -> Vec<TokenId> {
        self.data()
            .rejections
            .iter()
            .filter_map(|reference| match reference {
                TokenReference::Fungible(id) => Some(*id),
                TokenReference::Nft(_) => None,
            })
            .collect()
    }

    pub fn get_nft_ids(&self) -> Vec<NftId> {
        self.data()
            .rejections
            .iter()
            .filter_map(|reference| match reference {
                TokenReference::Nft(id) => Some(*id),
                TokenReference::Fungible(_) => None,
            })
            .collect()
    }

    pub fn add_token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.rejections.push(TokenReference::Fungible(id));
        Ok(self)
    }

    pub fn add_nft_id(&mut self, id: NftId) -> Result<&mut Self> {
        self.data_mut()?.rejections.push(TokenReference::Nft(id));
        Ok(self)
    }
}

impl TransactionData for TokenRejectTransactionData {}

impl ValidateChecksums for TokenRejectTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.owner.validate_checksums(ledger_id)?;
        self.rejections.iter().try_for_each(|reference| match reference {
            TokenReference::Fungible(id) => id.validate_checksums(ledger_id),
            TokenReference::Nft(id) => id.validate_checksums(ledger_id),
        })
    }
}

impl FromProtobuf<services::TokenReference> for TokenReference {
    fn from_protobuf(pb: services::TokenReference) -> Result<Self> {
        match required(pb.token_identifier, "token_identifier")? {
            TokenIdentifier::FungibleToken(id) => Ok(Self::Fungible(TokenId::from_protobuf(id)?)),
            TokenIdentifier::Nft(id) => Ok(Self::Nft(NftId::from_protobuf(id)?)),
        }
    }
}

impl ToProtobuf for TokenReference {
    type Protobuf = services::TokenReference;

    fn to_protobuf(&self) -> Self::Protobuf {
        let token_identifier = match self {
            Self::Fungible(id) => TokenIdentifier::FungibleToken(id.to_protobuf()),
            Self::Nft(id) => TokenIdentifier::Nft(id.to_protobuf()),
        };

        services::TokenReference { token_identifier: Some(token_identifier) }
    }
}

impl FromProtobuf<services::TokenRejectTransactionBody> for TokenRejectTransactionData {
    fn from_protobuf(pb: services::TokenRejectTransactionBody) -> Result<Self> {
        Ok(Self { owner: Option::from_protobuf(pb.owner)?, rejections: Vec::from_protobuf(pb.rejections)? })
    }
}

impl ToProtobuf for TokenRejectTransactionData {
    type Protobuf = services::TokenRejectTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenRejectTransactionBody {
            owner: self.owner.as_ref().map(AccountId::to_protobuf),
            rejections: self.rejections.to_protobuf(),
        }
    }
}
