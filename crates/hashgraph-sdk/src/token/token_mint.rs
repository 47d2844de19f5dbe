use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, TokenId};

/// Mint fungible units (`amount`) or new NFTs (one per `metadata` entry).
pub type TokenMintTransaction = Transaction<TokenMintTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMintTransactionData {
    token_id: Option<TokenId>,
    amount: u64,
    metadata: Vec<Vec<u8>>,
}

impl TokenMintTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.token_id = Some(id);
        Ok(self)
    }

    pub fn get_amount(&self) -> u64 {
        self.data().amount
    }

    pub fn amount(&mut self, amount: u64) -> Result<&mut Self> {
        self.data_mut()?.amount = amount;
        Ok(self)
    }

    pub fn get_metadata(&self) -> &[Vec<u8>] {
        &self.data().metadata
    }

    pub fn metadata(&mut self, metadata: impl IntoIterator<Item = Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.metadata = metadata.into_iter().collect();
        Ok(self)
    }

    pub fn add_metadata(&mut self, metadata: Vec<u8>) -> Result<&mut Self> {
        self.data_mut()?.metadata.push(metadata);
        Ok(self)
    }
}

impl TransactionData for TokenMintTransactionData {}

impl ValidateChecksums for TokenMintTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenMintTransactionBody> for TokenMintTransactionData {
    fn from_protobuf(pb: services::TokenMintTransactionBody) -> Result<Self> {
        Ok(Self { token_id: Option::from_protobuf(pb.token)?, amount: pb.amount, metadata: pb.metadata })
    }
}

impl ToProtobuf for TokenMintTransactionData {
    type Protobuf = services::TokenMintTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenMintTransactionBody {
            token: self.token_id.map(|id| id.to_protobuf()),
            amount: self.amount,
            metadata: self.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nft_metadata_round_trip() {
        let mut tx = TokenMintTransaction::new();
        tx.token_id(TokenId::new(0, 0, 33))
            .unwrap()
            .add_metadata(b"ipfs://a".to_vec())
            .unwrap()
            .add_metadata(b"ipfs://b".to_vec())
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.metadata.len(), 2);
        assert_eq!(TokenMintTransactionData::from_protobuf(pb).unwrap(), *tx.data());
    }
}
