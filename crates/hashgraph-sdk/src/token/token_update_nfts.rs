use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, TokenId};

/// Replace the metadata of existing NFTs. Signed by the metadata key.
pub type TokenUpdateNftsTransaction = Transaction<TokenUpdateNftsTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenUpdateNftsTransactionData {
    token_id: Option<TokenId>,
    serials: Vec<i64>,
    metadata: Option<Vec<u8>>,
}

impl TokenUpdateNftsTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.token_id = Some(id);
        Ok(self)
    }

    pub fn get_serials(&self) -> &[i64] {
        &self.data().serials
    }

    pub fn serials(&mut self, serials: impl IntoIterator<Item = i64>) -> Result<&mut Self> {
        self.data_mut()?.serials = serials.into_iter().collect();
        Ok(self)
    }

    pub fn get_metadata(&self) -> Option<&[u8]> {
        self.data().metadata.as_deref()
    }

    pub fn metadata(&mut self, metadata: Vec<u8>) -> Result<&mut Self> {
        self.data_mut()?.metadata = Some(metadata);
        Ok(self)
    }
}

impl TransactionData for TokenUpdateNftsTransactionData {}

impl ValidateChecksums for TokenUpdateNftsTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenUpdateNftsTransactionBody> for TokenUpdateNftsTransactionData {
    fn from_protobuf(pb: services::TokenUpdateNftsTransactionBody) -> Result<Self> {
        Ok(Self { token_id: Option::from_protobuf(pb.token)?, serials: pb.serial_numbers, metadata: pb.metadata })
    }
}

impl ToProtobuf for TokenUpdateNftsTransactionData {
    type Protobuf = services::TokenUpdateNftsTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenUpdateNftsTransactionBody {
            token: self.token_id.map(|id| id.to_protobuf()),
            serial_numbers: self.serials.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metadata_is_kept_distinct_from_unset() {
        let mut tx = TokenUpdateNftsTransaction::new();
        tx.token_id(TokenId::new(0, 0, 3)).unwrap().serials([4]).unwrap();
        assert_eq!(tx.data().to_protobuf().metadata, None);

        tx.metadata(Vec::new()).unwrap();
        let pb = tx.data().to_protobuf();
        assert_eq!(pb.metadata, Some(Vec::new()));
        assert_eq!(TokenUpdateNftsTransactionData::from_protobuf(pb).unwrap(), *tx.data());
    }
}
