use hashgraph_proto::services;
use services::pending_airdrop_id::TokenReference;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, NftId, Result, TokenId};

/// Accept pending airdrops; signed by each receiver.
pub type TokenClaimAirdropTransaction = Transaction<TokenClaimAirdropTransactionData>;

/// Withdraw pending airdrops; signed by each sender.
pub type TokenCancelAirdropTransaction = Transaction<TokenCancelAirdropTransactionData>;

/// What a pending airdrop carries: units of a fungible token, or one NFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAirdropToken {
    Fungible(TokenId),
    Nft(NftId),
}

/// Identifies one pending airdrop between a sender and a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingAirdropId {
    pub sender_id: AccountId,
    pub receiver_id: AccountId,
    pub token: PendingAirdropToken,
}

impl PendingAirdropId {
    pub fn new_fungible(sender_id: AccountId, receiver_id: AccountId, token_id: TokenId) -> Self {
        Self { sender_id, receiver_id, token: PendingAirdropToken::Fungible(token_id) }
    }

    pub fn new_nft(sender_id: AccountId, receiver_id: AccountId, nft_id: NftId) -> Self {
        Self { sender_id, receiver_id, token: PendingAirdropToken::Nft(nft_id) }
    }

    pub fn token_id(&self) -> Option<TokenId> {
        match self.token {
            PendingAirdropToken::Fungible(id) => Some(id),
            PendingAirdropToken::Nft(_) => None,
        }
    }

    pub fn nft_id(&self) -> Option<NftId> {
        match self.token {
            PendingAirdropToken::Nft(id) => Some(id),
            PendingAirdropToken::Fungible(_) => None,
        }
    }
}

/// A pending airdrop reported in a transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingAirdropRecord {
    pub pending_airdrop_id: PendingAirdropId,
    /// Amount for fungible airdrops; absent for NFTs.
    pub pending_airdrop_value: Option<u64>,
}

impl ValidateChecksums for PendingAirdropId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.sender_id.validate_checksums(ledger_id)?;
        self.receiver_id.validate_checksums(ledger_id)?;
        match &self.token {
            PendingAirdropToken::Fungible(id) => id.validate_checksums(ledger_id),
            PendingAirdropToken::Nft(id) => id.validate_checksums(ledger_id),
        }
    }
}

impl FromProtobuf<services::PendingAirdropId> for PendingAirdropId {
    fn from_protobuf(pb: services::PendingAirdropId) -> Result<Self> {
        let token = match required(pb.token_reference, "token_reference")? {
            TokenReference::FungibleTokenType(id) => PendingAirdropToken::Fungible(TokenId::from_protobuf(id)?),
            TokenReference::NonFungibleToken(id) => PendingAirdropToken::Nft(NftId::from_protobuf(id)?),
        };

        Ok(Self {
            sender_id: AccountId::from_protobuf(required(pb.sender_id, "sender_id")?)?,
            receiver_id: AccountId::from_protobuf(required(pb.receiver_id, "receiver_id")?)?,
            token,
        })
    }
}

impl ToProtobuf for PendingAirdropId {
    type Protobuf = services::PendingAirdropId;

    fn to_protobuf(&self) -> Self::Protobuf {
        let token_reference = match &self.token {
            PendingAirdropToken::Fungible(id) => TokenReference::FungibleTokenType(id.to_protobuf()),
            PendingAirdropToken::Nft(id) => TokenReference::NonFungibleToken(id.to_protobuf()),
        };

        services::PendingAirdropId {
            sender_id: Some(self.sender_id.to_protobuf()),
            receiver_id: Some(self.receiver_id.to_protobuf()),
            token_reference: Some(token_reference),
        }
    }
}

impl FromProtobuf<services::PendingAirdropRecord> for PendingAirdropRecord {
    fn from_protobuf(pb: services::PendingAirdropRecord) -> Result<Self> {
        Ok(Self {
            pending_airdrop_id: PendingAirdropId::from_protobuf(required(pb.pending_airdrop_id, "pending_airdrop_id")?)?,
            pending_airdrop_value: pb.pending_airdrop_value.map(|value| value.amount),
        })
    }
}

impl ToProtobuf for PendingAirdropRecord {
    type Protobuf = services::PendingAirdropRecord;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::PendingAirdropRecord {
            pending_airdrop_id: Some(self.pending_airdrop_id.to_protobuf()),
            pending_airdrop_value: self
                .pending_airdrop_value
                .map(|amount| services::PendingAirdropValue { amount }),
        }
    }
}

// ============================================================================
// CLAIM / CANCEL
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaimAirdropTransactionData {
    pending_airdrop_ids: Vec<PendingAirdropId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCancelAirdropTransactionData {
    pending_airdrop_ids: Vec<PendingAirdropId>,
}

impl TokenClaimAirdropTransaction {
    pub fn get_pending_airdrop_ids(&self) -> &[PendingAirdropId] {
        &self.data().pending_airdrop_ids
    }

    pub fn pending_airdrop_ids(&mut self, ids: impl IntoIterator<Item = PendingAirdropId>) -> Result<&mut Self> {
        self.data_mut()?.pending_airdrop_ids = ids.into_iter().collect();
        Ok(self)
    }

    pub fn add_pending_airdrop_id(&mut self, id: PendingAirdropId) -> Result<&mut Self> {
        self.data_mut()?.pending_airdrop_ids.push(id);
        Ok(self)
    }
}

impl TokenCancelAirdropTransaction {
    pub fn get_pending_airdrop_ids(&self) -> &[PendingAirdropId] {
        &self.data().pending_airdrop_ids
    }

    pub fn pending_airdrop_ids(&mut self, ids: impl IntoIterator<Item = PendingAirdropId>) -> Result<&mut Self> {
        self.data_mut()?.pending_airdrop_ids = ids.into_iter().collect();
        Ok(self)
    }

    pub fn add_pending_airdrop_id(&mut self, id: PendingAirdropId) -> Result<&mut Self> {
        self.data_mut()?.pending_airdrop_ids.push(id);
        Ok(self)
    }
}

impl TransactionData for TokenClaimAirdropTransactionData {}

impl TransactionData for TokenCancelAirdropTransactionData {}

impl ValidateChecksums for TokenClaimAirdropTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.pending_airdrop_ids.validate_checksums(ledger_id)
    }
}

impl ValidateChecksums for TokenCancelAirdropTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.pending_airdrop_ids.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenClaimAirdropTransactionBody> for TokenClaimAirdropTransactionData {
    fn from_protobuf(pb: services::TokenClaimAirdropTransactionBody) -> Result<Self> {
        Ok(Self { pending_airdrop_ids: Vec::from_protobuf(pb.pending_airdrops)? })
    }
}

impl ToProtobuf for TokenClaimAirdropTransactionData {
    type Protobuf = services::TokenClaimAirdropTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenClaimAirdropTransactionBody { pending_airdrops: self.pending_airdrop_ids.to_protobuf() }
    }
}

impl FromProtobuf<services::TokenCancelAirdropTransactionBody> for TokenCancelAirdropTransactionData {
    fn from_protobuf(pb: services::TokenCancelAirdropTransactionBody) -> Result<Self> {
        Ok(Self { pending_airdrop_ids: Vec::from_protobuf(pb.pending_airdrops)? })
    }
}

impl ToProtobuf for TokenCancelAirdropTransactionData {
    type Protobuf = services::TokenCancelAirdropTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenCancelAirdropTransactionBody { pending_airdrops: self.pending_airdrop_ids.to_protobuf() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> [PendingAirdropId; 2] {
        let (sender, receiver) = (AccountId::new(0, 0, 10), AccountId::new(0, 0, 11));
        [
            PendingAirdropId::new_fungible(sender.clone(), receiver.clone(), TokenId::new(0, 0, 7)),
            PendingAirdropId::new_nft(sender, receiver, TokenId::new(0, 0, 8).nft(2)),
        ]
    }

    #[test]
    fn test_token_reference_is_exclusive() {
        let [fungible, nft] = ids();
        assert_eq!(fungible.token_id(), Some(TokenId::new(0, 0, 7)));
        assert_eq!(fungible.nft_id(), None);
        assert_eq!(nft.nft_id().map(|id| id.serial), Some(2));
        assert_eq!(nft.token_id(), None);
    }

    #[test]
    fn test_missing_reference_rejected() {
        let mut pb = ids()[0].to_protobuf();
        pb.token_reference = None;
        assert!(PendingAirdropId::from_protobuf(pb).is_err());
    }

    #[test]
    fn test_claim_and_cancel_round_trip() {
        let mut claim = TokenClaimAirdropTransaction::new();
        claim.pending_airdrop_ids(ids()).unwrap();
        let data = claim.data();
        assert_eq!(&TokenClaimAirdropTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);

        let mut cancel = TokenCancelAirdropTransaction::new();
        cancel.add_pending_airdrop_id(ids()[1].clone()).unwrap();
        let data = cancel.data();
        assert_eq!(&TokenCancelAirdropTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }

    #[test]
    fn test_record_value() {
        let record = PendingAirdropRecord { pending_airdrop_id: ids()[0].clone(), pending_airdrop_value: Some(30) };
        assert_eq!(PendingAirdropRecord::from_protobuf(record.to_protobuf()).unwrap(), record);
    }
}
