use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::transfer::{token_transfers_from_protobuf, token_transfers_to_protobuf};
use crate::{AccountId, LedgerId, NftId, Result, TokenId, TokenNftTransfer, TokenTransfer};

/// Send tokens to accounts that may not be associated yet.
///
/// Transfers to unassociated receivers become pending airdrops that the
/// receiver claims later.
pub type TokenAirdropTransaction = Transaction<TokenAirdropTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenAirdropTransactionData {
    token_transfers: Vec<TokenTransfer>,
    nft_transfers: Vec<TokenNftTransfer>,
}

impl TokenAirdropTransactionData {
    fn push_token(&mut self, transfer: TokenTransfer) {
        let existing = self.token_transfers.iter_mut().find(|existing| {
            existing.token_id == transfer.token_id
                && existing.account_id == transfer.account_id
                && existing.is_approval == transfer.is_approval
        });

        match existing {
            Some(existing) => {
                existing.amount += transfer.amount;
                existing.expected_decimals = transfer.expected_decimals.or(existing.expected_decimals);
            }
            None => self.token_transfers.push(transfer),
        }
    }
}

impl TokenAirdropTransaction {
    pub fn get_token_transfers(&self) -> &[TokenTransfer] {
        &self.data().token_transfers
    }

    pub fn get_nft_transfers(&self) -> &[TokenNftTransfer] {
        &self.data().nft_transfers
    }

    pub fn token_transfer(&mut self, token_id: TokenId, account_id: AccountId, amount: i64) -> Result<&mut Self> {
        self.data_mut()?.push_token(TokenTransfer {
            token_id,
            account_id,
            amount,
            expected_decimals: None,
            is_approval: false,
        });
        Ok(self)
    }

    pub fn token_transfer_with_decimals(
        &mut self,
        token_id: TokenId,
        account_id: AccountId,
        amount: i64,
        decimals: u32,
    ) -> Result<&mut Self> {
        self.data_mut()?.push_token(TokenTransfer {
            token_id,
            account_id,
            amount,
            expected_decimals: Some(decimals),
            is_approval: false,
        });
        Ok(self)
    }

    pub fn approved_token_transfer(&mut self, token_id: TokenId, owner: AccountId, amount: i64) -> Result<&mut Self> {
        self.data_mut()?.push_token(TokenTransfer {
            token_id,
            account_id: owner,
            amount,
            expected_decimals: None,
            is_approval: true,
        });
        Ok(self)
    }

    pub fn nft_transfer(&mut self, nft_id: NftId, sender: AccountId, receiver: AccountId) -> Result<&mut Self> {
        self.data_mut()?.nft_transfers.push(TokenNftTransfer {
            token_id: nft_id.token_id,
            sender,
            receiver,
            serial: nft_id.serial,
            is_approval: false,
        });
        Ok(self)
    }

    pub fn approved_nft_transfer(&mut self, nft_id: NftId, sender: AccountId, receiver: AccountId) -> Result<&mut Self> {
        self.data_mut()?.nft_transfers.push(TokenNftTransfer {
            token_id: nft_id.token_id,
            sender,
            receiver,
            serial: nft_id.serial,
            is_approval: true,
        });
        Ok(self)
    }
}

impl TransactionData for TokenAirdropTransactionData {}

impl ValidateChecksums for TokenAirdropTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_transfers.validate_checksums(ledger_id)?;
        self.nft_transfers.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenAirdropTransactionBody> for TokenAirdropTransactionData {
    fn from_protobuf(pb: services::TokenAirdropTransactionBody) -> Result<Self> {
        let (token_transfers, nft_transfers) = token_transfers_from_protobuf(pb.token_transfers)?;
        Ok(Self { token_transfers, nft_transfers })
    }
}

impl ToProtobuf for TokenAirdropTransactionData {
    type Protobuf = services::TokenAirdropTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenAirdropTransactionBody {
            token_transfers: token_transfers_to_protobuf(&self.token_transfers, &self.nft_transfers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legs_group_per_token() {
        let (fungible, nft) = (TokenId::new(0, 0, 500), TokenId::new(0, 0, 400));
        let (sender, receiver) = (AccountId::new(0, 0, 1), AccountId::new(0, 0, 2));

        let mut tx = TokenAirdropTransaction::new();
        tx.token_transfer(fungible, sender.clone(), -10)
            .unwrap()
            .token_transfer(fungible, receiver.clone(), 10)
            .unwrap()
            .nft_transfer(nft.nft(1), sender, receiver)
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.token_transfers.len(), 2);
        // lists are ordered by token id
        assert_eq!(pb.token_transfers[0].nft_transfers.len(), 1);
        assert_eq!(pb.token_transfers[1].transfers.len(), 2);
        assert_eq!(TokenAirdropTransactionData::from_protobuf(pb).unwrap(), *tx.data());
    }
}
