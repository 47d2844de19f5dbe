use hashgraph_proto::services;

use super::{token_transfers_from_protobuf, token_transfers_to_protobuf, TokenNftTransfer, TokenTransfer, Transfer};
use crate::entity_id::ValidateChecksums;
use crate::hooks::TransferHookCall;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, Hbar, LedgerId, NftId, Result, TokenId};

/// Move hbar, fungible tokens and NFTs between accounts.
///
/// Hbar and each token's fungible legs must net to zero; the network
/// enforces this.
pub type TransferTransaction = Transaction<TransferTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferTransactionData {
    transfers: Vec<Transfer>,
    token_transfers: Vec<TokenTransfer>,
    nft_transfers: Vec<TokenNftTransfer>,
}

impl TransferTransactionData {
    fn push_hbar(&mut self, transfer: Transfer) {
        // legs for the same account and approval flag merge, unless a hook rides on either
        let existing = self.transfers.iter_mut().find(|existing| {
            existing.account_id == transfer.account_id
                && existing.is_approval == transfer.is_approval
                && existing.hook_call.is_none()
                && transfer.hook_call.is_none()
        });

        match existing {
            Some(existing) => existing.amount = existing.amount + transfer.amount,
            None => self.transfers.push(transfer),
        }
    }

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

impl TransferTransaction {
    pub fn get_hbar_transfers(&self) -> &[Transfer] {
        &self.data().transfers
    }

    pub fn get_token_transfers(&self) -> &[TokenTransfer] {
        &self.data().token_transfers
    }

    pub fn get_nft_transfers(&self) -> &[TokenNftTransfer] {
        &self.data().nft_transfers
    }

    pub fn hbar_transfer(&mut self, account_id: AccountId, amount: Hbar) -> Result<&mut Self> {
        self.data_mut()?.push_hbar(Transfer { account_id, amount, is_approval: false, hook_call: None });
        Ok(self)
    }

    /// Spend from `owner` under an allowance granted to the payer.
    pub fn approved_hbar_transfer(&mut self, owner: AccountId, amount: Hbar) -> Result<&mut Self> {
        self.data_mut()?.push_hbar(Transfer { account_id: owner, amount, is_approval: true, hook_call: None });
        Ok(self)
    }

    /// An hbar leg that invokes an allowance hook of `account_id`.
    pub fn hbar_transfer_with_hook(
        &mut self,
        account_id: AccountId,
        amount: Hbar,
        hook_call: TransferHookCall,
    ) -> Result<&mut Self> {
        self.data_mut()?.push_hbar(Transfer {
            account_id,
            amount,
            is_approval: false,
            hook_call: Some(hook_call),
        });
        Ok(self)
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

    pub fn approved_token_transfer(
        &mut self,
        token_id: TokenId,
        owner: AccountId,
        amount: i64,
    ) -> Result<&mut Self> {
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

    pub fn approved_nft_transfer(
        &mut self,
        nft_id: NftId,
        sender: AccountId,
        receiver: AccountId,
    ) -> Result<&mut Self> {
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

impl TransactionData for TransferTransactionData {}

impl ValidateChecksums for TransferTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.transfers.validate_checksums(ledger_id)?;
        self.token_transfers.validate_checksums(ledger_id)?;
        self.nft_transfers.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoTransferTransactionBody> for TransferTransactionData {
    fn from_protobuf(pb: services::CryptoTransferTransactionBody) -> Result<Self> {
        let transfers = Vec::from_protobuf(pb.transfers.unwrap_or_default().account_amounts)?;
        let (token_transfers, nft_transfers) = token_transfers_from_protobuf(pb.token_transfers)?;

        Ok(Self { transfers, token_transfers, nft_transfers })
    }
}

impl ToProtobuf for TransferTransactionData {
    type Protobuf = services::CryptoTransferTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoTransferTransactionBody {
            transfers: Some(services::TransferList { account_amounts: self.transfers.to_protobuf() }),
            token_transfers: token_transfers_to_protobuf(&self.token_transfers, &self.nft_transfers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{EvmHookCall, HookCall};

    #[test]
    fn test_hbar_legs_merge_per_account() {
        let mut tx = TransferTransaction::new();
        tx.hbar_transfer(AccountId::new(0, 0, 2), Hbar::new(-1))
            .unwrap()
            .hbar_transfer(AccountId::new(0, 0, 2), Hbar::new(-2))
            .unwrap()
            .hbar_transfer(AccountId::new(0, 0, 3), Hbar::new(3))
            .unwrap();

        let transfers = tx.get_hbar_transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].amount, Hbar::new(-3));
    }

    #[test]
    fn test_body_round_trip() {
        let token = TokenId::new(0, 0, 5005);
        let hook = TransferHookCall::PrePostTx(HookCall::new(1, EvmHookCall { data: vec![1], gas_limit: 10 }));

        let mut tx = TransferTransaction::new();
        tx.hbar_transfer_with_hook(AccountId::new(0, 0, 2), Hbar::new(-1), hook)
            .unwrap()
            .hbar_transfer(AccountId::new(0, 0, 3), Hbar::new(1))
            .unwrap()
            .token_transfer_with_decimals(token, AccountId::new(0, 0, 2), -10, 3)
            .unwrap()
            .token_transfer_with_decimals(token, AccountId::new(0, 0, 3), 10, 3)
            .unwrap()
            .nft_transfer(TokenId::new(0, 0, 6006).nft(1), AccountId::new(0, 0, 2), AccountId::new(0, 0, 3))
            .unwrap();

        let data = tx.data();
        assert_eq!(&TransferTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
