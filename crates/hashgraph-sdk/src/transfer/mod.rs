//! # Transfers
//!
//! Hbar, fungible-token and NFT movements, as carried by transfer and
//! airdrop transactions and reported in transaction records.

mod transfer_transaction;

use std::collections::BTreeMap;

use hashgraph_proto::services;

pub use transfer_transaction::{TransferTransaction, TransferTransactionData};

use crate::entity_id::ValidateChecksums;
use crate::hooks::TransferHookCall;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, Hbar, LedgerId, Result, TokenId};

/// An hbar movement into (positive) or out of (negative) an account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transfer {
    pub account_id: AccountId,
    pub amount: Hbar,
    /// Spends an allowance granted to the payer.
    pub is_approval: bool,
    pub hook_call: Option<TransferHookCall>,
}

impl ValidateChecksums for Transfer {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.hook_call.as_ref().map_or(Ok(()), |call| call.hook_call().validate_checksums(ledger_id))
    }
}

impl FromProtobuf<services::AccountAmount> for Transfer {
    fn from_protobuf(pb: services::AccountAmount) -> Result<Self> {
        Ok(Self {
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
            amount: Hbar::from_tinybars(pb.amount),
            is_approval: pb.is_approval,
            hook_call: Option::from_protobuf(pb.hook_call)?,
        })
    }
}

impl ToProtobuf for Transfer {
    type Protobuf = services::AccountAmount;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::AccountAmount {
            account_id: Some(self.account_id.to_protobuf()),
            amount: self.amount.to_tinybars(),
            is_approval: self.is_approval,
            hook_call: self.hook_call.as_ref().map(TransferHookCall::to_protobuf),
        }
    }
}

/// A fungible-token movement, in the token's smallest unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenTransfer {
    pub token_id: TokenId,
    pub account_id: AccountId,
    pub amount: i64,
    /// Decimals the payer expects the token to have; checked by the network.
    pub expected_decimals: Option<u32>,
    pub is_approval: bool,
}

impl ValidateChecksums for TokenTransfer {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)?;
        self.account_id.validate_checksums(ledger_id)
    }
}

/// An NFT changing owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenNftTransfer {
    pub token_id: TokenId,
    pub sender: AccountId,
    pub receiver: AccountId,
    pub serial: u64,
    pub is_approval: bool,
}

impl ValidateChecksums for TokenNftTransfer {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)?;
        self.sender.validate_checksums(ledger_id)?;
        self.receiver.validate_checksums(ledger_id)
    }
}

/// Flatten per-token transfer lists.
pub(crate) fn token_transfers_from_protobuf(
    lists: Vec<services::TokenTransferList>,
) -> Result<(Vec<TokenTransfer>, Vec<TokenNftTransfer>)> {
    let mut token_transfers = Vec::new();
    let mut nft_transfers = Vec::new();

    for list in lists {
        let token_id = TokenId::from_protobuf(required(list.token, "token")?)?;

        for transfer in list.transfers {
            token_transfers.push(TokenTransfer {
                token_id,
                account_id: AccountId::from_protobuf(required(transfer.account_id, "account_id")?)?,
                amount: transfer.amount,
                expected_decimals: list.expected_decimals,
                is_approval: transfer.is_approval,
            });
        }

        for transfer in list.nft_transfers {
            nft_transfers.push(TokenNftTransfer {
                token_id,
                sender: AccountId::from_protobuf(required(transfer.sender_account_id, "sender_account_id")?)?,
                receiver: AccountId::from_protobuf(required(
                    transfer.receiver_account_id,
                    "receiver_account_id",
                )?)?,
                serial: transfer.serial_number as u64,
                is_approval: transfer.is_approval,
            });
        }
    }

    Ok((token_transfers, nft_transfers))
}

/// Group transfers into one list per token, ordered by token id.
pub(crate) fn token_transfers_to_protobuf(
    token_transfers: &[TokenTransfer],
    nft_transfers: &[TokenNftTransfer],
) -> Vec<services::TokenTransferList> {
    let mut lists: BTreeMap<TokenId, services::TokenTransferList> = BTreeMap::new();

    for transfer in token_transfers {
        let list = lists.entry(transfer.token_id).or_insert_with(|| services::TokenTransferList {
            token: Some(transfer.token_id.to_protobuf()),
            ..Default::default()
        });

        if transfer.expected_decimals.is_some() {
            list.expected_decimals = transfer.expected_decimals;
        }

        list.transfers.push(services::AccountAmount {
            account_id: Some(transfer.account_id.to_protobuf()),
            amount: transfer.amount,
            is_approval: transfer.is_approval,
            hook_call: None,
        });
    }

    for transfer in nft_transfers {
        let list = lists.entry(transfer.token_id).or_insert_with(|| services::TokenTransferList {
            token: Some(transfer.token_id.to_protobuf()),
            ..Default::default()
        });

        list.nft_transfers.push(services::NftTransfer {
            sender_account_id: Some(transfer.sender.to_protobuf()),
            receiver_account_id: Some(transfer.receiver.to_protobuf()),
            serial_number: transfer.serial as i64,
            is_approval: transfer.is_approval,
        });
    }

    lists.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lists_grouped_by_token() {
        let (a, b) = (TokenId::new(0, 0, 20), TokenId::new(0, 0, 10));
        let fungible = vec![
            TokenTransfer {
                token_id: a,
                account_id: AccountId::new(0, 0, 1),
                amount: -5,
                expected_decimals: Some(2),
                is_approval: false,
            },
            TokenTransfer {
                token_id: a,
                account_id: AccountId::new(0, 0, 2),
                amount: 5,
                expected_decimals: Some(2),
                is_approval: false,
            },
        ];
        let nfts = vec![TokenNftTransfer {
            token_id: b,
            sender: AccountId::new(0, 0, 1),
            receiver: AccountId::new(0, 0, 2),
            serial: 4,
            is_approval: true,
        }];

        let lists = token_transfers_to_protobuf(&fungible, &nfts);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].token, Some(b.to_protobuf()));
        assert_eq!(lists[1].expected_decimals, Some(2));

        let (decoded_fungible, decoded_nfts) = token_transfers_from_protobuf(lists).unwrap();
        assert_eq!(decoded_fungible, fungible);
        assert_eq!(decoded_nfts, nfts);
    }

    #[test]
    fn test_hbar_transfer_requires_account() {
        assert!(Transfer::from_protobuf(services::AccountAmount::default()).is_err());
    }
}
