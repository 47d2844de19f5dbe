use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, Hbar, LedgerId, NftId, Result, TokenId};

/// Allow spenders to transfer hbar, tokens or NFTs on an owner's behalf.
pub type AccountAllowanceApproveTransaction = Transaction<AccountAllowanceApproveTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountAllowanceApproveTransactionData {
    hbar_allowances: Vec<HbarAllowance>,
    token_allowances: Vec<TokenAllowance>,
    nft_allowances: Vec<NftAllowance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HbarAllowance {
    pub owner_account_id: AccountId,
    pub spender_account_id: AccountId,
    pub amount: Hbar,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAllowance {
    pub token_id: TokenId,
    pub owner_account_id: AccountId,
    pub spender_account_id: AccountId,
    pub amount: u64,
}

/// Serials of one token, or every serial when `approved_for_all` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NftAllowance {
    pub token_id: TokenId,
    pub owner_account_id: AccountId,
    pub spender_account_id: AccountId,
    pub serials: Vec<i64>,
    pub approved_for_all: Option<bool>,
    /// A spender with an all-serials allowance granting on the owner's behalf.
    pub delegating_spender_account_id: Option<AccountId>,
}

impl AccountAllowanceApproveTransaction {
    pub fn get_hbar_approvals(&self) -> &[HbarAllowance] {
        &self.data().hbar_allowances
    }

    pub fn get_token_approvals(&self) -> &[TokenAllowance] {
        &self.data().token_allowances
    }

    pub fn get_nft_approvals(&self) -> &[NftAllowance] {
        &self.data().nft_allowances
    }

    pub fn approve_hbar_allowance(
        &mut self,
        owner_account_id: AccountId,
        spender_account_id: AccountId,
        amount: Hbar,
    ) -> Result<&mut Self> {
        self.data_mut()?.hbar_allowances.push(HbarAllowance { owner_account_id, spender_account_id, amount });
        Ok(self)
    }

    pub fn approve_token_allowance(
        &mut self,
        token_id: TokenId,
        owner_account_id: AccountId,
        spender_account_id: AccountId,
        amount: u64,
    ) -> Result<&mut Self> {
        self.data_mut()?.token_allowances.push(TokenAllowance {
            token_id,
            owner_account_id,
            spender_account_id,
            amount,
        });
        Ok(self)
    }

    /// Approve one serial; serials for the same token, owner and spender share an entry.
    pub fn approve_token_nft_allowance(
        &mut self,
        nft_id: NftId,
        owner_account_id: AccountId,
        spender_account_id: AccountId,
    ) -> Result<&mut Self> {
        let data = self.data_mut()?;
        let serial = nft_id.serial as i64;

        let existing = data.nft_allowances.iter_mut().find(|allowance| {
            allowance.token_id == nft_id.token_id
                && allowance.owner_account_id == owner_account_id
                && allowance.spender_account_id == spender_account_id
                && allowance.approved_for_all.is_none()
        });

        match existing {
            Some(allowance) => allowance.serials.push(serial),
            None => data.nft_allowances.push(NftAllowance {
                token_id: nft_id.token_id,
                owner_account_id,
                spender_account_id,
                serials: vec![serial],
                approved_for_all: None,
                delegating_spender_account_id: None,
            }),
        }

        Ok(self)
    }

    pub fn approve_token_nft_allowance_all_serials(
        &mut self,
        token_id: TokenId,
        owner_account_id: AccountId,
        spender_account_id: AccountId,
    ) -> Result<&mut Self> {
        self.data_mut()?.nft_allowances.push(NftAllowance {
            token_id,
            owner_account_id,
            spender_account_id,
            serials: Vec::new(),
            approved_for_all: Some(true),
            delegating_spender_account_id: None,
        });
        Ok(self)
    }
}

impl TransactionData for AccountAllowanceApproveTransactionData {}

impl ValidateChecksums for AccountAllowanceApproveTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        for allowance in &self.hbar_allowances {
            allowance.owner_account_id.validate_checksums(ledger_id)?;
            allowance.spender_account_id.validate_checksums(ledger_id)?;
        }

        for allowance in &self.token_allowances {
            allowance.token_id.validate_checksums(ledger_id)?;
            allowance.owner_account_id.validate_checksums(ledger_id)?;
            allowance.spender_account_id.validate_checksums(ledger_id)?;
        }

        for allowance in &self.nft_allowances {
            allowance.token_id.validate_checksums(ledger_id)?;
            allowance.owner_account_id.validate_checksums(ledger_id)?;
            allowance.spender_account_id.validate_checksums(ledger_id)?;
            allowance.delegating_spender_account_id.validate_checksums(ledger_id)?;
        }

        Ok(())
    }
}

impl FromProtobuf<services::CryptoAllowance> for HbarAllowance {
    fn from_protobuf(pb: services::CryptoAllowance) -> Result<Self> {
        Ok(Self {
            owner_account_id: AccountId::from_protobuf(required(pb.owner, "owner")?)?,
            spender_account_id: AccountId::from_protobuf(required(pb.spender, "spender")?)?,
            amount: Hbar::from_tinybars(pb.amount),
        })
    }
}

impl ToProtobuf for HbarAllowance {
    type Protobuf = services::CryptoAllowance;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoAllowance {
            owner: Some(self.owner_account_id.to_protobuf()),
            spender: Some(self.spender_account_id.to_protobuf()),
            amount: self.amount.to_tinybars(),
        }
    }
}

impl FromProtobuf<services::TokenAllowance> for TokenAllowance {
    fn from_protobuf(pb: services::TokenAllowance) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            owner_account_id: AccountId::from_protobuf(required(pb.owner, "owner")?)?,
            spender_account_id: AccountId::from_protobuf(required(pb.spender, "spender")?)?,
            amount: pb.amount as u64,
        })
    }
}

impl ToProtobuf for TokenAllowance {
    type Protobuf = services::TokenAllowance;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenAllowance {
            token_id: Some(self.token_id.to_protobuf()),
            owner: Some(self.owner_account_id.to_protobuf()),
            spender: Some(self.spender_account_id.to_protobuf()),
            amount: self.amount as i64,
        }
    }
}

impl FromProtobuf<services::NftAllowance> for NftAllowance {
    fn from_protobuf(pb: services::NftAllowance) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            owner_account_id: AccountId::from_protobuf(required(pb.owner, "owner")?)?,
            spender_account_id: AccountId::from_protobuf(required(pb.spender, "spender")?)?,
            serials: pb.serial_numbers,
            approved_for_all: pb.approved_for_all,
            delegating_spender_account_id: Option::from_protobuf(pb.delegating_spender)?,
        })
    }
}

impl ToProtobuf for NftAllowance {
    type Protobuf = services::NftAllowance;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NftAllowance {
            token_id: Some(self.token_id.to_protobuf()),
            owner: Some(self.owner_account_id.to_protobuf()),
            spender: Some(self.spender_account_id.to_protobuf()),
            serial_numbers: self.serials.clone(),
            approved_for_all: self.approved_for_all,
            delegating_spender: self.delegating_spender_account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::CryptoApproveAllowanceTransactionBody> for AccountAllowanceApproveTransactionData {
    fn from_protobuf(pb: services::CryptoApproveAllowanceTransactionBody) -> Result<Self> {
        Ok(Self {
            hbar_allowances: Vec::from_protobuf(pb.crypto_allowances)?,
            token_allowances: Vec::from_protobuf(pb.token_allowances)?,
            nft_allowances: Vec::from_protobuf(pb.nft_allowances)?,
        })
    }
}

impl ToProtobuf for AccountAllowanceApproveTransactionData {
    type Protobuf = services::CryptoApproveAllowanceTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoApproveAllowanceTransactionBody {
            crypto_allowances: self.hbar_allowances.to_protobuf(),
            nft_allowances: self.nft_allowances.to_protobuf(),
            token_allowances: self.token_allowances.to_protobuf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nft_serials_share_an_entry() {
        let token = TokenId::new(0, 0, 5);
        let (owner, spender) = (AccountId::new(0, 0, 1), AccountId::new(0, 0, 2));

        let mut tx = AccountAllowanceApproveTransaction::new();
        tx.approve_token_nft_allowance(token.nft(1), owner.clone(), spender.clone())
            .unwrap()
            .approve_token_nft_allowance(token.nft(2), owner.clone(), spender.clone())
            .unwrap()
            .approve_token_nft_allowance_all_serials(token, owner, spender)
            .unwrap();

        let approvals = tx.get_nft_approvals();
        assert_eq!(approvals.len(), 2);
        assert_eq!(approvals[0].serials, vec![1, 2]);
        assert_eq!(approvals[1].approved_for_all, Some(true));
    }

    #[test]
    fn test_body_round_trip() {
        let mut tx = AccountAllowanceApproveTransaction::new();
        tx.approve_hbar_allowance(AccountId::new(0, 0, 1), AccountId::new(0, 0, 2), Hbar::new(1))
            .unwrap()
            .approve_token_allowance(TokenId::new(0, 0, 3), AccountId::new(0, 0, 1), AccountId::new(0, 0, 2), 7)
            .unwrap();

        let data = tx.data();
        assert_eq!(&AccountAllowanceApproveTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
