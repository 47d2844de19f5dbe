use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, NftId, Result, TokenId};

/// Remove NFT allowances granted by an owner, for every spender.
pub type AccountAllowanceDeleteTransaction = Transaction<AccountAllowanceDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountAllowanceDeleteTransactionData {
    nft_allowances: Vec<NftRemoveAllowance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NftRemoveAllowance {
    pub token_id: TokenId,
    pub owner_account_id: AccountId,
    pub serials: Vec<i64>,
}

impl AccountAllowanceDeleteTransaction {
    pub fn get_nft_allowances(&self) -> &[NftRemoveAllowance] {
        &self.data().nft_allowances
    }

    /// Serials of the same token and owner share an entry.
    pub fn delete_all_token_nft_allowances(&mut self, nft_id: NftId, owner_account_id: AccountId) -> Result<&mut Self> {
        let data = self.data_mut()?;
        let serial = nft_id.serial as i64;

        let existing = data
            .nft_allowances
            .iter_mut()
            .find(|allowance| allowance.token_id == nft_id.token_id && allowance.owner_account_id == owner_account_id);

        match existing {
            Some(allowance) => allowance.serials.push(serial),
            None => data.nft_allowances.push(NftRemoveAllowance {
                token_id: nft_id.token_id,
                owner_account_id,
                serials: vec![serial],
            }),
        }

        Ok(self)
    }
}

impl TransactionData for AccountAllowanceDeleteTransactionData {}

impl ValidateChecksums for AccountAllowanceDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.nft_allowances.iter().try_for_each(|allowance| {
            allowance.token_id.validate_checksums(ledger_id)?;
            allowance.owner_account_id.validate_checksums(ledger_id)
        })
    }
}

impl FromProtobuf<services::NftRemoveAllowance> for NftRemoveAllowance {
    fn from_protobuf(pb: services::NftRemoveAllowance) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            owner_account_id: AccountId::from_protobuf(required(pb.owner, "owner")?)?,
            serials: pb.serial_numbers,
        })
    }
}

impl ToProtobuf for NftRemoveAllowance {
    type Protobuf = services::NftRemoveAllowance;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NftRemoveAllowance {
            token_id: Some(self.token_id.to_protobuf()),
            owner: Some(self.owner_account_id.to_protobuf()),
            serial_numbers: self.serials.clone(),
        }
    }
}

impl FromProtobuf<services::CryptoDeleteAllowanceTransactionBody> for AccountAllowanceDeleteTransactionData {
    fn from_protobuf(pb: services::CryptoDeleteAllowanceTransactionBody) -> Result<Self> {
        Ok(Self { nft_allowances: Vec::from_protobuf(pb.nft_allowances)? })
    }
}

impl ToProtobuf for AccountAllowanceDeleteTransactionData {
    type Protobuf = services::CryptoDeleteAllowanceTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoDeleteAllowanceTransactionBody { nft_allowances: self.nft_allowances.to_protobuf() }
    }
}
