use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, Result};

/// Delete an account, moving its remaining hbar to `transfer_account_id`.
pub type AccountDeleteTransaction = Transaction<AccountDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDeleteTransactionData {
    account_id: Option<AccountId>,
    transfer_account_id: Option<AccountId>,
}

impl AccountDeleteTransaction {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_transfer_account_id(&self) -> Option<&AccountId> {
        self.data().transfer_account_id.as_ref()
    }

    pub fn transfer_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.transfer_account_id = Some(id);
        Ok(self)
    }
}

impl TransactionData for AccountDeleteTransactionData {}

impl ValidateChecksums for AccountDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.transfer_account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoDeleteTransactionBody> for AccountDeleteTransactionData {
    fn from_protobuf(pb: services::CryptoDeleteTransactionBody) -> Result<Self> {
        Ok(Self {
            account_id: Option::from_protobuf(pb.delete_account_id)?,
            transfer_account_id: Option::from_protobuf(pb.transfer_account_id)?,
        })
    }
}

impl ToProtobuf for AccountDeleteTransactionData {
    type Protobuf = services::CryptoDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoDeleteTransactionBody {
            transfer_account_id: self.transfer_account_id.as_ref().map(AccountId::to_protobuf),
            delete_account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_checksums_checked_on_both_accounts() {
        let mut tx = AccountDeleteTransaction::new();
        tx.account_id("0.0.123-esxsf".parse().unwrap())
            .unwrap()
            .transfer_account_id("0.0.123-vfmkw".parse().unwrap())
            .unwrap();

        assert!(tx.data().validate_checksums(&LedgerId::mainnet()).is_err());
        assert!(matches!(
            tx.data().validate_checksums(&LedgerId::testnet()),
            Err(Error::BadEntityId { .. })
        ));
    }
}
