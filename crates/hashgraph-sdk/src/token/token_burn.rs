use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, LedgerId, Result, TokenId};

/// Burn units or serials held by the treasury.
pub type TokenBurnTransaction = Transaction<TokenBurnTransactionData>;

/// Remove units or serials from a non-treasury account.
pub type TokenWipeTransaction = Transaction<TokenWipeTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenBurnTransactionData {
    token_id: Option<TokenId>,
    amount: u64,
    serials: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenWipeTransactionData {
    token_id: Option<TokenId>,
    account_id: Option<AccountId>,
    amount: u64,
    serials: Vec<i64>,
}

impl TokenBurnTransaction {
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

    pub fn get_serials(&self) -> &[i64] {
        &self.data().serials
    }

    pub fn serials(&mut self, serials: impl IntoIterator<Item = i64>) -> Result<&mut Self> {
        self.data_mut()?.serials = serials.into_iter().collect();
        Ok(self)
    }
}

impl TokenWipeTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.token_id = Some(id);
        Ok(self)
    }

    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_amount(&self) -> u64 {
        self.data().amount
    }

    pub fn amount(&mut self, amount: u64) -> Result<&mut Self> {
        self.data_mut()?.amount = amount;
        Ok(self)
    }

    pub fn get_serials(&self) -> &[i64] {
        &self.data().serials
    }

    pub fn serials(&mut self, serials: impl IntoIterator<Item = i64>) -> Result<&mut Self> {
        self.data_mut()?.serials = serials.into_iter().collect();
        Ok(self)
    }
}

impl TransactionData for TokenBurnTransactionData {}

impl TransactionData for TokenWipeTransactionData {}

impl ValidateChecksums for TokenBurnTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)
    }
}

impl ValidateChecksums for TokenWipeTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)?;
        self.account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenBurnTransactionBody> for TokenBurnTransactionData {
    fn from_protobuf(pb: services::TokenBurnTransactionBody) -> Result<Self> {
        Ok(Self { token_id: Option::from_protobuf(pb.token)?, amount: pb.amount, serials: pb.serial_numbers })
    }
}

impl ToProtobuf for TokenBurnTransactionData {
    type Protobuf = services::TokenBurnTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenBurnTransactionBody {
            token: self.token_id.map(|id| id.to_protobuf()),
            amount: self.amount,
            serial_numbers: self.serials.clone(),
        }
    }
}

impl FromProtobuf<services::TokenWipeAccountTransactionBody> for TokenWipeTransactionData {
    fn from_protobuf(pb: services::TokenWipeAccountTransactionBody) -> Result<Self> {
        Ok(Self {
            token_id: Option::from_protobuf(pb.token)?,
            account_id: Option::from_protobuf(pb.account)?,
            amount: pb.amount,
            serials: pb.serial_numbers,
        })
    }
}

impl ToProtobuf for TokenWipeTransactionData {
    type Protobuf = services::TokenWipeAccountTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenWipeAccountTransactionBody {
            token: self.token_id.map(|id| id.to_protobuf()),
            account: self.account_id.as_ref().map(AccountId::to_protobuf),
            amount: self.amount,
            serial_numbers: self.serials.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_serials() {
        let mut tx = TokenBurnTransaction::new();
        tx.token_id(TokenId::new(0, 0, 1)).unwrap().serials([1, 2, 3]).unwrap();
        assert_eq!(tx.data().to_protobuf().serial_numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_wipe_round_trip() {
        let mut tx = TokenWipeTransaction::new();
        tx.token_id(TokenId::new(0, 0, 1))
            .unwrap()
            .account_id(AccountId::new(0, 0, 44))
            .unwrap()
            .amount(10)
            .unwrap();

        let data = tx.data();
        assert_eq!(&TokenWipeTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
