use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use super::TokenKeyValidation;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, Key, LedgerId, Result, TokenId};

/// Change properties of a token. Empty names and unset fields are left unchanged.
pub type TokenUpdateTransaction = Transaction<TokenUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenUpdateTransactionData {
    token_id: Option<TokenId>,
    name: String,
    symbol: String,
    treasury_account_id: Option<AccountId>,
    admin_key: Option<Key>,
    kyc_key: Option<Key>,
    freeze_key: Option<Key>,
    wipe_key: Option<Key>,
    supply_key: Option<Key>,
    fee_schedule_key: Option<Key>,
    pause_key: Option<Key>,
    metadata_key: Option<Key>,
    auto_renew_account_id: Option<AccountId>,
    auto_renew_period: Option<Duration>,
    expiration_time: Option<DateTime<Utc>>,
    token_memo: Option<String>,
    metadata: Option<Vec<u8>>,
    key_verification_mode: TokenKeyValidation,
}

impl TokenUpdateTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.token_id = Some(id);
        Ok(self)
    }

    pub fn get_name(&self) -> &str {
        &self.data().name
    }

    pub fn name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.name = name.into();
        Ok(self)
    }

    pub fn get_symbol(&self) -> &str {
        &self.data().symbol
    }

    pub fn symbol(&mut self, symbol: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.symbol = symbol.into();
        Ok(self)
    }

    pub fn get_treasury_account_id(&self) -> Option<&AccountId> {
        self.data().treasury_account_id.as_ref()
    }

    pub fn treasury_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.treasury_account_id = Some(id);
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_kyc_key(&self) -> Option<&Key> {
        self.data().kyc_key.as_ref()
    }

    pub fn kyc_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.kyc_key = Some(key.into());
        Ok(self)
    }

    pub fn get_freeze_key(&self) -> Option<&Key> {
        self.data().freeze_key.as_ref()
    }

    pub fn freeze_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.freeze_key = Some(key.into());
        Ok(self)
    }

    pub fn get_wipe_key(&self) -> Option<&Key> {
        self.data().wipe_key.as_ref()
    }

    pub fn wipe_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.wipe_key = Some(key.into());
        Ok(self)
    }

    pub fn get_supply_key(&self) -> Option<&Key> {
        self.data().supply_key.as_ref()
    }

    pub fn supply_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.supply_key = Some(key.into());
        Ok(self)
    }

    pub fn get_fee_schedule_key(&self) -> Option<&Key> {
        self.data().fee_schedule_key.as_ref()
    }

    pub fn fee_schedule_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_schedule_key = Some(key.into());
        Ok(self)
    }

    pub fn get_pause_key(&self) -> Option<&Key> {
        self.data().pause_key.as_ref()
    }

    pub fn pause_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.pause_key = Some(key.into());
        Ok(self)
    }

    pub fn get_metadata_key(&self) -> Option<&Key> {
        self.data().metadata_key.as_ref()
    }

    pub fn metadata_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.metadata_key = Some(key.into());
        Ok(self)
    }

    pub fn get_auto_renew_account_id(&self) -> Option<&AccountId> {
        self.data().auto_renew_account_id.as_ref()
    }

    pub fn auto_renew_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_account_id = Some(id);
        Ok(self)
    }

    pub fn get_auto_renew_period(&self) -> Option<Duration> {
        self.data().auto_renew_period
    }

    pub fn auto_renew_period(&mut self, period: Duration) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_period = Some(period);
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }

    pub fn get_token_memo(&self) -> Option<&str> {
        self.data().token_memo.as_deref()
    }

    pub fn token_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.token_memo = Some(memo.into());
        Ok(self)
    }

    pub fn get_metadata(&self) -> Option<&[u8]> {
        self.data().metadata.as_deref()
    }

    pub fn metadata(&mut self, metadata: Vec<u8>) -> Result<&mut Self> {
        self.data_mut()?.metadata = Some(metadata);
        Ok(self)
    }

    pub fn get_key_verification_mode(&self) -> TokenKeyValidation {
        self.data().key_verification_mode
    }

    pub fn key_verification_mode(&mut self, mode: TokenKeyValidation) -> Result<&mut Self> {
        self.data_mut()?.key_verification_mode = mode;
        Ok(self)
    }
}

impl TransactionData for TokenUpdateTransactionData {}

impl ValidateChecksums for TokenUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)?;
        self.treasury_account_id.validate_checksums(ledger_id)?;
        self.auto_renew_account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenUpdateTransactionBody> for TokenUpdateTransactionData {
    fn from_protobuf(pb: services::TokenUpdateTransactionBody) -> Result<Self> {
        Ok(Self {
            token_id: Option::from_protobuf(pb.token)?,
            name: pb.name,
            symbol: pb.symbol,
            treasury_account_id: Option::from_protobuf(pb.treasury)?,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            kyc_key: Option::from_protobuf(pb.kyc_key)?,
            freeze_key: Option::from_protobuf(pb.freeze_key)?,
            wipe_key: Option::from_protobuf(pb.wipe_key)?,
            supply_key: Option::from_protobuf(pb.supply_key)?,
            fee_schedule_key: Option::from_protobuf(pb.fee_schedule_key)?,
            pause_key: Option::from_protobuf(pb.pause_key)?,
            metadata_key: Option::from_protobuf(pb.metadata_key)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            expiration_time: Option::from_protobuf(pb.expiry)?,
            token_memo: pb.memo,
            metadata: pb.metadata,
            key_verification_mode: TokenKeyValidation::from_i32(pb.key_verification_mode)?,
        })
    }
}

impl ToProtobuf for TokenUpdateTransactionData {
    type Protobuf = services::TokenUpdateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenUpdateTransactionBody {
            token: self.token_id.map(|id| id.to_protobuf()),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            treasury: self.treasury_account_id.as_ref().map(AccountId::to_protobuf),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            kyc_key: self.kyc_key.as_ref().map(Key::to_protobuf),
            freeze_key: self.freeze_key.as_ref().map(Key::to_protobuf),
            wipe_key: self.wipe_key.as_ref().map(Key::to_protobuf),
            supply_key: self.supply_key.as_ref().map(Key::to_protobuf),
            auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            expiry: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            memo: self.token_memo.clone(),
            fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
            pause_key: self.pause_key.as_ref().map(Key::to_protobuf),
            metadata: self.metadata.clone(),
            metadata_key: self.metadata_key.as_ref().map(Key::to_protobuf),
            key_verification_mode: self.key_verification_mode.to_protobuf() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;

    #[test]
    fn test_body_round_trip() {
        let mut tx = TokenUpdateTransaction::new();
        tx.token_id(TokenId::new(0, 0, 5005))
            .unwrap()
            .name("renamed")
            .unwrap()
            .wipe_key(PrivateKey::generate_ecdsa().public_key())
            .unwrap()
            .token_memo("")
            .unwrap()
            .key_verification_mode(TokenKeyValidation::NoValidation)
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.memo.as_deref(), Some(""));
        assert_eq!(pb.key_verification_mode, 1);
        assert_eq!(&TokenUpdateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
