use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use super::{TokenSupplyType, TokenType};
use crate::account::DEFAULT_AUTO_RENEW_PERIOD;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, CustomFee, Hbar, Key, LedgerId, Result};

/// Create a new fungible or non-fungible token.
pub type TokenCreateTransaction = Transaction<TokenCreateTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenCreateTransactionData {
    name: String,
    symbol: String,
    decimals: u32,
    initial_supply: u64,
    treasury_account_id: Option<AccountId>,
    admin_key: Option<Key>,
    kyc_key: Option<Key>,
    freeze_key: Option<Key>,
    wipe_key: Option<Key>,
    supply_key: Option<Key>,
    fee_schedule_key: Option<Key>,
    pause_key: Option<Key>,
    metadata_key: Option<Key>,
    freeze_default: bool,
    expiration_time: Option<DateTime<Utc>>,
    auto_renew_account_id: Option<AccountId>,
    auto_renew_period: Option<Duration>,
    token_memo: String,
    token_type: TokenType,
    token_supply_type: TokenSupplyType,
    max_supply: u64,
    custom_fees: Vec<CustomFee>,
    metadata: Vec<u8>,
}

impl Default for TokenCreateTransactionData {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            decimals: 0,
            initial_supply: 0,
            treasury_account_id: None,
            admin_key: None,
            kyc_key: None,
            freeze_key: None,
            wipe_key: None,
            supply_key: None,
            fee_schedule_key: None,
            pause_key: None,
            metadata_key: None,
            freeze_default: false,
            expiration_time: None,
            auto_renew_account_id: None,
            auto_renew_period: Some(DEFAULT_AUTO_RENEW_PERIOD),
            token_memo: String::new(),
            token_type: TokenType::FungibleCommon,
            token_supply_type: TokenSupplyType::Infinite,
            max_supply: 0,
            custom_fees: Vec::new(),
            metadata: Vec::new(),
        }
    }
}

macro_rules! key_accessors {
    ($($get:ident / $set:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $get(&self) -> Option<&Key> {
                self.data().$field.as_ref()
            }

            pub fn $set(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
                self.data_mut()?.$field = Some(key.into());
                Ok(self)
            }
        )*
    };
}

impl TokenCreateTransaction {
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

    pub fn get_decimals(&self) -> u32 {
        self.data().decimals
    }

    pub fn decimals(&mut self, decimals: u32) -> Result<&mut Self> {
        self.data_mut()?.decimals = decimals;
        Ok(self)
    }

    pub fn get_initial_supply(&self) -> u64 {
        self.data().initial_supply
    }

    /// Units placed in the treasury; must be zero for non-fungible tokens.
    pub fn initial_supply(&mut self, supply: u64) -> Result<&mut Self> {
        self.data_mut()?.initial_supply = supply;
        Ok(self)
    }

    pub fn get_treasury_account_id(&self) -> Option<&AccountId> {
        self.data().treasury_account_id.as_ref()
    }

    pub fn treasury_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.treasury_account_id = Some(id);
        Ok(self)
    }

    key_accessors! {
        get_admin_key / admin_key => admin_key,
        get_kyc_key / kyc_key => kyc_key,
        get_freeze_key / freeze_key => freeze_key,
        get_wipe_key / wipe_key => wipe_key,
        get_supply_key / supply_key => supply_key,
        get_fee_schedule_key / fee_schedule_key => fee_schedule_key,
        get_pause_key / pause_key => pause_key,
        get_metadata_key / metadata_key => metadata_key,
    }

    pub fn get_freeze_default(&self) -> bool {
        self.data().freeze_default
    }

    pub fn freeze_default(&mut self, freeze: bool) -> Result<&mut Self> {
        self.data_mut()?.freeze_default = freeze;
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    /// A fixed expiry replaces the auto-renew period.
    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        let data = self.data_mut()?;
        data.expiration_time = Some(at);
        data.auto_renew_period = None;
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

    pub fn get_token_memo(&self) -> &str {
        &self.data().token_memo
    }

    pub fn token_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.token_memo = memo.into();
        Ok(self)
    }

    pub fn get_token_type(&self) -> TokenType {
        self.data().token_type
    }

    pub fn token_type(&mut self, token_type: TokenType) -> Result<&mut Self> {
        self.data_mut()?.token_type = token_type;
        Ok(self)
    }

    pub fn get_token_supply_type(&self) -> TokenSupplyType {
        self.data().token_supply_type
    }

    pub fn token_supply_type(&mut self, supply_type: TokenSupplyType) -> Result<&mut Self> {
        self.data_mut()?.token_supply_type = supply_type;
        Ok(self)
    }

    pub fn get_max_supply(&self) -> u64 {
        self.data().max_supply
    }

    pub fn max_supply(&mut self, max: u64) -> Result<&mut Self> {
        self.data_mut()?.max_supply = max;
        Ok(self)
    }

    pub fn get_custom_fees(&self) -> &[CustomFee] {
        &self.data().custom_fees
    }

    pub fn custom_fees(&mut self, fees: impl IntoIterator<Item = CustomFee>) -> Result<&mut Self> {
        self.data_mut()?.custom_fees = fees.into_iter().collect();
        Ok(self)
    }

    pub fn get_metadata(&self) -> &[u8] {
        &self.data().metadata
    }

    pub fn metadata(&mut self, metadata: Vec<u8>) -> Result<&mut Self> {
        self.data_mut()?.metadata = metadata;
        Ok(self)
    }
}

impl TransactionData for TokenCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(40)
    }
}

impl ValidateChecksums for TokenCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.treasury_account_id.validate_checksums(ledger_id)?;
        self.auto_renew_account_id.validate_checksums(ledger_id)?;
        self.custom_fees.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenCreateTransactionBody> for TokenCreateTransactionData {
    fn from_protobuf(pb: services::TokenCreateTransactionBody) -> Result<Self> {
        Ok(Self {
            name: pb.name,
            symbol: pb.symbol,
            decimals: pb.decimals,
            initial_supply: pb.initial_supply,
            treasury_account_id: Option::from_protobuf(pb.treasury)?,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            kyc_key: Option::from_protobuf(pb.kyc_key)?,
            freeze_key: Option::from_protobuf(pb.freeze_key)?,
            wipe_key: Option::from_protobuf(pb.wipe_key)?,
            supply_key: Option::from_protobuf(pb.supply_key)?,
            fee_schedule_key: Option::from_protobuf(pb.fee_schedule_key)?,
            pause_key: Option::from_protobuf(pb.pause_key)?,
            metadata_key: Option::from_protobuf(pb.metadata_key)?,
            freeze_default: pb.freeze_default,
            expiration_time: Option::from_protobuf(pb.expiry)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            token_memo: pb.memo,
            token_type: TokenType::from_i32(pb.token_type)?,
            token_supply_type: TokenSupplyType::from_i32(pb.supply_type)?,
            max_supply: pb.max_supply as u64,
            custom_fees: Vec::from_protobuf(pb.custom_fees)?,
            metadata: pb.metadata,
        })
    }
}

impl ToProtobuf for TokenCreateTransactionData {
    type Protobuf = services::TokenCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenCreateTransactionBody {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            initial_supply: self.initial_supply,
            treasury: self.treasury_account_id.as_ref().map(AccountId::to_protobuf),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            kyc_key: self.kyc_key.as_ref().map(Key::to_protobuf),
            freeze_key: self.freeze_key.as_ref().map(Key::to_protobuf),
            wipe_key: self.wipe_key.as_ref().map(Key::to_protobuf),
            supply_key: self.supply_key.as_ref().map(Key::to_protobuf),
            freeze_default: self.freeze_default,
            expiry: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            memo: self.token_memo.clone(),
            token_type: self.token_type.to_protobuf() as i32,
            supply_type: self.token_supply_type.to_protobuf() as i32,
            max_supply: self.max_supply as i64,
            fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
            custom_fees: self.custom_fees.to_protobuf(),
            pause_key: self.pause_key.as_ref().map(Key::to_protobuf),
            metadata: self.metadata.clone(),
            metadata_key: self.metadata_key.as_ref().map(Key::to_protobuf),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::{Fee, FixedFee};

    #[test]
    fn test_expiration_clears_auto_renew() {
        let mut tx = TokenCreateTransaction::new();
        assert_eq!(tx.get_auto_renew_period(), Some(DEFAULT_AUTO_RENEW_PERIOD));

        tx.expiration_time(DateTime::from_timestamp(1_900_000_000, 0).unwrap()).unwrap();
        assert_eq!(tx.get_auto_renew_period(), None);
        assert_eq!(tx.data().default_max_transaction_fee(), Hbar::new(40));
    }

    #[test]
    fn test_body_round_trip() {
        let key = PrivateKey::generate_ed25519().public_key();
        let mut tx = TokenCreateTransaction::new();
        tx.name("ffff")
            .unwrap()
            .symbol("F")
            .unwrap()
            .decimals(3)
            .unwrap()
            .treasury_account_id(AccountId::new(0, 0, 12))
            .unwrap()
            .admin_key(key.clone())
            .unwrap()
            .supply_key(key)
            .unwrap()
            .token_type(TokenType::NonFungibleUnique)
            .unwrap()
            .token_supply_type(TokenSupplyType::Finite)
            .unwrap()
            .max_supply(500)
            .unwrap()
            .custom_fees([CustomFee::new(Fee::Fixed(FixedFee::hbar(Hbar::new(1))), AccountId::new(0, 0, 98))])
            .unwrap()
            .metadata(vec![1, 2, 3])
            .unwrap();

        let data = tx.data();
        assert_eq!(&TokenCreateTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
