use std::time::Duration;

use hashgraph_crypto::PublicKey;
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::hooks::HookCreationDetails;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::staking::StakedId;
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, EvmAddress, Hbar, Key, LedgerId, Result};

/// Default auto-renew period of new accounts and contracts: 90 days.
pub(crate) const DEFAULT_AUTO_RENEW_PERIOD: Duration = Duration::from_secs(90 * 24 * 60 * 60);

/// Create a new account.
///
/// The payer is charged the initial balance plus the creation fee.
pub type AccountCreateTransaction = Transaction<AccountCreateTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct AccountCreateTransactionData {
    key: Option<Key>,
    initial_balance: Hbar,
    receiver_signature_required: bool,
    auto_renew_period: Option<Duration>,
    account_memo: String,
    max_automatic_token_associations: i32,
    alias: Option<EvmAddress>,
    staked_id: Option<StakedId>,
    decline_staking_reward: bool,
    hooks: Vec<HookCreationDetails>,
}

impl Default for AccountCreateTransactionData {
    fn default() -> Self {
        Self {
            key: None,
            initial_balance: Hbar::ZERO,
            receiver_signature_required: false,
            auto_renew_period: Some(DEFAULT_AUTO_RENEW_PERIOD),
            account_memo: String::new(),
            max_automatic_token_associations: 0,
            alias: None,
            staked_id: None,
            decline_staking_reward: false,
            hooks: Vec::new(),
        }
    }
}

impl AccountCreateTransaction {
    pub fn get_key(&self) -> Option<&Key> {
        self.data().key.as_ref()
    }

    /// Key that must sign to update or delete the account and to spend from it.
    pub fn key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.key = Some(key.into());
        Ok(self)
    }

    /// Set an ECDSA key and use its EVM address as the account alias.
    pub fn key_with_alias(&mut self, key: PublicKey) -> Result<&mut Self> {
        let alias = EvmAddress::from(key.to_evm_address()?);
        let data = self.data_mut()?;
        data.key = Some(key.into());
        data.alias = Some(alias);
        Ok(self)
    }

    pub fn get_initial_balance(&self) -> Hbar {
        self.data().initial_balance
    }

    pub fn initial_balance(&mut self, balance: Hbar) -> Result<&mut Self> {
        self.data_mut()?.initial_balance = balance;
        Ok(self)
    }

    pub fn get_receiver_signature_required(&self) -> bool {
        self.data().receiver_signature_required
    }

    pub fn receiver_signature_required(&mut self, required: bool) -> Result<&mut Self> {
        self.data_mut()?.receiver_signature_required = required;
        Ok(self)
    }

    pub fn get_auto_renew_period(&self) -> Option<Duration> {
        self.data().auto_renew_period
    }

    pub fn auto_renew_period(&mut self, period: Duration) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_period = Some(period);
        Ok(self)
    }

    pub fn get_account_memo(&self) -> &str {
        &self.data().account_memo
    }

    pub fn account_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.account_memo = memo.into();
        Ok(self)
    }

    pub fn get_max_automatic_token_associations(&self) -> i32 {
        self.data().max_automatic_token_associations
    }

    /// `-1` allows unlimited automatic associations.
    pub fn max_automatic_token_associations(&mut self, max: i32) -> Result<&mut Self> {
        self.data_mut()?.max_automatic_token_associations = max;
        Ok(self)
    }

    pub fn get_alias(&self) -> Option<EvmAddress> {
        self.data().alias
    }

    pub fn alias(&mut self, alias: EvmAddress) -> Result<&mut Self> {
        self.data_mut()?.alias = Some(alias);
        Ok(self)
    }

    pub fn get_staked_id(&self) -> Option<&StakedId> {
        self.data().staked_id.as_ref()
    }

    pub fn staked_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.staked_id = Some(StakedId::AccountId(id));
        Ok(self)
    }

    pub fn staked_node_id(&mut self, id: u64) -> Result<&mut Self> {
        self.data_mut()?.staked_id = Some(StakedId::NodeId(id));
        Ok(self)
    }

    pub fn get_decline_staking_reward(&self) -> bool {
        self.data().decline_staking_reward
    }

    pub fn decline_staking_reward(&mut self, decline: bool) -> Result<&mut Self> {
        self.data_mut()?.decline_staking_reward = decline;
        Ok(self)
    }

    pub fn get_hooks(&self) -> &[HookCreationDetails] {
        &self.data().hooks
    }

    pub fn add_hook(&mut self, hook: HookCreationDetails) -> Result<&mut Self> {
        self.data_mut()?.hooks.push(hook);
        Ok(self)
    }

    pub fn hooks(&mut self, hooks: impl IntoIterator<Item = HookCreationDetails>) -> Result<&mut Self> {
        self.data_mut()?.hooks = hooks.into_iter().collect();
        Ok(self)
    }
}

impl TransactionData for AccountCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(5)
    }
}

impl ValidateChecksums for AccountCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.staked_id.validate_checksums(ledger_id)?;
        self.hooks.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoCreateTransactionBody> for AccountCreateTransactionData {
    fn from_protobuf(pb: services::CryptoCreateTransactionBody) -> Result<Self> {
        let alias = match pb.alias.is_empty() {
            true => None,
            false => Some(EvmAddress::from_bytes(&pb.alias)?),
        };

        Ok(Self {
            key: Option::from_protobuf(pb.key)?,
            initial_balance: Hbar::from_tinybars(pb.initial_balance as i64),
            receiver_signature_required: pb.receiver_sig_required,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            account_memo: pb.memo,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            alias,
            staked_id: Option::from_protobuf(pb.staked_id)?,
            decline_staking_reward: pb.decline_reward,
            hooks: Vec::from_protobuf(pb.hook_creation_details)?,
        })
    }
}

impl ToProtobuf for AccountCreateTransactionData {
    type Protobuf = services::CryptoCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoCreateTransactionBody {
            key: self.key.as_ref().map(Key::to_protobuf),
            initial_balance: self.initial_balance.to_tinybars() as u64,
            receiver_sig_required: self.receiver_signature_required,
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            shard_id: None,
            realm_id: None,
            memo: self.account_memo.clone(),
            max_automatic_token_associations: self.max_automatic_token_associations,
            decline_reward: self.decline_staking_reward,
            alias: self.alias.map(|alias| alias.to_bytes().to_vec()).unwrap_or_default(),
            hook_creation_details: self.hooks.to_protobuf(),
            staked_id: self.staked_id.as_ref().map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let tx = AccountCreateTransaction::new();
        assert_eq!(tx.get_auto_renew_period(), Some(DEFAULT_AUTO_RENEW_PERIOD));
        assert_eq!(tx.data().default_max_transaction_fee(), Hbar::new(5));
    }

    #[test]
    fn test_alias_from_ecdsa_key() {
        let key = PrivateKey::generate_ecdsa().public_key();
        let mut tx = AccountCreateTransaction::new();
        tx.key_with_alias(key.clone()).unwrap();

        assert_eq!(tx.get_alias().map(EvmAddress::to_bytes), Some(key.to_evm_address().unwrap()));
        assert!(matches!(
            tx.key_with_alias(PrivateKey::generate_ed25519().public_key()),
            Err(Error::KeyDerive(_))
        ));
    }

    #[test]
    fn test_body_round_trip() {
        let mut tx = AccountCreateTransaction::new();
        tx.key(PrivateKey::generate_ed25519().public_key())
            .unwrap()
            .initial_balance(Hbar::new(10))
            .unwrap()
            .account_memo("treasury")
            .unwrap()
            .max_automatic_token_associations(-1)
            .unwrap()
            .staked_node_id(3)
            .unwrap()
            .decline_staking_reward(true)
            .unwrap();

        let data = tx.data();
        assert_eq!(&AccountCreateTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
