use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::hooks::HookCreationDetails;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::staking::StakedId;
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, Key, LedgerId, Result};

/// Change properties of an account. Unset fields are left as they are.
pub type AccountUpdateTransaction = Transaction<AccountUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountUpdateTransactionData {
    account_id: Option<AccountId>,
    key: Option<Key>,
    receiver_signature_required: Option<bool>,
    auto_renew_period: Option<Duration>,
    expiration_time: Option<DateTime<Utc>>,
    account_memo: Option<String>,
    max_automatic_token_associations: Option<i32>,
    staked_id: Option<StakedId>,
    decline_staking_reward: Option<bool>,
    hook_ids_to_delete: Vec<i64>,
    hooks_to_create: Vec<HookCreationDetails>,
}

impl AccountUpdateTransaction {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_key(&self) -> Option<&Key> {
        self.data().key.as_ref()
    }

    /// Replacing the key needs signatures from both the old and the new key.
    pub fn key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.key = Some(key.into());
        Ok(self)
    }

    pub fn get_receiver_signature_required(&self) -> Option<bool> {
        self.data().receiver_signature_required
    }

    pub fn receiver_signature_required(&mut self, required: bool) -> Result<&mut Self> {
        self.data_mut()?.receiver_signature_required = Some(required);
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

    pub fn get_account_memo(&self) -> Option<&str> {
        self.data().account_memo.as_deref()
    }

    pub fn account_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.account_memo = Some(memo.into());
        Ok(self)
    }

    pub fn get_max_automatic_token_associations(&self) -> Option<i32> {
        self.data().max_automatic_token_associations
    }

    pub fn max_automatic_token_associations(&mut self, max: i32) -> Result<&mut Self> {
        self.data_mut()?.max_automatic_token_associations = Some(max);
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

    /// Stop staking; the network reads a staked account of `0.0.0` as "none".
    pub fn clear_staked_id(&mut self) -> Result<&mut Self> {
        self.data_mut()?.staked_id = Some(StakedId::AccountId(AccountId::new(0, 0, 0)));
        Ok(self)
    }

    pub fn get_decline_staking_reward(&self) -> Option<bool> {
        self.data().decline_staking_reward
    }

    pub fn decline_staking_reward(&mut self, decline: bool) -> Result<&mut Self> {
        self.data_mut()?.decline_staking_reward = Some(decline);
        Ok(self)
    }

    pub fn get_hook_ids_to_delete(&self) -> &[i64] {
        &self.data().hook_ids_to_delete
    }

    pub fn delete_hook(&mut self, hook_id: i64) -> Result<&mut Self> {
        self.data_mut()?.hook_ids_to_delete.push(hook_id);
        Ok(self)
    }

    pub fn get_hooks_to_create(&self) -> &[HookCreationDetails] {
        &self.data().hooks_to_create
    }

    pub fn add_hook(&mut self, hook: HookCreationDetails) -> Result<&mut Self> {
        self.data_mut()?.hooks_to_create.push(hook);
        Ok(self)
    }
}

impl TransactionData for AccountUpdateTransactionData {}

impl ValidateChecksums for AccountUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.staked_id.validate_checksums(ledger_id)?;
        self.hooks_to_create.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoUpdateTransactionBody> for AccountUpdateTransactionData {
    fn from_protobuf(pb: services::CryptoUpdateTransactionBody) -> Result<Self> {
        Ok(Self {
            account_id: Option::from_protobuf(pb.account_id_to_update)?,
            key: Option::from_protobuf(pb.key)?,
            receiver_signature_required: pb.receiver_sig_required_wrapper,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            account_memo: pb.memo,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            staked_id: Option::from_protobuf(pb.staked_id)?,
            decline_staking_reward: pb.decline_reward,
            hook_ids_to_delete: pb.hook_ids_to_delete,
            hooks_to_create: Vec::from_protobuf(pb.hook_creation_details)?,
        })
    }
}

impl ToProtobuf for AccountUpdateTransactionData {
    type Protobuf = services::CryptoUpdateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoUpdateTransactionBody {
            account_id_to_update: self.account_id.as_ref().map(AccountId::to_protobuf),
            key: self.key.as_ref().map(Key::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            receiver_sig_required_wrapper: self.receiver_signature_required,
            memo: self.account_memo.clone(),
            max_automatic_token_associations: self.max_automatic_token_associations,
            decline_reward: self.decline_staking_reward,
            hook_ids_to_delete: self.hook_ids_to_delete.clone(),
            hook_creation_details: self.hooks_to_create.to_protobuf(),
            staked_id: self.staked_id.as_ref().map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_stay_unset() {
        let mut tx = AccountUpdateTransaction::new();
        tx.account_id(AccountId::new(0, 0, 1001)).unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.memo, None);
        assert_eq!(pb.receiver_sig_required_wrapper, None);
        assert_eq!(AccountUpdateTransactionData::from_protobuf(pb).unwrap(), *tx.data());
    }

    #[test]
    fn test_body_round_trip() {
        let mut tx = AccountUpdateTransaction::new();
        tx.account_id(AccountId::new(0, 0, 1001))
            .unwrap()
            .account_memo("")
            .unwrap()
            .expiration_time(DateTime::from_timestamp(1_800_000_000, 0).unwrap())
            .unwrap()
            .clear_staked_id()
            .unwrap()
            .delete_hook(4)
            .unwrap();

        let data = tx.data();
        assert_eq!(&AccountUpdateTransactionData::from_protobuf(data.to_protobuf()).unwrap(), data);
    }
}
