use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::hooks::HookCreationDetails;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::staking::StakedId;
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, ContractId, Key, LedgerId, Result};

/// Change properties of a contract. Unset fields are left unchanged.
pub type ContractUpdateTransaction = Transaction<ContractUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractUpdateTransactionData {
    contract_id: Option<ContractId>,
    expiration_time: Option<DateTime<Utc>>,
    admin_key: Option<Key>,
    auto_renew_period: Option<Duration>,
    contract_memo: Option<String>,
    max_automatic_token_associations: Option<i32>,
    auto_renew_account_id: Option<AccountId>,
    staked_id: Option<StakedId>,
    decline_staking_reward: Option<bool>,
    hook_ids_to_delete: Vec<i64>,
    hooks_to_create: Vec<HookCreationDetails>,
}

impl ContractUpdateTransaction {
    pub fn get_contract_id(&self) -> Option<ContractId> {
        self.data().contract_id
    }

    pub fn contract_id(&mut self, id: ContractId) -> Result<&mut Self> {
        self.data_mut()?.contract_id = Some(id);
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_auto_renew_period(&self) -> Option<Duration> {
        self.data().auto_renew_period
    }

    pub fn auto_renew_period(&mut self, period: Duration) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_period = Some(period);
        Ok(self)
    }

    pub fn get_contract_memo(&self) -> Option<&str> {
        self.data().contract_memo.as_deref()
    }

    pub fn contract_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.contract_memo = Some(memo.into());
        Ok(self)
    }

    pub fn get_max_automatic_token_associations(&self) -> Option<i32> {
        self.data().max_automatic_token_associations
    }

    pub fn max_automatic_token_associations(&mut self, max: i32) -> Result<&mut Self> {
        self.data_mut()?.max_automatic_token_associations = Some(max);
        Ok(self)
    }

    pub fn get_auto_renew_account_id(&self) -> Option<&AccountId> {
        self.data().auto_renew_account_id.as_ref()
    }

    pub fn auto_renew_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_account_id = Some(id);
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

    /// Stop staking by pointing at `0.0.0`.
    pub fn clear_staked_id(&mut self) -> Result<&mut Self> {
        self.staked_account_id(AccountId::new(0, 0, 0))
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

impl TransactionData for ContractUpdateTransactionData {}

impl ValidateChecksums for ContractUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)?;
        self.auto_renew_account_id.validate_checksums(ledger_id)?;
        self.staked_id.validate_checksums(ledger_id)?;
        self.hooks_to_create.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractUpdateTransactionBody> for ContractUpdateTransactionData {
    fn from_protobuf(pb: services::ContractUpdateTransactionBody) -> Result<Self> {
        Ok(Self {
            contract_id: Option::from_protobuf(pb.contract_id)?,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            contract_memo: pb.memo_wrapper,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account_id)?,
            staked_id: Option::from_protobuf(pb.staked_id)?,
            decline_staking_reward: pb.decline_reward,
            hook_ids_to_delete: pb.hook_ids_to_delete,
            hooks_to_create: Vec::from_protobuf(pb.hook_creation_details)?,
        })
    }
}

impl ToProtobuf for ContractUpdateTransactionData {
    type Protobuf = services::ContractUpdateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ContractUpdateTransactionBody {
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            memo_wrapper: self.contract_memo.clone(),
            max_automatic_token_associations: self.max_automatic_token_associations,
            auto_renew_account_id: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
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
    fn test_optional_fields_round_trip() {
        let mut tx = ContractUpdateTransaction::new();
        tx.contract_id(ContractId::new(0, 0, 5005))
            .unwrap()
            .contract_memo("v2")
            .unwrap()
            .max_automatic_token_associations(10)
            .unwrap()
            .clear_staked_id()
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.decline_reward, None);
        assert_eq!(pb.max_automatic_token_associations, Some(10));
        assert_eq!(&ContractUpdateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
