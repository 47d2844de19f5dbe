use std::time::Duration;

use hashgraph_proto::services;
use services::contract_create_transaction_body::InitcodeSource;

use crate::account::DEFAULT_AUTO_RENEW_PERIOD;
use crate::entity_id::ValidateChecksums;
use crate::hooks::HookCreationDetails;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::staking::StakedId;
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, FileId, Hbar, Key, LedgerId, Result};

/// Deploy a smart contract from initcode stored in a file or carried inline.
pub type ContractCreateTransaction = Transaction<ContractCreateTransactionData>;

/// Where the contract's initcode comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractInitcode {
    /// A file holding the hex-encoded initcode.
    File(FileId),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractCreateTransactionData {
    initcode: Option<ContractInitcode>,
    admin_key: Option<Key>,
    gas: u64,
    initial_balance: Hbar,
    auto_renew_period: Option<Duration>,
    auto_renew_account_id: Option<AccountId>,
    constructor_parameters: Vec<u8>,
    contract_memo: String,
    max_automatic_token_associations: i32,
    staked_id: Option<StakedId>,
    decline_staking_reward: bool,
    hooks: Vec<HookCreationDetails>,
}

impl Default for ContractCreateTransactionData {
    fn default() -> Self {
        Self {
            initcode: None,
            admin_key: None,
            gas: 0,
            initial_balance: Hbar::ZERO,
            auto_renew_period: Some(DEFAULT_AUTO_RENEW_PERIOD),
            auto_renew_account_id: None,
            constructor_parameters: Vec::new(),
            contract_memo: String::new(),
            max_automatic_token_associations: 0,
            staked_id: None,
            decline_staking_reward: false,
            hooks: Vec::new(),
        }
    }
}

impl ContractCreateTransaction {
    pub fn get_bytecode_file_id(&self) -> Option<FileId> {
        match &self.data().initcode {
            Some(ContractInitcode::File(id)) => Some(*id),
            _ => None,
        }
    }

    /// Replaces any inline bytecode.
    pub fn bytecode_file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.initcode = Some(ContractInitcode::File(id.into()));
        Ok(self)
    }

    pub fn get_bytecode(&self) -> Option<&[u8]> {
        match &self.data().initcode {
            Some(ContractInitcode::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Replaces any bytecode file id.
    pub fn bytecode(&mut self, bytes: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.initcode = Some(ContractInitcode::Bytes(bytes.into()));
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_gas(&self) -> u64 {
        self.data().gas
    }

    pub fn gas(&mut self, gas: u64) -> Result<&mut Self> {
        self.data_mut()?.gas = gas;
        Ok(self)
    }

    pub fn get_initial_balance(&self) -> Hbar {
        self.data().initial_balance
    }

    pub fn initial_balance(&mut self, balance: Hbar) -> Result<&mut Self> {
        self.data_mut()?.initial_balance = balance;
        Ok(self)
    }

    pub fn get_auto_renew_period(&self) -> Option<Duration> {
        self.data().auto_renew_period
    }

    pub fn auto_renew_period(&mut self, period: Duration) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_period = Some(period);
        Ok(self)
    }

    pub fn get_auto_renew_account_id(&self) -> Option<&AccountId> {
        self.data().auto_renew_account_id.as_ref()
    }

    pub fn auto_renew_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_account_id = Some(id);
        Ok(self)
    }

    pub fn get_constructor_parameters(&self) -> &[u8] {
        &self.data().constructor_parameters
    }

    /// ABI-encoded constructor arguments.
    pub fn constructor_parameters(&mut self, parameters: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.constructor_parameters = parameters.into();
        Ok(self)
    }

    pub fn get_contract_memo(&self) -> &str {
        &self.data().contract_memo
    }

    pub fn contract_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.contract_memo = memo.into();
        Ok(self)
    }

    pub fn get_max_automatic_token_associations(&self) -> i32 {
        self.data().max_automatic_token_associations
    }

    pub fn max_automatic_token_associations(&mut self, max: i32) -> Result<&mut Self> {
        self.data_mut()?.max_automatic_token_associations = max;
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
}

impl TransactionData for ContractCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(20)
    }
}

impl ValidateChecksums for ContractCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        if let Some(ContractInitcode::File(id)) = &self.initcode {
            id.validate_checksums(ledger_id)?;
        }
        self.auto_renew_account_id.validate_checksums(ledger_id)?;
        self.staked_id.validate_checksums(ledger_id)?;
        self.hooks.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ContractCreateTransactionBody> for ContractCreateTransactionData {
    fn from_protobuf(pb: services::ContractCreateTransactionBody) -> Result<Self> {
        let initcode = match pb.initcode_source {
            Some(InitcodeSource::FileId(id)) => Some(ContractInitcode::File(FileId::from_protobuf(id)?)),
            Some(InitcodeSource::Initcode(bytes)) => Some(ContractInitcode::Bytes(bytes)),
            None => None,
        };

        Ok(Self {
            initcode,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            gas: pb.gas as u64,
            initial_balance: Hbar::from_tinybars(pb.initial_balance),
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account_id)?,
            constructor_parameters: pb.constructor_parameters,
            contract_memo: pb.memo,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            staked_id: Option::from_protobuf(pb.staked_id)?,
            decline_staking_reward: pb.decline_reward,
            hooks: Vec::from_protobuf(pb.hook_creation_details)?,
        })
    }
}

impl ToProtobuf for ContractCreateTransactionData {
    type Protobuf = services::ContractCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        let initcode_source = self.initcode.as_ref().map(|initcode| match initcode {
            ContractInitcode::File(id) => InitcodeSource::FileId(id.to_protobuf()),
            ContractInitcode::Bytes(bytes) => InitcodeSource::Initcode(bytes.clone()),
        });

        services::ContractCreateTransactionBody {
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            gas: self.gas as i64,
            initial_balance: self.initial_balance.to_tinybars(),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            constructor_parameters: self.constructor_parameters.clone(),
            shard_id: None,
            realm_id: None,
            memo: self.contract_memo.clone(),
            max_automatic_token_associations: self.max_automatic_token_associations,
            auto_renew_account_id: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            decline_reward: self.decline_staking_reward,
            hook_creation_details: self.hooks.to_protobuf(),
            initcode_source,
            staked_id: self.staked_id.as_ref().map(Into::into),
        }
    }
}
