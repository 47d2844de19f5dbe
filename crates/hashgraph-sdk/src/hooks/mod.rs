//! # Hooks
//!
//! Programmable hooks owned by accounts and contracts: their ids, the calls
//! made to them from transfers, and the details used to create them.

mod lambda;
mod lambda_sstore;

use hashgraph_proto::services;

pub use lambda::{
    LambdaEvmHook, LambdaMappingEntries, LambdaMappingEntry, LambdaMappingEntryKey, LambdaStorageSlot,
    LambdaStorageUpdate,
};
pub use lambda_sstore::{LambdaSStoreTransaction, LambdaSStoreTransactionData};

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, ContractId, Error, Key, LedgerId, Result};

/// The entity a hook belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookEntityId {
    AccountId(AccountId),
    ContractId(ContractId),
}

impl ValidateChecksums for HookEntityId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match self {
            Self::AccountId(id) => id.validate_checksums(ledger_id),
            Self::ContractId(id) => id.validate_checksums(ledger_id),
        }
    }
}

impl FromProtobuf<services::HookEntityId> for HookEntityId {
    fn from_protobuf(pb: services::HookEntityId) -> Result<Self> {
        use services::hook_entity_id::EntityId;

        match required(pb.entity_id, "entity_id")? {
            EntityId::AccountId(id) => Ok(Self::AccountId(AccountId::from_protobuf(id)?)),
            EntityId::ContractId(id) => Ok(Self::ContractId(ContractId::from_protobuf(id)?)),
        }
    }
}

impl ToProtobuf for HookEntityId {
    type Protobuf = services::HookEntityId;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::hook_entity_id::EntityId;

        let entity_id = match self {
            Self::AccountId(id) => EntityId::AccountId(id.to_protobuf()),
            Self::ContractId(id) => EntityId::ContractId(id.to_protobuf()),
        };

        services::HookEntityId { entity_id: Some(entity_id) }
    }
}

/// A hook, fully qualified by its owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookId {
    pub entity_id: HookEntityId,
    pub hook_id: i64,
}

impl HookId {
    pub fn new(entity_id: HookEntityId, hook_id: i64) -> Self {
        Self { entity_id, hook_id }
    }
}

impl ValidateChecksums for HookId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.entity_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::HookId> for HookId {
    fn from_protobuf(pb: services::HookId) -> Result<Self> {
        Ok(Self {
            entity_id: HookEntityId::from_protobuf(required(pb.entity_id, "entity_id")?)?,
            hook_id: pb.hook_id,
        })
    }
}

impl ToProtobuf for HookId {
    type Protobuf = services::HookId;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::HookId { entity_id: Some(self.entity_id.to_protobuf()), hook_id: self.hook_id }
    }
}

/// EVM call data and gas for a hook invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvmHookCall {
    pub data: Vec<u8>,
    pub gas_limit: u64,
}

/// Which hook a call targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookCallTarget {
    /// A hook owned by any entity.
    FullHookId(HookId),
    /// A hook owned by the account whose transfer leg carries the call.
    HookId(i64),
}

/// A call to a hook made from a transfer leg.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookCall {
    pub target: HookCallTarget,
    pub evm_hook_call: Option<EvmHookCall>,
}

impl HookCall {
    /// Call hook `hook_id` of the transferring account.
    pub fn new(hook_id: i64, evm_hook_call: EvmHookCall) -> Self {
        Self { target: HookCallTarget::HookId(hook_id), evm_hook_call: Some(evm_hook_call) }
    }
}

impl ValidateChecksums for HookCall {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match &self.target {
            HookCallTarget::FullHookId(id) => id.validate_checksums(ledger_id),
            HookCallTarget::HookId(_) => Ok(()),
        }
    }
}

impl FromProtobuf<services::HookCall> for HookCall {
    fn from_protobuf(pb: services::HookCall) -> Result<Self> {
        use services::hook_call::{CallSpec, Id};

        let target = match required(pb.id, "id")? {
            Id::FullHookId(id) => HookCallTarget::FullHookId(HookId::from_protobuf(id)?),
            Id::HookId(id) => HookCallTarget::HookId(id),
        };

        let evm_hook_call = pb.call_spec.map(|CallSpec::EvmHookCall(call)| EvmHookCall {
            data: call.data,
            gas_limit: call.gas_limit,
        });

        Ok(Self { target, evm_hook_call })
    }
}

impl ToProtobuf for HookCall {
    type Protobuf = services::HookCall;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::hook_call::{CallSpec, Id};

        let id = match &self.target {
            HookCallTarget::FullHookId(id) => Id::FullHookId(id.to_protobuf()),
            HookCallTarget::HookId(id) => Id::HookId(*id),
        };

        services::HookCall {
            id: Some(id),
            call_spec: self.evm_hook_call.as_ref().map(|call| {
                CallSpec::EvmHookCall(services::EvmHookCall {
                    data: call.data.clone(),
                    gas_limit: call.gas_limit,
                })
            }),
        }
    }
}

/// A hook call attached to a transfer leg, and when it runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransferHookCall {
    /// Once, before the transaction executes.
    PreTx(HookCall),
    /// Before and again after the transaction executes.
    PrePostTx(HookCall),
}

impl TransferHookCall {
    pub fn hook_call(&self) -> &HookCall {
        match self {
            Self::PreTx(call) | Self::PrePostTx(call) => call,
        }
    }
}

impl FromProtobuf<services::account_amount::HookCall> for TransferHookCall {
    fn from_protobuf(pb: services::account_amount::HookCall) -> Result<Self> {
        use services::account_amount::HookCall as Pb;

        Ok(match pb {
            Pb::PreTxAllowanceHook(call) => Self::PreTx(HookCall::from_protobuf(call)?),
            Pb::PrePostTxAllowanceHook(call) => Self::PrePostTx(HookCall::from_protobuf(call)?),
        })
    }
}

impl ToProtobuf for TransferHookCall {
    type Protobuf = services::account_amount::HookCall;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::account_amount::HookCall as Pb;

        match self {
            Self::PreTx(call) => Pb::PreTxAllowanceHook(call.to_protobuf()),
            Self::PrePostTx(call) => Pb::PrePostTxAllowanceHook(call.to_protobuf()),
        }
    }
}

/// Extension points a hook may implement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HookExtensionPoint {
    #[default]
    AccountAllowanceHook,
}

/// Details of a hook to create alongside an account or contract.
#[derive(Clone, Debug, PartialEq)]
pub struct HookCreationDetails {
    pub extension_point: HookExtensionPoint,
    pub hook_id: i64,
    pub admin_key: Option<Key>,
    pub lambda_evm_hook: Option<LambdaEvmHook>,
}

impl HookCreationDetails {
    pub fn new(extension_point: HookExtensionPoint, hook_id: i64, lambda_evm_hook: LambdaEvmHook) -> Self {
        Self { extension_point, hook_id, admin_key: None, lambda_evm_hook: Some(lambda_evm_hook) }
    }
}

impl ValidateChecksums for HookCreationDetails {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.lambda_evm_hook.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::HookCreationDetails> for HookCreationDetails {
    fn from_protobuf(pb: services::HookCreationDetails) -> Result<Self> {
        use services::hook_creation_details::Hook;

        let extension_point = match services::HookExtensionPoint::try_from(pb.extension_point) {
            Ok(services::HookExtensionPoint::AccountAllowanceHook) => HookExtensionPoint::AccountAllowanceHook,
            Err(_) => {
                return Err(Error::from_protobuf(format!(
                    "unknown hook extension point {}",
                    pb.extension_point
                )))
            }
        };

        Ok(Self {
            extension_point,
            hook_id: pb.hook_id,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            lambda_evm_hook: pb
                .hook
                .map(|Hook::LambdaEvmHook(hook)| LambdaEvmHook::from_protobuf(hook))
                .transpose()?,
        })
    }
}

impl ToProtobuf for HookCreationDetails {
    type Protobuf = services::HookCreationDetails;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::hook_creation_details::Hook;

        let extension_point = match self.extension_point {
            HookExtensionPoint::AccountAllowanceHook => services::HookExtensionPoint::AccountAllowanceHook,
        };

        services::HookCreationDetails {
            extension_point: extension_point as i32,
            hook_id: self.hook_id,
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            hook: self.lambda_evm_hook.as_ref().map(|hook| Hook::LambdaEvmHook(hook.to_protobuf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_call_targets() {
        let local = HookCall::new(1, EvmHookCall { data: vec![0xab], gas_limit: 25_000 });
        assert_eq!(HookCall::from_protobuf(local.to_protobuf()).unwrap(), local);

        let full = HookCall {
            target: HookCallTarget::FullHookId(HookId::new(
                HookEntityId::ContractId(ContractId::new(0, 0, 9)),
                2,
            )),
            evm_hook_call: None,
        };
        assert_eq!(HookCall::from_protobuf(full.to_protobuf()).unwrap(), full);
    }

    #[test]
    fn test_hook_call_requires_target() {
        assert!(HookCall::from_protobuf(services::HookCall::default()).is_err());
    }

    #[test]
    fn test_creation_details_round_trip() {
        let details = HookCreationDetails::new(
            HookExtensionPoint::AccountAllowanceHook,
            7,
            LambdaEvmHook::new(ContractId::new(0, 0, 1001)),
        );

        assert_eq!(HookCreationDetails::from_protobuf(details.to_protobuf()).unwrap(), details);
    }
}
