use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{ContractId, LedgerId, Result};

/// An EVM hook backed by a contract's bytecode, with its own storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LambdaEvmHook {
    pub contract_id: Option<ContractId>,
    /// Storage to seed when the hook is created.
    pub storage_updates: Vec<LambdaStorageUpdate>,
}

impl LambdaEvmHook {
    pub fn new(contract_id: ContractId) -> Self {
        Self { contract_id: Some(contract_id), storage_updates: Vec::new() }
    }
}

impl ValidateChecksums for LambdaEvmHook {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.contract_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::LambdaEvmHook> for LambdaEvmHook {
    fn from_protobuf(pb: services::LambdaEvmHook) -> Result<Self> {
        use services::evm_hook_spec::BytecodeSource;

        let contract_id = match pb.spec.and_then(|spec| spec.bytecode_source) {
            Some(BytecodeSource::ContractId(id)) => Some(ContractId::from_protobuf(id)?),
            None => None,
        };

        Ok(Self { contract_id, storage_updates: Vec::from_protobuf(pb.storage_updates)? })
    }
}

impl ToProtobuf for LambdaEvmHook {
    type Protobuf = services::LambdaEvmHook;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::evm_hook_spec::BytecodeSource;

        services::LambdaEvmHook {
            spec: self.contract_id.map(|id| services::EvmHookSpec {
                bytecode_source: Some(BytecodeSource::ContractId(id.to_protobuf())),
            }),
            storage_updates: self.storage_updates.to_protobuf(),
        }
    }
}

/// A single change to lambda storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LambdaStorageUpdate {
    StorageSlot(LambdaStorageSlot),
    MappingEntries(LambdaMappingEntries),
}

impl FromProtobuf<services::LambdaStorageUpdate> for LambdaStorageUpdate {
    fn from_protobuf(pb: services::LambdaStorageUpdate) -> Result<Self> {
        use services::lambda_storage_update::Update;

        Ok(match required(pb.update, "update")? {
            Update::StorageSlot(slot) => Self::StorageSlot(LambdaStorageSlot { key: slot.key, value: slot.value }),
            Update::MappingEntries(entries) => Self::MappingEntries(LambdaMappingEntries {
                mapping_slot: entries.mapping_slot,
                entries: Vec::from_protobuf(entries.entries)?,
            }),
        })
    }
}

impl ToProtobuf for LambdaStorageUpdate {
    type Protobuf = services::LambdaStorageUpdate;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::lambda_storage_update::Update;

        let update = match self {
            Self::StorageSlot(slot) => Update::StorageSlot(services::LambdaStorageSlot {
                key: slot.key.clone(),
                value: slot.value.clone(),
            }),
            Self::MappingEntries(entries) => Update::MappingEntries(services::LambdaMappingEntries {
                mapping_slot: entries.mapping_slot.clone(),
                entries: entries.entries.to_protobuf(),
            }),
        };

        services::LambdaStorageUpdate { update: Some(update) }
    }
}

/// A raw 32-byte storage slot; an empty value deletes the slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LambdaStorageSlot {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Entries of a Solidity mapping rooted at `mapping_slot`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LambdaMappingEntries {
    pub mapping_slot: Vec<u8>,
    pub entries: Vec<LambdaMappingEntry>,
}

/// How a mapping entry is addressed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LambdaMappingEntryKey {
    /// The already-hashed key.
    Key(Vec<u8>),
    /// The preimage the key is hashed from.
    Preimage(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LambdaMappingEntry {
    pub key: LambdaMappingEntryKey,
    pub value: Vec<u8>,
}

impl FromProtobuf<services::LambdaMappingEntry> for LambdaMappingEntry {
    fn from_protobuf(pb: services::LambdaMappingEntry) -> Result<Self> {
        use services::lambda_mapping_entry::EntryKey;

        let key = match required(pb.entry_key, "entry_key")? {
            EntryKey::Key(key) => LambdaMappingEntryKey::Key(key),
            EntryKey::Preimage(preimage) => LambdaMappingEntryKey::Preimage(preimage),
        };

        Ok(Self { key, value: pb.value })
    }
}

impl ToProtobuf for LambdaMappingEntry {
    type Protobuf = services::LambdaMappingEntry;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::lambda_mapping_entry::EntryKey;

        let entry_key = match &self.key {
            LambdaMappingEntryKey::Key(key) => EntryKey::Key(key.clone()),
            LambdaMappingEntryKey::Preimage(preimage) => EntryKey::Preimage(preimage.clone()),
        };

        services::LambdaMappingEntry { value: self.value.clone(), entry_key: Some(entry_key) }
    }
}
