use chrono::{DateTime, Utc};
use hashgraph_proto::services;
use services::system_delete_transaction_body::Id as DeleteTarget;
use services::system_undelete_transaction_body::Id as UndeleteTarget;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{to_timestamp_seconds, FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{ContractId, FileId, LedgerId, Result};

/// Delete a file or contract as an administrator, restorable until it expires.
pub type SystemDeleteTransaction = Transaction<SystemDeleteTransactionData>;

/// Restore a file or contract removed by a [`SystemDeleteTransaction`].
pub type SystemUndeleteTransaction = Transaction<SystemUndeleteTransactionData>;

/// Entity targeted by a system delete or undelete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTarget {
    File(FileId),
    Contract(ContractId),
}

impl ValidateChecksums for SystemTarget {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match self {
            Self::File(id) => id.validate_checksums(ledger_id),
            Self::Contract(id) => id.validate_checksums(ledger_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemDeleteTransactionData {
    target: Option<SystemTarget>,
    expiration_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemUndeleteTransactionData {
    target: Option<SystemTarget>,
}

// Both kinds share the same file/contract setters.
macro_rules! system_target_accessors {
    ($($tx:ty),*) => {
        $(
            impl $tx {
                pub fn get_file_id(&self) -> Option<FileId> {
                    match self.data().target {
                        Some(SystemTarget::File(id)) => Some(id),
                        _ => None,
                    }
                }

                /// Replaces any contract target.
                pub fn file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
                    self.data_mut()?.target = Some(SystemTarget::File(id.into()));
                    Ok(self)
                }

                pub fn get_contract_id(&self) -> Option<ContractId> {
                    match self.data().target {
                        Some(SystemTarget::Contract(id)) => Some(id),
                        _ => None,
                    }
                }

                /// Replaces any file target.
                pub fn contract_id(&mut self, id: ContractId) -> Result<&mut Self> {
                    self.data_mut()?.target = Some(SystemTarget::Contract(id));
                    Ok(self)
                }
            }
        )*
    };
}

system_target_accessors!(SystemDeleteTransaction, SystemUndeleteTransaction);

impl SystemDeleteTransaction {
    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    /// When the deleted entity is removed for good. Whole seconds on the wire.
    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }
}

impl TransactionData for SystemDeleteTransactionData {}

impl TransactionData for SystemUndeleteTransactionData {}

impl ValidateChecksums for SystemDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.target.validate_checksums(ledger_id)
    }
}

impl ValidateChecksums for SystemUndeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.target.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::SystemDeleteTransactionBody> for SystemDeleteTransactionData {
    fn from_protobuf(pb: services::SystemDeleteTransactionBody) -> Result<Self> {
        let target = match pb.id {
            Some(DeleteTarget::FileId(id)) => Some(SystemTarget::File(FileId::from_protobuf(id)?)),
            Some(DeleteTarget::ContractId(id)) => Some(SystemTarget::Contract(ContractId::from_protobuf(id)?)),
            None => None,
        };

        Ok(Self { target, expiration_time: Option::from_protobuf(pb.expiration_time)? })
    }
}

impl ToProtobuf for SystemDeleteTransactionData {
    type Protobuf = services::SystemDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::SystemDeleteTransactionBody {
            expiration_time: self.expiration_time.as_ref().map(to_timestamp_seconds),
            id: self.target.map(|target| match target {
                SystemTarget::File(id) => DeleteTarget::FileId(id.to_protobuf()),
                SystemTarget::Contract(id) => DeleteTarget::ContractId(id.to_protobuf()),
            }),
        }
    }
}

impl FromProtobuf<services::SystemUndeleteTransactionBody> for SystemUndeleteTransactionData {
    fn from_protobuf(pb: services::SystemUndeleteTransactionBody) -> Result<Self> {
        let target = match pb.id {
            Some(UndeleteTarget::FileId(id)) => Some(SystemTarget::File(FileId::from_protobuf(id)?)),
            Some(UndeleteTarget::ContractId(id)) => Some(SystemTarget::Contract(ContractId::from_protobuf(id)?)),
            None => None,
        };

        Ok(Self { target })
    }
}

impl ToProtobuf for SystemUndeleteTransactionData {
    type Protobuf = services::SystemUndeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::SystemUndeleteTransactionBody {
            id: self.target.map(|target| match target {
                SystemTarget::File(id) => UndeleteTarget::FileId(id.to_protobuf()),
                SystemTarget::Contract(id) => UndeleteTarget::ContractId(id.to_protobuf()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_truncates_expiration_to_seconds() {
        let mut tx = SystemDeleteTransaction::new();
        tx.file_id(FileId::new(0, 0, 111))
            .unwrap()
            .expiration_time(DateTime::from_timestamp(1_700_000_000, 999).unwrap())
            .unwrap();

        let decoded = SystemDeleteTransactionData::from_protobuf(tx.data().to_protobuf()).unwrap();
        assert_eq!(decoded.expiration_time, DateTime::from_timestamp(1_700_000_000, 0));
        assert_eq!(decoded.target, Some(SystemTarget::File(FileId::new(0, 0, 111))));
    }

    #[test]
    fn test_undelete_target_is_exclusive() {
        let mut tx = SystemUndeleteTransaction::new();
        tx.file_id(FileId::new(0, 0, 111)).unwrap().contract_id(ContractId::new(0, 0, 222)).unwrap();

        assert_eq!(tx.get_file_id(), None);
        let pb = tx.data().to_protobuf();
        assert!(matches!(pb.id, Some(UndeleteTarget::ContractId(_))));
        assert_eq!(&SystemUndeleteTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
