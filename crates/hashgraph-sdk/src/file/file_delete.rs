use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{FileId, LedgerId, Result};

/// Mark a file deleted; its contents become empty.
pub type FileDeleteTransaction = Transaction<FileDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDeleteTransactionData {
    file_id: Option<FileId>,
}

impl FileDeleteTransaction {
    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    pub fn file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.file_id = Some(id.into());
        Ok(self)
    }
}

impl TransactionData for FileDeleteTransactionData {}

impl ValidateChecksums for FileDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FileDeleteTransactionBody> for FileDeleteTransactionData {
    fn from_protobuf(pb: services::FileDeleteTransactionBody) -> Result<Self> {
        Ok(Self { file_id: Option::from_protobuf(pb.file_id)? })
    }
}

impl ToProtobuf for FileDeleteTransactionData {
    type Protobuf = services::FileDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileDeleteTransactionBody { file_id: self.file_id.map(|id| id.to_protobuf()) }
    }
}
