use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{FileId, KeyList, LedgerId, Result};

/// Replace the contents, keys, memo or expiration of a file.
pub type FileUpdateTransaction = Transaction<FileUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUpdateTransactionData {
    file_id: Option<FileId>,
    file_memo: Option<String>,
    keys: Option<KeyList>,
    /// Empty leaves the contents unchanged.
    contents: Vec<u8>,
    expiration_time: Option<DateTime<Utc>>,
}

impl FileUpdateTransaction {
    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    pub fn file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.file_id = Some(id.into());
        Ok(self)
    }

    pub fn get_file_memo(&self) -> Option<&str> {
        self.data().file_memo.as_deref()
    }

    pub fn file_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.file_memo = Some(memo.into());
        Ok(self)
    }

    pub fn clear_file_memo(&mut self) -> Result<&mut Self> {
        self.file_memo("")
    }

    pub fn get_keys(&self) -> Option<&KeyList> {
        self.data().keys.as_ref()
    }

    pub fn keys(&mut self, keys: impl Into<KeyList>) -> Result<&mut Self> {
        self.data_mut()?.keys = Some(keys.into());
        Ok(self)
    }

    pub fn get_contents(&self) -> &[u8] {
        &self.data().contents
    }

    pub fn contents(&mut self, contents: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.contents = contents.into();
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }
}

impl TransactionData for FileUpdateTransactionData {}

impl ValidateChecksums for FileUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FileUpdateTransactionBody> for FileUpdateTransactionData {
    fn from_protobuf(pb: services::FileUpdateTransactionBody) -> Result<Self> {
        Ok(Self {
            file_id: Option::from_protobuf(pb.file_id)?,
            file_memo: pb.memo,
            keys: Option::from_protobuf(pb.keys)?,
            contents: pb.contents,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
        })
    }
}

impl ToProtobuf for FileUpdateTransactionData {
    type Protobuf = services::FileUpdateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileUpdateTransactionBody {
            file_id: self.file_id.map(|id| id.to_protobuf()),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            keys: self.keys.as_ref().map(KeyList::to_protobuf),
            contents: self.contents.clone(),
            memo: self.file_memo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_tristate() {
        let mut tx = FileUpdateTransaction::new();
        tx.file_id(FileId::new(0, 0, 150)).unwrap();
        assert_eq!(tx.data().to_protobuf().memo, None);

        tx.clear_file_memo().unwrap();
        let pb = tx.data().to_protobuf();
        assert_eq!(pb.memo.as_deref(), Some(""));
        assert_eq!(&FileUpdateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }

    #[test]
    fn test_checksum_on_file_id() {
        let mut tx = FileUpdateTransaction::new();
        tx.file_id("0.0.123-vfmkw".parse::<FileId>().unwrap()).unwrap();
        assert!(tx.data().validate_checksums(&LedgerId::mainnet()).is_ok());
        assert!(tx.data().validate_checksums(&LedgerId::testnet()).is_err());
    }
}
