use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::account::DEFAULT_AUTO_RENEW_PERIOD;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{Hbar, KeyList, LedgerId, Result};

/// Create a file holding `contents`. Larger contents follow in file appends.
pub type FileCreateTransaction = Transaction<FileCreateTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct FileCreateTransactionData {
    file_memo: String,
    keys: Option<KeyList>,
    contents: Vec<u8>,
    expiration_time: Option<DateTime<Utc>>,
}

impl Default for FileCreateTransactionData {
    fn default() -> Self {
        // a file lives one auto-renew period unless told otherwise
        let expiration_time = chrono::Duration::from_std(DEFAULT_AUTO_RENEW_PERIOD)
            .ok()
            .and_then(|period| Utc::now().checked_add_signed(period));

        Self { file_memo: String::new(), keys: None, contents: Vec::new(), expiration_time }
    }
}

impl FileCreateTransaction {
    pub fn get_file_memo(&self) -> &str {
        &self.data().file_memo
    }

    pub fn file_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.file_memo = memo.into();
        Ok(self)
    }

    pub fn get_keys(&self) -> Option<&KeyList> {
        self.data().keys.as_ref()
    }

    /// Every key in the list must sign to modify or delete the file.
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

impl TransactionData for FileCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(5)
    }
}

impl ValidateChecksums for FileCreateTransactionData {
    fn validate_checksums(&self, _ledger_id: &LedgerId) -> Result<()> {
        Ok(())
    }
}

impl FromProtobuf<services::FileCreateTransactionBody> for FileCreateTransactionData {
    fn from_protobuf(pb: services::FileCreateTransactionBody) -> Result<Self> {
        Ok(Self {
            file_memo: pb.memo,
            keys: Option::from_protobuf(pb.keys)?,
            contents: pb.contents,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
        })
    }
}

impl ToProtobuf for FileCreateTransactionData {
    type Protobuf = services::FileCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileCreateTransactionBody {
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            keys: self.keys.as_ref().map(KeyList::to_protobuf),
            contents: self.contents.clone(),
            shard_id: None,
            realm_id: None,
            memo: self.file_memo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;

    #[test]
    fn test_default_expiration_is_in_the_future() {
        let tx = FileCreateTransaction::new();
        assert!(tx.get_expiration_time().unwrap() > Utc::now());
        assert_eq!(tx.data().default_max_transaction_fee(), Hbar::new(5));
    }

    #[test]
    fn test_round_trip() {
        let key = PrivateKey::generate_ecdsa().public_key();
        let mut tx = FileCreateTransaction::new();
        tx.keys(KeyList::from(vec![key])).unwrap().contents(b"[e2e]".to_vec()).unwrap().file_memo("cfg").unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.keys.as_ref().map(|keys| keys.keys.len()), Some(1));
        assert_eq!(&FileCreateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
