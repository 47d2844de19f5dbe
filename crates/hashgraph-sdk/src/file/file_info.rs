use chrono::{DateTime, Utc};
use hashgraph_proto::services;
use services::file_get_contents_response::FileContents as FileContentsProto;
use services::file_get_info_response::FileInfo as FileInfoProto;

use crate::protobuf::{decode, required, FromProtobuf, ToProtobuf};
use crate::{FileId, KeyList, LedgerId, Result};

/// Current state of a file, without its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub file_id: FileId,
    pub size: u64,
    pub expiration_time: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub keys: KeyList,
    pub file_memo: String,
    pub ledger_id: LedgerId,
}

/// The bytes stored in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentsResponse {
    pub file_id: FileId,
    pub contents: Vec<u8>,
}

impl FileInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(decode::<FileInfoProto>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<FileInfoProto> for FileInfo {
    fn from_protobuf(pb: FileInfoProto) -> Result<Self> {
        Ok(Self {
            file_id: FileId::from_protobuf(required(pb.file_id, "file_id")?)?,
            size: pb.size as u64,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            is_deleted: pb.deleted,
            keys: Option::from_protobuf(pb.keys)?.unwrap_or_default(),
            file_memo: pb.memo,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
        })
    }
}

impl ToProtobuf for FileInfo {
    type Protobuf = FileInfoProto;

    fn to_protobuf(&self) -> Self::Protobuf {
        FileInfoProto {
            file_id: Some(self.file_id.to_protobuf()),
            size: self.size as i64,
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            deleted: self.is_deleted,
            keys: Some(self.keys.to_protobuf()),
            memo: self.file_memo.clone(),
            ledger_id: self.ledger_id.to_bytes(),
        }
    }
}

impl FileContentsResponse {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(decode::<FileContentsProto>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<FileContentsProto> for FileContentsResponse {
    fn from_protobuf(pb: FileContentsProto) -> Result<Self> {
        Ok(Self { file_id: FileId::from_protobuf(required(pb.file_id, "file_id")?)?, contents: pb.contents })
    }
}

impl ToProtobuf for FileContentsResponse {
    type Protobuf = FileContentsProto;

    fn to_protobuf(&self) -> Self::Protobuf {
        FileContentsProto { file_id: Some(self.file_id.to_protobuf()), contents: self.contents.clone() }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;

    #[test]
    fn test_info_round_trip() {
        let info = FileInfo {
            file_id: FileId::ADDRESS_BOOK,
            size: 4096,
            expiration_time: DateTime::from_timestamp(1_750_000_000, 0),
            is_deleted: false,
            keys: KeyList::from(vec![PrivateKey::generate_ed25519().public_key()]),
            file_memo: String::new(),
            ledger_id: LedgerId::mainnet(),
        };
        assert_eq!(FileInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }

    #[test]
    fn test_contents_round_trip() {
        let contents = FileContentsResponse { file_id: FileId::new(0, 0, 5), contents: b"abc".to_vec() };
        assert_eq!(FileContentsResponse::from_bytes(&contents.to_bytes()).unwrap(), contents);
    }
}
