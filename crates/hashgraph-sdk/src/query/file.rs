use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{FileContentsResponse, FileId, FileInfo, LedgerId, Result};

/// Get the bytes stored in a file.
pub type FileContentsQuery = Query<FileContentsQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContentsQueryData {
    file_id: Option<FileId>,
}

impl FileContentsQuery {
    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    pub fn file_id(&mut self, id: FileId) -> &mut Self {
        self.data_mut().file_id = Some(id);
        self
    }
}

impl ValidateChecksums for FileContentsQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FileGetContentsQuery> for FileContentsQueryData {
    fn from_protobuf(pb: services::FileGetContentsQuery) -> Result<Self> {
        Ok(Self { file_id: Option::from_protobuf(pb.file_id)? })
    }
}

impl ToProtobuf for FileContentsQueryData {
    type Protobuf = services::FileGetContentsQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileGetContentsQuery { header: None, file_id: self.file_id.map(|id| id.to_protobuf()) }
    }
}

impl FromProtobuf<services::FileGetContentsResponse> for FileContentsResponse {
    fn from_protobuf(pb: services::FileGetContentsResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.file_contents, "file_contents")?)
    }
}

/// Get the size, keys and expiry of a file.
pub type FileInfoQuery = Query<FileInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfoQueryData {
    file_id: Option<FileId>,
}

impl FileInfoQuery {
    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    pub fn file_id(&mut self, id: FileId) -> &mut Self {
        self.data_mut().file_id = Some(id);
        self
    }
}

impl ValidateChecksums for FileInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FileGetInfoQuery> for FileInfoQueryData {
    fn from_protobuf(pb: services::FileGetInfoQuery) -> Result<Self> {
        Ok(Self { file_id: Option::from_protobuf(pb.file_id)? })
    }
}

impl ToProtobuf for FileInfoQueryData {
    type Protobuf = services::FileGetInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileGetInfoQuery { header: None, file_id: self.file_id.map(|id| id.to_protobuf()) }
    }
}

impl FromProtobuf<services::FileGetInfoResponse> for FileInfo {
    fn from_protobuf(pb: services::FileGetInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.file_info, "file_info")?)
    }
}

#[cfg(test)]
mod tests {
    use services::file_get_contents_response::FileContents;

    use super::*;
    use crate::query::{ok_response_header, QueryData};

    #[test]
    fn test_contents_answer() {
        let file_id = FileId::new(0, 0, 150);
        let response = services::response::Response::FileGetContents(services::FileGetContentsResponse {
            header: ok_response_header(),
            file_contents: Some(FileContents { file_id: Some(file_id.to_protobuf()), contents: b"hello".to_vec() }),
        });

        let answer = FileContentsQueryData::default().response_from_protobuf(response).unwrap();
        assert_eq!(answer, FileContentsResponse { file_id, contents: b"hello".to_vec() });
    }

    #[test]
    fn test_info_answer_requires_info() {
        let response = services::response::Response::FileGetInfo(services::FileGetInfoResponse {
            header: ok_response_header(),
            file_info: None,
        });

        assert!(FileInfoQueryData::default().response_from_protobuf(response).is_err());
    }
}
