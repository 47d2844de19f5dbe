use std::num::NonZeroUsize;

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{
    ChunkData, ChunkInfo, ToTransactionDataProtobuf, Transaction, TransactionData,
};
use crate::{Error, FileId, Hbar, LedgerId, Result};

const CONTENTS_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(size) => size,
    None => panic!("chunk size must be non-zero"),
};

/// Append bytes to a file, split into 4096-byte chunks when larger.
pub type FileAppendTransaction = Transaction<FileAppendTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct FileAppendTransactionData {
    file_id: Option<FileId>,
    chunk_data: ChunkData,
}

impl Default for FileAppendTransactionData {
    fn default() -> Self {
        Self { file_id: None, chunk_data: ChunkData::new(CONTENTS_CHUNK_SIZE) }
    }
}

impl FileAppendTransaction {
    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    pub fn file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.file_id = Some(id.into());
        Ok(self)
    }

    pub fn get_contents(&self) -> &[u8] {
        &self.data().chunk_data.data
    }

    pub fn contents(&mut self, contents: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.data = contents.into();
        Ok(self)
    }

    pub fn get_max_chunks(&self) -> usize {
        self.data().chunk_data.max_chunks
    }

    pub fn max_chunks(&mut self, max_chunks: usize) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.max_chunks = max_chunks;
        Ok(self)
    }

    pub fn get_chunk_size(&self) -> usize {
        self.data().chunk_data.chunk_size.get()
    }

    pub fn chunk_size(&mut self, size: NonZeroUsize) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.chunk_size = size;
        Ok(self)
    }

    pub fn get_chunk_interval_nanos(&self) -> u64 {
        self.data().chunk_data.chunk_interval_nanos
    }

    pub fn chunk_interval_nanos(&mut self, nanos: u64) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.chunk_interval_nanos = nanos;
        Ok(self)
    }
}

impl TransactionData for FileAppendTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(5)
    }

    fn chunk_data(&self) -> Option<&ChunkData> {
        Some(&self.chunk_data)
    }
}

impl ValidateChecksums for FileAppendTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl ToTransactionDataProtobuf for FileAppendTransactionData {
    fn to_transaction_data_protobuf(&self, chunk_info: &ChunkInfo) -> services::transaction_body::Data {
        services::transaction_body::Data::FileAppend(services::FileAppendTransactionBody {
            file_id: self.file_id.map(|id| id.to_protobuf()),
            contents: self.chunk_data.message_chunk(chunk_info).to_vec(),
        })
    }
}

impl FromProtobuf<services::FileAppendTransactionBody> for FileAppendTransactionData {
    fn from_protobuf(pb: services::FileAppendTransactionBody) -> Result<Self> {
        Self::from_protobuf_chunks(vec![pb])
    }

    fn from_protobuf_chunks(chunks: Vec<services::FileAppendTransactionBody>) -> Result<Self> {
        let total = chunks.len();
        let mut data = Self::default();
        let mut largest_chunk = 0;

        for (index, chunk) in chunks.into_iter().enumerate() {
            let file_id = Option::<FileId>::from_protobuf(chunk.file_id)?;
            if index == 0 {
                data.file_id = file_id;
            } else if data.file_id != file_id {
                return Err(Error::from_protobuf("append chunks target different files"));
            }

            largest_chunk = largest_chunk.max(chunk.contents.len());
            data.chunk_data.data.extend_from_slice(&chunk.contents);
        }

        if let Some(size) = NonZeroUsize::new(largest_chunk).filter(|size| *size > CONTENTS_CHUNK_SIZE) {
            data.chunk_data.chunk_size = size;
        }
        data.chunk_data.max_chunks = data.chunk_data.max_chunks.max(total);

        Ok(data)
    }
}

impl ToProtobuf for FileAppendTransactionData {
    type Protobuf = services::FileAppendTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FileAppendTransactionBody {
            file_id: self.file_id.map(|id| id.to_protobuf()),
            contents: self.chunk_data.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, TransactionId};

    #[test]
    fn test_chunk_count_and_spacing() {
        let mut tx = FileAppendTransaction::new();
        tx.file_id(FileId::new(0, 0, 200))
            .unwrap()
            .contents(vec![1; 4096 * 2 + 1])
            .unwrap()
            .chunk_interval_nanos(10)
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(TransactionId::generate(AccountId::new(0, 0, 2)))
            .unwrap()
            .freeze()
            .unwrap();

        let infos = tx.chunk_infos().unwrap();
        assert_eq!(infos.len(), 3);

        let first = infos[0].current_transaction_id.valid_start;
        let last = infos[2].current_transaction_id.valid_start;
        assert_eq!((last - first).num_nanoseconds(), Some(20));
    }

    #[test]
    fn test_from_bytes_restores_contents() {
        let contents: Vec<u8> = (0..9000u32).map(|i| (i % 251) as u8).collect();
        let mut tx = FileAppendTransaction::new();
        tx.file_id(FileId::new(0, 0, 200))
            .unwrap()
            .contents(contents.clone())
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3), AccountId::new(0, 0, 7)])
            .unwrap()
            .transaction_id(TransactionId::generate(AccountId::new(0, 0, 2)))
            .unwrap()
            .freeze()
            .unwrap();

        let decoded = FileAppendTransaction::from_bytes(&tx.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.get_contents(), contents.as_slice());
        assert_eq!(decoded.get_file_id(), Some(FileId::new(0, 0, 200)));
    }
}
