use std::num::NonZeroUsize;

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{
    ChunkData, ChunkInfo, ToTransactionDataProtobuf, Transaction, TransactionData,
};
use crate::{Error, LedgerId, Result, TopicId};

const MESSAGE_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(size) => size,
    None => panic!("chunk size must be non-zero"),
};

/// Submit a message to a topic, split into 1024-byte chunks when larger.
pub type TopicMessageSubmitTransaction = Transaction<TopicMessageSubmitTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct TopicMessageSubmitTransactionData {
    topic_id: Option<TopicId>,
    chunk_data: ChunkData,
}

impl Default for TopicMessageSubmitTransactionData {
    fn default() -> Self {
        Self { topic_id: None, chunk_data: ChunkData::new(MESSAGE_CHUNK_SIZE) }
    }
}

impl TopicMessageSubmitTransaction {
    pub fn get_topic_id(&self) -> Option<TopicId> {
        self.data().topic_id
    }

    pub fn topic_id(&mut self, id: impl Into<TopicId>) -> Result<&mut Self> {
        self.data_mut()?.topic_id = Some(id.into());
        Ok(self)
    }

    pub fn get_message(&self) -> &[u8] {
        &self.data().chunk_data.data
    }

    pub fn message(&mut self, bytes: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.data = bytes.into();
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

    /// Spacing between consecutive chunk valid-start times.
    pub fn chunk_interval_nanos(&mut self, nanos: u64) -> Result<&mut Self> {
        self.data_mut()?.chunk_data.chunk_interval_nanos = nanos;
        Ok(self)
    }
}

impl TransactionData for TopicMessageSubmitTransactionData {
    fn chunk_data(&self) -> Option<&ChunkData> {
        Some(&self.chunk_data)
    }
}

impl ValidateChecksums for TopicMessageSubmitTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.topic_id.validate_checksums(ledger_id)
    }
}

impl ToTransactionDataProtobuf for TopicMessageSubmitTransactionData {
    fn to_transaction_data_protobuf(&self, chunk_info: &ChunkInfo) -> services::transaction_body::Data {
        // single-chunk messages carry no chunk info
        let info = (chunk_info.total > 1).then(|| services::ConsensusMessageChunkInfo {
            initial_transaction_id: Some(chunk_info.initial_transaction_id.to_protobuf()),
            total: chunk_info.total as i32,
            number: (chunk_info.current + 1) as i32,
        });

        services::transaction_body::Data::ConsensusSubmitMessage(services::ConsensusSubmitMessageTransactionBody {
            topic_id: self.topic_id.map(|id| id.to_protobuf()),
            message: self.chunk_data.message_chunk(chunk_info).to_vec(),
            chunk_info: info,
        })
    }
}

impl FromProtobuf<services::ConsensusSubmitMessageTransactionBody> for TopicMessageSubmitTransactionData {
    fn from_protobuf(pb: services::ConsensusSubmitMessageTransactionBody) -> Result<Self> {
        Self::from_protobuf_chunks(vec![pb])
    }

    fn from_protobuf_chunks(chunks: Vec<services::ConsensusSubmitMessageTransactionBody>) -> Result<Self> {
        let total = chunks.len();
        let mut data = Self::default();
        let mut largest_chunk = 0;

        for (index, chunk) in chunks.into_iter().enumerate() {
            let topic_id = Option::<TopicId>::from_protobuf(chunk.topic_id)?;
            if index == 0 {
                data.topic_id = topic_id;
            } else if data.topic_id != topic_id {
                return Err(Error::from_protobuf("message chunks target different topics"));
            }

            if let Some(info) = chunk.chunk_info {
                if info.number as usize != index + 1 || info.total as usize != total {
                    return Err(Error::from_protobuf(format!(
                        "message chunk {} of {} found at position {} of {total}",
                        info.number,
                        info.total,
                        index + 1
                    )));
                }
            }

            largest_chunk = largest_chunk.max(chunk.message.len());
            data.chunk_data.data.extend_from_slice(&chunk.message);
        }

        // keep the chunking stable for payloads built with a larger chunk size
        if let Some(size) = NonZeroUsize::new(largest_chunk).filter(|size| *size > MESSAGE_CHUNK_SIZE) {
            data.chunk_data.chunk_size = size;
        }
        data.chunk_data.max_chunks = data.chunk_data.max_chunks.max(total);

        Ok(data)
    }
}

impl ToProtobuf for TopicMessageSubmitTransactionData {
    type Protobuf = services::ConsensusSubmitMessageTransactionBody;

    /// The whole message in one body; used when scheduling.
    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusSubmitMessageTransactionBody {
            topic_id: self.topic_id.map(|id| id.to_protobuf()),
            message: self.chunk_data.data.clone(),
            chunk_info: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::{AccountId, AnyTransaction, TransactionId};

    fn transaction(message: Vec<u8>) -> TopicMessageSubmitTransaction {
        let payer = AccountId::new(0, 0, 2);
        let mut tx = TopicMessageSubmitTransaction::new();
        tx.topic_id(TopicId::new(0, 0, 9))
            .unwrap()
            .message(message)
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3), AccountId::new(0, 0, 4)])
            .unwrap()
            .transaction_id(TransactionId::new(payer, DateTime::from_timestamp(1_700_000_000, 0).unwrap()))
            .unwrap();
        tx
    }

    #[test]
    fn test_small_message_has_no_chunk_info() {
        let mut tx = transaction(b"hello".to_vec());
        tx.freeze().unwrap();

        let body = tx.make_body_protobuf().unwrap();
        let Some(services::transaction_body::Data::ConsensusSubmitMessage(body)) = body.data else {
            panic!("expected a submit message body");
        };
        assert!(body.chunk_info.is_none());
        assert_eq!(body.message, b"hello");
    }

    #[test]
    fn test_chunks_are_numbered_from_one() {
        let mut tx = transaction(vec![7; 2500]);
        tx.freeze().unwrap();

        let infos = tx.chunk_infos().unwrap();
        assert_eq!(infos.len(), 6);

        let last = infos.last().unwrap();
        let services::transaction_body::Data::ConsensusSubmitMessage(body) = tx.data().to_transaction_data_protobuf(last)
        else {
            panic!("expected a submit message body");
        };
        let info = body.chunk_info.unwrap();
        assert_eq!((info.number, info.total), (3, 3));
        assert_eq!(body.message.len(), 2500 - 2048);
    }

    #[test]
    fn test_reassembled_from_bytes() {
        let message: Vec<u8> = (0..3000u32).map(|i| i as u8).collect();
        let mut tx = transaction(message.clone());
        tx.freeze().unwrap();

        let decoded = AnyTransaction::from_bytes(&tx.to_bytes().unwrap()).unwrap();
        let decoded = decoded.downcast::<TopicMessageSubmitTransactionData>().unwrap();
        assert_eq!(decoded.get_message(), message.as_slice());
        assert_eq!(decoded.get_topic_id(), Some(TopicId::new(0, 0, 9)));
    }

    #[test]
    fn test_too_many_chunks() {
        let mut tx = transaction(vec![0; 1025]);
        tx.max_chunks(1).unwrap();
        assert!(matches!(tx.freeze(), Err(Error::MaxChunksExceeded { max: 1, requested: 2 })));
    }

    #[test]
    fn test_out_of_order_chunks_rejected() {
        let chunk = |number| services::ConsensusSubmitMessageTransactionBody {
            topic_id: None,
            message: vec![1],
            chunk_info: Some(services::ConsensusMessageChunkInfo { initial_transaction_id: None, total: 2, number }),
        };

        assert!(TopicMessageSubmitTransactionData::from_protobuf_chunks(vec![chunk(2), chunk(1)]).is_err());
        assert!(TopicMessageSubmitTransactionData::from_protobuf_chunks(vec![chunk(1), chunk(2)]).is_ok());
    }
}
