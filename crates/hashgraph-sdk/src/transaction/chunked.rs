//! Splitting oversized payloads into chunk transactions.

use std::num::NonZeroUsize;

use crate::{AccountId, Error, Result, TransactionId};

/// Default spacing between chunk valid-start times.
pub const DEFAULT_CHUNK_INTERVAL_NANOS: u64 = 1;

/// Payload and limits of a chunked transaction kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkData {
    pub max_chunks: usize,
    pub chunk_size: NonZeroUsize,
    /// Nanoseconds between consecutive chunk valid starts.
    pub chunk_interval_nanos: u64,
    pub data: Vec<u8>,
}

impl ChunkData {
    pub(crate) fn new(chunk_size: NonZeroUsize) -> Self {
        Self {
            max_chunks: 20,
            chunk_size,
            chunk_interval_nanos: DEFAULT_CHUNK_INTERVAL_NANOS,
            data: Vec::new(),
        }
    }

    /// Chunks the payload occupies; an empty payload still sends one.
    pub fn used_chunks(&self) -> usize {
        self.data.len().div_ceil(self.chunk_size.get()).max(1)
    }

    pub(crate) fn check_limits(&self) -> Result<usize> {
        let requested = self.used_chunks();
        if requested > self.max_chunks {
            return Err(Error::MaxChunksExceeded { max: self.max_chunks, requested });
        }

        Ok(requested)
    }

    /// The bytes carried by chunk `current`.
    pub(crate) fn message_chunk(&self, chunk_info: &ChunkInfo) -> &[u8] {
        let start = chunk_info.current * self.chunk_size.get();
        let end = (start + self.chunk_size.get()).min(self.data.len());
        self.data.get(start..end).unwrap_or_default()
    }
}

/// Position of one chunk × node entry within a frozen transaction.
///
/// `current < total`, and chunk 0 carries the initial transaction id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkInfo {
    pub current: usize,
    pub total: usize,
    pub initial_transaction_id: TransactionId,
    pub current_transaction_id: TransactionId,
    pub node_account_id: AccountId,
}

impl ChunkInfo {
    /// A lone chunk: used for unchunked kinds and for scheduled bodies.
    pub(crate) fn single(transaction_id: TransactionId, node_account_id: AccountId) -> Self {
        Self {
            current: 0,
            total: 1,
            initial_transaction_id: transaction_id.clone(),
            current_transaction_id: transaction_id,
            node_account_id,
        }
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }
}

/// Transaction ids for `total` chunks, each `interval_nanos` after the previous.
pub(crate) fn chunk_transaction_ids(
    initial: &TransactionId,
    total: usize,
    interval_nanos: u64,
) -> Result<Vec<TransactionId>> {
    let interval = i64::try_from(interval_nanos)
        .map_err(|_| Error::basic_parse(format!("chunk interval {interval_nanos} too large")))?;

    (0..total)
        .map(|i| match i {
            0 => Ok(initial.clone()),
            i => initial.offset_by(interval.saturating_mul(i as i64)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn chunk_data(len: usize) -> ChunkData {
        let mut data = ChunkData::new(NonZeroUsize::new(10).unwrap());
        data.data = (0..len as u8).collect();
        data
    }

    fn info(current: usize) -> ChunkInfo {
        let id = TransactionId::new(AccountId::new(0, 0, 2), DateTime::from_timestamp(100, 0).unwrap());
        ChunkInfo { current, total: 3, ..ChunkInfo::single(id, AccountId::new(0, 0, 3)) }
    }

    #[test]
    fn test_used_chunks() {
        assert_eq!(chunk_data(0).used_chunks(), 1);
        assert_eq!(chunk_data(10).used_chunks(), 1);
        assert_eq!(chunk_data(11).used_chunks(), 2);
        assert_eq!(chunk_data(25).used_chunks(), 3);
    }

    #[test]
    fn test_message_chunks_cover_payload() {
        let data = chunk_data(25);
        let joined: Vec<u8> = (0..3).flat_map(|i| data.message_chunk(&info(i)).to_vec()).collect();
        assert_eq!(joined, data.data);
        assert_eq!(data.message_chunk(&info(2)).len(), 5);
    }

    #[test]
    fn test_limit() {
        let mut data = chunk_data(25);
        data.max_chunks = 2;
        assert!(matches!(data.check_limits(), Err(Error::MaxChunksExceeded { max: 2, requested: 3 })));
    }

    #[test]
    fn test_chunk_ids_are_spaced() {
        let initial = info(0).initial_transaction_id;
        let ids = chunk_transaction_ids(&initial, 3, 7).unwrap();
        assert_eq!(ids[0], initial);
        assert_eq!(ids[2].valid_start.timestamp_subsec_nanos(), 14);
    }
}
