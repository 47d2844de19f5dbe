use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result};

/// Ask the network for a pseudo-random value, recorded in the transaction record.
///
/// Without a range the record carries 48 random bytes; with one it carries a
/// number in `0..range`.
pub type PrngTransaction = Transaction<PrngTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrngTransactionData {
    range: Option<u32>,
}

impl PrngTransaction {
    pub fn get_range(&self) -> Option<u32> {
        self.data().range
    }

    pub fn range(&mut self, range: u32) -> Result<&mut Self> {
        self.data_mut()?.range = Some(range);
        Ok(self)
    }
}

impl TransactionData for PrngTransactionData {}

impl ValidateChecksums for PrngTransactionData {
    fn validate_checksums(&self, _ledger_id: &LedgerId) -> Result<()> {
        Ok(())
    }
}

impl FromProtobuf<services::UtilPrngTransactionBody> for PrngTransactionData {
    fn from_protobuf(pb: services::UtilPrngTransactionBody) -> Result<Self> {
        Ok(Self { range: (pb.range != 0).then_some(pb.range as u32) })
    }
}

impl ToProtobuf for PrngTransactionData {
    type Protobuf = services::UtilPrngTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::UtilPrngTransactionBody { range: self.range.map_or(0, |range| range as i32) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_range_means_bytes() {
        let data = PrngTransactionData::from_protobuf(services::UtilPrngTransactionBody { range: 0 }).unwrap();
        assert_eq!(data.range, None);

        let mut tx = PrngTransaction::new();
        tx.range(100).unwrap();
        assert_eq!(tx.data().to_protobuf().range, 100);
    }
}
