use hashgraph_proto::services;

use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{
    AccountId, ContractId, ExchangeRates, FileId, Result, ScheduleId, Status, TokenId, TopicId,
    TransactionId,
};

/// Outcome of a transaction after consensus.
///
/// The id fields are set only by the kinds that create the matching entity.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionReceipt {
    pub status: Status,
    pub account_id: Option<AccountId>,
    pub file_id: Option<FileId>,
    pub contract_id: Option<ContractId>,
    pub topic_id: Option<TopicId>,
    pub token_id: Option<TokenId>,
    pub schedule_id: Option<ScheduleId>,
    pub exchange_rates: Option<ExchangeRates>,
    /// Set by topic message submissions.
    pub topic_sequence_number: u64,
    pub topic_running_hash: Option<Vec<u8>>,
    pub topic_running_hash_version: u64,
    /// Supply after a mint, burn or wipe.
    pub total_supply: u64,
    pub scheduled_transaction_id: Option<TransactionId>,
    /// Serials of newly minted NFTs.
    pub serials: Vec<i64>,
    pub node_id: u64,
}

impl TransactionReceipt {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TransactionReceipt>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::TransactionReceipt> for TransactionReceipt {
    fn from_protobuf(pb: services::TransactionReceipt) -> Result<Self> {
        Ok(Self {
            status: Status::from_protobuf(pb.status)?,
            account_id: Option::from_protobuf(pb.account_id)?,
            file_id: Option::from_protobuf(pb.file_id)?,
            contract_id: Option::from_protobuf(pb.contract_id)?,
            topic_id: Option::from_protobuf(pb.topic_id)?,
            token_id: Option::from_protobuf(pb.token_id)?,
            schedule_id: Option::from_protobuf(pb.schedule_id)?,
            exchange_rates: Option::from_protobuf(pb.exchange_rate)?,
            topic_sequence_number: pb.topic_sequence_number,
            topic_running_hash: Some(pb.topic_running_hash).filter(|hash| !hash.is_empty()),
            topic_running_hash_version: pb.topic_running_hash_version,
            total_supply: pb.new_total_supply,
            scheduled_transaction_id: Option::from_protobuf(pb.scheduled_transaction_id)?,
            serials: pb.serial_numbers,
            node_id: pb.node_id,
        })
    }
}

impl ToProtobuf for TransactionReceipt {
    type Protobuf = services::TransactionReceipt;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TransactionReceipt {
            status: self.status.to_protobuf(),
            account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
            file_id: self.file_id.map(|id| id.to_protobuf()),
            contract_id: self.contract_id.as_ref().map(ContractId::to_protobuf),
            topic_id: self.topic_id.map(|id| id.to_protobuf()),
            exchange_rate: self.exchange_rates.as_ref().map(ExchangeRates::to_protobuf),
            topic_sequence_number: self.topic_sequence_number,
            topic_running_hash: self.topic_running_hash.clone().unwrap_or_default(),
            topic_running_hash_version: self.topic_running_hash_version,
            token_id: self.token_id.map(|id| id.to_protobuf()),
            new_total_supply: self.total_supply,
            schedule_id: self.schedule_id.map(|id| id.to_protobuf()),
            scheduled_transaction_id: self.scheduled_transaction_id.as_ref().map(TransactionId::to_protobuf),
            serial_numbers: self.serials.clone(),
            node_id: self.node_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_survives() {
        let pb = services::TransactionReceipt { status: 9_999, ..Default::default() };
        let receipt = TransactionReceipt::from_protobuf(pb).unwrap();

        assert_eq!(receipt.status, Status::Unrecognized(9_999));
        assert_eq!(receipt.topic_running_hash, None);
        assert_eq!(receipt.to_protobuf().status, 9_999);
    }

    #[test]
    fn test_mint_receipt_round_trip() {
        let receipt = TransactionReceipt {
            status: Status::Success,
            account_id: None,
            file_id: None,
            contract_id: None,
            topic_id: None,
            token_id: Some(TokenId::new(0, 0, 5000)),
            schedule_id: None,
            exchange_rates: None,
            topic_sequence_number: 0,
            topic_running_hash: None,
            topic_running_hash_version: 0,
            total_supply: 3,
            scheduled_transaction_id: None,
            serials: vec![1, 2, 3],
            node_id: 0,
        };

        assert_eq!(TransactionReceipt::from_bytes(&receipt.to_bytes()).unwrap(), receipt);
    }
}
