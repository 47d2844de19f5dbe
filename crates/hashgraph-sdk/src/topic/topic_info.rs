use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, FixedCustomFee, Key, LedgerId, Result, TopicId};

/// Current state of a topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicInfo {
    pub topic_id: TopicId,
    pub topic_memo: String,
    /// SHA-384 running hash over every message submitted so far.
    pub running_hash: Vec<u8>,
    pub sequence_number: u64,
    pub expiration_time: Option<DateTime<Utc>>,
    pub admin_key: Option<Key>,
    pub submit_key: Option<Key>,
    pub auto_renew_period: Option<Duration>,
    pub auto_renew_account_id: Option<AccountId>,
    pub ledger_id: LedgerId,
    pub fee_schedule_key: Option<Key>,
    pub fee_exempt_keys: Vec<Key>,
    pub custom_fees: Vec<FixedCustomFee>,
}

impl TopicInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::ConsensusGetTopicInfoResponse>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::ConsensusGetTopicInfoResponse> for TopicInfo {
    fn from_protobuf(pb: services::ConsensusGetTopicInfoResponse) -> Result<Self> {
        let topic_id = TopicId::from_protobuf(required(pb.topic_id, "topic_id")?)?;
        let info = required(pb.topic_info, "topic_info")?;

        Ok(Self {
            topic_id,
            topic_memo: info.memo,
            running_hash: info.running_hash,
            sequence_number: info.sequence_number,
            expiration_time: Option::from_protobuf(info.expiration_time)?,
            admin_key: Option::from_protobuf(info.admin_key)?,
            submit_key: Option::from_protobuf(info.submit_key)?,
            auto_renew_period: Option::from_protobuf(info.auto_renew_period)?,
            auto_renew_account_id: Option::from_protobuf(info.auto_renew_account)?,
            ledger_id: LedgerId::from_bytes(info.ledger_id),
            fee_schedule_key: Option::from_protobuf(info.fee_schedule_key)?,
            fee_exempt_keys: Vec::from_protobuf(info.fee_exempt_key_list)?,
            custom_fees: Vec::from_protobuf(info.custom_fees)?,
        })
    }
}

impl ToProtobuf for TopicInfo {
    type Protobuf = services::ConsensusGetTopicInfoResponse;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusGetTopicInfoResponse {
            header: None,
            topic_id: Some(self.topic_id.to_protobuf()),
            topic_info: Some(services::ConsensusTopicInfo {
                memo: self.topic_memo.clone(),
                running_hash: self.running_hash.clone(),
                sequence_number: self.sequence_number,
                expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
                admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
                submit_key: self.submit_key.as_ref().map(Key::to_protobuf),
                auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
                auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
                ledger_id: self.ledger_id.to_bytes(),
                fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
                fee_exempt_key_list: self.fee_exempt_keys.to_protobuf(),
                custom_fees: self.custom_fees.to_protobuf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_info_rejected() {
        let pb = services::ConsensusGetTopicInfoResponse {
            header: None,
            topic_id: Some(TopicId::new(0, 0, 3).to_protobuf()),
            topic_info: None,
        };
        assert!(TopicInfo::from_protobuf(pb).is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let info = TopicInfo {
            topic_id: TopicId::new(0, 0, 3),
            topic_memo: "memo".to_owned(),
            running_hash: vec![1; 48],
            sequence_number: 12,
            expiration_time: DateTime::from_timestamp(1_900_000_000, 5),
            admin_key: None,
            submit_key: None,
            auto_renew_period: Some(Duration::from_secs(3600)),
            auto_renew_account_id: Some(AccountId::new(0, 0, 40)),
            ledger_id: LedgerId::testnet(),
            fee_schedule_key: None,
            fee_exempt_keys: Vec::new(),
            custom_fees: Vec::new(),
        };

        assert_eq!(TopicInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }
}
