use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{LedgerId, Result, TopicId};

/// Get the current state of a topic.
pub type TopicInfoQuery = Query<TopicInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicInfoQueryData {
    topic_id: Option<TopicId>,
}

impl TopicInfoQuery {
    pub fn get_topic_id(&self) -> Option<TopicId> {
        self.data().topic_id
    }

    pub fn topic_id(&mut self, id: TopicId) -> &mut Self {
        self.data_mut().topic_id = Some(id);
        self
    }
}

impl ValidateChecksums for TopicInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.topic_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ConsensusGetTopicInfoQuery> for TopicInfoQueryData {
    fn from_protobuf(pb: services::ConsensusGetTopicInfoQuery) -> Result<Self> {
        Ok(Self { topic_id: Option::from_protobuf(pb.topic_id)? })
    }
}

impl ToProtobuf for TopicInfoQueryData {
    type Protobuf = services::ConsensusGetTopicInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusGetTopicInfoQuery { header: None, topic_id: self.topic_id.map(|id| id.to_protobuf()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ok_response_header, QueryData};

    #[test]
    fn test_topic_info_answer() {
        let topic_id = TopicId::new(0, 0, 8);
        let response = services::response::Response::ConsensusGetTopicInfo(
            services::ConsensusGetTopicInfoResponse {
                header: ok_response_header(),
                topic_id: Some(topic_id.to_protobuf()),
                topic_info: Some(services::ConsensusTopicInfo {
                    memo: "status feed".to_owned(),
                    running_hash: vec![0; 48],
                    sequence_number: 12,
                    ..Default::default()
                }),
            },
        );

        let mut query = TopicInfoQuery::new();
        query.topic_id(topic_id);

        let info = query.data().response_from_protobuf(response).unwrap();
        assert_eq!(info.topic_id, topic_id);
        assert_eq!(info.topic_memo, "status feed");
        assert_eq!(info.sequence_number, 12);
    }
}
