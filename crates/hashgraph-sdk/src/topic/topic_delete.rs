use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result, TopicId};

/// Delete a topic. Signed by its admin key.
pub type TopicDeleteTransaction = Transaction<TopicDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicDeleteTransactionData {
    topic_id: Option<TopicId>,
}

impl TopicDeleteTransaction {
    pub fn get_topic_id(&self) -> Option<TopicId> {
        self.data().topic_id
    }

    pub fn topic_id(&mut self, id: impl Into<TopicId>) -> Result<&mut Self> {
        self.data_mut()?.topic_id = Some(id.into());
        Ok(self)
    }
}

impl TransactionData for TopicDeleteTransactionData {}

impl ValidateChecksums for TopicDeleteTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.topic_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ConsensusDeleteTopicTransactionBody> for TopicDeleteTransactionData {
    fn from_protobuf(pb: services::ConsensusDeleteTopicTransactionBody) -> Result<Self> {
        Ok(Self { topic_id: Option::from_protobuf(pb.topic_id)? })
    }
}

impl ToProtobuf for TopicDeleteTransactionData {
    type Protobuf = services::ConsensusDeleteTopicTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusDeleteTopicTransactionBody { topic_id: self.topic_id.map(|id| id.to_protobuf()) }
    }
}
