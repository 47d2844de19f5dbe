use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{LedgerId, Result};

/// Remove a node from the address book.
pub type NodeDeleteTransaction = Transaction<NodeDeleteTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDeleteTransactionData {
    node_id: u64,
}

impl NodeDeleteTransaction {
    pub fn get_node_id(&self) -> u64 {
        self.data().node_id
    }

    pub fn node_id(&mut self, id: u64) -> Result<&mut Self> {
        self.data_mut()?.node_id = id;
        Ok(self)
    }
}

impl TransactionData for NodeDeleteTransactionData {}

impl ValidateChecksums for NodeDeleteTransactionData {
    fn validate_checksums(&self, _ledger_id: &LedgerId) -> Result<()> {
        Ok(())
    }
}

impl FromProtobuf<services::NodeDeleteTransactionBody> for NodeDeleteTransactionData {
    fn from_protobuf(pb: services::NodeDeleteTransactionBody) -> Result<Self> {
        Ok(Self { node_id: pb.node_id })
    }
}

impl ToProtobuf for NodeDeleteTransactionData {
    type Protobuf = services::NodeDeleteTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NodeDeleteTransactionBody { node_id: self.node_id }
    }
}
