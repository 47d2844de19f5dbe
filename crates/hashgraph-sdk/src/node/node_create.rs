use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, Key, LedgerId, Result, ServiceEndpoint};

/// Add a consensus node to the network address book.
pub type NodeCreateTransaction = Transaction<NodeCreateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCreateTransactionData {
    account_id: Option<AccountId>,
    description: String,
    gossip_endpoints: Vec<ServiceEndpoint>,
    service_endpoints: Vec<ServiceEndpoint>,
    gossip_ca_certificate: Vec<u8>,
    grpc_certificate_hash: Vec<u8>,
    admin_key: Option<Key>,
    decline_reward: bool,
    grpc_web_proxy_endpoint: Option<ServiceEndpoint>,
}

impl NodeCreateTransaction {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    /// Account that receives the node's fees.
    pub fn account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.account_id = Some(id);
        Ok(self)
    }

    pub fn get_description(&self) -> &str {
        &self.data().description
    }

    pub fn description(&mut self, description: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.description = description.into();
        Ok(self)
    }

    pub fn get_gossip_endpoints(&self) -> &[ServiceEndpoint] {
        &self.data().gossip_endpoints
    }

    pub fn gossip_endpoints(&mut self, endpoints: impl IntoIterator<Item = ServiceEndpoint>) -> Result<&mut Self> {
        self.data_mut()?.gossip_endpoints = endpoints.into_iter().collect();
        Ok(self)
    }

    pub fn get_service_endpoints(&self) -> &[ServiceEndpoint] {
        &self.data().service_endpoints
    }

    pub fn service_endpoints(&mut self, endpoints: impl IntoIterator<Item = ServiceEndpoint>) -> Result<&mut Self> {
        self.data_mut()?.service_endpoints = endpoints.into_iter().collect();
        Ok(self)
    }

    pub fn get_gossip_ca_certificate(&self) -> &[u8] {
        &self.data().gossip_ca_certificate
    }

    /// DER-encoded certificate used for gossip.
    pub fn gossip_ca_certificate(&mut self, certificate: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.gossip_ca_certificate = certificate.into();
        Ok(self)
    }

    pub fn get_grpc_certificate_hash(&self) -> &[u8] {
        &self.data().grpc_certificate_hash
    }

    pub fn grpc_certificate_hash(&mut self, hash: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.grpc_certificate_hash = hash.into();
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_decline_reward(&self) -> bool {
        self.data().decline_reward
    }

    pub fn decline_reward(&mut self, decline: bool) -> Result<&mut Self> {
        self.data_mut()?.decline_reward = decline;
        Ok(self)
    }

    pub fn get_grpc_web_proxy_endpoint(&self) -> Option<&ServiceEndpoint> {
        self.data().grpc_web_proxy_endpoint.as_ref()
    }

    pub fn grpc_web_proxy_endpoint(&mut self, endpoint: ServiceEndpoint) -> Result<&mut Self> {
        self.data_mut()?.grpc_web_proxy_endpoint = Some(endpoint);
        Ok(self)
    }
}

impl TransactionData for NodeCreateTransactionData {}

impl ValidateChecksums for NodeCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::NodeCreateTransactionBody> for NodeCreateTransactionData {
    fn from_protobuf(pb: services::NodeCreateTransactionBody) -> Result<Self> {
        Ok(Self {
            account_id: Option::from_protobuf(pb.account_id)?,
            description: pb.description,
            gossip_endpoints: Vec::from_protobuf(pb.gossip_endpoint)?,
            service_endpoints: Vec::from_protobuf(pb.service_endpoint)?,
            gossip_ca_certificate: pb.gossip_ca_certificate,
            grpc_certificate_hash: pb.grpc_certificate_hash,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            decline_reward: pb.decline_reward,
            grpc_web_proxy_endpoint: Option::from_protobuf(pb.grpc_proxy_endpoint)?,
        })
    }
}

impl ToProtobuf for NodeCreateTransactionData {
    type Protobuf = services::NodeCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NodeCreateTransactionBody {
            account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
            description: self.description.clone(),
            gossip_endpoint: self.gossip_endpoints.to_protobuf(),
            service_endpoint: self.service_endpoints.to_protobuf(),
            gossip_ca_certificate: self.gossip_ca_certificate.clone(),
            grpc_certificate_hash: self.grpc_certificate_hash.clone(),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            decline_reward: self.decline_reward,
            grpc_proxy_endpoint: self.grpc_web_proxy_endpoint.as_ref().map(ServiceEndpoint::to_protobuf),
        }
    }
}
