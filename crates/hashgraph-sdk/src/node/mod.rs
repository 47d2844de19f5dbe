//! Address book management: node creation, updates and removal.

mod node_create;
mod node_delete;
mod node_update;
mod service_endpoint;

pub use node_create::{NodeCreateTransaction, NodeCreateTransactionData};
pub use node_delete::{NodeDeleteTransaction, NodeDeleteTransactionData};
pub use node_update::{NodeUpdateTransaction, NodeUpdateTransactionData};
pub use service_endpoint::ServiceEndpoint;
