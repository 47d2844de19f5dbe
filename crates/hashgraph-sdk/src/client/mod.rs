//! # Client
//!
//! Holds what the transaction pipeline needs from its environment: the node
//! address book, the operator that pays and signs, the ledger id used for
//! checksums, and request defaults. There is no transport here.
//!
//! A `Client` is cheap to clone; clones share state, and every setter takes
//! `&self`.

mod config;
mod network;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use hashgraph_crypto::{PrivateKey, PublicKey};
use parking_lot::RwLock;
use tracing::{debug, info};

pub use config::{ClientConfig, NetworkConfig, OperatorConfig};

use crate::{AccountId, Error, Hbar, LedgerId, Result};

/// Default upper bound on a whole request, retries included.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Default deadline of a single gRPC call.
pub const DEFAULT_GRPC_DEADLINE: Duration = Duration::from_secs(10);

#[derive(Clone)]
struct Operator {
    account_id: AccountId,
    signer: PrivateKey,
}

struct ClientState {
    network: HashMap<String, AccountId>,
    operator: Option<Operator>,
    ledger_id: Option<LedgerId>,
    shard: u64,
    realm: u64,
    default_max_transaction_fee: Option<Hbar>,
    request_timeout: Duration,
    grpc_deadline: Duration,
    auto_validate_checksums: bool,
}

/// Network collaborator for freezing and signing.
#[derive(Clone)]
pub struct Client {
    state: Arc<RwLock<ClientState>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Client")
            .field("nodes", &state.network.len())
            .field("operator", &state.operator.as_ref().map(|op| op.account_id.clone()))
            .field("ledger_id", &state.ledger_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    fn from_parts(network: HashMap<String, AccountId>, ledger_id: Option<LedgerId>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ClientState {
                network,
                operator: None,
                ledger_id,
                shard: 0,
                realm: 0,
                default_max_transaction_fee: None,
                request_timeout: DEFAULT_REQUEST_TIMEOUT,
                grpc_deadline: DEFAULT_GRPC_DEADLINE,
                auto_validate_checksums: false,
            })),
        }
    }

    /// Client for a named network: `mainnet`, `testnet` or `previewnet`.
    pub fn for_name(name: &str) -> Result<Self> {
        let (network, ledger_id) =
            network::named(name).ok_or_else(|| Error::Config(format!("unknown network `{name}`")))?;

        debug!(network = name, nodes = network.len(), "client created for named network");
        Ok(Self::from_parts(network, Some(ledger_id)))
    }

    pub fn for_mainnet() -> Self {
        Self::from_parts(network::mainnet(), Some(LedgerId::mainnet()))
    }

    pub fn for_testnet() -> Self {
        Self::from_parts(network::testnet(), Some(LedgerId::testnet()))
    }

    pub fn for_previewnet() -> Self {
        Self::from_parts(network::previewnet(), Some(LedgerId::previewnet()))
    }

    /// Client for a custom address book; no ledger id is set.
    pub fn for_network(network: HashMap<String, AccountId>) -> Result<Self> {
        if network.is_empty() {
            return Err(Error::Config("network must contain at least one node".to_owned()));
        }

        Ok(Self::from_parts(network, None))
    }

    /// Client from a JSON configuration document.
    pub fn from_config(json: &str) -> Result<Self> {
        let config: ClientConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(format!("malformed configuration: {e}")))?;

        Self::try_from(&config)
    }

    /// Client from a JSON configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;

        Self::from_config(&json)
    }

    // ------------------------------------------------------------------------
    // Network
    // ------------------------------------------------------------------------

    /// Address to node account id.
    pub fn network(&self) -> HashMap<String, AccountId> {
        self.state.read().network.clone()
    }

    pub fn set_network(&self, network: HashMap<String, AccountId>) -> Result<()> {
        if network.is_empty() {
            return Err(Error::Config("network must contain at least one node".to_owned()));
        }

        self.state.write().network = network;
        Ok(())
    }

    /// Distinct node account ids, ascending.
    pub fn node_account_ids(&self) -> Vec<AccountId> {
        let mut ids: Vec<_> = self.state.read().network.values().cloned().collect();
        ids.sort();
        ids.dedup();
        ids
    }

    pub fn ledger_id(&self) -> Option<LedgerId> {
        self.state.read().ledger_id.clone()
    }

    pub fn set_ledger_id(&self, ledger_id: Option<LedgerId>) {
        self.state.write().ledger_id = ledger_id;
    }

    pub fn shard(&self) -> u64 {
        self.state.read().shard
    }

    pub fn realm(&self) -> u64 {
        self.state.read().realm
    }

    /// Shard and realm of the network, used when parsing EVM addresses.
    pub fn set_shard_and_realm(&self, shard: u64, realm: u64) {
        let mut state = self.state.write();
        state.shard = shard;
        state.realm = realm;
    }

    // ------------------------------------------------------------------------
    // Operator
    // ------------------------------------------------------------------------

    /// Account that pays for transactions and the key that signs for it.
    pub fn set_operator(&self, account_id: AccountId, private_key: PrivateKey) {
        info!(operator = %account_id, "client operator set");
        self.state.write().operator = Some(Operator { account_id, signer: private_key });
    }

    pub fn operator_account_id(&self) -> Option<AccountId> {
        self.state.read().operator.as_ref().map(|op| op.account_id.clone())
    }

    pub fn operator_public_key(&self) -> Option<PublicKey> {
        self.state.read().operator.as_ref().map(|op| op.signer.public_key())
    }

    pub(crate) fn operator_key(&self) -> Option<PrivateKey> {
        self.state.read().operator.as_ref().map(|op| op.signer.clone())
    }

    // ------------------------------------------------------------------------
    // Request defaults
    // ------------------------------------------------------------------------

    /// Fee cap applied when a transaction sets none.
    pub fn default_max_transaction_fee(&self) -> Option<Hbar> {
        self.state.read().default_max_transaction_fee
    }

    pub fn set_default_max_transaction_fee(&self, fee: Hbar) {
        self.state.write().default_max_transaction_fee = Some(fee);
    }

    pub fn request_timeout(&self) -> Duration {
        self.state.read().request_timeout
    }

    /// Fails when `timeout` is shorter than the gRPC deadline.
    pub fn set_request_timeout(&self, timeout: Duration) -> Result<()> {
        let mut state = self.state.write();
        check_timeouts(timeout, state.grpc_deadline)?;
        state.request_timeout = timeout;
        Ok(())
    }

    pub fn grpc_deadline(&self) -> Duration {
        self.state.read().grpc_deadline
    }

    /// Fails when `deadline` is longer than the request timeout.
    pub fn set_grpc_deadline(&self, deadline: Duration) -> Result<()> {
        let mut state = self.state.write();
        check_timeouts(state.request_timeout, deadline)?;
        state.grpc_deadline = deadline;
        Ok(())
    }

    /// Whether `freeze_with` validates entity-id checksums against the ledger id.
    pub fn auto_validate_checksums(&self) -> bool {
        self.state.read().auto_validate_checksums
    }

    pub fn set_auto_validate_checksums(&self, validate: bool) {
        self.state.write().auto_validate_checksums = validate;
    }
}

fn check_timeouts(request_timeout: Duration, grpc_deadline: Duration) -> Result<()> {
    if request_timeout < grpc_deadline {
        return Err(Error::InvalidTimeouts { request_timeout, grpc_deadline });
    }

    Ok(())
}

impl TryFrom<&ClientConfig> for Client {
    type Error = Error;

    fn try_from(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = match &config.network {
            NetworkConfig::Named(name) => Self::for_name(name)?,
            NetworkConfig::Addresses(addresses) => {
                let network = addresses
                    .iter()
                    .map(|(address, id)| Ok((address.clone(), id.parse::<AccountId>()?)))
                    .collect::<Result<HashMap<_, _>>>()?;
                Self::for_network(network)?
            }
        };

        if let Some(operator) = &config.operator {
            client.set_operator(operator.account_id.parse()?, operator.private_key.parse()?);
        }

        if let Some(ledger_id) = &config.ledger_id {
            client.set_ledger_id(Some(ledger_id.parse()?));
        }

        client.set_shard_and_realm(config.shard, config.realm);
        client.set_auto_validate_checksums(config.auto_validate_checksums);

        {
            let mut state = client.state.write();
            if let Some(seconds) = config.request_timeout {
                state.request_timeout = Duration::from_secs(seconds);
            }
            if let Some(seconds) = config.grpc_deadline {
                state.grpc_deadline = Duration::from_secs(seconds);
            }
            check_timeouts(state.request_timeout, state.grpc_deadline)?;
        }

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_networks_carry_ledger_ids() {
        assert_eq!(Client::for_mainnet().ledger_id(), Some(LedgerId::mainnet()));
        assert_eq!(Client::for_testnet().ledger_id(), Some(LedgerId::testnet()));
        assert_eq!(Client::for_previewnet().ledger_id(), Some(LedgerId::previewnet()));
        assert!(Client::for_name("nowhere").is_err());

        for client in [Client::for_mainnet(), Client::for_testnet(), Client::for_previewnet()] {
            assert!(client.node_account_ids().contains(&AccountId::new(0, 0, 3)));
        }
    }

    #[test]
    fn test_node_account_ids_are_sorted_and_distinct() {
        let network = HashMap::from([
            ("10.0.0.2:50211".to_owned(), AccountId::new(0, 0, 4)),
            ("10.0.0.1:50211".to_owned(), AccountId::new(0, 0, 3)),
            ("10.0.0.3:50211".to_owned(), AccountId::new(0, 0, 3)),
        ]);

        let client = Client::for_network(network).unwrap();
        assert_eq!(client.node_account_ids(), [AccountId::new(0, 0, 3), AccountId::new(0, 0, 4)]);
        assert_eq!(client.ledger_id(), None);
    }

    #[test]
    fn test_empty_network_is_rejected() {
        assert!(matches!(Client::for_network(HashMap::new()), Err(Error::Config(_))));
    }

    #[test]
    fn test_timeout_ordering_is_enforced() {
        let client = Client::for_testnet();

        let err = client.set_request_timeout(Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeouts { .. }));

        let err = client.set_grpc_deadline(Duration::from_secs(300)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeouts { .. }));

        client.set_grpc_deadline(Duration::from_secs(30)).unwrap();
        client.set_request_timeout(Duration::from_secs(30)).unwrap();
        assert_eq!(client.request_timeout(), client.grpc_deadline());
    }

    #[test]
    fn test_clones_share_operator() {
        let client = Client::for_testnet();
        let clone = client.clone();
        let key = PrivateKey::generate_ed25519();

        client.set_operator(AccountId::new(0, 0, 1001), key.clone());

        assert_eq!(clone.operator_account_id(), Some(AccountId::new(0, 0, 1001)));
        assert_eq!(clone.operator_public_key(), Some(key.public_key()));
    }
}
