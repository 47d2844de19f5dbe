//! JSON and environment configuration for [`Client`](super::Client).
//!
//! ```json
//! {
//!   "network": "testnet",
//!   "operator": { "accountId": "0.0.1001", "privateKey": "302e..." },
//!   "requestTimeout": 120,
//!   "autoValidateChecksums": true
//! }
//! ```
//!
//! `network` is either a network name or a map from `host:port` to node
//! account id.

use std::collections::BTreeMap;
use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Address book source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkConfig {
    /// `mainnet`, `testnet` or `previewnet`.
    Named(String),
    /// `host:port` to node account id.
    Addresses(BTreeMap<String, String>),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::Named("testnet".to_owned())
    }
}

/// Paying account and its key, both as text.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfig {
    pub account_id: String,
    pub private_key: String,
}

impl fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Serializable client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub network: NetworkConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorConfig>,
    pub shard: u64,
    pub realm: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<String>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_deadline: Option<u64>,
    pub auto_validate_checksums: bool,
}

impl ClientConfig {
    /// Read the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `HASHGRAPH_NETWORK`: network name (default: testnet)
    /// - `OPERATOR_ID`: operator account id
    /// - `OPERATOR_KEY`: operator private key
    ///
    /// The operator variables must be set together.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network = lookup("HASHGRAPH_NETWORK").unwrap_or_else(|| "testnet".to_owned());

        let operator = match (lookup("OPERATOR_ID"), lookup("OPERATOR_KEY")) {
            (Some(account_id), Some(private_key)) => Some(OperatorConfig { account_id, private_key }),
            (None, None) => None,
            _ => return Err(Error::Config("OPERATOR_ID and OPERATOR_KEY must be set together".to_owned())),
        };

        Ok(Self { network: NetworkConfig::Named(network), operator, ..Self::default() })
    }

    /// Structural checks that need no parsing of ids or keys.
    pub fn validate(&self) -> Result<()> {
        match &self.network {
            NetworkConfig::Named(name) if name.trim().is_empty() => {
                return Err(Error::Config("network name is empty".to_owned()));
            }
            NetworkConfig::Addresses(addresses) if addresses.is_empty() => {
                return Err(Error::Config("network must contain at least one node".to_owned()));
            }
            _ => {}
        }

        if let Some(operator) = &self.operator {
            if operator.account_id.is_empty() || operator.private_key.is_empty() {
                return Err(Error::Config("operator needs both an account id and a private key".to_owned()));
            }
        }

        if let (Some(timeout), Some(deadline)) = (self.request_timeout, self.grpc_deadline) {
            if timeout < deadline {
                return Err(Error::Config(format!(
                    "requestTimeout ({timeout}s) is shorter than grpcDeadline ({deadline}s)"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::{AccountId, Client, LedgerId, PrivateKey};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_camel_case_document() {
        let key = PrivateKey::generate_ed25519();
        let der = key.to_string_der();
        let json = format!(
            r#"{{
                "network": {{ "127.0.0.1:50211": "0.0.3" }},
                "operator": {{ "accountId": "0.0.1001", "privateKey": "{}" }},
                "ledgerId": "testnet",
                "requestTimeout": 60,
                "grpcDeadline": 5,
                "autoValidateChecksums": true
            }}"#,
            der.as_str()
        );

        let client = Client::from_config(&json).unwrap();
        assert_eq!(client.node_account_ids(), [AccountId::new(0, 0, 3)]);
        assert_eq!(client.operator_account_id(), Some(AccountId::new(0, 0, 1001)));
        assert_eq!(client.operator_public_key(), Some(key.public_key()));
        assert_eq!(client.ledger_id(), Some(LedgerId::testnet()));
        assert_eq!(client.request_timeout(), Duration::from_secs(60));
        assert_eq!(client.grpc_deadline(), Duration::from_secs(5));
        assert!(client.auto_validate_checksums());
    }

    #[test]
    fn test_named_network_document() {
        let config: ClientConfig = serde_json::from_str(r#"{ "network": "mainnet" }"#).unwrap();
        assert_eq!(config.network, NetworkConfig::Named("mainnet".to_owned()));

        let client = Client::try_from(&config).unwrap();
        assert_eq!(client.ledger_id(), Some(LedgerId::mainnet()));
    }

    #[test]
    fn test_inverted_timeouts_are_rejected() {
        let config = ClientConfig { request_timeout: Some(1), grpc_deadline: Some(10), ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_env_requires_both_operator_variables() {
        let err = ClientConfig::from_lookup(lookup(&[("OPERATOR_ID", "0.0.2")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = ClientConfig::from_lookup(lookup(&[("HASHGRAPH_NETWORK", "previewnet")])).unwrap();
        assert_eq!(config.network, NetworkConfig::Named("previewnet".to_owned()));
        assert!(config.operator.is_none());
    }

    #[test]
    fn test_operator_debug_hides_key() {
        let operator = OperatorConfig { account_id: "0.0.2".to_owned(), private_key: "secret".to_owned() };
        assert!(!format!("{operator:?}").contains("secret"));
    }
}
