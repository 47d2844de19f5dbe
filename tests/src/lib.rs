//! # Hashgraph SDK Scenario Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Multi-party flows through the public API
//! │   ├── flows.rs      # freeze → bytes → co-sign → bytes
//! │   ├── schedule_batch.rs
//! │   ├── queries.rs
//! │   └── client.rs
//! │
//! └── properties/       # proptest invariants
//!     └── entity_ids.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hashgraph-tests
//! cargo test -p hashgraph-tests integration::
//! cargo test -p hashgraph-tests properties::
//!
//! # Benchmarks
//! cargo bench -p hashgraph-tests
//! ```

pub mod integration;
pub mod properties;

use std::collections::HashMap;

use chrono::DateTime;
use hashgraph_sdk::{AccountId, Client, PrivateKey, TransactionId};

/// Account `0.0.num`.
pub fn account(num: u64) -> AccountId {
    AccountId::new(0, 0, num)
}

/// A transaction id with a fixed valid start, for byte-stable fixtures.
pub fn fixed_transaction_id(payer: u64) -> TransactionId {
    let valid_start = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    TransactionId::new(account(payer), valid_start)
}

/// A two-node local client with a fresh ed25519 operator `0.0.1001`.
pub fn local_client() -> (Client, PrivateKey) {
    let network = HashMap::from([
        ("127.0.0.1:50211".to_owned(), account(3)),
        ("127.0.0.1:50212".to_owned(), account(4)),
    ]);

    let client = match Client::for_network(network) {
        Ok(client) => client,
        Err(err) => panic!("local network is never empty: {err}"),
    };

    let key = PrivateKey::generate_ed25519();
    client.set_operator(account(1001), key.clone());
    (client, key)
}
