//! Built-in address books of the public networks.

use std::collections::HashMap;

use crate::{AccountId, LedgerId};

/// Named networks with a built-in address book.
pub(crate) const NAMED_NETWORKS: [&str; 3] = ["mainnet", "testnet", "previewnet"];

const MAINNET: &[(&str, u64)] = &[
    ("35.237.200.180:50211", 3),
    ("35.186.191.247:50211", 4),
    ("35.192.2.25:50211", 5),
    ("35.199.161.108:50211", 6),
    ("35.203.82.240:50211", 7),
    ("35.236.5.219:50211", 8),
    ("35.197.192.225:50211", 9),
    ("35.242.233.154:50211", 10),
];

const TESTNET: &[(&str, u64)] = &[
    ("0.testnet.hedera.com:50211", 3),
    ("1.testnet.hedera.com:50211", 4),
    ("2.testnet.hedera.com:50211", 5),
    ("3.testnet.hedera.com:50211", 6),
];

const PREVIEWNET: &[(&str, u64)] = &[
    ("0.previewnet.hedera.com:50211", 3),
    ("1.previewnet.hedera.com:50211", 4),
    ("2.previewnet.hedera.com:50211", 5),
    ("3.previewnet.hedera.com:50211", 6),
];

fn book(entries: &[(&str, u64)]) -> HashMap<String, AccountId> {
    entries.iter().map(|(address, num)| ((*address).to_owned(), AccountId::new(0, 0, *num))).collect()
}

pub(crate) fn mainnet() -> HashMap<String, AccountId> {
    book(MAINNET)
}

pub(crate) fn testnet() -> HashMap<String, AccountId> {
    book(TESTNET)
}

pub(crate) fn previewnet() -> HashMap<String, AccountId> {
    book(PREVIEWNET)
}

/// Address book and ledger id of a named network.
pub(crate) fn named(name: &str) -> Option<(HashMap<String, AccountId>, LedgerId)> {
    match name {
        "mainnet" => Some((mainnet(), LedgerId::mainnet())),
        "testnet" => Some((testnet(), LedgerId::testnet())),
        "previewnet" => Some((previewnet(), LedgerId::previewnet())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_network_resolves() {
        for name in NAMED_NETWORKS {
            let (network, _) = named(name).unwrap();
            assert!(network.values().any(|id| *id == AccountId::new(0, 0, 3)));
        }

        assert!(named("devnet").is_none());
        assert_eq!(mainnet().len(), MAINNET.len());
    }
}
