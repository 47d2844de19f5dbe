//! # Transaction Sources
//!
//! The signed-transaction entries of a frozen transaction, chunk-major:
//! entry `chunk * nodes + node` carries the body for that chunk and node.
//!
//! Bodies never change after freezing; only signature maps grow.

use std::collections::BTreeMap;

use hashgraph_crypto::{KeyAlgorithm, PublicKey};
use hashgraph_proto::{sdk, services};
use prost::Message;

use crate::protobuf::{required, FromProtobuf};
use crate::{AccountId, Error, Result, TransactionHash, TransactionId};

/// Signatures per node, then per public key.
pub type SignatureList = BTreeMap<AccountId, BTreeMap<PublicKey, Vec<u8>>>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TransactionSources {
    signed_transactions: Vec<services::SignedTransaction>,
    transaction_ids: Vec<TransactionId>,
    node_account_ids: Vec<AccountId>,
}

impl TransactionSources {
    pub(crate) fn new(
        signed_transactions: Vec<services::SignedTransaction>,
        transaction_ids: Vec<TransactionId>,
        node_account_ids: Vec<AccountId>,
    ) -> Self {
        debug_assert_eq!(signed_transactions.len(), transaction_ids.len() * node_account_ids.len());

        Self { signed_transactions, transaction_ids, node_account_ids }
    }

    pub(crate) fn signed_transactions(&self) -> &[services::SignedTransaction] {
        &self.signed_transactions
    }

    pub(crate) fn transaction_ids(&self) -> &[TransactionId] {
        &self.transaction_ids
    }

    pub(crate) fn node_account_ids(&self) -> &[AccountId] {
        &self.node_account_ids
    }

    pub(crate) fn chunks_len(&self) -> usize {
        self.transaction_ids.len()
    }

    /// Entries of chunk `index`, one per node.
    pub(crate) fn chunk(&self, index: usize) -> &[services::SignedTransaction] {
        let nodes = self.node_account_ids.len();
        &self.signed_transactions[index * nodes..(index + 1) * nodes]
    }

    /// Sign every entry not already signed by `public_key`.
    ///
    /// Returns how many entries gained a signature.
    pub(crate) fn sign_with(
        &mut self,
        public_key: &PublicKey,
        signer: &dyn Fn(&[u8]) -> Result<Vec<u8>>,
    ) -> Result<usize> {
        let prefix = public_key.to_bytes_raw();
        let mut signed = 0;

        for transaction in &mut self.signed_transactions {
            let sig_map = transaction.sig_map.get_or_insert_with(Default::default);
            if sig_map.sig_pair.iter().any(|pair| pair.pub_key_prefix == prefix) {
                continue;
            }

            let signature = signer(&transaction.body_bytes)?;
            sig_map.sig_pair.push(signature_pair(public_key, signature));
            signed += 1;
        }

        Ok(signed)
    }

    /// Attach a detached signature to the only entry.
    pub(crate) fn add_signature(&mut self, public_key: &PublicKey, signature: Vec<u8>) -> Result<bool> {
        if self.chunks_len() > 1 {
            return Err(Error::SignatureForMultiChunk);
        }

        if self.node_account_ids.len() != 1 {
            return Err(Error::SignatureForMultiNode(self.node_account_ids.len()));
        }

        let added = self.sign_with(public_key, &|_: &[u8]| Ok(signature.clone()))?;
        Ok(added > 0)
    }

    pub(crate) fn signatures(&self) -> Result<SignatureList> {
        if self.chunks_len() > 1 {
            return Err(Error::SignatureForMultiChunk);
        }

        let mut list = SignatureList::new();
        for (node, transaction) in self.node_account_ids.iter().zip(&self.signed_transactions) {
            let per_key = list.entry(node.clone()).or_default();
            for pair in transaction.sig_map.iter().flat_map(|map| &map.sig_pair) {
                let (key, signature) = parse_signature_pair(pair)?;
                per_key.insert(key, signature);
            }
        }

        Ok(list)
    }

    pub(crate) fn transaction_hashes(&self) -> impl Iterator<Item = (&AccountId, TransactionHash)> {
        self.node_account_ids
            .iter()
            .zip(self.chunk(0))
            .map(|(node, transaction)| (node, TransactionHash::new(&transaction.encode_to_vec())))
    }

    pub(crate) fn to_transaction_list(&self) -> sdk::TransactionList {
        let transaction_list = self
            .signed_transactions
            .iter()
            .map(|signed| services::Transaction {
                signed_transaction_bytes: signed.encode_to_vec(),
                ..Default::default()
            })
            .collect();

        sdk::TransactionList { transaction_list }
    }

    /// Rebuild sources from wire transactions, returning each entry's decoded body.
    ///
    /// Entries must be grouped by transaction id and every chunk must list
    /// the same nodes in the same order.
    pub(crate) fn from_transactions(
        transactions: Vec<services::Transaction>,
    ) -> Result<(Self, Vec<services::TransactionBody>)> {
        if transactions.is_empty() {
            return Err(Error::from_protobuf("transaction list is empty"));
        }

        let mut signed_transactions = Vec::with_capacity(transactions.len());
        let mut bodies = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            let signed = if transaction.signed_transaction_bytes.is_empty() {
                // legacy envelope: body and signatures directly on the transaction
                services::SignedTransaction {
                    body_bytes: transaction.body_bytes,
                    sig_map: transaction.sig_map,
                    use_serialized_tx_message_hash_algorithm: false,
                }
            } else {
                services::SignedTransaction::decode(transaction.signed_transaction_bytes.as_slice())?
            };

            bodies.push(services::TransactionBody::decode(signed.body_bytes.as_slice())?);
            signed_transactions.push(signed);
        }

        let mut transaction_ids: Vec<TransactionId> = Vec::new();
        let mut chunk_nodes: Vec<Vec<AccountId>> = Vec::new();

        for body in &bodies {
            let transaction_id =
                TransactionId::from_protobuf(required(body.transaction_id.clone(), "transaction_id")?)?;
            let node_account_id =
                AccountId::from_protobuf(required(body.node_account_id.clone(), "node_account_id")?)?;

            if transaction_ids.last() != Some(&transaction_id) {
                if transaction_ids.contains(&transaction_id) {
                    return Err(Error::from_protobuf(format!(
                        "entries for transaction {transaction_id} are not contiguous"
                    )));
                }
                transaction_ids.push(transaction_id);
                chunk_nodes.push(Vec::new());
            }

            if let Some(nodes) = chunk_nodes.last_mut() {
                nodes.push(node_account_id);
            }
        }

        let node_account_ids = chunk_nodes.first().cloned().unwrap_or_default();
        if chunk_nodes.iter().any(|nodes| *nodes != node_account_ids) {
            return Err(Error::from_protobuf("transaction chunks have mismatched node account ids"));
        }

        Ok((Self::new(signed_transactions, transaction_ids, node_account_ids), bodies))
    }
}

pub(crate) fn signature_pair(public_key: &PublicKey, signature: Vec<u8>) -> services::SignaturePair {
    use services::signature_pair::Signature;

    let signature = match public_key.algorithm() {
        KeyAlgorithm::Ed25519 => Signature::Ed25519(signature),
        KeyAlgorithm::Ecdsa => Signature::EcdsaSecp256k1(signature),
    };

    services::SignaturePair {
        pub_key_prefix: public_key.to_bytes_raw(),
        signature: Some(signature),
    }
}

fn parse_signature_pair(pair: &services::SignaturePair) -> Result<(PublicKey, Vec<u8>)> {
    use services::signature_pair::Signature;

    match &pair.signature {
        Some(Signature::Ed25519(signature)) => {
            Ok((PublicKey::from_bytes_ed25519(&pair.pub_key_prefix)?, signature.clone()))
        }
        Some(Signature::EcdsaSecp256k1(signature)) => {
            Ok((PublicKey::from_bytes_ecdsa(&pair.pub_key_prefix)?, signature.clone()))
        }
        Some(_) => Err(Error::from_protobuf("unsupported signature type in signature map")),
        None => Err(Error::from_protobuf("signature pair has no signature")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::protobuf::ToProtobuf;

    fn body(transaction_id: &TransactionId, node: u64) -> services::SignedTransaction {
        let body = services::TransactionBody {
            transaction_id: Some(transaction_id.to_protobuf()),
            node_account_id: Some(AccountId::new(0, 0, node).to_protobuf()),
            ..Default::default()
        };

        services::SignedTransaction {
            body_bytes: body.encode_to_vec(),
            sig_map: Some(Default::default()),
            ..Default::default()
        }
    }

    fn sources(chunks: usize, nodes: &[u64]) -> TransactionSources {
        let initial = TransactionId::new(AccountId::new(0, 0, 2), DateTime::from_timestamp(10, 0).unwrap());
        let ids: Vec<_> = (0..chunks).map(|i| initial.offset_by(i as i64).unwrap()).collect();
        let signed = ids.iter().flat_map(|id| nodes.iter().map(|&node| body(id, node))).collect();
        TransactionSources::new(signed, ids, nodes.iter().map(|&n| AccountId::new(0, 0, n)).collect())
    }

    #[test]
    fn test_sign_every_entry_once() {
        let mut sources = sources(2, &[3, 4]);
        let key = PrivateKey::generate_ed25519();
        let signer = |body: &[u8]| -> Result<Vec<u8>> { Ok(key.sign(body)?) };

        assert_eq!(sources.sign_with(&key.public_key(), &signer).unwrap(), 4);
        assert_eq!(sources.sign_with(&key.public_key(), &signer).unwrap(), 0);
        for signed in sources.signed_transactions() {
            assert_eq!(signed.sig_map.as_ref().unwrap().sig_pair.len(), 1);
        }
    }

    #[test]
    fn test_signatures_per_node() {
        let mut sources = sources(1, &[3, 4]);
        for key in [PrivateKey::generate_ed25519(), PrivateKey::generate_ecdsa()] {
            let signer = |body: &[u8]| -> Result<Vec<u8>> { Ok(key.sign(body)?) };
            sources.sign_with(&key.public_key(), &signer).unwrap();
        }

        let list = sources.signatures().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.values().all(|per_key| per_key.len() == 2));
    }

    #[test]
    fn test_multi_chunk_signatures_rejected() {
        assert!(matches!(sources(2, &[3]).signatures(), Err(Error::SignatureForMultiChunk)));
        let key = PrivateKey::generate_ed25519().public_key();
        assert!(matches!(
            sources(1, &[3, 4]).add_signature(&key, vec![0; 64]),
            Err(Error::SignatureForMultiNode(2))
        ));
    }

    #[test]
    fn test_transaction_list_round_trip() {
        let original = sources(3, &[3, 4, 5]);
        let list = original.to_transaction_list();
        let (decoded, bodies) = TransactionSources::from_transactions(list.transaction_list).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(bodies.len(), 9);
        assert_eq!(decoded.chunk(1).len(), 3);
    }

    #[test]
    fn test_legacy_envelope_accepted() {
        let original = sources(1, &[3]);
        let signed = original.signed_transactions()[0].clone();
        let legacy = services::Transaction {
            body_bytes: signed.body_bytes.clone(),
            sig_map: signed.sig_map.clone(),
            ..Default::default()
        };
        let (decoded, _) = TransactionSources::from_transactions(vec![legacy]).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_mismatched_nodes_rejected() {
        let a = sources(2, &[3, 4]);
        let mut transactions = a.to_transaction_list().transaction_list;
        transactions.pop();
        assert!(TransactionSources::from_transactions(transactions).is_err());
        assert!(TransactionSources::from_transactions(Vec::new()).is_err());
    }
}
