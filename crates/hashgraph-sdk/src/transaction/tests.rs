use std::cell::RefCell;
use std::collections::HashMap;
use std::num::NonZeroUsize;

use chrono::DateTime;
use hashgraph_crypto::hashing::sha384;
use hashgraph_crypto::PrivateKey;

use super::*;
use crate::{
    Hbar, LedgerId, ScheduleCreateTransaction, TopicId, TopicMessageSubmitTransaction, TransferTransaction,
};

fn node(num: u64) -> AccountId {
    AccountId::new(0, 0, num)
}

fn fixed_id() -> TransactionId {
    TransactionId::new(node(1001), DateTime::from_timestamp(1_700_000_000, 0).unwrap())
}

fn transfer(nodes: &[u64]) -> TransferTransaction {
    let mut transaction = TransferTransaction::new();
    transaction
        .hbar_transfer(node(1001), Hbar::new(-5))
        .unwrap()
        .hbar_transfer(node(1002), Hbar::new(5))
        .unwrap()
        .node_account_ids(nodes.iter().copied().map(node))
        .unwrap()
        .transaction_id(fixed_id())
        .unwrap();
    transaction
}

fn topic_message(len: usize, nodes: &[u64]) -> TopicMessageSubmitTransaction {
    let mut transaction = TopicMessageSubmitTransaction::new();
    transaction
        .topic_id(TopicId::new(0, 0, 7))
        .unwrap()
        .message((0..len).map(|i| i as u8).collect::<Vec<_>>())
        .unwrap()
        .chunk_size(NonZeroUsize::new(10).unwrap())
        .unwrap()
        .node_account_ids(nodes.iter().copied().map(node))
        .unwrap()
        .transaction_id(fixed_id())
        .unwrap();
    transaction
}

fn client_with_operator() -> (Client, PrivateKey) {
    let network = HashMap::from([
        ("10.0.0.4:50211".to_owned(), node(4)),
        ("10.0.0.3:50211".to_owned(), node(3)),
    ]);
    let client = Client::for_network(network).unwrap();
    let key = PrivateKey::generate_ed25519();
    client.set_operator(node(1001), key.clone());
    (client, key)
}

// ============================================================================
// FREEZE
// ============================================================================

#[test]
fn test_freeze_needs_nodes() {
    let mut transaction = TransferTransaction::new();
    transaction.transaction_id(fixed_id()).unwrap();

    assert!(matches!(transaction.freeze(), Err(Error::FreezeUnsetNodeAccountIds)));
    assert!(!transaction.is_frozen());
}

#[test]
fn test_freeze_needs_payer() {
    let mut transaction = TransferTransaction::new();
    transaction.node_account_ids([node(3)]).unwrap();

    assert!(matches!(transaction.freeze(), Err(Error::NoPayerAccountOrTransactionId)));
}

#[test]
fn test_setters_fail_once_frozen() {
    let mut transaction = transfer(&[3]);
    transaction.freeze().unwrap();

    assert!(matches!(transaction.transaction_memo("late"), Err(Error::TransactionFrozen)));
    assert!(matches!(transaction.hbar_transfer(node(9), Hbar::new(1)), Err(Error::TransactionFrozen)));
    assert_eq!(transaction.get_transaction_memo(), "");
}

#[test]
fn test_freeze_is_idempotent() {
    let mut transaction = transfer(&[3, 4]);
    transaction.freeze().unwrap();
    let first = transaction.to_bytes().unwrap();

    transaction.freeze().unwrap();
    assert_eq!(transaction.to_bytes().unwrap(), first);
}

#[test]
fn test_freeze_with_client_fills_defaults() {
    let (client, _) = client_with_operator();
    client.set_default_max_transaction_fee(Hbar::new(7));

    let mut transaction = TransferTransaction::new();
    transaction.hbar_transfer(node(1001), Hbar::new(-1)).unwrap();
    transaction.freeze_with(&client).unwrap();

    assert_eq!(transaction.get_node_account_ids(), Some(&[node(3), node(4)][..]));
    assert_eq!(transaction.get_transaction_id().map(|id| id.account_id.clone()), Some(node(1001)));
    assert_eq!(transaction.get_max_transaction_fee(), Some(Hbar::new(7)));
    assert_eq!(transaction.get_transaction_valid_duration(), DEFAULT_TRANSACTION_VALID_DURATION);
}

#[test]
fn test_explicit_fee_wins_over_client_default() {
    let (client, _) = client_with_operator();
    client.set_default_max_transaction_fee(Hbar::new(7));

    let mut transaction = transfer(&[3]);
    transaction.max_transaction_fee(Hbar::new(1)).unwrap();
    transaction.freeze_with(&client).unwrap();

    let body = transaction.make_body_protobuf().unwrap();
    assert_eq!(body.transaction_fee, Hbar::new(1).to_tinybars() as u64);
}

#[test]
fn test_freeze_validates_checksums_when_enabled() {
    let checked: AccountId = "0.0.123-esxsf".parse().unwrap();

    let build = || {
        let mut transaction = TransferTransaction::new();
        transaction
            .hbar_transfer(checked.clone(), Hbar::new(1))
            .unwrap()
            .node_account_ids([node(3)])
            .unwrap()
            .transaction_id(fixed_id())
            .unwrap();
        transaction
    };

    let testnet = Client::for_testnet();
    testnet.set_auto_validate_checksums(true);
    assert!(build().freeze_with(&testnet).is_ok());

    let mainnet = Client::for_mainnet();
    mainnet.set_auto_validate_checksums(true);
    assert!(matches!(build().freeze_with(&mainnet), Err(Error::BadEntityId { .. })));

    let unnamed = Client::for_network(HashMap::from([("127.0.0.1:50211".to_owned(), node(3))])).unwrap();
    unnamed.set_auto_validate_checksums(true);
    assert!(matches!(build().freeze_with(&unnamed), Err(Error::CannotPerformChecksumValidation)));
}

// ============================================================================
// SIGN
// ============================================================================

#[test]
fn test_sign_requires_freeze() {
    let mut transaction = transfer(&[3]);
    let key = PrivateKey::generate_ed25519();

    assert!(matches!(transaction.sign(key), Err(Error::TransactionNotFrozen)));
    assert!(matches!(transaction.to_bytes(), Err(Error::TransactionNotFrozen)));
}

#[test]
fn test_signature_fans_out_to_every_node() {
    let key = PrivateKey::generate_ed25519();
    let mut transaction = transfer(&[3, 4, 5]);
    transaction.freeze().unwrap().sign(key.clone()).unwrap();

    let signatures = transaction.signatures().unwrap();
    assert_eq!(signatures.len(), 3);
    for per_key in signatures.values() {
        assert_eq!(per_key.len(), 1);
        assert!(per_key.contains_key(&key.public_key()));
    }
}

#[test]
fn test_duplicate_signer_is_ignored() {
    let key = PrivateKey::generate_ed25519();
    let mut transaction = transfer(&[3]);
    transaction.freeze().unwrap().sign(key.clone()).unwrap();
    let once = transaction.to_bytes().unwrap();

    transaction.sign(key).unwrap();
    assert_eq!(transaction.to_bytes().unwrap(), once);
}

#[test]
fn test_signatures_verify_over_body_bytes() {
    let key = PrivateKey::generate_ed25519();
    let mut transaction = transfer(&[3, 4]);
    transaction.freeze().unwrap().sign(key.clone()).unwrap();

    let sources = transaction.sources().unwrap();
    for signed in sources.signed_transactions() {
        let pair = &signed.sig_map.as_ref().unwrap().sig_pair[0];
        let Some(services::signature_pair::Signature::Ed25519(signature)) = &pair.signature else {
            panic!("expected an ed25519 signature, got {:?}", pair.signature);
        };
        key.public_key().verify(&signed.body_bytes, signature).unwrap();
    }
}

#[test]
fn test_external_signer_sees_each_entry_once() {
    let key = PrivateKey::generate_ed25519();
    let seen = RefCell::new(Vec::new());

    let mut transaction = transfer(&[3, 4]);
    transaction.freeze().unwrap();
    transaction
        .sign_with(key.public_key(), |body| {
            seen.borrow_mut().push(body.to_vec());
            key.sign(body).unwrap()
        })
        .unwrap();

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 2);
    assert_ne!(seen[0], seen[1]);
}

#[test]
fn test_sign_with_operator_freezes_first() {
    let (client, key) = client_with_operator();

    let mut transaction = TransferTransaction::new();
    transaction.hbar_transfer(node(1001), Hbar::new(-1)).unwrap();
    transaction.sign_with_operator(&client).unwrap();

    assert!(transaction.is_frozen());
    let signatures = transaction.signatures().unwrap();
    assert!(signatures[&node(3)].contains_key(&key.public_key()));
}

#[test]
fn test_add_signature_needs_single_node() {
    let key = PrivateKey::generate_ed25519();

    let mut many = transfer(&[3, 4]);
    many.freeze().unwrap();
    let err = many.add_signature(key.public_key(), vec![0; 64]).unwrap_err();
    assert!(matches!(err, Error::SignatureForMultiNode(2)));

    let mut single = transfer(&[3]);
    single.freeze().unwrap();
    let body = single.sources().unwrap().signed_transactions()[0].body_bytes.clone();
    single.add_signature(key.public_key(), key.sign(&body).unwrap()).unwrap();

    assert!(single.signatures().unwrap()[&node(3)].contains_key(&key.public_key()));
}

// ============================================================================
// SERIALIZE
// ============================================================================

#[test]
fn test_bytes_round_trip_keeps_body_and_signatures() {
    let key = PrivateKey::generate_ed25519();
    let mut transaction = transfer(&[3, 4]);
    transaction.transaction_memo("round trip").unwrap();
    transaction.freeze().unwrap().sign(key.clone()).unwrap();

    let bytes = transaction.to_bytes().unwrap();
    let decoded = TransferTransaction::from_bytes(&bytes).unwrap();

    assert!(decoded.is_frozen());
    assert_eq!(decoded.get_transaction_memo(), "round trip");
    assert_eq!(decoded.make_body_protobuf().unwrap(), transaction.make_body_protobuf().unwrap());
    assert_eq!(decoded.signatures().unwrap(), transaction.signatures().unwrap());
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
}

#[test]
fn test_decoded_transaction_can_be_signed_further() {
    let first = PrivateKey::generate_ed25519();
    let second = PrivateKey::generate_ed25519();

    let mut transaction = transfer(&[3]);
    transaction.freeze().unwrap().sign(first.clone()).unwrap();

    let mut decoded = TransferTransaction::from_bytes(&transaction.to_bytes().unwrap()).unwrap();
    decoded.sign(second.clone()).unwrap();

    let per_key = &decoded.signatures().unwrap()[&node(3)];
    assert!(per_key.contains_key(&first.public_key()));
    assert!(per_key.contains_key(&second.public_key()));
}

#[test]
fn test_transaction_hash_covers_signed_bytes() {
    let mut transaction = transfer(&[3, 4]);
    transaction.freeze().unwrap();

    let first = &transaction.sources().unwrap().signed_transactions()[0];
    let expected = sha384(&first.encode_to_vec());
    assert_eq!(transaction.transaction_hash().unwrap().as_bytes(), expected.as_slice());

    let per_node = transaction.transaction_hash_per_node().unwrap();
    assert_eq!(per_node.iter().map(|(id, _)| id.clone()).collect::<Vec<_>>(), [node(3), node(4)]);
    assert_ne!(per_node[0].1, per_node[1].1);
}

// ============================================================================
// CHUNKS
// ============================================================================

#[test]
fn test_chunks_fan_out_chunk_major() {
    let mut transaction = topic_message(25, &[3, 4]);
    transaction.freeze().unwrap();

    let infos = transaction.chunk_infos().unwrap();
    assert_eq!(infos.len(), 6);
    assert_eq!(
        infos.iter().map(|info| (info.current, info.node_account_id.clone())).collect::<Vec<_>>(),
        [(0, node(3)), (0, node(4)), (1, node(3)), (1, node(4)), (2, node(3)), (2, node(4))]
    );
    assert!(infos.iter().all(|info| info.total == 3 && info.initial_transaction_id == fixed_id()));
    assert!(infos[5].is_last());

    let starts: Vec<_> = infos.iter().step_by(2).map(|info| info.current_transaction_id.valid_start).collect();
    assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_chunk_limit_is_enforced_at_freeze() {
    let mut transaction = topic_message(25, &[3]);
    transaction.max_chunks(2).unwrap();

    assert!(matches!(
        transaction.freeze(),
        Err(Error::MaxChunksExceeded { max: 2, requested: 3 })
    ));
}

#[test]
fn test_multi_chunk_signatures_are_refused() {
    let key = PrivateKey::generate_ed25519();
    let mut transaction = topic_message(25, &[3]);
    transaction.freeze().unwrap().sign(key.clone()).unwrap();

    assert!(matches!(transaction.signatures(), Err(Error::SignatureForMultiChunk)));
    assert!(matches!(
        transaction.add_signature(key.public_key(), vec![0; 64]),
        Err(Error::SignatureForMultiChunk)
    ));
}

#[test]
fn test_chunked_bytes_round_trip_reassembles_message() {
    let mut transaction = topic_message(25, &[3, 4]);
    transaction.freeze().unwrap().sign(PrivateKey::generate_ed25519()).unwrap();

    let bytes = transaction.to_bytes().unwrap();
    let decoded = TopicMessageSubmitTransaction::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.get_message(), transaction.get_message());
    assert_eq!(decoded.chunk_infos().unwrap(), transaction.chunk_infos().unwrap());
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
}

#[test]
fn test_wrong_kind_from_bytes_fails() {
    let mut transaction = transfer(&[3]);
    transaction.freeze().unwrap();

    let err = TopicMessageSubmitTransaction::from_bytes(&transaction.to_bytes().unwrap()).unwrap_err();
    assert!(matches!(err, Error::FromProtobuf(_)));
}

// ============================================================================
// SCHEDULE / BATCH
// ============================================================================

#[test]
fn test_schedule_refuses_explicit_nodes() {
    let transaction = transfer(&[3]);
    assert!(matches!(transaction.schedule(), Err(Error::ScheduleNodeIdsSet)));
}

#[test]
fn test_schedule_carries_memo_and_id() {
    let mut transaction = TransferTransaction::new();
    transaction
        .hbar_transfer(node(1001), Hbar::new(1))
        .unwrap()
        .transaction_memo("later")
        .unwrap()
        .transaction_id(fixed_id())
        .unwrap();

    let scheduled: ScheduleCreateTransaction = transaction.schedule().unwrap();
    assert_eq!(scheduled.get_transaction_id(), Some(&fixed_id()));
    let inner = scheduled.get_scheduled_transaction().unwrap();
    assert_eq!(inner.transaction_memo, "later");
}

#[test]
fn test_batchify_targets_node_zero() {
    let (client, key) = client_with_operator();

    let mut inner = transfer(&[]);
    inner.batchify(&client, key.public_key()).unwrap();

    assert!(inner.is_frozen());
    assert_eq!(inner.get_node_account_ids(), Some(&[AccountId::new(0, 0, 0)][..]));
    assert!(inner.get_batch_key().is_some());
    assert!(inner.validate_checksums(&LedgerId::testnet()).is_ok());
}
