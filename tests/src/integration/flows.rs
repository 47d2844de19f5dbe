//! # Multi-Party Signing Flows
//!
//! A payer freezes and signs, ships bytes to a co-signer, and gets bytes back.
//! Every hop goes through `to_bytes` / `from_bytes`; bodies never change,
//! signatures only accumulate.

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::sync::Arc;
    use std::thread;

    use hashgraph_crypto::PrivateKey;
    use hashgraph_proto::services;
    use hashgraph_sdk::{
        AnyTransaction, AnyTransactionData, Error, FileAppendTransaction, FileId, Hbar, TokenId,
        TransferTransaction,
    };
    use parking_lot::Mutex;
    use prost::Message;

    use crate::{account, fixed_transaction_id, local_client};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn payroll() -> TransferTransaction {
        let mut transaction = TransferTransaction::new();
        transaction
            .hbar_transfer(account(1001), Hbar::new(-30))
            .unwrap()
            .hbar_transfer(account(2001), Hbar::new(10))
            .unwrap()
            .hbar_transfer(account(2002), Hbar::new(20))
            .unwrap()
            .token_transfer(TokenId::new(0, 0, 5000), account(1001), -1)
            .unwrap()
            .token_transfer(TokenId::new(0, 0, 5000), account(2001), 1)
            .unwrap()
            .transaction_memo("payroll")
            .unwrap();
        transaction
    }

    // =============================================================================
    // CO-SIGNING OVER BYTES
    // =============================================================================

    #[test]
    fn test_payer_and_cosigner_exchange_bytes() {
        let (client, operator_key) = local_client();
        let cosigner = PrivateKey::generate_ecdsa();

        // Payer: freeze, sign, ship.
        let mut transaction = payroll();
        transaction.sign_with_operator(&client).unwrap();
        let shipped = transaction.to_bytes().unwrap();

        // Co-signer: decode without knowing the kind, sign, ship back.
        let mut received = AnyTransaction::from_bytes(&shipped).unwrap();
        assert!(matches!(received.data(), AnyTransactionData::Transfer(_)));
        received.sign(cosigner.clone()).unwrap();
        let returned = received.to_bytes().unwrap();

        // Payer: decode as the concrete kind.
        let back = TransferTransaction::from_bytes(&returned).unwrap();
        assert_eq!(back.make_body_protobuf().unwrap(), transaction.make_body_protobuf().unwrap());
        assert_eq!(back.get_hbar_transfers(), transaction.get_hbar_transfers());

        let signatures = back.signatures().unwrap();
        assert_eq!(signatures.len(), 2);
        for per_key in signatures.values() {
            assert!(per_key.contains_key(&operator_key.public_key()));
            assert!(per_key.contains_key(&cosigner.public_key()));
        }
    }

    #[test]
    fn test_wire_entries_verify_for_every_signer() {
        let (client, operator_key) = local_client();
        let cosigner = PrivateKey::generate_ed25519();

        let mut transaction = payroll();
        transaction.sign_with_operator(&client).unwrap().sign(cosigner.clone()).unwrap();

        let list = hashgraph_proto::sdk::TransactionList::decode(transaction.to_bytes().unwrap().as_slice()).unwrap();
        assert_eq!(list.transaction_list.len(), 2);

        for entry in list.transaction_list {
            let signed = services::SignedTransaction::decode(entry.signed_transaction_bytes.as_slice()).unwrap();
            let sig_map = signed.sig_map.unwrap();
            assert_eq!(sig_map.sig_pair.len(), 2);

            for key in [&operator_key, &cosigner] {
                let public_key = key.public_key();
                let prefix = public_key.to_bytes_raw();
                let pair = sig_map.sig_pair.iter().find(|pair| pair.pub_key_prefix == prefix).unwrap();
                let Some(services::signature_pair::Signature::Ed25519(signature)) = &pair.signature else {
                    panic!("ed25519 key produced {:?}", pair.signature);
                };
                public_key.verify(&signed.body_bytes, signature).unwrap();
            }
        }
    }

    #[test]
    fn test_decoded_transaction_stays_frozen() {
        let (client, _) = local_client();

        let mut transaction = payroll();
        transaction.freeze_with(&client).unwrap();

        let mut decoded = TransferTransaction::from_bytes(&transaction.to_bytes().unwrap()).unwrap();
        assert!(decoded.is_frozen());
        assert!(matches!(decoded.transaction_memo("edited"), Err(Error::TransactionFrozen)));
    }

    // =============================================================================
    // CONCURRENT SIGNING
    // =============================================================================

    #[test]
    fn test_signers_on_threads_share_a_locked_transaction() {
        let mut transaction = payroll();
        transaction
            .node_account_ids([account(3), account(4), account(5)])
            .unwrap()
            .transaction_id(fixed_transaction_id(1001))
            .unwrap()
            .freeze()
            .unwrap();

        let shared = Arc::new(Mutex::new(transaction));
        let keys: Vec<_> = (0..8).map(|_| PrivateKey::generate_ed25519()).collect();

        let handles: Vec<_> = keys
            .iter()
            .cloned()
            .map(|key| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    shared.lock().sign(key).map(|_| ()).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let signatures = shared.lock().signatures().unwrap();
        assert_eq!(signatures.len(), 3);
        for per_key in signatures.values() {
            assert_eq!(per_key.len(), keys.len());
        }
    }

    // =============================================================================
    // CHUNKED PAYLOADS
    // =============================================================================

    #[test]
    fn test_file_append_survives_transport_in_chunks() {
        let (client, operator_key) = local_client();
        let contents: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

        let mut append = FileAppendTransaction::new();
        append
            .file_id(FileId::new(0, 0, 150))
            .unwrap()
            .contents(contents.clone())
            .unwrap()
            .chunk_size(NonZeroUsize::new(4096).unwrap())
            .unwrap()
            .sign_with_operator(&client)
            .unwrap();

        let infos = append.chunk_infos().unwrap();
        assert_eq!(infos.len(), 3 * 2);

        let decoded = FileAppendTransaction::from_bytes(&append.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.get_contents(), contents.as_slice());
        assert_eq!(decoded.get_file_id(), Some(FileId::new(0, 0, 150)));
        assert_eq!(decoded.chunk_infos().unwrap(), infos);

        // every chunk carries the operator's signature
        let list = hashgraph_proto::sdk::TransactionList::decode(append.to_bytes().unwrap().as_slice()).unwrap();
        let prefix = operator_key.public_key().to_bytes_raw();
        for entry in list.transaction_list {
            let signed = services::SignedTransaction::decode(entry.signed_transaction_bytes.as_slice()).unwrap();
            assert!(signed.sig_map.unwrap().sig_pair.iter().any(|pair| pair.pub_key_prefix == prefix));
        }
    }

    #[test]
    fn test_fee_cap_from_client_reaches_every_entry() {
        let (client, _) = local_client();
        client.set_default_max_transaction_fee(Hbar::new(3));

        let mut transaction = payroll();
        transaction.freeze_with(&client).unwrap();

        let list = hashgraph_proto::sdk::TransactionList::decode(transaction.to_bytes().unwrap().as_slice()).unwrap();
        for entry in list.transaction_list {
            let signed = services::SignedTransaction::decode(entry.signed_transaction_bytes.as_slice()).unwrap();
            let body = services::TransactionBody::decode(signed.body_bytes.as_slice()).unwrap();
            assert_eq!(body.transaction_fee, Hbar::new(3).to_tinybars() as u64);
            assert_eq!(body.memo, "payroll");
        }
    }
}
