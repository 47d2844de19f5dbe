//! # Wrapping Transactions
//!
//! Scheduling turns a transaction body into the payload of a schedule create;
//! batching carries already signed inner transactions inside an outer one.

#[cfg(test)]
mod tests {
    use hashgraph_sdk::{
        AnySchedulableTransactionData, AnyTransactionData, BatchTransaction, Error, FreezeTransaction, FreezeType,
        Hbar, PrngTransaction, ScheduleCreateTransaction, TransferTransaction,
    };

    use crate::{account, fixed_transaction_id, local_client};

    fn transfer(memo: &str) -> TransferTransaction {
        let mut transaction = TransferTransaction::new();
        transaction
            .hbar_transfer(account(1001), Hbar::new(-1))
            .unwrap()
            .hbar_transfer(account(1002), Hbar::new(1))
            .unwrap()
            .transaction_memo(memo)
            .unwrap();
        transaction
    }

    // =============================================================================
    // SCHEDULE
    // =============================================================================

    #[test]
    fn test_scheduled_transfer_survives_bytes() {
        let (client, _) = local_client();

        let mut schedule = transfer("rent").schedule().unwrap();
        schedule.schedule_memo("monthly").unwrap().sign_with_operator(&client).unwrap();

        let decoded = ScheduleCreateTransaction::from_bytes(&schedule.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.get_schedule_memo(), "monthly");

        let scheduled = decoded.get_scheduled_transaction().unwrap();
        assert!(matches!(scheduled.data, AnySchedulableTransactionData::Transfer(_)));
        assert_eq!(scheduled.transaction_memo, "rent");

        let inner = scheduled.to_transaction().unwrap();
        assert!(!inner.is_frozen());
        assert_eq!(inner.get_transaction_memo(), "rent");
    }

    #[test]
    fn test_schedule_keeps_transaction_id() {
        let mut prng = PrngTransaction::new();
        prng.range(100).unwrap().transaction_id(fixed_transaction_id(1001)).unwrap();

        let schedule = prng.schedule().unwrap();
        assert_eq!(schedule.get_transaction_id(), Some(&fixed_transaction_id(1001)));
        assert!(matches!(
            schedule.get_scheduled_transaction().map(|scheduled| &scheduled.data),
            Some(AnySchedulableTransactionData::Prng(_))
        ));
    }

    // =============================================================================
    // BATCH
    // =============================================================================

    #[test]
    fn test_batch_carries_signed_inner_transactions() {
        let (client, operator_key) = local_client();

        let mut first = transfer("first");
        first.batchify(&client, operator_key.public_key()).unwrap();
        let mut second = transfer("second");
        second.batchify(&client, operator_key.public_key()).unwrap();

        let expected_ids = [first.get_transaction_id().cloned(), second.get_transaction_id().cloned()];

        let mut batch = BatchTransaction::new();
        batch
            .add_inner_transaction(first)
            .unwrap()
            .add_inner_transaction(second)
            .unwrap()
            .sign_with_operator(&client)
            .unwrap();

        let decoded = BatchTransaction::from_bytes(&batch.to_bytes().unwrap()).unwrap();
        let ids: Vec<_> = decoded.get_inner_transaction_ids().into_iter().cloned().map(Some).collect();
        assert_eq!(ids, expected_ids);

        for inner in decoded.get_inner_transactions() {
            assert!(inner.is_frozen());
            assert!(matches!(inner.data(), AnyTransactionData::Transfer(_)));
            assert!(inner.signatures().unwrap()[&account(0)].contains_key(&operator_key.public_key()));
        }
    }

    #[test]
    fn test_batch_rejects_unfrozen_inner() {
        let mut batch = BatchTransaction::new();
        let err = batch.add_inner_transaction(transfer("loose")).unwrap_err();
        assert!(matches!(err, Error::BatchInnerNotFrozen));
    }

    #[test]
    fn test_batch_rejects_freeze_and_nested_batches() {
        let (client, operator_key) = local_client();

        let mut freeze = FreezeTransaction::new();
        freeze.freeze_type(FreezeType::FreezeOnly).unwrap();
        freeze.batchify(&client, operator_key.public_key()).unwrap();

        let mut batch = BatchTransaction::new();
        assert!(matches!(batch.add_inner_transaction(freeze), Err(Error::BatchInnerForbidden("Freeze"))));

        let mut nested = BatchTransaction::new();
        nested.batchify(&client, operator_key.public_key()).unwrap();
        assert!(matches!(batch.add_inner_transaction(nested), Err(Error::BatchInnerForbidden("Batch"))));
    }
}
