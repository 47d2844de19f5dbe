use hashgraph_proto::services;
use prost::Message;

use super::any::{AnyTransaction, AnyTransactionData};
use super::{Transaction, TransactionData};
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{Error, LedgerId, Result, TransactionId};

/// Execute several already signed transactions atomically.
///
/// Inner transactions must be frozen for a single node in a single chunk
/// before they are added, and cannot be batches or freeze transactions.
pub type BatchTransaction = Transaction<BatchTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchTransactionData {
    inner_transactions: Vec<AnyTransaction>,
}

fn check_inner(transaction: &AnyTransaction) -> Result<()> {
    if !transaction.is_frozen() {
        return Err(Error::BatchInnerNotFrozen);
    }

    if let data @ (AnyTransactionData::Batch(_) | AnyTransactionData::Freeze(_)) = transaction.data() {
        return Err(Error::BatchInnerForbidden(data.kind()));
    }

    match transaction.sources() {
        Some(sources) if sources.chunks_len() == 1 && sources.node_account_ids().len() == 1 => Ok(()),
        Some(sources) => Err(Error::BatchInnerNotSingleEntry {
            nodes: sources.node_account_ids().len(),
            chunks: sources.chunks_len(),
        }),
        None => Err(Error::BatchInnerNotFrozen),
    }
}

impl BatchTransaction {
    pub fn get_inner_transactions(&self) -> &[AnyTransaction] {
        &self.data().inner_transactions
    }

    /// Replace the inner transactions; all of them are checked before any is stored.
    pub fn inner_transactions(
        &mut self,
        transactions: impl IntoIterator<Item = AnyTransaction>,
    ) -> Result<&mut Self> {
        let transactions: Vec<_> = transactions.into_iter().collect();
        transactions.iter().try_for_each(check_inner)?;

        self.data_mut()?.inner_transactions = transactions;
        Ok(self)
    }

    pub fn add_inner_transaction<D: TransactionData>(
        &mut self,
        transaction: Transaction<D>,
    ) -> Result<&mut Self> {
        let transaction = transaction.into_any();
        check_inner(&transaction)?;

        self.data_mut()?.inner_transactions.push(transaction);
        Ok(self)
    }

    /// Ids of the inner transactions, in execution order.
    pub fn get_inner_transaction_ids(&self) -> Vec<&TransactionId> {
        self.data()
            .inner_transactions
            .iter()
            .filter_map(AnyTransaction::get_transaction_id)
            .collect()
    }
}

impl TransactionData for BatchTransactionData {}

impl ValidateChecksums for BatchTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.inner_transactions.iter().try_for_each(|transaction| transaction.validate_checksums(ledger_id))
    }
}

impl ToProtobuf for BatchTransactionData {
    type Protobuf = services::AtomicBatchTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        let transactions = self
            .inner_transactions
            .iter()
            .filter_map(|transaction| transaction.sources())
            .filter_map(|sources| sources.signed_transactions().first())
            .map(Message::encode_to_vec)
            .collect();

        services::AtomicBatchTransactionBody { transactions }
    }
}

impl FromProtobuf<services::AtomicBatchTransactionBody> for BatchTransactionData {
    fn from_protobuf(pb: services::AtomicBatchTransactionBody) -> Result<Self> {
        let inner_transactions = pb
            .transactions
            .into_iter()
            .map(|signed_transaction_bytes| {
                AnyTransaction::from_transactions(vec![services::Transaction {
                    signed_transaction_bytes,
                    ..Default::default()
                }])
            })
            .collect::<Result<_>>()?;

        Ok(Self { inner_transactions })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::{AccountId, FreezeTransaction, PrngTransaction, TopicId, TopicMessageSubmitTransaction};

    fn transaction_id(secs: i64) -> TransactionId {
        TransactionId::new(AccountId::new(0, 0, 5006), DateTime::from_timestamp(secs, 0).unwrap())
    }

    fn frozen_prng(secs: i64) -> PrngTransaction {
        let mut tx = PrngTransaction::new();
        tx.range(100)
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 0)])
            .unwrap()
            .transaction_id(transaction_id(secs))
            .unwrap()
            .freeze()
            .unwrap();
        tx.sign(PrivateKey::generate_ed25519()).unwrap();
        tx
    }

    #[test]
    fn test_unfrozen_inner_rejected() {
        let mut batch = BatchTransaction::new();
        let err = batch.add_inner_transaction(PrngTransaction::new()).unwrap_err();
        assert!(matches!(err, Error::BatchInnerNotFrozen));
    }

    #[test]
    fn test_forbidden_kinds_rejected() {
        let mut freeze = FreezeTransaction::new();
        freeze
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(transaction_id(1))
            .unwrap()
            .freeze()
            .unwrap();

        let mut batch = BatchTransaction::new();
        let err = batch.add_inner_transaction(freeze).unwrap_err();
        assert!(matches!(err, Error::BatchInnerForbidden("Freeze")));

        let mut nested = BatchTransaction::new();
        nested
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(transaction_id(2))
            .unwrap()
            .freeze()
            .unwrap();
        assert!(matches!(
            batch.add_inner_transaction(nested).unwrap_err(),
            Error::BatchInnerForbidden("Batch")
        ));
    }

    #[test]
    fn test_chunked_inner_rejected() {
        let mut submit = TopicMessageSubmitTransaction::new();
        submit
            .topic_id(TopicId::new(0, 0, 8))
            .unwrap()
            .message(vec![7u8; 25])
            .unwrap()
            .chunk_size(std::num::NonZeroUsize::new(10).unwrap())
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 0)])
            .unwrap()
            .transaction_id(transaction_id(40))
            .unwrap()
            .freeze()
            .unwrap();

        let mut batch = BatchTransaction::new();
        let err = batch.add_inner_transaction(submit).unwrap_err();
        assert!(matches!(err, Error::BatchInnerNotSingleEntry { nodes: 1, chunks: 3 }));
        assert!(batch.get_inner_transactions().is_empty());
    }

    #[test]
    fn test_multi_node_inner_rejected() {
        let mut prng = PrngTransaction::new();
        prng.node_account_ids([AccountId::new(0, 0, 3), AccountId::new(0, 0, 4)])
            .unwrap()
            .transaction_id(transaction_id(50))
            .unwrap()
            .freeze()
            .unwrap();

        let mut batch = BatchTransaction::new();
        let err = batch.inner_transactions([prng.into_any()]).unwrap_err();
        assert!(matches!(err, Error::BatchInnerNotSingleEntry { nodes: 2, chunks: 1 }));
    }

    #[test]
    fn test_inner_transactions_survive_bytes() {
        let mut batch = BatchTransaction::new();
        batch
            .add_inner_transaction(frozen_prng(10))
            .unwrap()
            .add_inner_transaction(frozen_prng(20))
            .unwrap()
            .node_account_ids([AccountId::new(0, 0, 3)])
            .unwrap()
            .transaction_id(transaction_id(30))
            .unwrap()
            .freeze()
            .unwrap();

        let decoded = BatchTransaction::from_bytes(&batch.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.get_inner_transaction_ids(), batch.get_inner_transaction_ids());
        assert_eq!(decoded.get_inner_transactions()[0], batch.get_inner_transactions()[0]);
        assert_eq!(decoded.get_inner_transaction_ids()[1], &transaction_id(20));
    }
}
