//! # Transaction Pipeline
//!
//! A [`Transaction`] is a mutable builder until it is frozen. Freezing fixes
//! the transaction id, the node list and every chunk body; afterwards only
//! signatures can be added.
//!
//! ```text
//! Unfrozen --freeze()--> Frozen --sign()*--> to_bytes()
//!                          ^
//!                          +---- from_bytes() (signatures preserved)
//! ```
//!
//! ## Fan-out
//!
//! One signed-transaction entry exists per chunk × node. Every signature is
//! applied to every entry.
//!
//! ## Concurrency
//!
//! All mutation, signing included, takes `&mut self`; share a frozen
//! transaction behind a lock to sign from several threads.

mod any;
mod batch;
mod chunked;
mod sources;
mod transaction_hash;
mod transaction_id;

use std::fmt;
use std::time::Duration;

use hashgraph_crypto::{PrivateKey, PublicKey};
use hashgraph_proto::services;
use prost::Message;
use tracing::{debug, trace, warn};

pub use any::{AnySchedulableTransactionData, AnyTransaction, AnyTransactionData, FromAnyTransactionData};
pub use batch::{BatchTransaction, BatchTransactionData};
pub use chunked::{ChunkData, ChunkInfo, DEFAULT_CHUNK_INTERVAL_NANOS};
pub(crate) use sources::TransactionSources;
pub use sources::SignatureList;
pub use transaction_hash::TransactionHash;
pub use transaction_id::TransactionId;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::ToProtobuf;
use crate::{
    AccountId, Client, CustomFeeLimit, Error, Hbar, Key, LedgerId, Result,
    ScheduleCreateTransaction, SchedulableTransaction,
};

/// Default validity window of a transaction.
pub const DEFAULT_TRANSACTION_VALID_DURATION: Duration = Duration::from_secs(120);

// ============================================================================
// TRAITS
// ============================================================================

/// Kind-specific half of a transaction.
pub trait TransactionData:
    Clone + fmt::Debug + Into<AnyTransactionData> + ValidateChecksums + ToTransactionDataProtobuf
{
    /// Fee cap used when neither the transaction nor the client sets one.
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(2)
    }

    /// Payload and limits, for kinds that split into chunks.
    fn chunk_data(&self) -> Option<&ChunkData> {
        None
    }
}

/// Encode the kind-specific body of one chunk.
pub trait ToTransactionDataProtobuf {
    fn to_transaction_data_protobuf(&self, chunk_info: &ChunkInfo) -> services::transaction_body::Data;
}

/// Encode the kind-specific body for a schedule.
pub trait ToSchedulableTransactionDataProtobuf {
    fn to_schedulable_transaction_data_protobuf(&self) -> services::schedulable_transaction_body::Data;
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Fields shared by every transaction kind.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TransactionBody<D> {
    pub(crate) data: D,
    pub(crate) node_account_ids: Option<Vec<AccountId>>,
    pub(crate) transaction_id: Option<TransactionId>,
    pub(crate) max_transaction_fee: Option<Hbar>,
    pub(crate) transaction_valid_duration: Option<Duration>,
    pub(crate) transaction_memo: String,
    pub(crate) custom_fee_limits: Vec<CustomFeeLimit>,
    pub(crate) batch_key: Option<Key>,
}

impl<D> TransactionBody<D> {
    /// Swap the kind-specific data, keeping every shared field.
    pub(crate) fn replace_data<E>(self, data: E) -> (TransactionBody<E>, D) {
        let Self {
            data: old,
            node_account_ids,
            transaction_id,
            max_transaction_fee,
            transaction_valid_duration,
            transaction_memo,
            custom_fee_limits,
            batch_key,
        } = self;

        let body = TransactionBody {
            data,
            node_account_ids,
            transaction_id,
            max_transaction_fee,
            transaction_valid_duration,
            transaction_memo,
            custom_fee_limits,
            batch_key,
        };

        (body, old)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Lifecycle {
    Unfrozen,
    Frozen(TransactionSources),
}

/// A transaction of kind `D`.
#[derive(Clone, PartialEq)]
pub struct Transaction<D> {
    body: TransactionBody<D>,
    lifecycle: Lifecycle,
}

impl<D: fmt::Debug> fmt::Debug for Transaction<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("body", &self.body)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

impl<D: Default> Default for Transaction<D> {
    fn default() -> Self {
        Self::from_data(D::default())
    }
}

impl<D: Default> Transaction<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Transaction<D> {
    pub(crate) fn from_data(data: D) -> Self {
        Self {
            body: TransactionBody {
                data,
                node_account_ids: None,
                transaction_id: None,
                max_transaction_fee: None,
                transaction_valid_duration: None,
                transaction_memo: String::new(),
                custom_fee_limits: Vec::new(),
                batch_key: None,
            },
            lifecycle: Lifecycle::Unfrozen,
        }
    }

    pub(crate) fn from_parts(body: TransactionBody<D>, sources: Option<TransactionSources>) -> Self {
        let lifecycle = match sources {
            Some(sources) => Lifecycle::Frozen(sources),
            None => Lifecycle::Unfrozen,
        };

        Self { body, lifecycle }
    }

    pub(crate) fn into_parts(self) -> (TransactionBody<D>, Option<TransactionSources>) {
        let sources = match self.lifecycle {
            Lifecycle::Frozen(sources) => Some(sources),
            Lifecycle::Unfrozen => None,
        };

        (self.body, sources)
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Frozen(_))
    }

    pub(crate) fn sources(&self) -> Option<&TransactionSources> {
        match &self.lifecycle {
            Lifecycle::Frozen(sources) => Some(sources),
            Lifecycle::Unfrozen => None,
        }
    }

    fn frozen_sources(&self) -> Result<&TransactionSources> {
        self.sources().ok_or(Error::TransactionNotFrozen)
    }

    fn require_not_frozen(&self) -> Result<()> {
        if self.is_frozen() {
            return Err(Error::TransactionFrozen);
        }

        Ok(())
    }

    /// Kind-specific data.
    pub fn data(&self) -> &D {
        &self.body.data
    }

    /// Mutable access to the kind-specific data; fails once frozen.
    pub(crate) fn data_mut(&mut self) -> Result<&mut D> {
        self.require_not_frozen()?;
        Ok(&mut self.body.data)
    }

    fn body_mut(&mut self) -> Result<&mut TransactionBody<D>> {
        self.require_not_frozen()?;
        Ok(&mut self.body)
    }

    // ------------------------------------------------------------------------
    // Shared fields
    // ------------------------------------------------------------------------

    pub fn get_node_account_ids(&self) -> Option<&[AccountId]> {
        self.body.node_account_ids.as_deref()
    }

    /// Nodes this transaction will be built for, in order.
    pub fn node_account_ids(&mut self, ids: impl IntoIterator<Item = AccountId>) -> Result<&mut Self> {
        self.body_mut()?.node_account_ids = Some(ids.into_iter().collect());
        Ok(self)
    }

    pub fn get_transaction_id(&self) -> Option<&TransactionId> {
        self.body.transaction_id.as_ref()
    }

    pub fn transaction_id(&mut self, id: TransactionId) -> Result<&mut Self> {
        self.body_mut()?.transaction_id = Some(id);
        Ok(self)
    }

    pub fn get_max_transaction_fee(&self) -> Option<Hbar> {
        self.body.max_transaction_fee
    }

    pub fn max_transaction_fee(&mut self, fee: Hbar) -> Result<&mut Self> {
        self.body_mut()?.max_transaction_fee = Some(fee);
        Ok(self)
    }

    pub fn get_transaction_valid_duration(&self) -> Duration {
        self.body.transaction_valid_duration.unwrap_or(DEFAULT_TRANSACTION_VALID_DURATION)
    }

    pub fn transaction_valid_duration(&mut self, duration: Duration) -> Result<&mut Self> {
        self.body_mut()?.transaction_valid_duration = Some(duration);
        Ok(self)
    }

    pub fn get_transaction_memo(&self) -> &str {
        &self.body.transaction_memo
    }

    pub fn transaction_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.body_mut()?.transaction_memo = memo.into();
        Ok(self)
    }

    pub fn get_custom_fee_limits(&self) -> &[CustomFeeLimit] {
        &self.body.custom_fee_limits
    }

    pub fn custom_fee_limits(
        &mut self,
        limits: impl IntoIterator<Item = CustomFeeLimit>,
    ) -> Result<&mut Self> {
        self.body_mut()?.custom_fee_limits = limits.into_iter().collect();
        Ok(self)
    }

    pub fn add_custom_fee_limit(&mut self, limit: CustomFeeLimit) -> Result<&mut Self> {
        self.body_mut()?.custom_fee_limits.push(limit);
        Ok(self)
    }

    pub fn get_batch_key(&self) -> Option<&Key> {
        self.body.batch_key.as_ref()
    }

    /// Key that must sign the outer batch carrying this transaction.
    pub fn batch_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.body_mut()?.batch_key = Some(key.into());
        Ok(self)
    }
}

impl<D: TransactionData> Transaction<D> {
    // ------------------------------------------------------------------------
    // Freeze
    // ------------------------------------------------------------------------

    /// Freeze with explicit node account ids and transaction id.
    pub fn freeze(&mut self) -> Result<&mut Self> {
        self.freeze_inner(None)
    }

    /// Freeze, filling the node list, transaction id and fee from `client`.
    pub fn freeze_with(&mut self, client: &Client) -> Result<&mut Self> {
        self.freeze_inner(Some(client))
    }

    fn freeze_inner(&mut self, client: Option<&Client>) -> Result<&mut Self> {
        if self.is_frozen() {
            return Ok(self);
        }

        let node_account_ids = match (&self.body.node_account_ids, client) {
            (Some(ids), _) if !ids.is_empty() => ids.clone(),
            (_, Some(client)) => client.node_account_ids(),
            _ => Vec::new(),
        };

        if node_account_ids.is_empty() {
            return Err(Error::FreezeUnsetNodeAccountIds);
        }

        let transaction_id = match (&self.body.transaction_id, client.and_then(Client::operator_account_id)) {
            (Some(id), _) => id.clone(),
            (None, Some(operator)) => TransactionId::generate(operator),
            (None, None) => return Err(Error::NoPayerAccountOrTransactionId),
        };

        if let Some(client) = client.filter(|client| client.auto_validate_checksums()) {
            let ledger_id = client.ledger_id().ok_or(Error::CannotPerformChecksumValidation)?;
            self.validate_checksums_for(&ledger_id, &node_account_ids, &transaction_id)?;
        }

        let max_transaction_fee = self
            .body
            .max_transaction_fee
            .or_else(|| client.and_then(Client::default_max_transaction_fee))
            .unwrap_or_else(|| self.body.data.default_max_transaction_fee());

        let (total, interval) = match self.body.data.chunk_data() {
            Some(chunk_data) => (chunk_data.check_limits()?, chunk_data.chunk_interval_nanos),
            None => (1, DEFAULT_CHUNK_INTERVAL_NANOS),
        };

        let transaction_ids = chunked::chunk_transaction_ids(&transaction_id, total, interval)?;

        self.body.node_account_ids = Some(node_account_ids.clone());
        self.body.transaction_id = Some(transaction_id.clone());
        self.body.max_transaction_fee = Some(max_transaction_fee);
        self.body.transaction_valid_duration = Some(self.get_transaction_valid_duration());

        let mut signed_transactions = Vec::with_capacity(total * node_account_ids.len());
        for (current, current_transaction_id) in transaction_ids.iter().enumerate() {
            for node_account_id in &node_account_ids {
                let chunk_info = ChunkInfo {
                    current,
                    total,
                    initial_transaction_id: transaction_id.clone(),
                    current_transaction_id: current_transaction_id.clone(),
                    node_account_id: node_account_id.clone(),
                };

                signed_transactions.push(services::SignedTransaction {
                    body_bytes: self.body.to_transaction_body_protobuf(&chunk_info).encode_to_vec(),
                    sig_map: Some(services::SignatureMap::default()),
                    use_serialized_tx_message_hash_algorithm: false,
                });
            }
        }

        debug!(
            transaction_id = %transaction_id,
            nodes = node_account_ids.len(),
            chunks = total,
            "transaction frozen"
        );

        self.lifecycle = Lifecycle::Frozen(TransactionSources::new(
            signed_transactions,
            transaction_ids,
            node_account_ids,
        ));

        Ok(self)
    }

    fn validate_checksums_for(
        &self,
        ledger_id: &LedgerId,
        node_account_ids: &[AccountId],
        transaction_id: &TransactionId,
    ) -> Result<()> {
        node_account_ids.validate_checksums(ledger_id)?;
        transaction_id.validate_checksums(ledger_id)?;
        self.body.data.validate_checksums(ledger_id)
    }

    // ------------------------------------------------------------------------
    // Sign
    // ------------------------------------------------------------------------

    /// Sign every chunk × node entry with `private_key`.
    pub fn sign(&mut self, private_key: PrivateKey) -> Result<&mut Self> {
        let public_key = private_key.public_key();
        self.sign_inner(&public_key, &|body: &[u8]| -> Result<Vec<u8>> { Ok(private_key.sign(body)?) })
    }

    /// Sign every entry with an external signer producing raw signature bytes.
    pub fn sign_with<F>(&mut self, public_key: PublicKey, signer: F) -> Result<&mut Self>
    where
        F: Fn(&[u8]) -> Vec<u8>,
    {
        self.sign_inner(&public_key, &|body: &[u8]| -> Result<Vec<u8>> { Ok(signer(body)) })
    }

    /// Freeze with `client` if needed, then sign with its operator key.
    pub fn sign_with_operator(&mut self, client: &Client) -> Result<&mut Self> {
        let operator_key = client.operator_key().ok_or(Error::NoPayerAccountOrTransactionId)?;

        self.freeze_with(client)?;
        self.sign(operator_key)
    }

    fn sign_inner(
        &mut self,
        public_key: &PublicKey,
        signer: &dyn Fn(&[u8]) -> Result<Vec<u8>>,
    ) -> Result<&mut Self> {
        let Lifecycle::Frozen(sources) = &mut self.lifecycle else {
            return Err(Error::TransactionNotFrozen);
        };

        let signed = sources.sign_with(public_key, signer)?;
        if signed == 0 {
            warn!(public_key = %public_key, "transaction already signed by key; ignoring");
        } else {
            trace!(public_key = %public_key, entries = signed, "signature applied");
        }

        Ok(self)
    }

    /// Attach a detached signature; only for single-node, single-chunk transactions.
    pub fn add_signature(&mut self, public_key: PublicKey, signature: Vec<u8>) -> Result<&mut Self> {
        let Lifecycle::Frozen(sources) = &mut self.lifecycle else {
            return Err(Error::TransactionNotFrozen);
        };

        if !sources.add_signature(&public_key, signature)? {
            warn!(public_key = %public_key, "transaction already signed by key; ignoring");
        }

        Ok(self)
    }

    /// Signatures per node and public key.
    pub fn signatures(&self) -> Result<SignatureList> {
        self.frozen_sources()?.signatures()
    }

    // ------------------------------------------------------------------------
    // Serialize
    // ------------------------------------------------------------------------

    /// Every chunk × node entry with every signature, as a `TransactionList`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.frozen_sources()?.to_transaction_list().encode_to_vec())
    }

    /// Hash of the first node's entry for the first chunk.
    pub fn transaction_hash(&self) -> Result<TransactionHash> {
        self.frozen_sources()?
            .transaction_hashes()
            .next()
            .map(|(_, hash)| hash)
            .ok_or(Error::FreezeUnsetNodeAccountIds)
    }

    /// Hash of the first chunk's entry for each node.
    pub fn transaction_hash_per_node(&self) -> Result<Vec<(AccountId, TransactionHash)>> {
        Ok(self
            .frozen_sources()?
            .transaction_hashes()
            .map(|(node, hash)| (node.clone(), hash))
            .collect())
    }

    /// Position of every chunk × node entry, chunk-major.
    pub fn chunk_infos(&self) -> Result<Vec<ChunkInfo>> {
        let sources = self.frozen_sources()?;
        let ids = sources.transaction_ids();
        let initial = ids.first().ok_or(Error::TransactionNotFrozen)?;

        Ok(ids
            .iter()
            .enumerate()
            .flat_map(|(current, id)| {
                sources.node_account_ids().iter().map(move |node| ChunkInfo {
                    current,
                    total: ids.len(),
                    initial_transaction_id: initial.clone(),
                    current_transaction_id: id.clone(),
                    node_account_id: node.clone(),
                })
            })
            .collect())
    }

    /// The body of the first entry; identical before and after a byte round trip.
    pub fn make_body_protobuf(&self) -> Result<services::TransactionBody> {
        let first = self.frozen_sources()?.signed_transactions().first();
        let first = first.ok_or(Error::TransactionNotFrozen)?;
        Ok(services::TransactionBody::decode(first.body_bytes.as_slice())?)
    }

    /// Validate every embedded entity id against `ledger_id`.
    pub fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.body.node_account_ids.validate_checksums(ledger_id)?;
        self.body.transaction_id.validate_checksums(ledger_id)?;
        self.body.data.validate_checksums(ledger_id)
    }

    // ------------------------------------------------------------------------
    // Batch
    // ------------------------------------------------------------------------

    /// Prepare as a batch inner transaction: node `0.0.0`, `batch_key` set,
    /// frozen with `client` and signed by its operator.
    pub fn batchify(&mut self, client: &Client, batch_key: impl Into<Key>) -> Result<&mut Self> {
        self.require_not_frozen()?;
        self.batch_key(batch_key)?;
        self.node_account_ids([AccountId::new(0, 0, 0)])?;
        self.sign_with_operator(client)
    }
}

impl<D> Transaction<D>
where
    D: TransactionData + Into<AnySchedulableTransactionData>,
{
    /// Wrap in a [`ScheduleCreateTransaction`] carrying this body.
    pub fn schedule(self) -> Result<ScheduleCreateTransaction> {
        self.require_not_frozen()?;
        if self.body.node_account_ids.is_some() {
            return Err(Error::ScheduleNodeIdsSet);
        }

        let TransactionBody { data, max_transaction_fee, transaction_memo, custom_fee_limits, .. } =
            self.body;

        let scheduled = SchedulableTransaction {
            data: data.into(),
            max_transaction_fee,
            transaction_memo,
            custom_fee_limits,
        };

        let mut transaction = ScheduleCreateTransaction::new();
        transaction.scheduled_transaction(scheduled)?;
        if let Some(transaction_id) = self.body.transaction_id {
            transaction.transaction_id(transaction_id)?;
        }

        Ok(transaction)
    }
}

impl<D: TransactionData> TransactionBody<D> {
    pub(crate) fn to_transaction_body_protobuf(&self, chunk_info: &ChunkInfo) -> services::TransactionBody {
        let max_transaction_fee = self
            .max_transaction_fee
            .unwrap_or_else(|| self.data.default_max_transaction_fee());

        services::TransactionBody {
            transaction_id: Some(chunk_info.current_transaction_id.to_protobuf()),
            node_account_id: Some(chunk_info.node_account_id.to_protobuf()),
            transaction_fee: max_transaction_fee.to_tinybars() as u64,
            transaction_valid_duration: Some(
                self.transaction_valid_duration
                    .unwrap_or(DEFAULT_TRANSACTION_VALID_DURATION)
                    .to_protobuf(),
            ),
            memo: self.transaction_memo.clone(),
            batch_key: self.batch_key.as_ref().map(Key::to_protobuf),
            max_custom_fees: self.custom_fee_limits.to_protobuf(),
            data: Some(self.data.to_transaction_data_protobuf(chunk_info)),
        }
    }
}

#[cfg(test)]
mod tests;
