use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transaction::{
    AnySchedulableTransactionData, AnyTransaction, AnyTransactionData, Transaction, TransactionData,
};
use crate::{AccountId, CustomFeeLimit, Hbar, Key, LedgerId, Result};

/// Create a schedule that executes a wrapped transaction once enough keys sign it.
///
/// Built directly, or from another transaction with [`Transaction::schedule`].
pub type ScheduleCreateTransaction = Transaction<ScheduleCreateTransactionData>;

/// The body carried by a schedule: kind data plus the fields that survive scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulableTransaction {
    pub data: AnySchedulableTransactionData,
    pub max_transaction_fee: Option<Hbar>,
    pub transaction_memo: String,
    pub custom_fee_limits: Vec<CustomFeeLimit>,
}

impl SchedulableTransaction {
    /// Rebuild an unfrozen transaction from the scheduled body.
    pub fn to_transaction(&self) -> Result<AnyTransaction> {
        let mut transaction = AnyTransaction::from_data(self.data.clone().into());
        transaction.transaction_memo(self.transaction_memo.clone())?;
        transaction.custom_fee_limits(self.custom_fee_limits.clone())?;
        if let Some(fee) = self.max_transaction_fee {
            transaction.max_transaction_fee(fee)?;
        }

        Ok(transaction)
    }
}

impl ValidateChecksums for SchedulableTransaction {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.data.validate_checksums(ledger_id)?;
        self.custom_fee_limits.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::SchedulableTransactionBody> for SchedulableTransaction {
    fn from_protobuf(pb: services::SchedulableTransactionBody) -> Result<Self> {
        Ok(Self {
            data: AnySchedulableTransactionData::from_protobuf(required(pb.data, "data")?)?,
            // a zero fee means "unset" on the wire
            max_transaction_fee: (pb.transaction_fee != 0)
                .then(|| Hbar::from_tinybars(pb.transaction_fee as i64)),
            transaction_memo: pb.memo,
            custom_fee_limits: Vec::from_protobuf(pb.max_custom_fees)?,
        })
    }
}

impl ToProtobuf for SchedulableTransaction {
    type Protobuf = services::SchedulableTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        let fee = self
            .max_transaction_fee
            .unwrap_or_else(|| AnyTransactionData::from(self.data.clone()).default_max_transaction_fee());

        services::SchedulableTransactionBody {
            transaction_fee: fee.to_tinybars() as u64,
            memo: self.transaction_memo.clone(),
            max_custom_fees: self.custom_fee_limits.to_protobuf(),
            data: Some(self.data.to_protobuf()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleCreateTransactionData {
    scheduled_transaction: Option<SchedulableTransaction>,
    schedule_memo: String,
    admin_key: Option<Key>,
    payer_account_id: Option<AccountId>,
    expiration_time: Option<DateTime<Utc>>,
    wait_for_expiry: bool,
}

impl ScheduleCreateTransaction {
    pub fn get_scheduled_transaction(&self) -> Option<&SchedulableTransaction> {
        self.data().scheduled_transaction.as_ref()
    }

    pub fn scheduled_transaction(&mut self, transaction: SchedulableTransaction) -> Result<&mut Self> {
        self.data_mut()?.scheduled_transaction = Some(transaction);
        Ok(self)
    }

    pub fn get_schedule_memo(&self) -> &str {
        &self.data().schedule_memo
    }

    pub fn schedule_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.schedule_memo = memo.into();
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_payer_account_id(&self) -> Option<&AccountId> {
        self.data().payer_account_id.as_ref()
    }

    /// Account charged when the scheduled transaction executes.
    pub fn payer_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.payer_account_id = Some(id);
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }

    pub fn get_wait_for_expiry(&self) -> bool {
        self.data().wait_for_expiry
    }

    /// Execute at expiration instead of as soon as the signatures suffice.
    pub fn wait_for_expiry(&mut self, wait: bool) -> Result<&mut Self> {
        self.data_mut()?.wait_for_expiry = wait;
        Ok(self)
    }
}

impl TransactionData for ScheduleCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(5)
    }
}

impl ValidateChecksums for ScheduleCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.scheduled_transaction.validate_checksums(ledger_id)?;
        self.payer_account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ScheduleCreateTransactionBody> for ScheduleCreateTransactionData {
    fn from_protobuf(pb: services::ScheduleCreateTransactionBody) -> Result<Self> {
        Ok(Self {
            scheduled_transaction: Option::from_protobuf(pb.scheduled_transaction_body)?,
            schedule_memo: pb.memo,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            payer_account_id: Option::from_protobuf(pb.payer_account_id)?,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            wait_for_expiry: pb.wait_for_expiry,
        })
    }
}

impl ToProtobuf for ScheduleCreateTransactionData {
    type Protobuf = services::ScheduleCreateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ScheduleCreateTransactionBody {
            scheduled_transaction_body: self
                .scheduled_transaction
                .as_ref()
                .map(SchedulableTransaction::to_protobuf),
            memo: self.schedule_memo.clone(),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            payer_account_id: self.payer_account_id.as_ref().map(AccountId::to_protobuf),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            wait_for_expiry: self.wait_for_expiry,
        }
    }
}
