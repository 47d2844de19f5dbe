use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, FixedCustomFee, Key, LedgerId, Result, TopicId};

/// Change properties of a topic. Unset fields are left unchanged.
pub type TopicUpdateTransaction = Transaction<TopicUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicUpdateTransactionData {
    topic_id: Option<TopicId>,
    expiration_time: Option<DateTime<Utc>>,
    topic_memo: Option<String>,
    admin_key: Option<Key>,
    submit_key: Option<Key>,
    auto_renew_period: Option<Duration>,
    auto_renew_account_id: Option<AccountId>,
    fee_schedule_key: Option<Key>,
    // `Some(vec![])` clears the list on the network
    fee_exempt_keys: Option<Vec<Key>>,
    custom_fees: Option<Vec<FixedCustomFee>>,
}

impl TopicUpdateTransaction {
    pub fn get_topic_id(&self) -> Option<TopicId> {
        self.data().topic_id
    }

    pub fn topic_id(&mut self, id: impl Into<TopicId>) -> Result<&mut Self> {
        self.data_mut()?.topic_id = Some(id.into());
        Ok(self)
    }

    pub fn get_expiration_time(&self) -> Option<DateTime<Utc>> {
        self.data().expiration_time
    }

    pub fn expiration_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.expiration_time = Some(at);
        Ok(self)
    }

    pub fn get_topic_memo(&self) -> Option<&str> {
        self.data().topic_memo.as_deref()
    }

    pub fn topic_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.topic_memo = Some(memo.into());
        Ok(self)
    }

    pub fn clear_topic_memo(&mut self) -> Result<&mut Self> {
        self.topic_memo("")
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_submit_key(&self) -> Option<&Key> {
        self.data().submit_key.as_ref()
    }

    pub fn submit_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.submit_key = Some(key.into());
        Ok(self)
    }

    pub fn get_auto_renew_period(&self) -> Option<Duration> {
        self.data().auto_renew_period
    }

    pub fn auto_renew_period(&mut self, period: Duration) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_period = Some(period);
        Ok(self)
    }

    pub fn get_auto_renew_account_id(&self) -> Option<&AccountId> {
        self.data().auto_renew_account_id.as_ref()
    }

    pub fn auto_renew_account_id(&mut self, id: AccountId) -> Result<&mut Self> {
        self.data_mut()?.auto_renew_account_id = Some(id);
        Ok(self)
    }

    /// Remove the auto-renew account by pointing it at `0.0.0`.
    pub fn clear_auto_renew_account_id(&mut self) -> Result<&mut Self> {
        self.auto_renew_account_id(AccountId::new(0, 0, 0))
    }

    pub fn get_fee_schedule_key(&self) -> Option<&Key> {
        self.data().fee_schedule_key.as_ref()
    }

    pub fn fee_schedule_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_schedule_key = Some(key.into());
        Ok(self)
    }

    pub fn get_fee_exempt_keys(&self) -> Option<&[Key]> {
        self.data().fee_exempt_keys.as_deref()
    }

    pub fn fee_exempt_keys(&mut self, keys: impl IntoIterator<Item = Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_exempt_keys = Some(keys.into_iter().collect());
        Ok(self)
    }

    pub fn clear_fee_exempt_keys(&mut self) -> Result<&mut Self> {
        self.fee_exempt_keys([])
    }

    pub fn get_custom_fees(&self) -> Option<&[FixedCustomFee]> {
        self.data().custom_fees.as_deref()
    }

    pub fn custom_fees(&mut self, fees: impl IntoIterator<Item = FixedCustomFee>) -> Result<&mut Self> {
        self.data_mut()?.custom_fees = Some(fees.into_iter().collect());
        Ok(self)
    }

    pub fn clear_custom_fees(&mut self) -> Result<&mut Self> {
        self.custom_fees([])
    }
}

impl TransactionData for TopicUpdateTransactionData {}

impl ValidateChecksums for TopicUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.topic_id.validate_checksums(ledger_id)?;
        self.auto_renew_account_id.validate_checksums(ledger_id)?;
        self.custom_fees.iter().flatten().try_for_each(|fee| fee.validate_checksums(ledger_id))
    }
}

impl FromProtobuf<services::ConsensusUpdateTopicTransactionBody> for TopicUpdateTransactionData {
    fn from_protobuf(pb: services::ConsensusUpdateTopicTransactionBody) -> Result<Self> {
        Ok(Self {
            topic_id: Option::from_protobuf(pb.topic_id)?,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            topic_memo: pb.memo,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            submit_key: Option::from_protobuf(pb.submit_key)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account)?,
            fee_schedule_key: Option::from_protobuf(pb.fee_schedule_key)?,
            fee_exempt_keys: pb.fee_exempt_key_list.map(|list| Vec::from_protobuf(list.keys)).transpose()?,
            custom_fees: pb.custom_fees.map(|list| Vec::from_protobuf(list.fees)).transpose()?,
        })
    }
}

impl ToProtobuf for TopicUpdateTransactionData {
    type Protobuf = services::ConsensusUpdateTopicTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusUpdateTopicTransactionBody {
            topic_id: self.topic_id.as_ref().map(TopicId::to_protobuf),
            memo: self.topic_memo.clone(),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            submit_key: self.submit_key.as_ref().map(Key::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
            fee_exempt_key_list: self
                .fee_exempt_keys
                .as_ref()
                .map(|keys| services::FeeExemptKeyList { keys: keys.to_protobuf() }),
            custom_fees: self
                .custom_fees
                .as_ref()
                .map(|fees| services::FixedCustomFeeList { fees: fees.to_protobuf() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_lists_stay_absent() {
        let mut tx = TopicUpdateTransaction::new();
        tx.topic_id(TopicId::new(0, 0, 5)).unwrap();

        let pb = tx.data().to_protobuf();
        assert!(pb.fee_exempt_key_list.is_none());
        assert!(pb.custom_fees.is_none());
        assert!(pb.memo.is_none());
    }

    #[test]
    fn test_cleared_lists_are_sent_empty() {
        let mut tx = TopicUpdateTransaction::new();
        tx.clear_custom_fees().unwrap().clear_fee_exempt_keys().unwrap().clear_topic_memo().unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.custom_fees, Some(services::FixedCustomFeeList::default()));
        assert_eq!(pb.memo.as_deref(), Some(""));
        assert_eq!(&TopicUpdateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }

    #[test]
    fn test_clear_auto_renew_account() {
        let mut tx = TopicUpdateTransaction::new();
        tx.clear_auto_renew_account_id().unwrap();
        assert_eq!(tx.get_auto_renew_account_id(), Some(&AccountId::new(0, 0, 0)));
    }
}
