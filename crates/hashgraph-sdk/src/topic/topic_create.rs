use std::time::Duration;

use hashgraph_proto::services;

use crate::account::DEFAULT_AUTO_RENEW_PERIOD;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{AccountId, FixedCustomFee, Hbar, Key, LedgerId, Result};

/// Create a consensus topic.
pub type TopicCreateTransaction = Transaction<TopicCreateTransactionData>;

#[derive(Debug, Clone, PartialEq)]
pub struct TopicCreateTransactionData {
    topic_memo: String,
    admin_key: Option<Key>,
    submit_key: Option<Key>,
    auto_renew_period: Option<Duration>,
    auto_renew_account_id: Option<AccountId>,
    fee_schedule_key: Option<Key>,
    fee_exempt_keys: Vec<Key>,
    custom_fees: Vec<FixedCustomFee>,
}

impl Default for TopicCreateTransactionData {
    fn default() -> Self {
        Self {
            topic_memo: String::new(),
            admin_key: None,
            submit_key: None,
            auto_renew_period: Some(DEFAULT_AUTO_RENEW_PERIOD),
            auto_renew_account_id: None,
            fee_schedule_key: None,
            fee_exempt_keys: Vec::new(),
            custom_fees: Vec::new(),
        }
    }
}

impl TopicCreateTransaction {
    pub fn get_topic_memo(&self) -> &str {
        &self.data().topic_memo
    }

    pub fn topic_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self> {
        self.data_mut()?.topic_memo = memo.into();
        Ok(self)
    }

    pub fn get_admin_key(&self) -> Option<&Key> {
        self.data().admin_key.as_ref()
    }

    /// Without an admin key the topic can never be updated or deleted.
    pub fn admin_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.admin_key = Some(key.into());
        Ok(self)
    }

    pub fn get_submit_key(&self) -> Option<&Key> {
        self.data().submit_key.as_ref()
    }

    /// Without a submit key anyone may submit messages.
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

    pub fn get_fee_schedule_key(&self) -> Option<&Key> {
        self.data().fee_schedule_key.as_ref()
    }

    pub fn fee_schedule_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_schedule_key = Some(key.into());
        Ok(self)
    }

    pub fn get_fee_exempt_keys(&self) -> &[Key] {
        &self.data().fee_exempt_keys
    }

    pub fn fee_exempt_keys(&mut self, keys: impl IntoIterator<Item = Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_exempt_keys = keys.into_iter().collect();
        Ok(self)
    }

    pub fn add_fee_exempt_key(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.data_mut()?.fee_exempt_keys.push(key.into());
        Ok(self)
    }

    pub fn get_custom_fees(&self) -> &[FixedCustomFee] {
        &self.data().custom_fees
    }

    pub fn custom_fees(&mut self, fees: impl IntoIterator<Item = FixedCustomFee>) -> Result<&mut Self> {
        self.data_mut()?.custom_fees = fees.into_iter().collect();
        Ok(self)
    }

    pub fn add_custom_fee(&mut self, fee: FixedCustomFee) -> Result<&mut Self> {
        self.data_mut()?.custom_fees.push(fee);
        Ok(self)
    }
}

impl TransactionData for TopicCreateTransactionData {
    fn default_max_transaction_fee(&self) -> Hbar {
        Hbar::new(25)
    }
}

impl ValidateChecksums for TopicCreateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.auto_renew_account_id.validate_checksums(ledger_id)?;
        self.custom_fees.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ConsensusCreateTopicTransactionBody> for TopicCreateTransactionData {
    fn from_protobuf(pb: services::ConsensusCreateTopicTransactionBody) -> Result<Self> {
        Ok(Self {
            topic_memo: pb.memo,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            submit_key: Option::from_protobuf(pb.submit_key)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account)?,
            fee_schedule_key: Option::from_protobuf(pb.fee_schedule_key)?,
            fee_exempt_keys: Vec::from_protobuf(pb.fee_exempt_key_list)?,
            custom_fees: Vec::from_protobuf(pb.custom_fees)?,
        })
    }
}

impl ToProtobuf for TopicCreateTransactionData {
    type Protobuf = services::ConsensusCreateTopicTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ConsensusCreateTopicTransactionBody {
            memo: self.topic_memo.clone(),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            submit_key: self.submit_key.as_ref().map(Key::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
            fee_exempt_key_list: self.fee_exempt_keys.to_protobuf(),
            custom_fees: self.custom_fees.to_protobuf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::FixedFee;

    #[test]
    fn test_defaults() {
        let tx = TopicCreateTransaction::new();
        assert_eq!(tx.get_auto_renew_period(), Some(DEFAULT_AUTO_RENEW_PERIOD));
        assert_eq!(tx.data().default_max_transaction_fee(), Hbar::new(25));
    }

    #[test]
    fn test_fees_and_exempt_keys_round_trip() {
        let key = PrivateKey::generate_ed25519().public_key();
        let mut tx = TopicCreateTransaction::new();
        tx.topic_memo("market data")
            .unwrap()
            .add_fee_exempt_key(key.clone())
            .unwrap()
            .fee_schedule_key(key)
            .unwrap()
            .add_custom_fee(FixedCustomFee {
                fixed_fee: FixedFee::hbar(Hbar::new(1)),
                fee_collector_account_id: Some(AccountId::new(0, 0, 98)),
            })
            .unwrap();

        let pb = tx.data().to_protobuf();
        assert_eq!(pb.fee_exempt_key_list.len(), 1);
        assert_eq!(&TopicCreateTransactionData::from_protobuf(pb).unwrap(), tx.data());
    }
}
