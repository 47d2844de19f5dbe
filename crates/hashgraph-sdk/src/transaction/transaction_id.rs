use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use hashgraph_proto::services;
use rand::Rng;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, Error, LedgerId, Result};

const SCHEDULED_SUFFIX: &str = "?scheduled";

/// Payer account plus valid-start time, optionally scheduled or nonced.
///
/// Text form: `shard.realm.num@seconds.nanos[?scheduled][/nonce]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransactionId {
    pub account_id: AccountId,
    pub valid_start: DateTime<Utc>,
    /// Non-zero nonce of an internal (child) transaction.
    pub nonce: Option<i32>,
    pub scheduled: bool,
}

impl TransactionId {
    pub fn new(account_id: AccountId, valid_start: DateTime<Utc>) -> Self {
        Self { account_id, valid_start, nonce: None, scheduled: false }
    }

    /// A fresh id for `account_id`, backdated a few seconds against clock skew.
    pub fn generate(account_id: AccountId) -> Self {
        let backdate = TimeDelta::milliseconds(rand::thread_rng().gen_range(5_000..8_000));
        Self::new(account_id, Utc::now() - backdate)
    }

    /// A nonce of 0 clears it; the wire cannot tell 0 from unset.
    pub fn with_nonce(mut self, nonce: i32) -> Self {
        self.nonce = (nonce != 0).then_some(nonce);
        self
    }

    pub fn with_scheduled(mut self, scheduled: bool) -> Self {
        self.scheduled = scheduled;
        self
    }

    /// Same payer, valid start moved `nanos` later, no nonce or schedule flag.
    pub(crate) fn offset_by(&self, nanos: i64) -> Result<Self> {
        let valid_start = self
            .valid_start
            .checked_add_signed(TimeDelta::nanoseconds(nanos))
            .ok_or_else(|| Error::basic_parse("transaction valid start overflowed"))?;

        Ok(Self::new(self.account_id.clone(), valid_start))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TransactionId>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}.{:09}",
            self.account_id,
            self.valid_start.timestamp(),
            self.valid_start.timestamp_subsec_nanos()
        )?;

        if self.scheduled {
            f.write_str(SCHEDULED_SUFFIX)?;
        }

        if let Some(nonce) = self.nonce {
            write!(f, "/{nonce}")?;
        }

        Ok(())
    }
}

impl FromStr for TransactionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            Error::basic_parse(format!(
                "expected `<account>@<seconds>.<nanos>[?scheduled][/<nonce>]`, got `{s}`"
            ))
        };

        let (account_id, rest) = s.split_once('@').ok_or_else(invalid)?;

        let (rest, nonce) = match rest.split_once('/') {
            Some((rest, nonce)) => match nonce.parse::<i32>().map_err(Error::basic_parse)? {
                // zero is the wire encoding of "no nonce"
                0 => return Err(Error::basic_parse(format!("nonce must be non-zero, got `{s}`"))),
                nonce => (rest, Some(nonce)),
            },
            None => (rest, None),
        };

        let (rest, scheduled) = match rest.strip_suffix(SCHEDULED_SUFFIX) {
            Some(rest) => (rest, true),
            None => (rest, false),
        };

        let (seconds, nanos) = rest.split_once('.').ok_or_else(invalid)?;
        let seconds: i64 = seconds.parse().map_err(Error::basic_parse)?;
        let nanos: u32 = nanos.parse().map_err(Error::basic_parse)?;
        let valid_start = DateTime::from_timestamp(seconds, nanos).ok_or_else(invalid)?;

        Ok(Self::new(account_id.parse()?, valid_start)
            .with_nonce(nonce.unwrap_or_default())
            .with_scheduled(scheduled))
    }
}

impl ValidateChecksums for TransactionId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TransactionId> for TransactionId {
    fn from_protobuf(pb: services::TransactionId) -> Result<Self> {
        let account_id = AccountId::from_protobuf(required(pb.account_id, "account_id")?)?;
        let valid_start = DateTime::from_protobuf(required(
            pb.transaction_valid_start,
            "transaction_valid_start",
        )?)?;

        Ok(Self::new(account_id, valid_start).with_nonce(pb.nonce).with_scheduled(pb.scheduled))
    }
}

impl ToProtobuf for TransactionId {
    type Protobuf = services::TransactionId;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TransactionId {
            transaction_valid_start: Some(self.valid_start.to_protobuf()),
            account_id: Some(self.account_id.to_protobuf()),
            scheduled: self.scheduled,
            nonce: self.nonce.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> TransactionId {
        TransactionId::new(AccountId::new(0, 0, 5006), DateTime::from_timestamp(1_554_158_542, 5).unwrap())
    }

    #[test]
    fn test_display_pads_nanos() {
        assert_eq!(sample().to_string(), "0.0.5006@1554158542.000000005");
        assert_eq!(sample().with_scheduled(true).to_string(), "0.0.5006@1554158542.000000005?scheduled");
        assert_eq!(sample().with_nonce(3).to_string(), "0.0.5006@1554158542.000000005/3");
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.0.5006@1554158542.000000005".parse::<TransactionId>().unwrap(), sample());
        let scheduled: TransactionId = "0.0.5006@1554158542.000000005?scheduled".parse().unwrap();
        assert!(scheduled.scheduled);
        let nonced: TransactionId = "0.0.5006@1554158542.000000005/12".parse().unwrap();
        assert_eq!(nonced.nonce, Some(12));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let malformed =
            ["0.0.5006", "0.0.5006@1554158542", "0.0.5006@abc.5", "0.0.5006@1.2/x", "0.0@1.2", "0.0.5006@1.2/0"];
        for bad in malformed {
            assert!(bad.parse::<TransactionId>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        for id in [sample(), sample().with_nonce(4), sample().with_scheduled(true)] {
            assert_eq!(TransactionId::from_bytes(&id.to_bytes()).unwrap(), id);
        }
    }

    #[test]
    fn test_offset_drops_flags() {
        let id = sample().with_scheduled(true);
        let next = id.offset_by(10).unwrap();
        assert_eq!(next.valid_start.timestamp_subsec_nanos(), 15);
        assert!(!next.scheduled);
        assert_eq!(next.account_id, id.account_id);
    }

    #[test]
    fn test_generate_is_backdated() {
        let id = TransactionId::generate(AccountId::new(0, 0, 2));
        assert!(id.valid_start < Utc::now());
    }

    proptest! {
        #[test]
        fn prop_text_round_trip(
            num in any::<u64>(),
            seconds in 0i64..4_000_000_000,
            nanos in 0u32..1_000_000_000,
            nonce in prop::option::of(any::<i32>().prop_filter("non-zero", |n| *n != 0)),
            scheduled in any::<bool>(),
        ) {
            let valid_start = DateTime::from_timestamp(seconds, nanos).unwrap();
            let mut id = TransactionId::new(AccountId::new(0, 0, num), valid_start).with_scheduled(scheduled);
            id.nonce = nonce;

            prop_assert_eq!(id.to_string().parse::<TransactionId>().unwrap(), id);
        }
    }
}
