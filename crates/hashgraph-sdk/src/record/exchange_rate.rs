use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::protobuf::{required, to_timestamp_seconds, FromProtobuf, ToProtobuf};
use crate::Result;

/// The price of hbar in US cents, valid until `expiration_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeRate {
    pub hbars: u32,
    pub cents: u32,
    pub expiration_time: DateTime<Utc>,
}

impl ExchangeRate {
    /// Cents per one hbar.
    pub fn exchange_rate_in_cents(&self) -> f64 {
        f64::from(self.cents) / f64::from(self.hbars)
    }
}

/// The exchange rate in force and the one that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeRates {
    pub current_rate: ExchangeRate,
    pub next_rate: ExchangeRate,
}

impl ExchangeRates {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::ExchangeRateSet>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::ExchangeRate> for ExchangeRate {
    fn from_protobuf(pb: services::ExchangeRate) -> Result<Self> {
        Ok(Self {
            hbars: pb.hbar_equiv as u32,
            cents: pb.cent_equiv as u32,
            expiration_time: DateTime::from_protobuf(required(pb.expiration_time, "expiration_time")?)?,
        })
    }
}

impl ToProtobuf for ExchangeRate {
    type Protobuf = services::ExchangeRate;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ExchangeRate {
            hbar_equiv: self.hbars as i32,
            cent_equiv: self.cents as i32,
            expiration_time: Some(to_timestamp_seconds(&self.expiration_time)),
        }
    }
}

impl FromProtobuf<services::ExchangeRateSet> for ExchangeRates {
    fn from_protobuf(pb: services::ExchangeRateSet) -> Result<Self> {
        Ok(Self {
            current_rate: ExchangeRate::from_protobuf(required(pb.current_rate, "current_rate")?)?,
            next_rate: ExchangeRate::from_protobuf(required(pb.next_rate, "next_rate")?)?,
        })
    }
}

impl ToProtobuf for ExchangeRates {
    type Protobuf = services::ExchangeRateSet;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ExchangeRateSet {
            current_rate: Some(self.current_rate.to_protobuf()),
            next_rate: Some(self.next_rate.to_protobuf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_in_cents() {
        let rate = ExchangeRate {
            hbars: 30_000,
            cents: 150_000,
            expiration_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        assert_eq!(rate.exchange_rate_in_cents(), 5.0);

        let rates = ExchangeRates { current_rate: rate, next_rate: rate };
        assert_eq!(ExchangeRates::from_bytes(&rates.to_bytes()).unwrap(), rates);
    }
}
