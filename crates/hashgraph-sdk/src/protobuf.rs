//! # Protobuf Bridge
//!
//! Conversion traits between SDK values and the generated wire messages.
//! For every in-domain value `x`, `T::from_protobuf(x.to_protobuf()) == x`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::{Error, Result};

/// Build an SDK value from its wire message.
pub trait FromProtobuf<Protobuf>: Sized {
    /// Convert from the wire message.
    fn from_protobuf(pb: Protobuf) -> Result<Self>;

    /// Convert from the per-chunk wire messages of a frozen transaction.
    ///
    /// Kinds that are never chunked accept exactly one message.
    fn from_protobuf_chunks(chunks: Vec<Protobuf>) -> Result<Self> {
        let mut chunks = chunks.into_iter();
        match (chunks.next(), chunks.next()) {
            (Some(pb), None) => Self::from_protobuf(pb),
            (None, _) => Err(Error::from_protobuf("transaction has no body")),
            (Some(_), Some(_)) => {
                Err(Error::from_protobuf("transaction kind cannot span multiple chunks"))
            }
        }
    }
}

/// Convert an SDK value into its wire message.
pub trait ToProtobuf {
    /// Wire message type.
    type Protobuf;

    /// Convert to the wire message.
    fn to_protobuf(&self) -> Self::Protobuf;
}

impl<T: ToProtobuf> ToProtobuf for Vec<T> {
    type Protobuf = Vec<T::Protobuf>;

    fn to_protobuf(&self) -> Self::Protobuf {
        self.iter().map(T::to_protobuf).collect()
    }
}

impl<T, P> FromProtobuf<Vec<P>> for Vec<T>
where
    T: FromProtobuf<P>,
{
    fn from_protobuf(pb: Vec<P>) -> Result<Self> {
        pb.into_iter().map(T::from_protobuf).collect()
    }
}

impl<T, P> FromProtobuf<Option<P>> for Option<T>
where
    T: FromProtobuf<P>,
{
    fn from_protobuf(pb: Option<P>) -> Result<Self> {
        pb.map(T::from_protobuf).transpose()
    }
}

/// Take a required sub-message, failing with the field name when absent.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| Error::from_protobuf(format!("unexpected missing `{field}`")))
}

/// Decode a prost message from bytes.
pub(crate) fn decode<M: prost::Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}

// ============================================================================
// TIME
// ============================================================================

impl ToProtobuf for DateTime<Utc> {
    type Protobuf = services::Timestamp;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::Timestamp {
            seconds: self.timestamp(),
            nanos: self.timestamp_subsec_nanos() as i32,
        }
    }
}

impl FromProtobuf<services::Timestamp> for DateTime<Utc> {
    fn from_protobuf(pb: services::Timestamp) -> Result<Self> {
        let nanos = u32::try_from(pb.nanos)
            .map_err(|_| Error::from_protobuf(format!("negative timestamp nanos {}", pb.nanos)))?;

        DateTime::from_timestamp(pb.seconds, nanos).ok_or_else(|| {
            Error::from_protobuf(format!("timestamp {}.{} out of range", pb.seconds, pb.nanos))
        })
    }
}

impl FromProtobuf<services::TimestampSeconds> for DateTime<Utc> {
    fn from_protobuf(pb: services::TimestampSeconds) -> Result<Self> {
        DateTime::from_timestamp(pb.seconds, 0)
            .ok_or_else(|| Error::from_protobuf(format!("timestamp {} out of range", pb.seconds)))
    }
}

pub(crate) fn to_timestamp_seconds(time: &DateTime<Utc>) -> services::TimestampSeconds {
    services::TimestampSeconds { seconds: time.timestamp() }
}

impl ToProtobuf for Duration {
    type Protobuf = services::Duration;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::Duration { seconds: i64::try_from(self.as_secs()).unwrap_or(i64::MAX) }
    }
}

impl FromProtobuf<services::Duration> for Duration {
    fn from_protobuf(pb: services::Duration) -> Result<Self> {
        u64::try_from(pb.seconds)
            .map(Duration::from_secs)
            .map_err(|_| Error::from_protobuf(format!("negative duration {}", pb.seconds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_round_trip_keeps_nanos() {
        let time = DateTime::from_timestamp(1_554_158_542, 5).unwrap();
        let pb = time.to_protobuf();
        assert_eq!(pb.seconds, 1_554_158_542);
        assert_eq!(pb.nanos, 5);
        assert_eq!(DateTime::<Utc>::from_protobuf(pb).unwrap(), time);
    }

    #[test]
    fn test_negative_nanos_rejected() {
        let pb = services::Timestamp { seconds: 1, nanos: -1 };
        assert!(matches!(DateTime::<Utc>::from_protobuf(pb), Err(Error::FromProtobuf(_))));
    }

    #[test]
    fn test_duration_round_trip() {
        let duration = Duration::from_secs(120);
        assert_eq!(Duration::from_protobuf(duration.to_protobuf()).unwrap(), duration);
        assert!(Duration::from_protobuf(services::Duration { seconds: -1 }).is_err());
    }

    #[test]
    fn test_required_names_field() {
        let err = required::<u8>(None, "account_id").unwrap_err();
        assert!(err.to_string().contains("account_id"));
    }

    #[test]
    fn test_single_chunk_default() {
        assert_eq!(
            DateTime::<Utc>::from_protobuf_chunks(vec![services::Timestamp { seconds: 3, nanos: 0 }])
                .unwrap()
                .timestamp(),
            3
        );
        assert!(DateTime::<Utc>::from_protobuf_chunks(Vec::<services::Timestamp>::new()).is_err());
    }
}
