//! Versions reported by a network node.

use std::fmt;

use hashgraph_proto::services;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::Result;

/// A semver version as reported by the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: String,
    pub build: String,
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromProtobuf<services::SemanticVersion> for SemanticVersion {
    fn from_protobuf(pb: services::SemanticVersion) -> Result<Self> {
        Ok(Self {
            major: pb.major as u32,
            minor: pb.minor as u32,
            patch: pb.patch as u32,
            prerelease: pb.pre,
            build: pb.build,
        })
    }
}

impl ToProtobuf for SemanticVersion {
    type Protobuf = services::SemanticVersion;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::SemanticVersion {
            major: self.major as i32,
            minor: self.minor as i32,
            patch: self.patch as i32,
            pre: self.prerelease.clone(),
            build: self.build.clone(),
        }
    }
}

/// Protobuf schema and services software versions of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkVersionInfo {
    pub protobuf_version: SemanticVersion,
    pub services_version: SemanticVersion,
}

impl NetworkVersionInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::NetworkGetVersionInfoResponse>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::NetworkGetVersionInfoResponse> for NetworkVersionInfo {
    fn from_protobuf(pb: services::NetworkGetVersionInfoResponse) -> Result<Self> {
        Ok(Self {
            protobuf_version: SemanticVersion::from_protobuf(required(pb.hapi_proto_version, "hapi_proto_version")?)?,
            services_version: SemanticVersion::from_protobuf(required(
                pb.hedera_services_version,
                "hedera_services_version",
            )?)?,
        })
    }
}

impl ToProtobuf for NetworkVersionInfo {
    type Protobuf = services::NetworkGetVersionInfoResponse;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NetworkGetVersionInfoResponse {
            header: None,
            hapi_proto_version: Some(self.protobuf_version.to_protobuf()),
            hedera_services_version: Some(self.services_version.to_protobuf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let version = SemanticVersion { major: 0, minor: 54, patch: 2, prerelease: "rc.1".to_owned(), build: String::new() };
        assert_eq!(version.to_string(), "0.54.2-rc.1");
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let info = NetworkVersionInfo {
            protobuf_version: SemanticVersion { major: 0, minor: 54, ..Default::default() },
            services_version: SemanticVersion { major: 0, minor: 54, patch: 1, ..Default::default() },
        };

        assert_eq!(NetworkVersionInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }
}
