use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{LedgerId, Result};

/// Get the protobuf and services versions a node runs.
pub type NetworkVersionInfoQuery = Query<NetworkVersionInfoQueryData>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkVersionInfoQueryData;

impl ValidateChecksums for NetworkVersionInfoQueryData {
    fn validate_checksums(&self, _ledger_id: &LedgerId) -> Result<()> {
        Ok(())
    }
}

impl FromProtobuf<services::NetworkGetVersionInfoQuery> for NetworkVersionInfoQueryData {
    fn from_protobuf(_pb: services::NetworkGetVersionInfoQuery) -> Result<Self> {
        Ok(Self)
    }
}

impl ToProtobuf for NetworkVersionInfoQueryData {
    type Protobuf = services::NetworkGetVersionInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::NetworkGetVersionInfoQuery { header: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ok_response_header, QueryData};
    use crate::SemanticVersion;

    #[test]
    fn test_version_answer() {
        let version = |minor| services::SemanticVersion { major: 0, minor, patch: 1, ..Default::default() };
        let response =
            services::response::Response::NetworkGetVersionInfo(services::NetworkGetVersionInfoResponse {
                header: ok_response_header(),
                hapi_proto_version: Some(version(54)),
                hedera_services_version: Some(version(55)),
            });

        let info = NetworkVersionInfoQuery::new().data().response_from_protobuf(response).unwrap();
        assert_eq!(info.services_version, SemanticVersion { major: 0, minor: 55, patch: 1, ..Default::default() });
        assert_eq!(info.protobuf_version.to_string(), "0.54.1");
    }
}
