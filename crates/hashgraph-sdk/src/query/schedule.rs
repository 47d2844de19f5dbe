use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{LedgerId, Result, ScheduleId, ScheduleInfo};

/// Get the current state of a schedule.
pub type ScheduleInfoQuery = Query<ScheduleInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInfoQueryData {
    schedule_id: Option<ScheduleId>,
}

impl ScheduleInfoQuery {
    pub fn get_schedule_id(&self) -> Option<ScheduleId> {
        self.data().schedule_id
    }

    pub fn schedule_id(&mut self, id: ScheduleId) -> &mut Self {
        self.data_mut().schedule_id = Some(id);
        self
    }
}

impl ValidateChecksums for ScheduleInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.schedule_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::ScheduleGetInfoQuery> for ScheduleInfoQueryData {
    fn from_protobuf(pb: services::ScheduleGetInfoQuery) -> Result<Self> {
        Ok(Self { schedule_id: Option::from_protobuf(pb.schedule_id)? })
    }
}

impl ToProtobuf for ScheduleInfoQueryData {
    type Protobuf = services::ScheduleGetInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ScheduleGetInfoQuery { header: None, schedule_id: self.schedule_id.map(|id| id.to_protobuf()) }
    }
}

impl FromProtobuf<services::ScheduleGetInfoResponse> for ScheduleInfo {
    fn from_protobuf(pb: services::ScheduleGetInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.schedule_info, "schedule_info")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_id_round_trip() {
        let mut query = ScheduleInfoQuery::new();
        query.schedule_id(ScheduleId::new(0, 0, 900));

        let pb = query.data().to_protobuf();
        assert_eq!(ScheduleInfoQueryData::from_protobuf(pb).unwrap().schedule_id, Some(ScheduleId::new(0, 0, 900)));
    }
}
