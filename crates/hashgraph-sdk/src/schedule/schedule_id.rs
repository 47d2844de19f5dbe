use crate::entity_id::entity_id;

entity_id! {
    /// The id of a scheduled transaction.
    ScheduleId, ScheduleId, schedule_num
}
