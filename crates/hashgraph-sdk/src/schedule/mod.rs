//! Scheduled transactions.

mod schedule_create;
mod schedule_delete;
mod schedule_id;
mod schedule_info;
mod schedule_sign;

pub use schedule_create::{SchedulableTransaction, ScheduleCreateTransaction, ScheduleCreateTransactionData};
pub use schedule_delete::{ScheduleDeleteTransaction, ScheduleDeleteTransactionData};
pub use schedule_id::ScheduleId;
pub use schedule_info::ScheduleInfo;
pub use schedule_sign::{ScheduleSignTransaction, ScheduleSignTransactionData};
