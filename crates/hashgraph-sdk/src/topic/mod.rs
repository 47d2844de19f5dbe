//! Consensus topics: creation, updates, deletion and message submission.

mod topic_create;
mod topic_delete;
mod topic_id;
mod topic_info;
mod topic_message_submit;
mod topic_update;

pub use topic_create::{TopicCreateTransaction, TopicCreateTransactionData};
pub use topic_delete::{TopicDeleteTransaction, TopicDeleteTransactionData};
pub use topic_id::TopicId;
pub use topic_info::TopicInfo;
pub use topic_message_submit::{TopicMessageSubmitTransaction, TopicMessageSubmitTransactionData};
pub use topic_update::{TopicUpdateTransaction, TopicUpdateTransactionData};
