//! Files: creation, appends, updates and deletion.

mod file_append;
mod file_create;
mod file_delete;
mod file_id;
mod file_info;
mod file_update;

pub use file_append::{FileAppendTransaction, FileAppendTransactionData};
pub use file_create::{FileCreateTransaction, FileCreateTransactionData};
pub use file_delete::{FileDeleteTransaction, FileDeleteTransactionData};
pub use file_id::FileId;
pub use file_info::{FileContentsResponse, FileInfo};
pub use file_update::{FileUpdateTransaction, FileUpdateTransactionData};
