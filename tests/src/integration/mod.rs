//! Cross-crate scenarios driven only through the public SDK surface.

pub mod client;
pub mod flows;
pub mod queries;
pub mod schedule_batch;
