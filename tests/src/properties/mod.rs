//! Property tests over codecs with large input spaces.

pub mod entity_ids;
