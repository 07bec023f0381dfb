pub mod status;

pub use status::{StatusRecord, StatusResult, read_status_record, write_status_record};

/// Timestamp format of persisted status records, Japan Standard Time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
