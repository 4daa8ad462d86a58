use serde::Serialize;

use crate::invariants::{Filename, FormattedTime};

/// One successfully parsed access-log line. The timestamp is kept in
/// its original log form; timeline building reparses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub client_address: String,
    pub timestamp: String,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameCount {
    pub filename: Filename,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub time: FormattedTime,
    pub status: String,
    pub path_only: String,
}
