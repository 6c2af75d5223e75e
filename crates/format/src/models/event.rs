use super::Timestamp;
use super::record::DATA_TYPE;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which fact about the download an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The resource was last modified on (uploaded to) the host.
    FileHosted,
    /// The resource was downloaded onto the machine the index came from.
    FileDownloaded,
}
impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FileHosted => "File Hosted Date",
            EventKind::FileDownloaded => "File Downloaded",
        }
    }
}
impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub timestamp: Timestamp,
    pub kind: EventKind,
    pub data_type: &'static str,
}
impl TimelineEvent {
    pub(crate) fn new(timestamp: Timestamp, kind: EventKind) -> Self {
        Self { timestamp, kind, data_type: DATA_TYPE }
    }
}
