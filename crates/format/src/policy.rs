//! Decoding policy.
//!
//! The format itself does not say whether the host-side modification time is
//! stored in seconds or milliseconds, and the two timestamps of a record can
//! be surfaced either as timeline events or as plain fields. Both choices are
//! explicit here. The defaults treat 6.05 values as seconds, which is what the
//! known 6.05 captures contain.

use crate::decode::Layout;

/// Which revisions store `last_modified` in seconds instead of milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum LastModifiedScaling {
    /// Only 6.05 records are scaled.
    #[default]
    Revision605,
    /// Every revision is treated as seconds.
    AllRevisions,
    /// Values are taken as stored.
    Never,
}
impl LastModifiedScaling {
    pub(crate) fn factor(&self, layout: Layout) -> i64 {
        let scaled = match self {
            Self::Revision605 => layout == Layout::V605,
            Self::AllRevisions => true,
            Self::Never => false,
        };
        if scaled { 1000 } else { 1 }
    }
}

/// How the two timestamps of a record are surfaced to a timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum TimelinePolicy {
    /// Synthesize a "File Hosted Date" event and, when the record has a
    /// `date` header, a "File Downloaded" event.
    #[default]
    HostedAndDownloaded,
    /// Expose the timestamps as plain record fields only.
    FieldsOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct DecodePolicy {
    pub last_modified_scaling: LastModifiedScaling,
    pub timeline: TimelinePolicy,
}
