use crate::error::{ErrorKind, Result};
use crate::wire::WireReader;
use std::io::{Read, Seek};
use tracing::instrument;

/// The six bytes every revision starts with.
///
/// `busy` and `incomplete` are normally `0`, and `1` while the runtime is
/// still downloading the resource. Anything larger means the bytes were
/// never an index record to begin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecordHeader {
    pub busy: u8,
    pub incomplete: u8,
    pub format_version: u32,
}

impl RawRecordHeader {
    /// Reads and validates the flags, leaving the source positioned at the
    /// first byte of the primary section.
    ///
    /// The version number is not checked here; that happens when a layout
    /// is selected for it.
    #[instrument(level = "trace", skip(wire))]
    pub(crate) fn read<R: Read + Seek + ?Sized>(wire: &mut WireReader<'_, R>) -> Result<Self> {
        let header = Self {
            busy: wire.read_u8("busy flag")?,
            incomplete: wire.read_u8("incomplete flag")?,
            format_version: wire.read_u32("format version")?,
        };
        if header.busy > 1 || header.incomplete > 1 {
            exn::bail!(ErrorKind::InvalidFormat(format!(
                "busy flag {} / incomplete flag {} out of range",
                header.busy, header.incomplete
            )));
        }
        Ok(header)
    }

    /// Whether the runtime was still writing this entry when it was captured.
    pub fn is_in_progress(&self) -> bool {
        self.busy == 1 || self.incomplete == 1
    }
}
