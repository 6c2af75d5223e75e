//! Decoder for Java deployment cache index (`.idx`) records.
//!
//! Every cached applet or Web Start resource has an index record next to it
//! describing where it came from: the URL, the serving host's address, when
//! the resource was last modified on that host and, from the stored response
//! headers, when it was downloaded. Four revisions of the record exist
//! (6.02 to 6.05), see [`Layout`].

mod consts;
mod decode;
pub mod error;
pub mod models;
mod policy;
#[cfg(test)]
mod testing;
mod wire;

use exn::ResultExt;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use time::UtcDateTime;
use tracing::instrument;

pub use crate::decode::{Decoder, Layout};
use crate::error::{ErrorKind, Result};
use crate::models::{DecodedDownloadRecord, Evidence};
pub use crate::policy::{DecodePolicy, LastModifiedScaling, TimelinePolicy};

/// Name under which this decoder appears in parser presets.
pub const PARSER_NAME: &str = "JavaIDXParser";

/// Easy, top-level entrypoint: decode one record with the default policy.
///
/// See [`Decoder::decode`] for details.
pub fn decode<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<DecodedDownloadRecord> {
    Decoder::default().decode(reader)
}

/// Read an index file from disk and decode it with the default policy,
/// keeping digests of the raw bytes alongside the record.
#[instrument(skip_all, fields(path = %path.as_ref().display(), input_size))]
pub fn read_evidence(path: impl AsRef<Path>) -> Result<Evidence> {
    let bytes = std::fs::read(path.as_ref()).or_raise(|| ErrorKind::Io)?;
    tracing::Span::current().record("input_size", bytes.len());
    Ok(Evidence {
        hash: blake3::hash(&bytes).to_string(),
        crc32: crc32fast::hash(&bytes),
        length: u64::try_from(bytes.len())
            .or_raise(|| ErrorKind::InvalidFormat(format!("file length {} out of range", bytes.len())))?,
        record: decode(&mut Cursor::new(bytes.as_slice()))?,
        decoded_at: UtcDateTime::now(),
    })
}
