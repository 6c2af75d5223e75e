mod headers;
mod primary;
mod secondary;

pub use self::primary::Layout;

use self::primary::PrimarySection;
use self::secondary::SecondarySection;
use crate::consts::UNKNOWN_ADDRESS;
use crate::error::{ErrorKind, Result};
use crate::models::{DecodedDownloadRecord, EventKind, RawRecordHeader, TimelineEvent, Timestamp};
use crate::policy::{DecodePolicy, TimelinePolicy};
use crate::wire::WireReader;
use exn::OptionExt;
use std::io::{Read, Seek};
use tracing::instrument;

/// Decodes index records according to a [`DecodePolicy`].
///
/// Holds no state besides the policy, so one decoder can be shared freely
/// between threads and reused for any number of sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    policy: DecodePolicy,
}

impl Decoder {
    pub fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DecodePolicy {
        &self.policy
    }

    /// Decode one record starting at the current position of `reader`.
    ///
    /// Either a complete record is returned or nothing is; on error the
    /// position of `reader` is unspecified.
    #[instrument(skip_all, fields(format_version, url))]
    pub fn decode<R: Read + Seek + ?Sized>(&self, reader: &mut R) -> Result<DecodedDownloadRecord> {
        let mut wire = WireReader::new(reader)?;
        let header = RawRecordHeader::read(&mut wire)?;
        tracing::Span::current().record("format_version", header.format_version);
        let layout = Layout::for_version(header.format_version)?;
        tracing::debug!(?layout, in_progress = header.is_in_progress(), "selected layout");

        let primary = layout.decode(&mut wire)?;
        let (url, ip_address, header_field_count) = match &primary {
            PrimarySection::Inline(inline) => {
                (inline.url.clone(), UNKNOWN_ADDRESS.to_string(), inline.header_field_count)
            },
            PrimarySection::Sectioned(_) => {
                let secondary = SecondarySection::read(&mut wire)?;
                (secondary.url, secondary.ip_address, secondary.header_field_count)
            },
        };
        tracing::Span::current().record("url", url.as_str());

        let scan = headers::scan(&mut wire, header_field_count)?;
        if url.is_empty() {
            exn::bail!(ErrorKind::MissingField("URL"));
        }
        if ip_address.is_empty() {
            exn::bail!(ErrorKind::MissingField("IP address"));
        }

        Ok(DecodedDownloadRecord {
            format_version: header.format_version,
            url,
            ip_address,
            last_modified: self.last_modified(layout, primary.last_modified())?,
            downloaded: scan.downloaded,
            content_length: primary.content_length(),
            headers: scan.fields,
        })
    }

    /// Timeline events for a decoded record.
    ///
    /// With [`TimelinePolicy::FieldsOnly`] this is always empty and callers are
    /// expected to read the timestamps off the record directly.
    pub fn timeline(&self, record: &DecodedDownloadRecord) -> Vec<TimelineEvent> {
        match self.policy.timeline {
            TimelinePolicy::FieldsOnly => Vec::new(),
            TimelinePolicy::HostedAndDownloaded => {
                let mut events = vec![TimelineEvent::new(record.last_modified, EventKind::FileHosted)];
                if let Some(downloaded) = record.downloaded {
                    events.push(TimelineEvent::new(downloaded, EventKind::FileDownloaded));
                }
                events
            },
        }
    }

    fn last_modified(&self, layout: Layout, raw: u64) -> Result<Timestamp> {
        let factor = self.policy.last_modified_scaling.factor(layout);
        i64::try_from(raw)
            .ok()
            .and_then(|value| value.checked_mul(factor))
            .map(Timestamp::from_millis)
            .ok_or_raise(|| ErrorKind::InvalidFormat(format!("last modified time {raw} (x{factor}) out of range")))
    }
}
