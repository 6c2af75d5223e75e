//! Revision-specific first section.
//!
//! 6.02 keeps everything in one section directly after the record header.
//! From 6.03 the first section only carries fixed-width values and the
//! strings move to a second section at a fixed offset. 6.05 narrowed the
//! leading shortcut flag from two bytes to one, which shifts every later
//! field back by a byte.

use crate::error::{ErrorKind, Result};
use crate::wire::{PrefixWidth, WireReader};
use exn::OptionExt;
use std::io::{Read, Seek};
use tracing::instrument;

/// Byte layout of a primary section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    V602,
    /// 6.03 and 6.04 share a layout.
    V603604,
    V605,
}

const LAYOUTS: [(u32, Layout); 4] =
    [(602, Layout::V602), (603, Layout::V603604), (604, Layout::V603604), (605, Layout::V605)];

impl Layout {
    /// Look up the layout for a record's format version.
    pub fn for_version(format_version: u32) -> Result<Self> {
        LAYOUTS
            .iter()
            .find(|(version, _)| *version == format_version)
            .map(|(_, layout)| *layout)
            .ok_or_raise(|| ErrorKind::UnsupportedVersion(format_version))
    }

    #[instrument(level = "trace", skip(wire))]
    pub(crate) fn decode<R: Read + Seek + ?Sized>(self, wire: &mut WireReader<'_, R>) -> Result<PrimarySection> {
        Ok(match self {
            Layout::V602 => PrimarySection::Inline(InlineSection::read(wire)?),
            Layout::V603604 => PrimarySection::Sectioned(SectionedHeader::read(wire, FlagWidth::Wide)?),
            Layout::V605 => PrimarySection::Sectioned(SectionedHeader::read(wire, FlagWidth::Narrow)?),
        })
    }
}

#[derive(Clone, Copy, Debug)]
enum FlagWidth {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PrimarySection {
    Inline(InlineSection),
    Sectioned(SectionedHeader),
}
impl PrimarySection {
    pub(crate) fn last_modified(&self) -> u64 {
        match self {
            PrimarySection::Inline(s) => s.last_modified,
            PrimarySection::Sectioned(s) => s.last_modified,
        }
    }

    pub(crate) fn content_length(&self) -> u32 {
        match self {
            PrimarySection::Inline(s) => s.content_length,
            PrimarySection::Sectioned(s) => s.content_length,
        }
    }
}

/// The single section of a 6.02 record.
///
/// The expiration time, version string and namespace are read past but not
/// kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InlineSection {
    pub(crate) content_length: u32,
    pub(crate) last_modified: u64,
    pub(crate) url: String,
    pub(crate) header_field_count: u32,
}
impl InlineSection {
    fn read<R: Read + Seek + ?Sized>(wire: &mut WireReader<'_, R>) -> Result<Self> {
        wire.read_u16("null space")?;
        wire.read_u8("shortcut flag")?;
        let content_length = wire.read_u32("content length")?;
        let last_modified = wire.read_u64("last modified")?;
        wire.read_u64("expiration")?;
        wire.read_string(PrefixWidth::U16, "version string")?;
        let url = wire.read_string(PrefixWidth::U16, "url")?;
        wire.read_string(PrefixWidth::U16, "namespace")?;
        Ok(Self { content_length, last_modified, url, header_field_count: wire.read_u32("header field count")? })
    }
}

/// Fixed-width first section of 6.03 and later.
///
/// Expiration, validation, the signed flag and the three declared section
/// lengths follow the two kept values. None of them locate the second
/// section, which always starts at the same absolute offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionedHeader {
    pub(crate) content_length: u32,
    pub(crate) last_modified: u64,
}
impl SectionedHeader {
    fn read<R: Read + Seek + ?Sized>(wire: &mut WireReader<'_, R>, flag: FlagWidth) -> Result<Self> {
        match flag {
            FlagWidth::Narrow => {
                wire.read_u8("shortcut flag")?;
            },
            FlagWidth::Wide => {
                wire.read_u16("shortcut flag")?;
            },
        }
        let header = Self {
            content_length: wire.read_u32("content length")?,
            last_modified: wire.read_u64("last modified")?,
        };
        wire.read_u64("expiration")?;
        wire.read_u64("validation")?;
        wire.read_u8("signed flag")?;
        wire.read_u32("section 2 length")?;
        wire.read_u32("section 3 length")?;
        wire.read_u32("section 4 length")?;
        Ok(header)
    }
}
