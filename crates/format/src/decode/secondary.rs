use crate::consts::SECONDARY_SECTION_OFFSET;
use crate::error::Result;
use crate::wire::{PrefixWidth, WireReader};
use std::io::{Read, Seek};
use tracing::instrument;

/// URL, host address and header count of a 6.03+ record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecondarySection {
    pub(crate) url: String,
    pub(crate) ip_address: String,
    pub(crate) header_field_count: u32,
}

impl SecondarySection {
    /// Jumps to the fixed section offset and reads the section.
    ///
    /// The section lengths declared by the primary section are ignored, the
    /// offset is a constant of the format.
    #[instrument(level = "trace", skip(wire))]
    pub(crate) fn read<R: Read + Seek + ?Sized>(wire: &mut WireReader<'_, R>) -> Result<Self> {
        wire.seek_to(SECONDARY_SECTION_OFFSET, "secondary section")?;
        Ok(Self {
            url: wire.read_string(PrefixWidth::U32, "url")?,
            ip_address: wire.read_string(PrefixWidth::U32, "ip address")?,
            header_field_count: wire.read_u32("header field count")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::RecordBuilder;
    use rstest::rstest;
    use std::io::Cursor;

    fn read(bytes: &[u8], start: u64) -> Result<SecondarySection> {
        let mut cursor = Cursor::new(bytes);
        let mut wire = WireReader::new(&mut cursor)?;
        wire.seek_to(start, "test")?;
        SecondarySection::read(&mut wire)
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(48)]
    #[case(200)]
    fn reads_from_fixed_offset_wherever_the_cursor_is(#[case] start: u64) {
        let bytes = RecordBuilder::sectioned(605)
            .url("http://example.test/x.jar")
            .ip_address("10.7.119.10")
            .header("date", "Thu, 26 Jul 2001 05:00:00 GMT")
            .build();
        let section = read(&bytes, start).unwrap();
        assert_eq!(section.url, "http://example.test/x.jar");
        assert_eq!(section.ip_address, "10.7.119.10");
        assert_eq!(section.header_field_count, 1);
    }

    #[test]
    fn declared_section_lengths_do_not_move_the_section() {
        let bytes = RecordBuilder::sectioned(604).section_lengths([3, 0, 0xFFFF_FFFF]).ip_address("10.0.0.1").build();
        assert_eq!(read(&bytes, 0).unwrap().ip_address, "10.0.0.1");
    }

    #[rstest]
    #[case(100, "url")]
    #[case(131, "url")]
    #[case(140, "url")]
    fn short_section_is_truncated(#[case] keep: usize, #[case] field: &'static str) {
        let bytes = RecordBuilder::sectioned(605).url("http://example.test/x.jar").build();
        let err = read(&bytes[..keep], 0).unwrap_err();
        assert_eq!(*err, ErrorKind::Truncated(field));
    }
}
