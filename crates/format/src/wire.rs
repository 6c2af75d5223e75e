//! Big-endian primitives over a seekable byte source.
//!
//! Every read names the field it is reading so that a short input surfaces as
//! [`ErrorKind::Truncated`] pointing at the exact field that ran out.

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use std::io::{self, Read, Seek, SeekFrom};

/// Width of the length prefix in front of a string.
///
/// Header fields and the 6.02 inline strings use Java's `writeUTF` style
/// 16-bit prefix, the 6.03+ secondary section uses 32-bit prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PrefixWidth {
    U16,
    U32,
}

/// Borrowed cursor over one record. Offsets passed to [`seek_to`](Self::seek_to)
/// are relative to wherever the source was positioned when the reader was
/// created, i.e. the start of the record.
pub(crate) struct WireReader<'r, R: ?Sized> {
    inner: &'r mut R,
    origin: u64,
}

impl<'r, R: Read + Seek + ?Sized> WireReader<'r, R> {
    pub(crate) fn new(inner: &'r mut R) -> Result<Self> {
        let origin = inner.stream_position().or_raise(|| ErrorKind::Io)?;
        Ok(Self { inner, origin })
    }

    fn fill<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        raise_io(self.inner.read_exact(&mut buf), field)?;
        Ok(buf)
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(u8::from_be_bytes(self.fill::<1>(field)?))
    }

    pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(u16::from_be_bytes(self.fill::<2>(field)?))
    }

    pub(crate) fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_be_bytes(self.fill::<4>(field)?))
    }

    pub(crate) fn read_u64(&mut self, field: &'static str) -> Result<u64> {
        Ok(u64::from_be_bytes(self.fill::<8>(field)?))
    }

    /// Read a length-prefixed string.
    ///
    /// The payload is read through [`Read::take`] rather than a buffer sized
    /// from the prefix, so a corrupt length costs nothing until the bytes are
    /// actually there. Invalid UTF-8 is replaced with U+FFFD.
    pub(crate) fn read_string(&mut self, width: PrefixWidth, field: &'static str) -> Result<String> {
        let length = match width {
            PrefixWidth::U16 => u64::from(self.read_u16(field)?),
            PrefixWidth::U32 => u64::from(self.read_u32(field)?),
        };
        let mut bytes = Vec::new();
        raise_io((&mut *self.inner).take(length).read_to_end(&mut bytes), field)?;
        if (bytes.len() as u64) < length {
            exn::bail!(ErrorKind::Truncated(field));
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reposition to an absolute offset from the start of the record.
    ///
    /// Seeking past the end of the source is not an error by itself; the next
    /// read reports the truncation.
    pub(crate) fn seek_to(&mut self, offset: u64, field: &'static str) -> Result<()> {
        let target = self
            .origin
            .checked_add(offset)
            .ok_or_raise(|| ErrorKind::InvalidFormat(format!("{field} offset overflows the source")))?;
        self.inner.seek(SeekFrom::Start(target)).or_raise(|| ErrorKind::Io)?;
        Ok(())
    }
}

/// End-of-input becomes [`ErrorKind::Truncated`], anything else is a genuine
/// I/O failure of the source.
fn raise_io<T>(result: io::Result<T>, field: &'static str) -> Result<T> {
    result.or_else(|err| {
        let eof = err.kind() == io::ErrorKind::UnexpectedEof;
        Err::<T, io::Error>(err).or_raise(|| if eof { ErrorKind::Truncated(field) } else { ErrorKind::Io })
    })
}
