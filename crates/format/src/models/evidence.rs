use super::DecodedDownloadRecord;
use time::UtcDateTime;

/// A decoded index file together with the digests of the bytes it was
/// decoded from.
///
/// The digests cover the whole file, so two copies of the same cache entry
/// found in different places (a live profile and a backup, say) can be
/// recognised as identical evidence without comparing records field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// BLAKE3 hash of the raw file
    pub hash: String,
    /// CRC32 of the raw file
    pub crc32: u32,
    /// File length in bytes (for quick/cheap equality check)
    pub length: u64,
    pub record: DecodedDownloadRecord,
    pub decoded_at: UtcDateTime,
}
impl Evidence {
    /// Whether both values were decoded from byte-identical files.
    pub fn same_source(&self, other: &Evidence) -> bool {
        self.length == other.length && self.crc32 == other.crc32 && self.hash == other.hash
    }
}
