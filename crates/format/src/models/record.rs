use super::{HeaderField, Timestamp};

/// Data type tag carried by every event derived from an index record.
pub const DATA_TYPE: &str = "java:download:idx";

/// Everything recovered from one index record.
///
/// Owns all of its strings; nothing borrows from the source it was decoded
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDownloadRecord {
    /// Format revision (602, 603, 604 or 605).
    pub format_version: u32,
    /// URL the resource was fetched from.
    pub url: String,
    /// Address of the host that served it, or `"Unknown"` for 6.02 records.
    pub ip_address: String,
    /// When the resource was last modified on the host.
    pub last_modified: Timestamp,
    /// When the resource was downloaded, from the response `date` header.
    pub downloaded: Option<Timestamp>,
    /// Length of the cached content in bytes, as declared by the record.
    pub content_length: u32,
    /// Response headers in stored order.
    pub headers: Vec<HeaderField>,
}

impl DecodedDownloadRecord {
    pub fn data_type(&self) -> &'static str {
        DATA_TYPE
    }

    /// First header with exactly this name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|h| h.name == name).map(|h| h.value.as_str())
    }
}
