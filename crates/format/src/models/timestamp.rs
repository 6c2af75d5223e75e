use std::fmt::{Display, Formatter, Result as FmtResult};
use time::format_description::well_known::Rfc3339;
use time::UtcDateTime;

/// Milliseconds since the UNIX epoch, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Calendar representation, or `None` if the value is outside the range
    /// `time` can represent.
    pub fn to_datetime(self) -> Option<UtcDateTime> {
        UtcDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000).ok()
    }
}
impl From<UtcDateTime> for Timestamp {
    fn from(value: UtcDateTime) -> Self {
        // Sub-millisecond precision is never present in this format.
        Self((value.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}
impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.to_datetime().and_then(|dt| dt.format(&Rfc3339).ok()) {
            Some(formatted) => write!(f, "{formatted}"),
            None => write!(f, "{}ms", self.0),
        }
    }
}
