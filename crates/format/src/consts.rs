use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Revisions from 603 onward always start their second section here, no
/// matter what the first section says about its own length.
pub(crate) const SECONDARY_SECTION_OFFSET: u64 = 128;

/// 6.02 records never stored the address of the host they came from.
pub(crate) const UNKNOWN_ADDRESS: &str = "Unknown";

/// Header name carrying the server's response date (case-sensitive).
pub(crate) const DATE_HEADER: &str = "date";

/// Timezone designators accepted at the end of an HTTP date; all are UTC.
pub(crate) const UTC_DESIGNATORS: [&str; 3] = ["GMT", "UTC", "UT"];

/// `Thu, 26 Jul 2001 05:00:00`, with the timezone token already split off.
pub(crate) const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short case_sensitive:false], [day padding:none] [month repr:short case_sensitive:false] [year] [hour]:[minute]:[second]"
);
