mod event;
mod evidence;
mod field;
mod header;
mod record;
mod timestamp;

pub use self::event::{EventKind, TimelineEvent};
pub use self::evidence::Evidence;
pub use self::field::HeaderField;
pub use self::header::RawRecordHeader;
pub use self::record::{DATA_TYPE, DecodedDownloadRecord};
pub use self::timestamp::Timestamp;
