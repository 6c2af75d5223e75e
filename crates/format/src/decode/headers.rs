use crate::consts::{DATE_HEADER, HTTP_DATE, UTC_DESIGNATORS};
use crate::error::{ErrorKind, Result};
use crate::models::{HeaderField, Timestamp};
use crate::wire::{PrefixWidth, WireReader};
use exn::{OptionExt, ResultExt};
use std::io::{Read, Seek};
use time::PrimitiveDateTime;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderScan {
    pub(crate) fields: Vec<HeaderField>,
    pub(crate) downloaded: Option<Timestamp>,
}

/// Reads exactly `count` name/value pairs. The first `date` header is
/// parsed into the download time; later ones are kept but not parsed.
#[instrument(level = "trace", skip(wire))]
pub(crate) fn scan<R: Read + Seek + ?Sized>(wire: &mut WireReader<'_, R>, count: u32) -> Result<HeaderScan> {
    // The count comes straight from the input; grow as fields actually arrive.
    let mut fields = Vec::new();
    let mut downloaded = None;
    for _ in 0..count {
        let name = wire.read_string(PrefixWidth::U16, "header name")?;
        let value = wire.read_string(PrefixWidth::U16, "header value")?;
        if downloaded.is_none() && name == DATE_HEADER {
            downloaded = Some(parse_http_date(&value)?);
        }
        fields.push(HeaderField { name, value });
    }
    if downloaded.is_none() {
        tracing::debug!(count, "no date header, download time unknown");
    }
    Ok(HeaderScan { fields, downloaded })
}

/// Parses `<weekday>, <day> <month> <year> <hh>:<mm>:<ss> <zone>` where the
/// zone is one of the UTC designators.
pub(crate) fn parse_http_date(value: &str) -> Result<Timestamp> {
    let (datetime, zone) =
        value.trim().rsplit_once(' ').ok_or_raise(|| ErrorKind::DateParse(value.to_string()))?;
    if !UTC_DESIGNATORS.contains(&zone) {
        exn::bail!(ErrorKind::DateParse(value.to_string()));
    }
    let parsed = PrimitiveDateTime::parse(datetime, HTTP_DATE).or_raise(|| ErrorKind::DateParse(value.to_string()))?;
    Ok(Timestamp::from(parsed.as_utc()))
}
