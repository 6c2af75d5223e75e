//! Synthetic record builder for unit tests.

use crate::consts::SECONDARY_SECTION_OFFSET;

/// Size of the busy/incomplete/version prefix shared by every revision.
pub(crate) const RECORD_HEADER_SIZE: u64 = 1 + 1 + 4;

pub(crate) struct RecordBuilder {
    busy: u8,
    incomplete: u8,
    format_version: u32,
    content_length: u32,
    last_modified: u64,
    section_lengths: [u32; 3],
    url: String,
    ip_address: String,
    headers: Vec<(String, String)>,
    header_count: Option<u32>,
}

impl RecordBuilder {
    pub(crate) fn v602() -> Self {
        Self::sectioned(602)
    }

    /// Any version other than 602 is laid out as a sectioned record; only
    /// 605 gets the narrow shortcut flag.
    pub(crate) fn sectioned(format_version: u32) -> Self {
        Self {
            busy: 0,
            incomplete: 0,
            format_version,
            content_length: 0,
            last_modified: 0,
            section_lengths: [0, 0, 0],
            url: "http://example.test/applet.jar".to_string(),
            ip_address: "192.0.2.1".to_string(),
            headers: Vec::new(),
            header_count: None,
        }
    }

    pub(crate) fn busy(mut self, busy: u8) -> Self {
        self.busy = busy;
        self
    }

    pub(crate) fn incomplete(mut self, incomplete: u8) -> Self {
        self.incomplete = incomplete;
        self
    }

    pub(crate) fn content_length(mut self, content_length: u32) -> Self {
        self.content_length = content_length;
        self
    }

    pub(crate) fn last_modified(mut self, last_modified: u64) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub(crate) fn section_lengths(mut self, section_lengths: [u32; 3]) -> Self {
        self.section_lengths = section_lengths;
        self
    }

    pub(crate) fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub(crate) fn ip_address(mut self, ip_address: &str) -> Self {
        self.ip_address = ip_address.to_string();
        self
    }

    pub(crate) fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Declare a header count that differs from the headers actually written.
    pub(crate) fn header_count(mut self, count: u32) -> Self {
        self.header_count = Some(count);
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.busy);
        out.push(self.incomplete);
        out.extend_from_slice(&self.format_version.to_be_bytes());
        let header_count = self.header_count.unwrap_or(self.headers.len() as u32);
        if self.format_version == 602 {
            out.extend_from_slice(&0u16.to_be_bytes());
            out.push(0);
            out.extend_from_slice(&self.content_length.to_be_bytes());
            out.extend_from_slice(&self.last_modified.to_be_bytes());
            out.extend_from_slice(&0u64.to_be_bytes());
            push_short_string(&mut out, "6.02");
            push_short_string(&mut out, &self.url);
            push_short_string(&mut out, "");
            out.extend_from_slice(&header_count.to_be_bytes());
        } else {
            if self.format_version == 605 {
                out.push(0);
            } else {
                out.extend_from_slice(&0u16.to_be_bytes());
            }
            out.extend_from_slice(&self.content_length.to_be_bytes());
            out.extend_from_slice(&self.last_modified.to_be_bytes());
            out.extend_from_slice(&0u64.to_be_bytes());
            out.extend_from_slice(&0u64.to_be_bytes());
            out.push(1);
            for length in self.section_lengths {
                out.extend_from_slice(&length.to_be_bytes());
            }
            out.resize(SECONDARY_SECTION_OFFSET as usize, 0);
            push_long_string(&mut out, &self.url);
            push_long_string(&mut out, &self.ip_address);
            out.extend_from_slice(&header_count.to_be_bytes());
        }
        for (name, value) in &self.headers {
            push_short_string(&mut out, name);
            push_short_string(&mut out, value);
        }
        out
    }
}

fn push_short_string(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}

fn push_long_string(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(&(value.len() as u32).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}
