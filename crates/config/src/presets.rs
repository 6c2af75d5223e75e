use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUILTIN: &[(&str, &[&str])] = &[
    ("winxp", &[
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "MsiecfParser",
        "OLECF",
        "PfileStatParser",
        "Symantec",
        "WinEvtParser",
        "WinInfo2Parser",
        "WinLnkParser",
        "WinPrefetchParser",
        "WinRegistryParser",
    ]),
    ("winxp_slow", &[
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "Hachoir",
        "MsiecfParser",
        "OLECF",
        "PfileStatParser",
        "Symantec",
        "WinEvtParser",
        "WinInfo2Parser",
        "WinLnkParser",
        "WinPrefetchParser",
        "WinRegistryParser",
    ]),
    ("win7", &[
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "MsiecfParser",
        "OLECF",
        "PfileStatParser",
        "Symantec",
        "WinEvtxParser",
        "WinLnkParser",
        "WinPrefetchParser",
        "WinRecycleParser",
        "WinRegistryParser",
    ]),
    ("win7_slow", &[
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "Hachoir",
        "MsiecfParser",
        "OLECF",
        "PfileStatParser",
        "Symantec",
        "WinEvtxParser",
        "WinLnkParser",
        "WinPrefetchParser",
        "WinRecycleParser",
        "WinRegistryParser",
    ]),
    ("webhist", &["ChromeHistoryParser", "FirefoxHistoryParser", "JavaIDXParser", "MsiecfParser"]),
    ("linux", &[
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "OLECF",
        "PfileStatParser",
        "SELinux",
        "SyslogParser",
    ]),
    ("macosx", &[
        "ApplicationUsageParser",
        "ChromeHistoryParser",
        "FirefoxHistoryParser",
        "GoogleDriveParser",
        "JavaIDXParser",
        "LsQuarantineParser",
        "OLECF",
        "PfileStatParser",
        "PlistParser",
        "SyslogParser",
    ]),
];

/// Named groups of parsers to run against a kind of system image.
///
/// Defaults to the built-in categories. A configuration file can add new
/// categories or replace the list of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presets(BTreeMap<String, Vec<String>>);

impl Default for Presets {
    fn default() -> Self {
        Self(
            BUILTIN
                .iter()
                .map(|(category, parsers)| {
                    (category.to_string(), parsers.iter().map(|p| p.to_string()).collect())
                })
                .collect(),
        )
    }
}

impl Presets {
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Parsers in a category, in configured order.
    pub fn parsers(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Every category that runs the named parser.
    pub fn categories_for<'a>(&'a self, parser: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().filter(move |(_, parsers)| parsers.iter().any(|p| p == parser)).map(|(c, _)| c.as_str())
    }

    pub fn includes(&self, category: &str, parser: &str) -> bool {
        self.parsers(category).is_some_and(|parsers| parsers.iter().any(|p| p == parser))
    }
}

impl From<BTreeMap<String, Vec<String>>> for Presets {
    fn from(value: BTreeMap<String, Vec<String>>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jidx_format::PARSER_NAME;
    use rstest::rstest;

    #[test]
    fn builtin_categories() {
        let presets = Presets::default();
        assert_eq!(
            presets.categories().collect::<Vec<_>>(),
            vec!["linux", "macosx", "webhist", "win7", "win7_slow", "winxp", "winxp_slow"]
        );
    }

    #[test]
    fn every_category_runs_this_decoder() {
        let presets = Presets::default();
        assert_eq!(presets.categories_for(PARSER_NAME).count(), 7);
    }

    #[rstest]
    #[case("webhist", 4)]
    #[case("winxp", 13)]
    #[case("winxp_slow", 14)]
    #[case("macosx", 10)]
    fn category_sizes(#[case] category: &str, #[case] expected: usize) {
        assert_eq!(Presets::default().parsers(category).map(<[String]>::len), Some(expected));
    }

    #[rstest]
    #[case("win7", "WinEvtxParser", true)]
    #[case("winxp", "WinEvtxParser", false)]
    #[case("linux", "SELinux", true)]
    #[case("bsd", "SyslogParser", false)]
    fn includes(#[case] category: &str, #[case] parser: &str, #[case] expected: bool) {
        assert_eq!(Presets::default().includes(category, parser), expected);
    }

    #[test]
    fn hachoir_only_in_slow_categories() {
        let presets = Presets::default();
        assert_eq!(presets.categories_for("Hachoir").collect::<Vec<_>>(), vec!["win7_slow", "winxp_slow"]);
    }

    #[test]
    fn unknown_category() {
        assert!(Presets::default().parsers("solaris").is_none());
    }
}
