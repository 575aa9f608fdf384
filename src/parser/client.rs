//! Client release feed parser
//!
//! The client feed has one section per client, headed by the client's label:
//!
//! ```text
//! ======= Python Client
//! ---
//! Version: 4.2.1
//! Github: https://github.com/hazelcast/hazelcast-python-client/releases/tag/v4.2.1
//! ---
//! Version: 4.2
//! Github: https://github.com/hazelcast/hazelcast-python-client/releases/tag/v4.2
//! ---
//! =======
//! ```

use regex::Regex;

use crate::config::CLIENT_RELEASES_URL;
use crate::parser::block::split_blocks;
use crate::parser::traits::{ReleaseParser, get_all_releases};
use crate::release::error::ReleaseError;
use crate::release::filter::ReleaseFilter;
use crate::release::types::{ClientKind, Release};
use crate::source::Source;

/// Parser for one client's section of the client release feed
pub struct ClientReleaseParser {
    kind: ClientKind,
    url: String,
    /// Matches the section of `kind`; the label is escaped since some contain `+`
    section_re: Regex,
}

impl ClientReleaseParser {
    /// Creates a parser for `kind` reading the feed at a custom URL
    pub fn new(kind: ClientKind, url: &str) -> Self {
        let pattern = format!(
            r"(?s)======= {} Client\n---\n(.*?)\n---\n===",
            regex::escape(kind.label())
        );

        Self {
            kind,
            url: url.to_string(),
            section_re: Regex::new(&pattern).expect("client section pattern is valid"),
        }
    }

    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    /// Fetches the feed and returns this client's releases passing every filter
    pub async fn get_all_releases(
        &self,
        source: &dyn Source,
        filters: &[ReleaseFilter],
    ) -> Result<Vec<Release>, ReleaseError> {
        get_all_releases(self, source, filters).await
    }
}

impl From<ClientKind> for ClientReleaseParser {
    fn from(kind: ClientKind) -> Self {
        Self::new(kind, CLIENT_RELEASES_URL)
    }
}

impl ReleaseParser for ClientReleaseParser {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn extract_blocks<'a>(&self, raw: &'a str) -> Result<Vec<&'a str>, ReleaseError> {
        let section = self
            .section_re
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ReleaseError::MalformedSourceDocument {
                url: self.url.clone(),
                section: format!("the {} client section", self.kind.label()),
            })?;

        Ok(split_blocks(section.as_str()))
    }

    fn construct(&self, version: &str, tag: &str) -> Result<Release, ReleaseError> {
        Release::client(self.kind, version, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::traits::parse_releases;
    use rstest::rstest;

    const FEED: &str = "\
======= C++ Client
---
Version: 4.1.1
Github: https://github.com/hazelcast/hazelcast-cpp-client/releases/tag/v4.1.1
---
Version: 4.0.1
Github: https://github.com/hazelcast/hazelcast-cpp-client/releases/tag/v4.0.1
---
=======

======= Python Client
---
Version: 4.2.1
Github: https://github.com/hazelcast/hazelcast-python-client/releases/tag/v4.2.1
---
Version: 4.2
Github: https://github.com/hazelcast/hazelcast-python-client/releases/tag/v4.2
---
Version: 4.1-BETA-1
---
Version: 3.12.3
Github: https://github.com/hazelcast/hazelcast-python-client/releases/tag/v3.12.3
---
=======

======= .NET/CSharp Client
---
Version: 4.1.0
Github: https://github.com/hazelcast/hazelcast-csharp-client/releases/tag/v4.1.0
---
=======
";

    fn versions(releases: &[Release]) -> Vec<&str> {
        releases.iter().map(|r| r.version().as_str()).collect()
    }

    #[test]
    fn parse_returns_releases_of_requested_client_only() {
        let parser = ClientReleaseParser::from(ClientKind::Py);

        let releases = parse_releases(&parser, FEED, &[]).unwrap();

        assert_eq!(versions(&releases), vec!["4.2.1", "4.2", "3.12.3"]);
        assert!(releases.iter().all(|r| r.kind() == Some(ClientKind::Py)));
    }

    #[rstest]
    #[case(ClientKind::Cpp, vec!["4.1.1", "4.0.1"])]
    #[case(ClientKind::Cs, vec!["4.1.0"])]
    fn parse_matches_labels_with_special_characters(
        #[case] kind: ClientKind,
        #[case] expected: Vec<&str>,
    ) {
        let parser = ClientReleaseParser::from(kind);

        let releases = parse_releases(&parser, FEED, &[]).unwrap();

        assert_eq!(versions(&releases), expected);
    }

    #[test]
    fn parse_applies_filters() {
        let parser = ClientReleaseParser::from(ClientKind::Py);
        let filters = vec![ReleaseFilter::major_versions([4])];

        let releases = parse_releases(&parser, FEED, &filters).unwrap();

        assert_eq!(versions(&releases), vec!["4.2.1", "4.2"]);
    }

    #[test]
    fn parse_fails_when_client_section_is_missing() {
        let parser = ClientReleaseParser::new(ClientKind::Go, "http://localhost/clients.txt");

        let result = parse_releases(&parser, FEED, &[]);

        match result {
            Err(ReleaseError::MalformedSourceDocument { url, section }) => {
                assert_eq!(url, "http://localhost/clients.txt");
                assert_eq!(section, "the Go client section");
            }
            other => panic!("expected MalformedSourceDocument, got {other:?}"),
        }
    }

    #[test]
    fn label_is_matched_literally() {
        // An unescaped `.` would match the `X`
        let raw = "======= XNET/CSharp Client\n---\nVersion: 1.0\nGithub: v1.0\n---\n=======\n";
        let parser = ClientReleaseParser::from(ClientKind::Cs);

        let result = parse_releases(&parser, raw, &[]);

        assert!(matches!(
            result,
            Err(ReleaseError::MalformedSourceDocument { .. })
        ));
    }
}
