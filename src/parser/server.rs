//! Server release feed parser
//!
//! The server feed lists the current stable release and the previous stable
//! releases in two sections:
//!
//! ```text
//! ========== Current Stable
//! ---
//! Version: 5.0
//! Github: https://github.com/hazelcast/hazelcast/releases/tag/v5.0
//! ---
//! ========== Previous Stable
//! ---
//! Version: 4.2.2
//! Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.2
//! ---
//! Version: 4.2.1
//! Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.1
//! ---
//! ========== Development: SHOW
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SERVER_RELEASES_URL;
use crate::parser::block::split_blocks;
use crate::parser::traits::{ReleaseParser, get_all_releases};
use crate::release::error::ReleaseError;
use crate::release::filter::ReleaseFilter;
use crate::release::types::Release;
use crate::source::Source;

static CURRENT_STABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)========== Current Stable\n---\n(.*?)\n---")
        .expect("current stable pattern is valid")
});

static PREVIOUS_STABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)========== Previous Stable\n---\n(.*?)\n---\n========== Development: SHOW")
        .expect("previous stable pattern is valid")
});

/// Parser for the server release feed
pub struct ServerReleaseParser {
    url: String,
}

impl ServerReleaseParser {
    /// Creates a parser reading the feed at a custom URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    /// Fetches the feed and returns the releases passing every filter,
    /// current stable first
    pub async fn get_all_releases(
        &self,
        source: &dyn Source,
        filters: &[ReleaseFilter],
    ) -> Result<Vec<Release>, ReleaseError> {
        get_all_releases(self, source, filters).await
    }

    fn malformed(&self, section: &str) -> ReleaseError {
        ReleaseError::MalformedSourceDocument {
            url: self.url.clone(),
            section: section.to_string(),
        }
    }
}

impl Default for ServerReleaseParser {
    fn default() -> Self {
        Self::new(SERVER_RELEASES_URL)
    }
}

impl ReleaseParser for ServerReleaseParser {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn extract_blocks<'a>(&self, raw: &'a str) -> Result<Vec<&'a str>, ReleaseError> {
        let current = CURRENT_STABLE_PATTERN
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| self.malformed("the current stable section"))?;

        let previous = PREVIOUS_STABLE_PATTERN
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| self.malformed("the previous stable section"))?;

        let mut blocks = vec![current.as_str()];
        blocks.extend(split_blocks(previous.as_str()));
        Ok(blocks)
    }

    fn construct(&self, version: &str, tag: &str) -> Result<Release, ReleaseError> {
        Release::new(version, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::traits::parse_releases;

    const FEED: &str = "\
========== Current Stable
---
Version: 5.0
Date: 2021-09-07
Github: https://github.com/hazelcast/hazelcast/releases/tag/v5.0
---
========== Previous Stable
---
Version: 4.2.2
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.2
---
Version: 4.2.1
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.1
---
Version: 4.1-BETA-1
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.1-BETA-1
---
Version: 3.12.12.1
---
Version: 3.12.12
Github: https://github.com/hazelcast/hazelcast/releases/tag/v3.12.12
---
========== Development: SHOW
---
Version: 5.1-SNAPSHOT
Github: https://github.com/hazelcast/hazelcast/tree/master
---
";

    fn versions(releases: &[Release]) -> Vec<&str> {
        releases.iter().map(|r| r.version().as_str()).collect()
    }

    #[test]
    fn parse_returns_current_stable_then_previous_stable() {
        let parser = ServerReleaseParser::default();

        let releases = parse_releases(&parser, FEED, &[]).unwrap();

        assert_eq!(
            versions(&releases),
            vec!["5.0", "4.2.2", "4.2.1", "4.1-BETA-1", "3.12.12"]
        );
        assert!(releases.iter().all(|r| r.kind().is_none()));
    }

    #[test]
    fn parse_ignores_development_section() {
        let parser = ServerReleaseParser::default();

        let releases = parse_releases(&parser, FEED, &[]).unwrap();

        assert!(!versions(&releases).contains(&"5.1-SNAPSHOT"));
    }

    #[test]
    fn parse_applies_filters() {
        let parser = ServerReleaseParser::default();
        let filters = vec![ReleaseFilter::major_versions([4]), ReleaseFilter::Stable];

        let releases = parse_releases(&parser, FEED, &filters).unwrap();

        assert_eq!(versions(&releases), vec!["4.2.2", "4.2.1"]);
    }

    #[test]
    fn parse_fails_without_current_stable_section() {
        let parser = ServerReleaseParser::new("http://localhost/servers.txt");
        let raw = FEED.replace("Current Stable", "Latest");

        let result = parse_releases(&parser, &raw, &[]);

        match result {
            Err(ReleaseError::MalformedSourceDocument { url, section }) => {
                assert_eq!(url, "http://localhost/servers.txt");
                assert_eq!(section, "the current stable section");
            }
            other => panic!("expected MalformedSourceDocument, got {other:?}"),
        }
    }

    #[test]
    fn parse_fails_without_previous_stable_section() {
        let parser = ServerReleaseParser::default();
        let raw = FEED.replace("========== Previous Stable\n", "");

        let result = parse_releases(&parser, &raw, &[]);

        assert!(matches!(
            result,
            Err(ReleaseError::MalformedSourceDocument { section, .. })
                if section == "the previous stable section"
        ));
    }

    #[test]
    fn parse_fails_without_development_marker() {
        let parser = ServerReleaseParser::default();
        let raw = FEED.replace("========== Development: SHOW", "========== Development");

        let result = parse_releases(&parser, &raw, &[]);

        assert!(matches!(
            result,
            Err(ReleaseError::MalformedSourceDocument { .. })
        ));
    }

    #[test]
    fn parse_skips_current_stable_without_tag() {
        let parser = ServerReleaseParser::default();
        let raw = FEED.replace(
            "Github: https://github.com/hazelcast/hazelcast/releases/tag/v5.0\n",
            "",
        );

        let releases = parse_releases(&parser, &raw, &[]).unwrap();

        assert_eq!(versions(&releases)[0], "4.2.2");
    }

    #[test]
    fn parse_keeps_release_whose_tag_has_no_path() {
        let parser = ServerReleaseParser::default();
        let raw = FEED.replace(
            "https://github.com/hazelcast/hazelcast/releases/tag/v5.0",
            "https://github.com/",
        );

        let releases = parse_releases(&parser, &raw, &[]).unwrap();

        assert_eq!(releases[0].version().as_str(), "5.0");
        assert_eq!(releases[0].tag_name(), None);
        assert_eq!(releases.len(), 5);
    }
}
